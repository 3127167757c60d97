use anyhow::Result;
use tai_core::TaiError;
use tai_core::templates::{find_template, template_languages, templates_for};

/// Lists templates, or prints one rendered as a code result.
pub fn run(language: Option<&str>, name: Option<&str>) -> Result<()> {
    match (language, name) {
        (Some(language), Some(name)) => {
            let template = find_template(language, name)
                .ok_or_else(|| TaiError::not_found("template", format!("{language}/{name}")))?;
            println!("{}", template.as_result());
        }
        (Some(language), None) => {
            let templates = templates_for(language);
            if templates.is_empty() {
                println!("No templates for '{}'.", language);
            }
            for template in templates {
                println!("{:<20} {}", template.name, template.description);
            }
        }
        (None, _) => {
            for language in template_languages() {
                println!("{}:", language);
                for template in templates_for(language) {
                    println!("  {:<20} {}", template.name, template.description);
                }
            }
        }
    }
    Ok(())
}
