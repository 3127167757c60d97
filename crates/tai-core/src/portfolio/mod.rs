//! Portfolio builder.
//!
//! Accumulates résumé data section by section and exports it as a standalone
//! HTML page.
//!
//! - `model`: Portfolio data and its editing operations (`Portfolio`)
//! - `html`: HTML export (`render_html`, `file_name`)

mod html;
mod model;

pub use html::{file_name, render_html};
pub use model::{
    Education, Experience, PersonalInfo, Portfolio, Project, Skill, SkillCategory, new_entry_id,
};
