use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// Generates an id for a new experience, education or project entry.
pub fn new_entry_id() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Soft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 1 to 5.
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
    pub category: SkillCategory,
}

/// Accepts any integer level and clamps it into 1..=5.
fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(1, 5) as u8)
}

/// All portfolio sections.
///
/// Entries with an id are upserted: saving an entry whose id already exists
/// replaces it in place, otherwise it is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

fn upsert<T>(entries: &mut Vec<T>, entry: T, id_of: impl Fn(&T) -> &str) {
    match entries.iter().position(|e| id_of(e) == id_of(&entry)) {
        Some(index) => entries[index] = entry,
        None => entries.push(entry),
    }
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a portfolio from TOML. Missing ids are generated and skill
    /// levels are clamped as if each skill had been added with
    /// [`Portfolio::add_skill`].
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn save_experience(&mut self, experience: Experience) {
        upsert(&mut self.experiences, experience, |e| e.id.as_str());
    }

    pub fn delete_experience(&mut self, id: &str) {
        self.experiences.retain(|e| e.id != id);
    }

    pub fn save_education(&mut self, education: Education) {
        upsert(&mut self.education, education, |e| e.id.as_str());
    }

    pub fn delete_education(&mut self, id: &str) {
        self.education.retain(|e| e.id != id);
    }

    pub fn save_project(&mut self, project: Project) {
        upsert(&mut self.projects, project, |p| p.id.as_str());
    }

    pub fn delete_project(&mut self, id: &str) {
        self.projects.retain(|p| p.id != id);
    }

    /// Adds a skill, clamping its level into 1..=5.
    pub fn add_skill(&mut self, mut skill: Skill) {
        skill.level = skill.level.clamp(1, 5);
        self.skills.push(skill);
    }

    /// Removes every skill with the given name.
    pub fn remove_skill(&mut self, name: &str) {
        self.skills.retain(|s| s.name != name);
    }
}
