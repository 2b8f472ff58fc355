use std::{collections::HashSet, sync::LazyLock};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("embedded portfolio content should be valid"));

/// The content table shared by every view.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not embedded: {0}")]
    Missing(&'static str),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<ProjectEntry>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub headline: String,
    pub subtitle: String,
    pub description: String,
    pub resume_path: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<AboutCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<RoleTag>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleTag {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub icon: String,
    pub title: String,
    #[serde(flatten)]
    pub items: SkillItems,
}

/// A category either rates each skill or just lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillItems {
    Levels(Vec<SkillLevel>),
    Tags(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    /// Percent, 0..=100.
    pub level: u8,
    pub years: String,
}

impl SkillLevel {
    pub fn width(&self) -> String {
        format!("{}%", self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Web,
    Mobile,
}

impl ProjectKind {
    pub fn label(self) -> &'static str {
        match self {
            ProjectKind::Web => "Web App",
            ProjectKind::Mobile => "Mobile App",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProjectKind::Web => "🖥",
            ProjectKind::Mobile => "📱",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub kind: ProjectKind,
    pub title: String,
    pub role: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub details: Vec<ContactDetail>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    /// devicon class name
    pub icon: String,
    pub url: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
        Self::parse(&file.data)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_slice(bytes)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".to_string()));
        }
        if !self.profile.resume_path.starts_with('/') {
            return Err(ContentError::Invalid(format!(
                "resume path must be site-absolute: {}",
                self.profile.resume_path
            )));
        }
        for category in &self.skills {
            if let SkillItems::Levels(levels) = &category.items {
                if let Some(skill) = levels.iter().find(|s| s.level > 100) {
                    return Err(ContentError::Invalid(format!(
                        "skill level over 100%: {}",
                        skill.name
                    )));
                }
            }
        }
        let mut titles = HashSet::new();
        for project in &self.projects {
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate project: {}",
                    project.title
                )));
            }
        }
        let links = self
            .projects
            .iter()
            .filter_map(|p| p.link.as_deref())
            .chain(self.contact.socials.iter().map(|s| s.url.as_str()));
        for link in links {
            if !link.starts_with("https://") {
                return Err(ContentError::Invalid(format!("insecure link: {link}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> Portfolio {
        Portfolio::load().expect("embedded content should load")
    }

    #[test]
    fn test_embedded_content_loads() {
        let p = embedded();
        assert_eq!(p.profile.name, "Muhammad Usama");
        assert_eq!(p.profile.stats.len(), 2);
        assert_eq!(p.about.cards.len(), 3);
        assert_eq!(p.experience.len(), 2);
        assert_eq!(p.skills.len(), 3);
        assert_eq!(p.projects.len(), 5);
        assert_eq!(p.contact.details.len(), 3);
        assert_eq!(p.contact.socials.len(), 2);
        assert_eq!(&*PORTFOLIO, &p);
    }

    #[test]
    fn test_skill_categories() {
        let p = embedded();
        match &p.skills[0].items {
            SkillItems::Levels(levels) => {
                assert_eq!(levels[0].name, "React.js");
                assert_eq!(levels[0].width(), "95%");
            }
            SkillItems::Tags(_) => panic!("frontend skills should be leveled"),
        }
        assert!(matches!(&p.skills[1].items, SkillItems::Tags(t) if t.contains(&"CSS3".to_string())));
    }

    #[test]
    fn test_projects_without_links() {
        let p = embedded();
        let unlinked = p
            .projects
            .iter()
            .filter(|proj| proj.link.is_none())
            .map(|proj| proj.kind)
            .collect::<Vec<_>>();
        assert_eq!(unlinked, vec![ProjectKind::Mobile, ProjectKind::Mobile]);
        // experience entries may omit their tags
        assert!(p.experience[1].tags.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        assert!(matches!(
            Portfolio::parse(b"{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let mut p = embedded();
        p.profile.name = "  ".to_string();
        assert!(matches!(p.validate(), Err(ContentError::Invalid(_))));

        let mut p = embedded();
        p.projects[0].link = Some("http://example.com".to_string());
        assert!(matches!(p.validate(), Err(ContentError::Invalid(_))));

        let mut p = embedded();
        let dup = p.projects[0].clone();
        p.projects.push(dup);
        assert!(matches!(p.validate(), Err(ContentError::Invalid(_))));

        let mut p = embedded();
        if let SkillItems::Levels(levels) = &mut p.skills[0].items {
            levels[0].level = 101;
        }
        assert!(matches!(p.validate(), Err(ContentError::Invalid(_))));
    }
}
