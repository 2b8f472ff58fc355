use std::{fmt, str::FromStr};

/// Page sections in display order. The element id is the lowercase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_ordered() {
        let labels = Section::ALL.map(Section::label);
        assert_eq!(
            labels,
            ["Home", "About", "Experience", "Skills", "Projects", "Contact"]
        );
    }

    #[test]
    fn test_ids_are_lowercase_labels() {
        for section in Section::ALL {
            assert_eq!(section.id(), section.label().to_lowercase());
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(Section::Projects.href(), "#projects");
        assert!("Projects".parse::<Section>().is_err());
    }
}
