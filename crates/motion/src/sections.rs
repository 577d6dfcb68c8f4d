//! # Sections
//!
//! The page sections, in document order. Their ids are both the DOM element
//! ids and the navigation anchors.

use std::fmt;
use std::str::FromStr;

use crate::error::SectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

/// Navigation entries, in display order.
pub const NAV_ITEMS: [Section; 5] = [
    Section::Home,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Contact,
];

impl Section {
    /// DOM id / anchor name.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// `#id` link target.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim_start_matches('#');
        NAV_ITEMS
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in NAV_ITEMS {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.href().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_nav_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "About", "Skills", "Projects", "Contact"]);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            "blog".parse::<Section>(),
            Err(SectionError::Unknown("blog".to_string()))
        );
    }
}
