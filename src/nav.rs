use std::{fmt, str::FromStr};

use thiserror::Error;

/// The page sections, in the order they are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no section with id `{0}`")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Sections listed under "Quick Links" in the footer.
    pub const QUICK_LINKS: [SectionId; 5] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Resolves an in-page link like `#about` to its section. Anything else,
    /// including links to other pages, is `None` and left to the browser.
    pub fn from_href(href: &str) -> Option<Self> {
        href.strip_prefix('#')?.parse().ok()
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_href_resolves_back_to_section() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_href(&section.href()), Some(section));
        }
    }

    #[test]
    fn test_links_rendered_on_page_resolve() {
        let nav_links = SectionId::ALL.into_iter().chain(SectionId::QUICK_LINKS);
        for section in nav_links {
            assert_eq!(SectionId::from_href(&section.href()), Some(section));
        }

        // In-page project links must point at a real section
        for link in PROJECTS.iter().filter_map(|p| p.link) {
            if link.starts_with('#') {
                assert!(SectionId::from_href(link).is_some(), "{link} is dangling");
            }
        }
    }

    #[test]
    fn test_other_links_are_left_alone() {
        for href in [
            "contact",
            "/resume.pdf",
            "https://github.com/thayammalkeerthana",
            "mailto:hello@keerthana.dev",
        ] {
            assert_eq!(SectionId::from_href(href), None, "{href}");
        }
    }

    #[test]
    fn test_unknown_targets_are_none() {
        assert_eq!(SectionId::from_href("#blog"), None);
        assert_eq!(SectionId::from_href("#"), None);
        assert_eq!(SectionId::from_href(""), None);
        assert_eq!(SectionId::from_href("#Contact"), None);
    }

    #[test]
    fn test_parse_error_names_target() {
        let err = "resume".parse::<SectionId>().unwrap_err();
        assert_eq!(err.to_string(), "no section with id `resume`");
    }

    #[test]
    fn test_quick_links_skip_home() {
        assert!(!SectionId::QUICK_LINKS.contains(&SectionId::Home));
        assert_eq!(SectionId::QUICK_LINKS.last(), Some(&SectionId::Contact));
    }
}
