//! Section identifiers and navigation descriptors

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The fixed set of page sections.
///
/// Every section is backed by a DOM anchor whose id is [`SectionId::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    /// All identifiers, in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// DOM anchor id for this section.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "home" => Ok(SectionId::Home),
            "about" => Ok(SectionId::About),
            "skills" => Ok(SectionId::Skills),
            "projects" => Ok(SectionId::Projects),
            "education" => Ok(SectionId::Education),
            "contact" => Ok(SectionId::Contact),
            other => Err(Error::UnknownSection(other.to_string())),
        }
    }
}

/// Navigation entry: anchor id plus the label shown in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

/// Sections in page order, top to bottom.
pub const SECTIONS: [Section; 6] = [
    Section { id: SectionId::Home, label: "Home" },
    Section { id: SectionId::About, label: "About" },
    Section { id: SectionId::Skills, label: "Skills" },
    Section { id: SectionId::Projects, label: "Projects" },
    Section { id: SectionId::Education, label: "Education" },
    Section { id: SectionId::Contact, label: "Contact" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip() {
        for id in SectionId::ALL {
            let parsed: SectionId = id.as_str().parse().expect("known id should parse");
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let error = "blog".parse::<SectionId>().unwrap_err();
        assert!(matches!(error, Error::UnknownSection(ref s) if s == "blog"));
    }

    #[test]
    fn test_display_matches_anchor_id() {
        assert_eq!(SectionId::Home.to_string(), "home");
        assert_eq!(SectionId::Contact.to_string(), "contact");
    }

    #[test]
    fn test_sections_page_order() {
        let ids: Vec<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        assert_eq!(SECTIONS[0].id, SectionId::Home);
        assert_eq!(SECTIONS[0].label, "Home");
        assert_eq!(SECTIONS[5].label, "Contact");
    }
}
