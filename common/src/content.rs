//! Static site content
//!
//! Fixed reference data rendered by the page. Built once at mount and never
//! mutated at runtime; serializable so the copy could be swapped out from a
//! JSON document without touching the components.

use serde::{Deserialize, Serialize};

/// Headline card shown in the about grid: icon path plus a short title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Highlight {
    pub image: String,
    pub name: String,
}

/// Project card: title plus a one-line description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// Education card entry: headline plus supporting detail line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub title: String,
    pub detail: String,
}

/// Outbound contact details rendered as plain hyperlinks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub highlights: Vec<Highlight>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub contact: ContactInfo,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            name: "Wilson Mutinda".to_string(),
            tagline: "Full-Stack Developer | Django | Rails | API Specialist | Problem Solver"
                .to_string(),
            about: "I'm a software developer with a strong background in database systems, \
                    backend and frontend development. Skilled in Django, Python, Ruby on Rails, \
                    Vue.js, React.js and API integration. I create efficient, user-friendly \
                    solutions that address real-world challenges."
                .to_string(),
            highlights: vec![
                highlight("/creative.png", "Creative Problem-Solver"),
                highlight("/backend.png", "Backend and API Expert"),
                highlight("/frontend.png", "Frontend Specialist"),
                highlight("/database.png", "Database Management"),
            ],
            technical_skills: vec![
                "Django".to_string(),
                "Python".to_string(),
                "React".to_string(),
                "Vue".to_string(),
                "REST APIs".to_string(),
                "PostgreSQL / MySQL".to_string(),
                "HTML, CSS, Javascript".to_string(),
            ],
            soft_skills: vec![
                "Communication".to_string(),
                "Time and Resource Management".to_string(),
                "Team Collaboration".to_string(),
            ],
            projects: vec![
                project(
                    "Course Reg",
                    "Full-stack student course registration app.",
                ),
                project(
                    "E-Commerce with M-PESA",
                    "Rails + Vue.js store with mobile payments",
                ),
                project(
                    "Online Mobile Clinic",
                    "Django REST API for telemedicine",
                ),
            ],
            education: vec![
                EducationEntry {
                    title: "BSc in Information Technology".to_string(),
                    detail: "Meru University of Science and Technology".to_string(),
                },
                EducationEntry {
                    title: "ALX Software Engineering Program".to_string(),
                    detail: "Specialization in backend and API development".to_string(),
                },
            ],
            contact: ContactInfo {
                phone: "0791738418".to_string(),
                email: "mutidawilz@gmail.com".to_string(),
                github: "https://github.com/wilson-mutinda".to_string(),
                linkedin: "https://linkedin.com/in/wilson-kilonzo-mutinda".to_string(),
            },
        }
    }
}

fn highlight(image: &str, name: &str) -> Highlight {
    Highlight {
        image: image.to_string(),
        name: name.to_string(),
    }
}

fn project(title: &str, description: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_complete() {
        let content = SiteContent::default();
        assert!(!content.name.is_empty());
        assert!(!content.tagline.is_empty());
        assert_eq!(content.highlights.len(), 4);
        assert_eq!(content.technical_skills.len(), 7);
        assert_eq!(content.soft_skills.len(), 3);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.education.len(), 2);
        assert!(content.contact.email.contains('@'));
    }

    #[test]
    fn test_content_serializes_camel_case() {
        let content = SiteContent::default();
        let json = serde_json::to_string(&content).expect("serialize failed");
        assert!(json.contains("\"technicalSkills\""));
        assert!(json.contains("\"softSkills\""));
        assert!(json.contains("\"highlights\""));
    }

    #[test]
    fn test_content_deserialize_missing_fields() {
        // Partial documents fall back to the built-in copy per field.
        let json = r#"{"name": "Someone Else"}"#;
        let content: SiteContent = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(content.name, "Someone Else");
        assert_eq!(content.projects.len(), 3); // default value
    }

    #[test]
    fn test_project_deserialize() {
        let json = r#"{"title": "Course Reg", "description": "Registration app"}"#;
        let project: Project = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(project.title, "Course Reg");
        assert_eq!(project.description, "Registration app");
    }
}
