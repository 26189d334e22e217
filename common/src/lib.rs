//! Portfolio Page Core
//!
//! State machine, content, and capability interfaces shared with the
//! Web (WASM) front end

pub mod section;
pub mod content;
pub mod contact;
pub mod controller;
pub mod viewport;
pub mod error;

pub use section::{Section, SectionId, SECTIONS};
pub use content::{ContactInfo, EducationEntry, Highlight, Project, SiteContent};
pub use contact::ContactMessage;
pub use controller::{PageController, PageState, SectionHost};
pub use viewport::{ViewportObserver, VisibilityCallback, ACTIVE_SECTION_THRESHOLD};
pub use error::{Error, Result};
