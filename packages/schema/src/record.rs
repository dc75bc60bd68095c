//! Plain-data shapes exchanged with the persistence collaborator.
//!
//! A `TemplateRecord` is what a loader hands to the editor for hydration
//! and what the editor produces on export. The engine performs no storage
//! I/O itself; callers serialize these however their backing store needs.

use serde::{Deserialize, Serialize};

use crate::model::{Field, Section, Template, Workflow};

/// Full template graph: template, ordered sections with their ordered
/// fields, and the optional workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub template: Template,
    pub sections: Vec<SectionRecord>,
    pub workflow: Option<Workflow>,
}

/// One section together with its fields, both in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub section: Section,
    pub fields: Vec<Field>,
}

impl TemplateRecord {
    /// Iterate every field across all sections
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }
}
