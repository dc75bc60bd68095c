//! # Formwright Schema
//!
//! Data model for inspection/compliance form templates: the
//! template → section → field → workflow entity graph, partial-update
//! patches, persistence-boundary records, and id/code generation.

pub mod id;
pub mod model;
pub mod patch;
pub mod record;

pub use id::{code_for, new_id, DEFAULT_CODE};
pub use model::{
    Condition, ConditionOperator, Field, FieldOption, FieldType, FieldWidth, Section, Template,
    ValidationRules, Workflow,
};
pub use patch::{FieldPatch, SectionPatch, TemplatePatch, WorkflowPatch};
pub use record::{SectionRecord, TemplateRecord};
