//! # Formwright Editor
//!
//! In-memory editing engine for inspection-form templates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: entity graph + patches + id/codes   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: TemplateEditor session state        │
//! │  - structural mutations (atomic, no-throw)  │
//! │  - snapshot-based linear undo/redo          │
//! │  - selection + edit/preview mode            │
//! │  - hydrate/export persistence boundary      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ validate: rule pass → violation list        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One engine instance per editing session**: no global state; the
//!    host constructs and drops a [`TemplateEditor`]
//! 2. **Structural edits are undoable, value edits are not**: history
//!    snapshots bound memory and keep undo meaningful
//! 3. **Loaded data replays through the real mutation path**: hydration
//!    satisfies exactly the invariants user edits do
//! 4. **Violations are data**: an incomplete template is the normal
//!    case, so nothing in the engine throws
//!
//! ## Usage
//!
//! ```rust
//! use formwright_editor::TemplateEditor;
//! use formwright_schema::{FieldPatch, TemplatePatch};
//!
//! let mut editor = TemplateEditor::new();
//! editor.update_template(TemplatePatch {
//!     name: Some("Site Walk".to_string()),
//!     code: Some("site_walk".to_string()),
//!     ..Default::default()
//! });
//!
//! let section = editor.add_section(None);
//! editor.add_field(section, FieldPatch {
//!     label: Some("Hazard".to_string()),
//!     ..Default::default()
//! });
//!
//! assert!(editor.validate());
//! let record = editor.export(); // hand to the persistence layer
//! ```

mod errors;
mod history;
mod mutations;
mod selection;
mod store;

pub use errors::EditorError;
pub use history::{History, Snapshot, DEFAULT_HISTORY_DEPTH};
pub use selection::{EditorMode, Selection};
pub use store::TemplateEditor;

// Re-export the boundary types callers exchange with the engine
pub use formwright_schema::{
    FieldPatch, SectionPatch, SectionRecord, TemplatePatch, TemplateRecord, WorkflowPatch,
};
pub use formwright_validate::Violation;
