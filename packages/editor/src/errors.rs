//! Error types for the editor.
//!
//! The engine itself never fails: bad ids and out-of-range indices are
//! silent no-ops, and user-facing problems are validation violations
//! returned as data. The only errors here guard the hydration boundary,
//! whose input comes from external storage rather than the UI.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Record contains duplicate section id: {0}")]
    DuplicateSectionId(Uuid),

    #[error("Record contains duplicate field id: {0}")]
    DuplicateFieldId(Uuid),
}
