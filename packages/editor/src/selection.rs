//! Selection and edit/preview mode state.
//!
//! Pure UI bookkeeping derived from the document model. Selecting a
//! field also selects its owning section; selecting a section clears any
//! field selection.

use crate::store::TemplateEditor;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currently focused section/field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub section_id: Option<Uuid>,
    pub field_id: Option<Uuid>,
}

/// Whether the surrounding UI is editing or previewing the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

impl TemplateEditor {
    /// Focus a section, clearing any field selection. Unknown ids are
    /// ignored.
    pub fn select_section(&mut self, id: Uuid) {
        if self.section(id).is_some() {
            self.selection.section_id = Some(id);
            self.selection.field_id = None;
        }
    }

    /// Focus a field, which also focuses its owning section. Unknown ids
    /// are ignored.
    pub fn select_field(&mut self, id: Uuid) {
        if let Some(field) = self.field(id) {
            let section_id = field.section_id;
            self.selection.section_id = Some(section_id);
            self.selection.field_id = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::default();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            EditorMode::Edit => EditorMode::Preview,
            EditorMode::Preview => EditorMode::Edit,
        };
    }
}
