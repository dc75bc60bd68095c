//! # Template Editor Store
//!
//! One `TemplateEditor` owns the full editing state for a single
//! template session: the template and workflow singletons, the ordered
//! sections, the per-section ordered field lists, selection, dirty flag,
//! undo history, and the last validation report.
//!
//! The surrounding application constructs one instance per editing
//! session and disposes of it on teardown; nothing here is global. All
//! operations are synchronous and run to completion, so a single-threaded
//! UI event loop needs no locking around the store.

use crate::errors::EditorError;
use crate::history::{History, Snapshot, DEFAULT_HISTORY_DEPTH};
use crate::selection::{EditorMode, Selection};
use formwright_schema::{
    Field, FieldPatch, Section, SectionPatch, SectionRecord, Template, TemplatePatch,
    TemplateRecord, Workflow, WorkflowPatch,
};
use formwright_validate::{validate_template, ValidateOptions, Violation};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// In-memory template editing engine
#[derive(Debug)]
pub struct TemplateEditor {
    pub(crate) template: Template,
    pub(crate) workflow: Option<Workflow>,
    /// Sections in display order; `order_index` always mirrors position
    pub(crate) sections: Vec<Section>,
    /// Fields per owning section, each list in display order
    pub(crate) fields: HashMap<Uuid, Vec<Field>>,
    pub(crate) selection: Selection,
    pub(crate) mode: EditorMode,
    pub(crate) history: History,
    pub(crate) dirty: bool,
    pub(crate) violations: Vec<Violation>,
}

impl TemplateEditor {
    /// Create an editor holding a fresh, empty template
    pub fn new() -> Self {
        Self::with_history_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// Create an editor with a custom undo depth
    pub fn with_history_depth(depth: usize) -> Self {
        Self {
            template: Template::default(),
            workflow: None,
            sections: Vec::new(),
            fields: HashMap::new(),
            selection: Selection::default(),
            mode: EditorMode::Edit,
            history: History::with_depth(depth),
            dirty: false,
            violations: Vec::new(),
        }
    }

    /// Re-initialize the whole editing session: replaces template,
    /// workflow, sections and fields, and clears selection, history,
    /// dirty flag and any cached violations.
    pub fn init_template(&mut self, patch: Option<TemplatePatch>) {
        let mut template = Template::default();
        if let Some(patch) = &patch {
            patch.apply_to(&mut template);
        }

        self.template = template;
        self.workflow = None;
        self.sections.clear();
        self.fields.clear();
        self.selection = Selection::default();
        self.mode = EditorMode::Edit;
        self.history.clear();
        self.dirty = false;
        self.violations.clear();
    }

    // ---- Read accessors ----

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn workflow(&self) -> Option<&Workflow> {
        self.workflow.as_ref()
    }

    /// Sections in display order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: Uuid) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Fields of one section in display order; empty for unknown ids
    pub fn fields_of_section(&self, section_id: Uuid) -> &[Field] {
        self.fields
            .get(&section_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn field(&self, id: Uuid) -> Option<&Field> {
        self.fields.values().flatten().find(|f| f.id == id)
    }

    /// Every field across all sections; global order is not guaranteed
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().flatten()
    }

    pub fn field_by_code(&self, code: &str) -> Option<&Field> {
        self.all_fields().find(|f| f.code == code)
    }

    // ---- Dirty flag ----

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the persistence collaborator after a successful save or
    /// load.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ---- Undo/redo ----

    /// Revert to the state before the previous structural mutation.
    /// Returns false at the start of history. An undo is itself a change
    /// requiring re-save, so it raises the dirty flag.
    pub fn undo(&mut self) -> bool {
        let live = self.snapshot();
        match self.history.undo(&live) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone structural mutation. Returns
    /// false at the end of history.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- Validation gate ----

    /// Run all validation rules over the live model, caching the report.
    /// Returns true when the template may be persisted.
    pub fn validate(&mut self) -> bool {
        let record = self.export();
        self.violations = validate_template(&record, ValidateOptions::default());
        self.violations.is_empty()
    }

    /// Violations from the last `validate` run, retained for display
    /// until the next run or an explicit clear
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn clear_violations(&mut self) {
        self.violations.clear();
    }

    // ---- Persistence boundary ----

    /// Load a persisted template graph by replaying it through the
    /// normal mutation path, so stored data satisfies exactly the same
    /// invariants a user-constructed document would. Persisted ids and
    /// field codes are re-asserted rather than regenerated. Leaves the
    /// editor clean with empty history.
    pub fn hydrate(&mut self, record: &TemplateRecord) -> Result<(), EditorError> {
        let mut section_ids = HashSet::new();
        let mut field_ids = HashSet::new();
        for section_record in &record.sections {
            if !section_ids.insert(section_record.section.id) {
                return Err(EditorError::DuplicateSectionId(section_record.section.id));
            }
            for field in &section_record.fields {
                if !field_ids.insert(field.id) {
                    return Err(EditorError::DuplicateFieldId(field.id));
                }
            }
        }

        self.init_template(None);
        self.template = record.template.clone();

        let mut section_records: Vec<&SectionRecord> = record.sections.iter().collect();
        section_records.sort_by_key(|r| r.section.order_index);

        for section_record in section_records {
            let section_id = self.add_section(Some(SectionPatch::from(&section_record.section)));

            let mut fields: Vec<&Field> = section_record.fields.iter().collect();
            fields.sort_by_key(|f| f.order_index);
            for field in fields {
                let _ = self.add_field(section_id, FieldPatch::from(field));
            }
        }

        if let Some(workflow) = &record.workflow {
            self.update_workflow(WorkflowPatch::from(workflow));
        }

        // A freshly loaded document starts with nothing to undo and
        // nothing to save
        self.history.clear();
        self.selection = Selection::default();
        self.dirty = false;
        Ok(())
    }

    /// Produce the plain-data snapshot the persistence collaborator
    /// translates into its storage representation
    pub fn export(&self) -> TemplateRecord {
        TemplateRecord {
            template: self.template.clone(),
            sections: self
                .sections
                .iter()
                .map(|section| SectionRecord {
                    section: section.clone(),
                    fields: self.fields_of_section(section.id).to_vec(),
                })
                .collect(),
            workflow: self.workflow.clone(),
        }
    }

    // ---- Internal state transitions ----

    /// Deep copy of the mutable structural state
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            sections: self.sections.clone(),
            fields: self.fields.clone(),
        }
    }

    /// Install a snapshot as the live state, pruning selection to ids
    /// that still exist. Restores mark the model dirty.
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.sections = snapshot.sections;
        self.fields = snapshot.fields;

        if let Some(id) = self.selection.field_id {
            if self.field(id).is_none() {
                self.selection.field_id = None;
            }
        }
        if let Some(id) = self.selection.section_id {
            if self.section(id).is_none() {
                self.selection.section_id = None;
            }
        }
        self.dirty = true;
    }

    /// All field codes currently in use across the template
    pub(crate) fn code_set(&self) -> HashSet<String> {
        self.all_fields().map(|f| f.code.clone()).collect()
    }
}

impl Default for TemplateEditor {
    fn default() -> Self {
        Self::new()
    }
}
