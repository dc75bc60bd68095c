//! # Structural Mutations
//!
//! The mutation operations the surrounding UI drives: add, update,
//! delete, reorder, duplicate and move at both section and field
//! granularity, plus the template/workflow partial updates.
//!
//! ## Semantics
//!
//! - Every operation is atomic from the caller's perspective: fully
//!   applied or not applied at all
//! - Unknown ids and out-of-range indices are silent no-ops, logged at
//!   `warn` — the UI only presents valid targets, so this is a fallback,
//!   not a contract
//! - Structural operations (the ones that change counts, positions or
//!   ownership) push a history snapshot *before* mutating; value-only
//!   updates do not enter history, which bounds memory growth and keeps
//!   keystroke-level edits from drowning out structural undos
//! - Order indices are re-packed to a dense 0..N-1 sequence immediately
//!   after every structural change
//! - Successful mutations raise the dirty flag

use crate::store::TemplateEditor;
use formwright_schema::{
    id, Field, FieldPatch, FieldType, FieldWidth, Section, SectionPatch, TemplatePatch,
    ValidationRules, Workflow, WorkflowPatch,
};
use tracing::{debug, warn};
use uuid::Uuid;

impl TemplateEditor {
    // ---- Section operations ----

    /// Append a section and select it. Title defaults to "Section {n}".
    /// Structural: snapshots before applying.
    pub fn add_section(&mut self, patch: Option<SectionPatch>) -> Uuid {
        self.snapshot_before();

        let patch = patch.unwrap_or_default();
        let section_id = patch.id.unwrap_or_else(id::new_id);
        let mut section = Section {
            id: section_id,
            title: format!("Section {}", self.sections.len() + 1),
            description: None,
            order_index: self.sections.len(),
            repeatable: false,
            min_repeat: 1,
            max_repeat: 1,
            condition: None,
        };
        patch.apply_to(&mut section);

        debug!("add_section: id={} title={:?}", section_id, section.title);
        self.fields.entry(section_id).or_default();
        self.sections.push(section);
        self.selection.section_id = Some(section_id);
        self.selection.field_id = None;
        self.dirty = true;
        section_id
    }

    /// Shallow-merge a patch into a section. Value-only: not undoable.
    pub fn update_section(&mut self, id: Uuid, patch: SectionPatch) -> bool {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            warn!("update_section: unknown section {}", id);
            return false;
        };
        patch.apply_to(section);
        self.dirty = true;
        true
    }

    /// Remove a section and its entire field collection.
    /// Structural: snapshots before applying.
    pub fn delete_section(&mut self, id: Uuid) -> bool {
        let Some(pos) = self.sections.iter().position(|s| s.id == id) else {
            warn!("delete_section: unknown section {}", id);
            return false;
        };
        self.snapshot_before();

        debug!("delete_section: id={}", id);
        self.sections.remove(pos);
        self.fields.remove(&id);
        self.reindex_sections();

        if self.selection.section_id == Some(id) {
            self.selection.section_id = self.sections.first().map(|s| s.id);
            self.selection.field_id = None;
        }
        if let Some(field_id) = self.selection.field_id {
            if self.field(field_id).is_none() {
                self.selection.field_id = None;
            }
        }
        self.dirty = true;
        true
    }

    /// Splice the section at `from` back in at `to`; everything between
    /// shifts by one slot. Structural: snapshots before applying.
    pub fn reorder_sections(&mut self, from: usize, to: usize) -> bool {
        if from >= self.sections.len() || to >= self.sections.len() {
            warn!(
                "reorder_sections: index out of range (from={} to={} len={})",
                from,
                to,
                self.sections.len()
            );
            return false;
        }
        if from == to {
            return true;
        }
        self.snapshot_before();

        debug!("reorder_sections: from={} to={}", from, to);
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        self.reindex_sections();
        self.dirty = true;
        true
    }

    /// Deep-copy a section and every field it owns, appending the copy
    /// at the end. Each duplicated field gets a fresh globally-unique
    /// code, probed against the full template code set.
    /// Structural: snapshots before applying.
    pub fn duplicate_section(&mut self, id: Uuid) -> Option<Uuid> {
        let Some(source) = self.sections.iter().find(|s| s.id == id).cloned() else {
            warn!("duplicate_section: unknown section {}", id);
            return None;
        };
        self.snapshot_before();

        let new_id = id::new_id();
        let mut copy = source.clone();
        copy.id = new_id;
        copy.title = format!("{} (Copy)", source.title);
        copy.order_index = self.sections.len();

        let mut codes = self.code_set();
        let mut copied_fields = Vec::new();
        for field in self.fields_of_section(id) {
            let mut field_copy = field.clone();
            field_copy.id = id::new_id();
            field_copy.section_id = new_id;
            let code = id::code_for(&field.label, &codes);
            codes.insert(code.clone());
            field_copy.code = code;
            copied_fields.push(field_copy);
        }

        debug!(
            "duplicate_section: id={} -> {} ({} fields)",
            id,
            new_id,
            copied_fields.len()
        );
        self.sections.push(copy);
        self.fields.insert(new_id, copied_fields);
        self.dirty = true;
        Some(new_id)
    }

    // ---- Field operations ----

    /// Append a field to a section and select it. Derives the code from
    /// the label unless the patch supplies one explicitly.
    /// Structural: snapshots before applying.
    pub fn add_field(&mut self, section_id: Uuid, patch: FieldPatch) -> Option<Uuid> {
        if !self.fields.contains_key(&section_id) {
            warn!("add_field: unknown section {}", section_id);
            return None;
        }
        self.snapshot_before();

        let field_id = patch.id.unwrap_or_else(id::new_id);
        let label = patch.label.clone().unwrap_or_default();
        let code = match &patch.code {
            Some(code) => code.clone(),
            None => id::code_for(&label, &self.code_set()),
        };

        let order_index = self.fields_of_section(section_id).len();
        let mut field = Field {
            id: field_id,
            section_id,
            code,
            label,
            field_type: FieldType::default(),
            placeholder: None,
            help_text: None,
            default_value: None,
            width: FieldWidth::default(),
            options: Vec::new(),
            rules: ValidationRules::default(),
            condition: None,
            order_index,
        };
        patch.apply_to(&mut field);

        debug!(
            "add_field: section={} id={} code={:?}",
            section_id, field_id, field.code
        );
        if let Some(list) = self.fields.get_mut(&section_id) {
            list.push(field);
        }
        self.selection.section_id = Some(section_id);
        self.selection.field_id = Some(field_id);
        self.dirty = true;
        Some(field_id)
    }

    /// Shallow-merge a patch into a field, located by scanning the
    /// section collections (linear in total field count, fine for forms
    /// of tens of fields). Value-only: not undoable.
    pub fn update_field(&mut self, id: Uuid, patch: FieldPatch) -> bool {
        let Some(field) = self.fields.values_mut().flatten().find(|f| f.id == id) else {
            warn!("update_field: unknown field {}", id);
            return false;
        };
        patch.apply_to(field);
        self.dirty = true;
        true
    }

    /// Remove a field from its owning section.
    /// Structural: snapshots before applying.
    pub fn delete_field(&mut self, id: Uuid) -> bool {
        let Some((section_id, pos)) = self.locate_field(id) else {
            warn!("delete_field: unknown field {}", id);
            return false;
        };
        self.snapshot_before();

        debug!("delete_field: section={} id={}", section_id, id);
        if let Some(list) = self.fields.get_mut(&section_id) {
            list.remove(pos);
        }
        self.reindex_fields(section_id);

        if self.selection.field_id == Some(id) {
            self.selection.field_id = None;
        }
        self.dirty = true;
        true
    }

    /// Splice the field at `from` back in at `to` within one section.
    /// Structural: snapshots before applying.
    pub fn reorder_fields(&mut self, section_id: Uuid, from: usize, to: usize) -> bool {
        let count = match self.fields.get(&section_id) {
            Some(list) => list.len(),
            None => {
                warn!("reorder_fields: unknown section {}", section_id);
                return false;
            }
        };
        if from >= count || to >= count {
            warn!(
                "reorder_fields: index out of range (from={} to={} len={})",
                from, to, count
            );
            return false;
        }
        if from == to {
            return true;
        }
        self.snapshot_before();

        debug!(
            "reorder_fields: section={} from={} to={}",
            section_id, from, to
        );
        if let Some(list) = self.fields.get_mut(&section_id) {
            let field = list.remove(from);
            list.insert(to, field);
        }
        self.reindex_fields(section_id);
        self.dirty = true;
        true
    }

    /// Move a field into another section at `target_index`, re-indexing
    /// both collections. Structural: snapshots before applying.
    pub fn move_field_to_section(
        &mut self,
        field_id: Uuid,
        from_section: Uuid,
        to_section: Uuid,
        target_index: usize,
    ) -> bool {
        let in_source = self
            .fields
            .get(&from_section)
            .is_some_and(|list| list.iter().any(|f| f.id == field_id));
        if !in_source {
            warn!(
                "move_field_to_section: field {} not in section {}",
                field_id, from_section
            );
            return false;
        }
        if !self.fields.contains_key(&to_section) {
            warn!("move_field_to_section: unknown section {}", to_section);
            return false;
        }
        self.snapshot_before();

        debug!(
            "move_field_to_section: field={} from={} to={} index={}",
            field_id, from_section, to_section, target_index
        );
        let mut field = match self.fields.get_mut(&from_section) {
            Some(list) => {
                let pos = match list.iter().position(|f| f.id == field_id) {
                    Some(pos) => pos,
                    None => return false,
                };
                list.remove(pos)
            }
            None => return false,
        };
        field.section_id = to_section;

        if let Some(list) = self.fields.get_mut(&to_section) {
            let insert_at = target_index.min(list.len());
            list.insert(insert_at, field);
        }
        self.reindex_fields(from_section);
        self.reindex_fields(to_section);
        self.dirty = true;
        true
    }

    /// Deep-copy one field into the same section, inserted right after
    /// the source, with a fresh unique code.
    /// Structural: snapshots before applying.
    pub fn duplicate_field(&mut self, id: Uuid) -> Option<Uuid> {
        let Some((section_id, pos)) = self.locate_field(id) else {
            warn!("duplicate_field: unknown field {}", id);
            return None;
        };
        self.snapshot_before();

        let codes = self.code_set();
        let new_id = id::new_id();
        if let Some(list) = self.fields.get_mut(&section_id) {
            let mut copy = list[pos].clone();
            copy.id = new_id;
            copy.code = id::code_for(&copy.label, &codes);
            list.insert(pos + 1, copy);
        }
        self.reindex_fields(section_id);

        debug!("duplicate_field: id={} -> {}", id, new_id);
        self.dirty = true;
        Some(new_id)
    }

    // ---- Template / workflow updates ----

    /// Shallow-merge template attributes. Value-only: not undoable.
    pub fn update_template(&mut self, patch: TemplatePatch) {
        patch.apply_to(&mut self.template);
        self.dirty = true;
    }

    /// Shallow-merge workflow settings, creating the workflow on first
    /// use. Value-only: not undoable.
    pub fn update_workflow(&mut self, patch: WorkflowPatch) {
        let workflow = self.workflow.get_or_insert_with(Workflow::default);
        patch.apply_to(workflow);
        self.dirty = true;
    }

    // ---- Internal helpers ----

    fn snapshot_before(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    fn reindex_sections(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order_index = index;
        }
    }

    fn reindex_fields(&mut self, section_id: Uuid) {
        if let Some(list) = self.fields.get_mut(&section_id) {
            for (index, field) in list.iter_mut().enumerate() {
                field.order_index = index;
            }
        }
    }

    /// Owning section and position of a field
    fn locate_field(&self, id: Uuid) -> Option<(Uuid, usize)> {
        for (section_id, list) in &self.fields {
            if let Some(pos) = list.iter().position(|f| f.id == id) {
                return Some((*section_id, pos));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_section_defaults_title_and_selects() {
        let mut editor = TemplateEditor::new();
        let first = editor.add_section(None);
        let second = editor.add_section(None);

        assert_eq!(editor.sections()[0].title, "Section 1");
        assert_eq!(editor.sections()[1].title, "Section 2");
        assert_eq!(editor.sections()[0].id, first);
        assert_eq!(editor.selection().section_id, Some(second));
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut editor = TemplateEditor::new();
        editor.add_section(None);
        let before = editor.export();

        assert!(!editor.update_section(Uuid::new_v4(), SectionPatch::default()));
        assert!(!editor.delete_section(Uuid::new_v4()));
        assert!(!editor.delete_field(Uuid::new_v4()));
        assert!(!editor.update_field(Uuid::new_v4(), FieldPatch::default()));
        assert!(!editor.reorder_sections(0, 5));
        assert!(editor.duplicate_field(Uuid::new_v4()).is_none());
        assert!(editor.duplicate_section(Uuid::new_v4()).is_none());
        assert!(editor.add_field(Uuid::new_v4(), FieldPatch::default()).is_none());

        assert_eq!(editor.export(), before);
    }

    #[test]
    fn test_noops_do_not_enter_history() {
        let mut editor = TemplateEditor::new();
        let section = editor.add_section(None);
        assert!(!editor.reorder_sections(0, 3));
        assert!(!editor.delete_field(Uuid::new_v4()));

        // Single undo returns to the empty state, proving the no-ops
        // pushed nothing
        assert!(editor.undo());
        assert!(editor.sections().is_empty());
        assert!(!editor.undo());
        let _ = section;
    }

    #[test]
    fn test_delete_section_falls_back_selection() {
        let mut editor = TemplateEditor::new();
        let first = editor.add_section(None);
        let second = editor.add_section(None);

        editor.select_section(second);
        assert!(editor.delete_section(second));
        assert_eq!(editor.selection().section_id, Some(first));

        assert!(editor.delete_section(first));
        assert_eq!(editor.selection().section_id, None);
    }

    #[test]
    fn test_move_field_between_sections() {
        let mut editor = TemplateEditor::new();
        let source = editor.add_section(None);
        let target = editor.add_section(None);
        let field_a = editor
            .add_field(source, FieldPatch { label: Some("A".into()), ..Default::default() })
            .unwrap();
        let field_b = editor
            .add_field(source, FieldPatch { label: Some("B".into()), ..Default::default() })
            .unwrap();
        let field_c = editor
            .add_field(target, FieldPatch { label: Some("C".into()), ..Default::default() })
            .unwrap();

        let total_before =
            editor.fields_of_section(source).len() + editor.fields_of_section(target).len();

        assert!(editor.move_field_to_section(field_a, source, target, 0));

        let total_after =
            editor.fields_of_section(source).len() + editor.fields_of_section(target).len();
        assert_eq!(total_before, total_after);

        assert_eq!(editor.field(field_a).unwrap().section_id, target);
        let target_ids: Vec<Uuid> = editor.fields_of_section(target).iter().map(|f| f.id).collect();
        assert_eq!(target_ids, vec![field_a, field_c]);

        // Both collections re-indexed densely
        let source_indices: Vec<usize> =
            editor.fields_of_section(source).iter().map(|f| f.order_index).collect();
        assert_eq!(source_indices, vec![0]);
        let target_indices: Vec<usize> =
            editor.fields_of_section(target).iter().map(|f| f.order_index).collect();
        assert_eq!(target_indices, vec![0, 1]);
        let _ = field_b;
    }

    #[test]
    fn test_move_with_large_target_index_appends() {
        let mut editor = TemplateEditor::new();
        let source = editor.add_section(None);
        let target = editor.add_section(None);
        let field = editor
            .add_field(source, FieldPatch { label: Some("X".into()), ..Default::default() })
            .unwrap();

        assert!(editor.move_field_to_section(field, source, target, 99));
        assert_eq!(editor.fields_of_section(target).len(), 1);
    }

    #[test]
    fn test_duplicate_field_inserts_after_source_with_fresh_code() {
        let mut editor = TemplateEditor::new();
        let section = editor.add_section(None);
        let original = editor
            .add_field(section, FieldPatch { label: Some("Hazard".into()), ..Default::default() })
            .unwrap();
        editor
            .add_field(section, FieldPatch { label: Some("Severity".into()), ..Default::default() })
            .unwrap();

        let copy = editor.duplicate_field(original).unwrap();

        let fields = editor.fields_of_section(section);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].id, original);
        assert_eq!(fields[1].id, copy);
        assert_eq!(fields[1].code, "hazard_1");
        assert_eq!(fields[1].label, "Hazard");
        let indices: Vec<usize> = fields.iter().map(|f| f.order_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_duplicate_section_regenerates_every_code() {
        let mut editor = TemplateEditor::new();
        let section = editor.add_section(Some(SectionPatch {
            title: Some("Checks".into()),
            ..Default::default()
        }));
        editor
            .add_field(section, FieldPatch { label: Some("Hazard".into()), ..Default::default() })
            .unwrap();
        editor
            .add_field(section, FieldPatch { label: Some("Severity".into()), ..Default::default() })
            .unwrap();

        let copy = editor.duplicate_section(section).unwrap();

        let copied = editor.section(copy).unwrap();
        assert_eq!(copied.title, "Checks (Copy)");
        assert_eq!(copied.order_index, 1);

        assert_eq!(editor.fields_of_section(copy).len(), 2);
        let mut codes: Vec<String> = editor.all_fields().map(|f| f.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 4, "duplicated codes must stay unique");
    }

    #[test]
    fn test_update_workflow_creates_then_merges() {
        let mut editor = TemplateEditor::new();
        assert!(editor.workflow().is_none());

        editor.update_workflow(WorkflowPatch {
            creates_task: Some(true),
            ..Default::default()
        });
        editor.update_workflow(WorkflowPatch {
            sync_priority: Some(3),
            ..Default::default()
        });

        let workflow = editor.workflow().unwrap();
        assert!(workflow.creates_task);
        assert_eq!(workflow.sync_priority, 3);
    }
}
