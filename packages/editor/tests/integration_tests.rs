//! Full session flows across the persistence and validation boundaries:
//! build → export → hydrate → edit → validate.

use anyhow::Result;
use formwright_editor::{EditorError, EditorMode, TemplateEditor, TemplatePatch, WorkflowPatch};
use formwright_schema::{Condition, ConditionOperator, FieldPatch, SectionPatch};

fn build_sample() -> TemplateEditor {
    let mut editor = TemplateEditor::new();
    editor.update_template(TemplatePatch {
        name: Some("Vehicle Pre-Start".to_string()),
        code: Some("vehicle_pre_start".to_string()),
        ..Default::default()
    });

    let checks = editor.add_section(Some(SectionPatch {
        title: Some("Checks".to_string()),
        ..Default::default()
    }));
    let damage = editor
        .add_field(
            checks,
            FieldPatch {
                label: Some("Any damage?".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let details = editor.add_section(Some(SectionPatch {
        title: Some("Damage details".to_string()),
        condition: Some(Some(Condition {
            field_id: damage,
            operator: ConditionOperator::Equals,
            value: "yes".to_string(),
        })),
        ..Default::default()
    }));
    editor
        .add_field(
            details,
            FieldPatch {
                label: Some("Photo of damage".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    editor.update_workflow(WorkflowPatch {
        requires_approval: Some(true),
        notify_roles: Some(vec!["supervisor".to_string()]),
        ..Default::default()
    });
    editor
}

#[test]
fn test_export_then_hydrate_round_trip() -> Result<()> {
    let mut source = build_sample();
    let record = source.export();

    let mut loaded = TemplateEditor::new();
    loaded.hydrate(&record)?;

    // Persisted ids, codes and order are re-asserted, not regenerated
    assert_eq!(loaded.export(), record);

    // A freshly loaded session is clean with nothing to undo
    assert!(!loaded.is_dirty());
    assert!(!loaded.can_undo());
    assert_eq!(loaded.selection().section_id, None);

    // And it passes the same validation gate the source did
    assert!(source.validate());
    assert!(loaded.validate());
    Ok(())
}

#[test]
fn test_hydrate_orders_by_persisted_index() -> Result<()> {
    let source = build_sample();
    let mut record = source.export();
    // Storage does not guarantee row order; indices are authoritative
    record.sections.reverse();

    let mut loaded = TemplateEditor::new();
    loaded.hydrate(&record)?;

    let titles: Vec<&str> = loaded.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Checks", "Damage details"]);
    Ok(())
}

#[test]
fn test_hydrate_rejects_duplicate_ids() {
    let source = build_sample();
    let mut record = source.export();
    let clone = record.sections[0].clone();
    record.sections.push(clone);

    let mut loaded = TemplateEditor::new();
    let err = loaded.hydrate(&record).unwrap_err();
    assert!(matches!(err, EditorError::DuplicateSectionId(_)));
}

#[test]
fn test_deleting_condition_target_breaks_validation() {
    let mut editor = build_sample();
    assert!(editor.validate());

    // Deleting the field the second section's logic points at leaves a
    // dangling reference
    let target = editor.field_by_code("any_damage").unwrap().id;
    assert!(editor.delete_field(target));

    assert!(!editor.validate());
    let messages: Vec<String> = editor.violations().iter().map(|v| v.to_string()).collect();
    assert!(
        messages.iter().any(|m| m.contains("Damage details")),
        "got {:?}",
        messages
    );

    // The report sticks around for display until the next run
    assert!(!editor.violations().is_empty());
    editor.clear_violations();
    assert!(editor.violations().is_empty());

    // Undoing the delete repairs the reference
    assert!(editor.undo());
    assert!(editor.validate());
}

#[test]
fn test_selection_refinement_and_mode_toggle() {
    let mut editor = build_sample();
    let checks = editor.sections()[0].id;
    let details = editor.sections()[1].id;
    let photo = editor.fields_of_section(details)[0].id;

    editor.select_field(photo);
    assert_eq!(editor.selection().section_id, Some(details));
    assert_eq!(editor.selection().field_id, Some(photo));

    // Selecting a section clears the field selection
    editor.select_section(checks);
    assert_eq!(editor.selection().section_id, Some(checks));
    assert_eq!(editor.selection().field_id, None);

    editor.clear_selection();
    assert_eq!(editor.selection().section_id, None);

    assert_eq!(editor.mode(), EditorMode::Edit);
    editor.toggle_mode();
    assert_eq!(editor.mode(), EditorMode::Preview);
    editor.toggle_mode();
    assert_eq!(editor.mode(), EditorMode::Edit);
}

#[test]
fn test_record_survives_json_round_trip() -> Result<()> {
    let source = build_sample();
    let record = source.export();

    let json = serde_json::to_string(&record)?;
    let back = serde_json::from_str(&json)?;
    assert_eq!(record, back);

    let mut loaded = TemplateEditor::new();
    loaded.hydrate(&back)?;
    assert_eq!(loaded.export(), record);
    Ok(())
}
