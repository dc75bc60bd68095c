use super::ValidationRule;
use crate::violation::Violation;
use formwright_schema::TemplateRecord;
use std::collections::HashSet;
use uuid::Uuid;

/// Conditional-logic expressions reference other fields by id; a dangling
/// reference would make the dependent section or field silently
/// unreachable at fill-out time.
pub struct LogicRefsRule;

impl ValidationRule for LogicRefsRule {
    fn name(&self) -> &'static str {
        "logic-refs"
    }

    fn check(&self, record: &TemplateRecord) -> Vec<Violation> {
        let known: HashSet<Uuid> = record.all_fields().map(|f| f.id).collect();
        let mut violations = Vec::new();

        for field in record.all_fields() {
            if let Some(condition) = &field.condition {
                if !known.contains(&condition.field_id) {
                    violations.push(Violation::new(
                        self.name(),
                        format!(
                            "Field \"{}\" has conditional logic referencing a missing field",
                            field.label
                        ),
                    ));
                }
            }
        }

        for record_section in &record.sections {
            if let Some(condition) = &record_section.section.condition {
                if !known.contains(&condition.field_id) {
                    violations.push(Violation::new(
                        self.name(),
                        format!(
                            "Section \"{}\" has conditional logic referencing a missing field",
                            record_section.section.title
                        ),
                    ));
                }
            }
        }

        violations
    }
}
