use super::ValidationRule;
use crate::violation::Violation;
use formwright_schema::TemplateRecord;

/// A saveable template has at least one section and at least one field
/// somewhere across its sections.
pub struct StructureRule;

impl ValidationRule for StructureRule {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn check(&self, record: &TemplateRecord) -> Vec<Violation> {
        let mut violations = Vec::new();

        if record.sections.is_empty() {
            violations.push(Violation::new(
                self.name(),
                "Template must contain at least one section",
            ));
        }
        if record.all_fields().next().is_none() {
            violations.push(Violation::new(
                self.name(),
                "Template must contain at least one field",
            ));
        }

        violations
    }
}
