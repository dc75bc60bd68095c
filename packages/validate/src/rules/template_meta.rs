use super::ValidationRule;
use crate::violation::Violation;
use formwright_schema::TemplateRecord;

/// Templates need a display name and a machine code before they can be
/// persisted; both are stable keys for submissions and exports.
pub struct TemplateMetaRule;

impl ValidationRule for TemplateMetaRule {
    fn name(&self) -> &'static str {
        "template-meta"
    }

    fn check(&self, record: &TemplateRecord) -> Vec<Violation> {
        let mut violations = Vec::new();

        if record.template.name.trim().is_empty() {
            violations.push(Violation::new(self.name(), "Template name is required"));
        }
        if record.template.code.trim().is_empty() {
            violations.push(Violation::new(self.name(), "Template code is required"));
        }

        violations
    }
}
