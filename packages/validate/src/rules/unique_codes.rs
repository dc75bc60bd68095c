use super::ValidationRule;
use crate::violation::Violation;
use formwright_schema::TemplateRecord;
use std::collections::HashMap;

/// Field codes are stable keys for submissions and exports, so they must
/// be unique across the whole template, not just within a section.
pub struct UniqueCodesRule;

impl ValidationRule for UniqueCodesRule {
    fn name(&self) -> &'static str {
        "unique-codes"
    }

    fn check(&self, record: &TemplateRecord) -> Vec<Violation> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        // Insertion order so repeated runs report codes stably
        let mut order: Vec<&str> = Vec::new();

        for field in record.all_fields() {
            let count = counts.entry(field.code.as_str()).or_insert(0);
            if *count == 0 {
                order.push(field.code.as_str());
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter(|code| counts[code] > 1)
            .map(|code| {
                Violation::new(
                    self.name(),
                    format!("Duplicate field code \"{}\"", code),
                )
            })
            .collect()
    }
}
