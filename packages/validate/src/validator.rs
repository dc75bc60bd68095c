use crate::rules::RuleRegistry;
use crate::violation::Violation;
use formwright_schema::TemplateRecord;

/// Options for configuring a validation pass
#[derive(Default)]
pub struct ValidateOptions {
    /// Custom rule registry (uses the default set if None)
    pub registry: Option<RuleRegistry>,
}

/// Validate a template graph and return every violation found.
///
/// Rules run in registration order and all violations are collected so
/// callers can display them together; an empty list means the template
/// may be persisted.
pub fn validate_template(record: &TemplateRecord, options: ValidateOptions) -> Vec<Violation> {
    let registry = options.registry.unwrap_or_default();
    let mut violations = Vec::new();

    for rule in registry.rules() {
        violations.extend(rule.check(record));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwright_schema::{
        Condition, ConditionOperator, Field, FieldType, FieldWidth, Section, SectionRecord,
        Template, ValidationRules,
    };
    use uuid::Uuid;

    fn section(title: &str, order_index: usize) -> Section {
        Section {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            order_index,
            repeatable: false,
            min_repeat: 1,
            max_repeat: 1,
            condition: None,
        }
    }

    fn field(section_id: Uuid, label: &str, code: &str, order_index: usize) -> Field {
        Field {
            id: Uuid::new_v4(),
            section_id,
            code: code.to_string(),
            label: label.to_string(),
            field_type: FieldType::Text,
            placeholder: None,
            help_text: None,
            default_value: None,
            width: FieldWidth::Full,
            options: vec![],
            rules: ValidationRules::default(),
            condition: None,
            order_index,
        }
    }

    fn minimal_record() -> TemplateRecord {
        let s = section("Checks", 0);
        let f = field(s.id, "Hazard", "hazard", 0);
        TemplateRecord {
            template: Template {
                name: "Site Walk".to_string(),
                code: "site_walk".to_string(),
                ..Template::default()
            },
            sections: vec![SectionRecord {
                section: s,
                fields: vec![f],
            }],
            workflow: None,
        }
    }

    #[test]
    fn test_minimal_valid_template_passes() {
        let violations = validate_template(&minimal_record(), ValidateOptions::default());
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_missing_name_and_code_reported_together() {
        let mut record = minimal_record();
        record.template.name.clear();
        record.template.code = "   ".to_string();

        let violations = validate_template(&record, ValidateOptions::default());
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.rule == "template-meta"));
    }

    #[test]
    fn test_empty_template_reports_structure() {
        let record = TemplateRecord {
            template: Template {
                name: "Empty".to_string(),
                code: "empty".to_string(),
                ..Template::default()
            },
            sections: vec![],
            workflow: None,
        };

        let violations = validate_template(&record, ValidateOptions::default());
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        assert!(messages.contains(&"Template must contain at least one section"));
        assert!(messages.contains(&"Template must contain at least one field"));
    }

    #[test]
    fn test_duplicate_codes_reported_once_each() {
        let mut record = minimal_record();
        let section_id = record.sections[0].section.id;
        record.sections[0]
            .fields
            .push(field(section_id, "Hazard again", "hazard", 1));
        record.sections[0]
            .fields
            .push(field(section_id, "Hazard thrice", "hazard", 2));

        let violations = validate_template(&record, ValidateOptions::default());
        let dupes: Vec<_> = violations
            .iter()
            .filter(|v| v.rule == "unique-codes")
            .collect();
        assert_eq!(dupes.len(), 1);
        assert!(dupes[0].message.contains("hazard"));
    }

    #[test]
    fn test_dangling_field_condition_names_dependent() {
        let mut record = minimal_record();
        record.sections[0].fields[0].condition = Some(Condition {
            field_id: Uuid::new_v4(),
            operator: ConditionOperator::Equals,
            value: "yes".to_string(),
        });

        let violations = validate_template(&record, ValidateOptions::default());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Hazard"));
    }

    #[test]
    fn test_dangling_section_condition_reported() {
        let mut record = minimal_record();
        record.sections[0].section.condition = Some(Condition {
            field_id: Uuid::new_v4(),
            operator: ConditionOperator::IsAnswered,
            value: String::new(),
        });

        let violations = validate_template(&record, ValidateOptions::default());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Checks"));
    }

    #[test]
    fn test_section_condition_referencing_real_field_passes() {
        let mut record = minimal_record();
        let target = record.sections[0].fields[0].id;
        record.sections[0].section.condition = Some(Condition {
            field_id: target,
            operator: ConditionOperator::Equals,
            value: "yes".to_string(),
        });

        let violations = validate_template(&record, ValidateOptions::default());
        assert!(violations.is_empty());
    }
}
