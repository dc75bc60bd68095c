//! # Formwright Validate
//!
//! Rule-based validation over a full template graph. Violations are data,
//! not errors: an incomplete in-progress template is the normal case, so
//! every rule collects all of its findings and the caller decides whether
//! the list blocks persistence.

mod rules;
mod validator;
mod violation;

pub use rules::{LogicRefsRule, RuleRegistry, StructureRule, TemplateMetaRule, UniqueCodesRule, ValidationRule};
pub use validator::{validate_template, ValidateOptions};
pub use violation::Violation;
