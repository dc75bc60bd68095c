mod logic_refs;
mod structure;
mod template_meta;
mod unique_codes;

pub use logic_refs::LogicRefsRule;
pub use structure::StructureRule;
pub use template_meta::TemplateMetaRule;
pub use unique_codes::UniqueCodesRule;

use crate::violation::Violation;
use formwright_schema::TemplateRecord;

/// A structural invariant check over the whole template graph
pub trait ValidationRule {
    /// Rule identifier used in reported violations
    fn name(&self) -> &'static str;

    /// Check the record, returning every violation found (never
    /// short-circuiting on the first)
    fn check(&self, record: &TemplateRecord) -> Vec<Violation>;
}

/// Registry of validation rules, run in registration order
pub struct RuleRegistry {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        &self.rules
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TemplateMetaRule));
        registry.register(Box::new(StructureRule));
        registry.register(Box::new(UniqueCodesRule));
        registry.register(Box::new(LogicRefsRule));
        registry
    }
}
