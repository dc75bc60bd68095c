use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Root form document being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    /// Machine code used as a stable key by exports and submissions
    pub code: String,
    pub description: Option<String>,
    /// Optional COR-style classification tag
    pub cor_element: Option<String>,
    /// Default completion-time estimate, in minutes
    pub estimated_minutes: u32,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub is_mandatory: bool,
    pub version: u32,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            code: String::new(),
            description: None,
            cor_element: None,
            estimated_minutes: 15,
            icon: None,
            color: None,
            is_active: true,
            is_mandatory: false,
            version: 1,
        }
    }
}

/// Ordered grouping of fields within a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Dense 0..N-1 position within the template
    pub order_index: usize,
    pub repeatable: bool,
    pub min_repeat: u32,
    pub max_repeat: u32,
    /// Show this section only when the referenced field matches
    pub condition: Option<Condition>,
}

/// Single input definition within a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: Uuid,
    /// Owning section
    pub section_id: Uuid,
    /// Short URL/column-safe slug, unique across the whole template
    pub code: String,
    pub label: String,
    pub field_type: FieldType,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub default_value: Option<String>,
    pub width: FieldWidth,
    pub options: Vec<FieldOption>,
    pub rules: ValidationRules,
    /// Show this field only when the referenced field matches
    pub condition: Option<Condition>,
    /// Dense 0..N-1 position within the owning section
    pub order_index: usize,
}

/// Input kinds a field can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Number,
    Date,
    Time,
    Select,
    CheckboxGroup,
    RadioGroup,
    Checkbox,
    Signature,
    Photo,
    File,
    Gps,
}

/// Display width of a field within its section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldWidth {
    #[default]
    Full,
    Half,
    Third,
}

/// One selectable choice for select/checkbox-group/radio-group fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

/// Per-field validation rule bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<String>,
}

/// Visibility condition referencing another field by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field_id: Uuid,
    pub operator: ConditionOperator,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    IsAnswered,
}

/// Post-submission routing settings, at most one per template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Workflow {
    pub submit_to_role: Option<String>,
    pub notify_roles: Vec<String>,
    pub notify_emails: Vec<String>,
    pub creates_task: bool,
    pub requires_approval: bool,
    pub sync_priority: i32,
    pub auto_create_evidence: bool,
}
