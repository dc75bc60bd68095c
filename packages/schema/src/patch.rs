//! Partial-update payloads for mutation operations.
//!
//! Every patch field is optional; `apply_to` shallow-merges only the
//! fields that are present. Double-`Option` fields distinguish "leave
//! unchanged" (`None`) from "clear" (`Some(None)`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    Condition, Field, FieldOption, FieldType, FieldWidth, Section, Template, ValidationRules,
    Workflow,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<Option<String>>,
    pub cor_element: Option<Option<String>>,
    pub estimated_minutes: Option<u32>,
    pub icon: Option<Option<String>>,
    pub color: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub is_mandatory: Option<bool>,
    pub version: Option<u32>,
}

impl TemplatePatch {
    pub fn apply_to(&self, template: &mut Template) {
        if let Some(name) = &self.name {
            template.name = name.clone();
        }
        if let Some(code) = &self.code {
            template.code = code.clone();
        }
        if let Some(description) = &self.description {
            template.description = description.clone();
        }
        if let Some(cor_element) = &self.cor_element {
            template.cor_element = cor_element.clone();
        }
        if let Some(estimated_minutes) = self.estimated_minutes {
            template.estimated_minutes = estimated_minutes;
        }
        if let Some(icon) = &self.icon {
            template.icon = icon.clone();
        }
        if let Some(color) = &self.color {
            template.color = color.clone();
        }
        if let Some(is_active) = self.is_active {
            template.is_active = is_active;
        }
        if let Some(is_mandatory) = self.is_mandatory {
            template.is_mandatory = is_mandatory;
        }
        if let Some(version) = self.version {
            template.version = version;
        }
    }
}

/// Patch for sections. `id` is honored only at creation time, so loaders
/// can re-assert persisted ids; order is owned by the engine and is not
/// patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionPatch {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub repeatable: Option<bool>,
    pub min_repeat: Option<u32>,
    pub max_repeat: Option<u32>,
    pub condition: Option<Option<Condition>>,
}

impl SectionPatch {
    pub fn apply_to(&self, section: &mut Section) {
        if let Some(title) = &self.title {
            section.title = title.clone();
        }
        if let Some(description) = &self.description {
            section.description = description.clone();
        }
        if let Some(repeatable) = self.repeatable {
            section.repeatable = repeatable;
        }
        if let Some(min_repeat) = self.min_repeat {
            section.min_repeat = min_repeat;
        }
        if let Some(max_repeat) = self.max_repeat {
            section.max_repeat = max_repeat;
        }
        if let Some(condition) = &self.condition {
            section.condition = condition.clone();
        }
    }
}

/// Patch for fields. `id` and `code` are honored only at creation time;
/// a missing `code` makes the engine derive one from the label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldPatch {
    pub id: Option<Uuid>,
    pub code: Option<String>,
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub placeholder: Option<Option<String>>,
    pub help_text: Option<Option<String>>,
    pub default_value: Option<Option<String>>,
    pub width: Option<FieldWidth>,
    pub options: Option<Vec<FieldOption>>,
    pub rules: Option<ValidationRules>,
    pub condition: Option<Option<Condition>>,
}

impl FieldPatch {
    pub fn apply_to(&self, field: &mut Field) {
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(field_type) = self.field_type {
            field.field_type = field_type;
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = placeholder.clone();
        }
        if let Some(help_text) = &self.help_text {
            field.help_text = help_text.clone();
        }
        if let Some(default_value) = &self.default_value {
            field.default_value = default_value.clone();
        }
        if let Some(width) = self.width {
            field.width = width;
        }
        if let Some(options) = &self.options {
            field.options = options.clone();
        }
        if let Some(rules) = &self.rules {
            field.rules = rules.clone();
        }
        if let Some(condition) = &self.condition {
            field.condition = condition.clone();
        }
    }
}

/// Replay payload for a persisted section, preserving its id. Loaders
/// use this to push stored rows back through the normal mutation path.
impl From<&Section> for SectionPatch {
    fn from(section: &Section) -> Self {
        Self {
            id: Some(section.id),
            title: Some(section.title.clone()),
            description: Some(section.description.clone()),
            repeatable: Some(section.repeatable),
            min_repeat: Some(section.min_repeat),
            max_repeat: Some(section.max_repeat),
            condition: Some(section.condition.clone()),
        }
    }
}

/// Replay payload for a persisted field, preserving its id and code
impl From<&Field> for FieldPatch {
    fn from(field: &Field) -> Self {
        Self {
            id: Some(field.id),
            code: Some(field.code.clone()),
            label: Some(field.label.clone()),
            field_type: Some(field.field_type),
            placeholder: Some(field.placeholder.clone()),
            help_text: Some(field.help_text.clone()),
            default_value: Some(field.default_value.clone()),
            width: Some(field.width),
            options: Some(field.options.clone()),
            rules: Some(field.rules.clone()),
            condition: Some(field.condition.clone()),
        }
    }
}

impl From<&Workflow> for WorkflowPatch {
    fn from(workflow: &Workflow) -> Self {
        Self {
            submit_to_role: Some(workflow.submit_to_role.clone()),
            notify_roles: Some(workflow.notify_roles.clone()),
            notify_emails: Some(workflow.notify_emails.clone()),
            creates_task: Some(workflow.creates_task),
            requires_approval: Some(workflow.requires_approval),
            sync_priority: Some(workflow.sync_priority),
            auto_create_evidence: Some(workflow.auto_create_evidence),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowPatch {
    pub submit_to_role: Option<Option<String>>,
    pub notify_roles: Option<Vec<String>>,
    pub notify_emails: Option<Vec<String>>,
    pub creates_task: Option<bool>,
    pub requires_approval: Option<bool>,
    pub sync_priority: Option<i32>,
    pub auto_create_evidence: Option<bool>,
}

impl WorkflowPatch {
    pub fn apply_to(&self, workflow: &mut Workflow) {
        if let Some(submit_to_role) = &self.submit_to_role {
            workflow.submit_to_role = submit_to_role.clone();
        }
        if let Some(notify_roles) = &self.notify_roles {
            workflow.notify_roles = notify_roles.clone();
        }
        if let Some(notify_emails) = &self.notify_emails {
            workflow.notify_emails = notify_emails.clone();
        }
        if let Some(creates_task) = self.creates_task {
            workflow.creates_task = creates_task;
        }
        if let Some(requires_approval) = self.requires_approval {
            workflow.requires_approval = requires_approval;
        }
        if let Some(sync_priority) = self.sync_priority {
            workflow.sync_priority = sync_priority;
        }
        if let Some(auto_create_evidence) = self.auto_create_evidence {
            workflow.auto_create_evidence = auto_create_evidence;
        }
    }
}
