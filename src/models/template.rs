use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::models::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateCategory {
    Authentication,
    Marketing,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParameterFormat {
    Positional,
    Named,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityScore {
    Green,
    Yellow,
    Red,
    Unknown,
}

/// Review/lifecycle state. Owned by the remote service; read-only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateStatus {
    Approved,
    InAppeal,
    Pending,
    Rejected,
    PendingDeletion,
    Deleted,
    Disabled,
    Paused,
    LimitExceeded,
    Archived,
}

/// Payload for `POST /{waba_id}/message_templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub name: String,
    pub category: TemplateCategory,
    pub language: String,
    pub parameter_format: ParameterFormat,
    pub components: Vec<Component>,

    /// Exact name of a Template Library template to base this one on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_template_name: Option<String>,
}

impl TemplateDefinition {
    pub fn new(
        name: impl Into<String>,
        category: TemplateCategory,
        language: impl Into<String>,
        parameter_format: ParameterFormat,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            language: language.into(),
            parameter_format,
            components: Vec::new(),
            library_template_name: None,
        }
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_library_template(mut self, library_template_name: impl Into<String>) -> Self {
        self.library_template_name = Some(library_template_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateLanguage {
    Single(String),
    Many(Vec<String>),
}

/// A template as returned by the remote service.
///
/// `id` is present in every response. When no field projection was requested
/// the remaining fields are populated as the server reports them; with a
/// projection only the requested fields are guaranteed and everything else
/// decodes as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<TemplateCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<TemplateLanguage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_format: Option<ParameterFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<QualityScore>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TemplateStatus>,
}

/// Opaque paging tokens, passed through exactly as the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursors: Option<Cursors>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateList {
    pub data: Vec<TemplateRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl TemplateList {
    pub fn before_cursor(&self) -> Option<&str> {
        self.cursors().and_then(|cursors| cursors.before.as_deref())
    }

    pub fn after_cursor(&self) -> Option<&str> {
        self.cursors().and_then(|cursors| cursors.after.as_deref())
    }

    fn cursors(&self) -> Option<&Cursors> {
        self.paging.as_ref().and_then(|paging| paging.cursors.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTemplateResponse {
    pub id: String,
    pub status: TemplateStatus,
    pub category: TemplateCategory,
}

/// Fields of [`TemplateRecord`] that can be requested through `fields=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateField {
    Id,
    Category,
    Components,
    Language,
    Name,
    ParameterFormat,
    QualityScore,
    Status,
}

impl TemplateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateField::Id => "id",
            TemplateField::Category => "category",
            TemplateField::Components => "components",
            TemplateField::Language => "language",
            TemplateField::Name => "name",
            TemplateField::ParameterFormat => "parameter_format",
            TemplateField::QualityScore => "quality_score",
            TemplateField::Status => "status",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "id" => Some(TemplateField::Id),
            "category" => Some(TemplateField::Category),
            "components" => Some(TemplateField::Components),
            "language" => Some(TemplateField::Language),
            "name" => Some(TemplateField::Name),
            "parameter_format" => Some(TemplateField::ParameterFormat),
            "quality_score" => Some(TemplateField::QualityScore),
            "status" => Some(TemplateField::Status),
            _ => None,
        }
    }
}

impl Display for TemplateField {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}
