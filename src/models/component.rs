use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// A template component, discriminated on the wire by its `type` field.
///
/// See <https://developers.facebook.com/docs/whatsapp/business-management-api/message-templates/components>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Component {
    Header {
        format: HeaderFormat,
        #[serde(default)]
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        example: Option<HeaderExample>,
    },
    Body {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        example: Option<BodyExample>,
    },
    Footer {
        text: String,
    },
    Buttons {
        #[serde(default)]
        buttons: Vec<Button>,
    },

    /// Component types not modelled here, e.g. `CAROUSEL`. Decoding keeps
    /// only the fact that one was present; it serializes back as
    /// `{"type": "OTHER"}`.
    #[serde(other)]
    Other,
}

impl Component {
    pub fn header(text: impl Into<String>) -> Self {
        Component::Header {
            format: HeaderFormat::Text,
            text: text.into(),
            example: None,
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Component::Body {
            text: text.into(),
            example: None,
        }
    }

    pub fn footer(text: impl Into<String>) -> Self {
        Component::Footer { text: text.into() }
    }

    pub fn buttons(buttons: Vec<Button>) -> Self {
        Component::Buttons { buttons }
    }

    pub fn kind(&self) -> ComponentType {
        match self {
            Component::Header { .. } => ComponentType::Header,
            Component::Body { .. } => ComponentType::Body,
            Component::Footer { .. } => ComponentType::Footer,
            Component::Buttons { .. } => ComponentType::Buttons,
            Component::Other => ComponentType::Other,
        }
    }

    /// Text that may carry `{{...}}` placeholders. Only HEADER and BODY do.
    pub fn parameterized_text(&self) -> Option<&str> {
        match self {
            Component::Header { text, .. } | Component::Body { text, .. } => Some(text),
            Component::Footer { .. } | Component::Buttons { .. } | Component::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentType {
    Header,
    Body,
    Footer,
    Buttons,
    Other,
}

impl Display for ComponentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ComponentType::Header => write!(f, "HEADER"),
            ComponentType::Body => write!(f, "BODY"),
            ComponentType::Footer => write!(f, "FOOTER"),
            ComponentType::Buttons => write!(f, "BUTTONS"),
            ComponentType::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeaderFormat {
    Text,
    Image,
    Document,
    Video,
    Location,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedParamExample {
    pub param_name: String,
    pub example: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderExample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text_named_params: Option<Vec<NamedParamExample>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_handle: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyExample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<Vec<Vec<String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text_named_params: Option<Vec<NamedParamExample>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Button {
    /// Copies `example` to the device clipboard. At most 15 characters and
    /// one such button per template.
    CopyCode { example: String },

    /// Opens a WhatsApp Flow, referenced by id or name or given inline.
    Flow {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        flow_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        flow_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        flow_json: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        flow_action: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        navigate_screen: Option<String>,
    },

    QuickReply { text: String },

    Url {
        text: String,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        example: Option<Vec<String>>,
    },

    PhoneNumber { text: String, phone_number: String },

    /// Button types not modelled here. Their fields are dropped on decode,
    /// so it serializes back as `{"type": "OTHER"}`.
    #[serde(other)]
    Other,
}
