use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value as JsonValue, json};
use tokio::sync::Mutex;
use whatsapp_templates::{
    ApiRequest, ApiResponse, TransportError, Transport,
    models::{
        component::Component,
        template::{ParameterFormat, TemplateCategory, TemplateDefinition},
    },
};

/// In-memory transport that records every request and answers with a fixed
/// reply.
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    reply: Result<JsonValue, (u16, String)>,
}

impl RecordingTransport {
    pub fn replying(body: JsonValue) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Ok(body),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Err((status, body.to_string())),
        }
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().await.push(request);

        match &self.reply {
            Ok(body) => Ok(ApiResponse {
                status: 200,
                body: body.clone(),
            }),
            Err((status, body)) => Err(TransportError::from_response(*status, body)),
        }
    }
}

pub fn template_list_body() -> JsonValue {
    json!({
        "data": [{ "id": "1", "name": "t1" }],
        "paging": { "cursors": { "before": "QVFI", "after": "QVFJ" } }
    })
}

pub fn created_body() -> JsonValue {
    json!({ "id": "created", "status": "PENDING", "category": "MARKETING" })
}

pub fn valid_named_template() -> TemplateDefinition {
    TemplateDefinition::new(
        "order_update",
        TemplateCategory::Marketing,
        "en_US",
        ParameterFormat::Named,
    )
    .with_component(Component::header("Hi {{first_name}}"))
    .with_component(Component::body("Your order {{order_id}} has shipped."))
    .with_component(Component::footer("Reply STOP to opt out"))
}
