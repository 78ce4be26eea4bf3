use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    clients::transport::{ApiRequest, ApiResponse, HttpTransport, Transport},
    config::Config,
    errors::{TemplateError, TransportError},
    models::{
        template::{
            CreateTemplateResponse, TemplateDefinition, TemplateField, TemplateList,
            TemplateRecord,
        },
        validation::validate_for_create,
    },
};

/// Template operations bound to an optional default WhatsApp Business Account.
///
/// Every operation that needs an account id takes an optional per-call value;
/// it wins over the default, and having neither is a
/// [`TemplateError::MissingAccountId`] raised before the transport is touched.
pub struct TemplateClient<T = HttpTransport> {
    transport: T,
    business_account_id: Option<String>,
}

impl TemplateClient<HttpTransport> {
    pub fn new(config: &Config) -> Result<Self, TemplateError> {
        let transport = HttpTransport::new(config)?;

        info!(
            api_version = %config.whatsapp_api_version,
            has_default_waba_id = config.whatsapp_business_account_id.is_some(),
            "Template client initialized"
        );

        Ok(Self::with_transport(
            transport,
            config.whatsapp_business_account_id.clone(),
        ))
    }
}

impl<T: Transport> TemplateClient<T> {
    pub fn with_transport(transport: T, business_account_id: Option<String>) -> Self {
        Self {
            transport,
            business_account_id,
        }
    }

    pub fn business_account_id(&self) -> Option<&str> {
        self.business_account_id.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get_all_templates(
        &self,
        waba_id: Option<&str>,
        fields: Option<&[TemplateField]>,
    ) -> Result<TemplateList, TemplateError> {
        let waba_id = self.resolve_account_id(waba_id)?;

        debug!(waba_id, "Listing message templates");

        let request = ApiRequest::get(
            format!("/{}/message_templates", waba_id),
            build_query(fields, None),
        );

        self.send(request).await
    }

    pub async fn get_template_by_id(
        &self,
        template_id: &str,
        fields: Option<&[TemplateField]>,
    ) -> Result<TemplateRecord, TemplateError> {
        debug!(template_id, "Fetching message template by id");

        let request = ApiRequest::get(format!("/{}", template_id), build_query(fields, None));

        self.send(request).await
    }

    pub async fn get_template_by_name(
        &self,
        name: &str,
        waba_id: Option<&str>,
        fields: Option<&[TemplateField]>,
    ) -> Result<TemplateList, TemplateError> {
        let waba_id = self.resolve_account_id(waba_id)?;

        debug!(waba_id, name, "Searching message templates by name");

        let request = ApiRequest::get(
            format!("/{}/message_templates", waba_id),
            build_query(fields, Some(name)),
        );

        self.send(request).await
    }

    pub async fn create_template(
        &self,
        definition: &TemplateDefinition,
        waba_id: Option<&str>,
    ) -> Result<CreateTemplateResponse, TemplateError> {
        let waba_id = self.resolve_account_id(waba_id)?;

        if let Err(e) = validate_for_create(definition) {
            warn!(
                template_name = %definition.name,
                error = %e,
                "Template rejected before submission"
            );
            return Err(e);
        }

        debug!(
            waba_id,
            template_name = %definition.name,
            component_count = definition.components.len(),
            "Creating message template"
        );

        let body = serde_json::to_value(definition)
            .map_err(|e| TransportError::encode(format!("Failed to serialize template: {}", e)))?;

        let created: CreateTemplateResponse = self
            .send(ApiRequest::post(format!("/{}/message_templates", waba_id), body))
            .await?;

        info!(
            template_id = %created.id,
            status = ?created.status,
            "Message template submitted"
        );

        Ok(created)
    }

    fn resolve_account_id<'a>(&'a self, waba_id: Option<&'a str>) -> Result<&'a str, TemplateError> {
        waba_id
            .or(self.business_account_id.as_deref())
            .ok_or(TemplateError::MissingAccountId)
    }

    async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, TemplateError> {
        let ApiResponse { status, body } = self.transport.execute(request).await?;

        serde_json::from_value(body).map_err(|e| {
            TemplateError::Transport(TransportError::decode(
                status,
                format!("Unexpected response shape: {}", e),
            ))
        })
    }
}

fn build_query(fields: Option<&[TemplateField]>, name: Option<&str>) -> Vec<(String, String)> {
    let mut query = Vec::new();

    if let Some(fields) = fields.filter(|fields| !fields.is_empty()) {
        let joined = fields
            .iter()
            .map(TemplateField::as_str)
            .collect::<Vec<_>>()
            .join(",");
        query.push(("fields".to_string(), joined));
    }

    // Sent even when empty.
    if let Some(name) = name {
        query.push(("name".to_string(), name.to_string()));
    }

    query
}
