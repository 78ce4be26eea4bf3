pub mod clients;
pub mod config;
pub mod errors;
pub mod models;

pub use clients::{
    template::TemplateClient,
    transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, Transport},
};
pub use config::Config;
pub use errors::{TemplateError, TransportError};
