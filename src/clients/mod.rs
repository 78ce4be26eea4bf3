pub mod template;
pub mod transport;
