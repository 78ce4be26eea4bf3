pub mod component;
pub mod template;
pub mod validation;
