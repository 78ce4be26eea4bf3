use std::{collections::HashSet, sync::OnceLock};

use regex::Regex;

use crate::{
    errors::TemplateError,
    models::{
        component::Component,
        template::{ParameterFormat, TemplateDefinition},
    },
};

pub const MAX_TEMPLATE_NAME_LENGTH: usize = 512;

fn named_placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{[a-zA-Z_][a-zA-Z0-9_]*\}\}").expect("named placeholder pattern is valid")
    })
}

fn positional_placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{[0-9]+\}\}").expect("positional placeholder pattern is valid"))
}

pub fn validate_template_name(name: &str) -> Result<(), TemplateError> {
    let valid_chars =
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid_chars {
        return Err(TemplateError::InvalidName(
            "The template name must only contain alphanumeric characters and underscores."
                .to_string(),
        ));
    }

    if name.chars().count() > MAX_TEMPLATE_NAME_LENGTH {
        return Err(TemplateError::InvalidName(format!(
            "The template name must not exceed {MAX_TEMPLATE_NAME_LENGTH} characters."
        )));
    }

    Ok(())
}

pub fn validate_template_definition(definition: &TemplateDefinition) -> Result<(), TemplateError> {
    if !has_body_component(&definition.components) {
        return Err(TemplateError::MissingBody);
    }

    if let Some(repeated) = first_repeated_component(&definition.components) {
        return Err(TemplateError::DuplicateComponent(repeated.kind()));
    }

    // Presence of one matching token per text is enough; mixed placeholder
    // styles in a single text are accepted.
    match definition.parameter_format {
        ParameterFormat::Named => {
            if !every_text_matches(&definition.components, named_placeholder()) {
                return Err(TemplateError::NamedParameterFormat);
            }
        }
        ParameterFormat::Positional => {
            if !every_text_matches(&definition.components, positional_placeholder()) {
                return Err(TemplateError::PositionalParameterFormat);
            }
        }
    }

    Ok(())
}

/// Name check followed by structure check, the order `create` applies them in.
pub fn validate_for_create(definition: &TemplateDefinition) -> Result<(), TemplateError> {
    validate_template_name(&definition.name)?;
    validate_template_definition(definition)
}

fn has_body_component(components: &[Component]) -> bool {
    components
        .iter()
        .any(|component| matches!(component, Component::Body { .. }))
}

fn first_repeated_component(components: &[Component]) -> Option<&Component> {
    let mut seen = HashSet::with_capacity(components.len());
    components
        .iter()
        .filter(|component| !matches!(component, Component::Other))
        .find(|component| !seen.insert(component.kind()))
}

fn every_text_matches(components: &[Component], pattern: &Regex) -> bool {
    components.iter().all(|component| match component.parameterized_text() {
        Some(text) => pattern.is_match(text),
        None => true,
    })
}
