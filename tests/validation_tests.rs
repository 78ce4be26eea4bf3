use anyhow::Result;
use whatsapp_templates::{
    TemplateError,
    models::{
        component::{Button, Component, ComponentType},
        template::{ParameterFormat, TemplateCategory, TemplateDefinition},
        validation::{MAX_TEMPLATE_NAME_LENGTH, validate_template_definition, validate_template_name},
    },
};

fn definition(format: ParameterFormat, components: Vec<Component>) -> TemplateDefinition {
    components.into_iter().fold(
        TemplateDefinition::new("welcome", TemplateCategory::Utility, "en_US", format),
        TemplateDefinition::with_component,
    )
}

/// Test: Names made of letters, digits and underscores are accepted
#[test]
fn test_valid_template_names_are_accepted() -> Result<()> {
    validate_template_name("order_update_2")?;
    validate_template_name("A")?;
    validate_template_name("_")?;
    validate_template_name(&"a".repeat(MAX_TEMPLATE_NAME_LENGTH))?;

    Ok(())
}

/// Test: Any character outside [A-Za-z0-9_] rejects the name
#[test]
fn test_names_with_invalid_characters_are_rejected() {
    for name in ["hello-world", "with space", "héllo", "emoji_🎉", "dots.in.name", ""] {
        let result = validate_template_name(name);
        assert!(
            matches!(result, Err(TemplateError::InvalidName(_))),
            "Name {:?} should be rejected, got {:?}",
            name,
            result
        );
    }
}

/// Test: Names longer than the limit are rejected
#[test]
fn test_overlong_names_are_rejected() {
    let name = "a".repeat(MAX_TEMPLATE_NAME_LENGTH + 1);

    match validate_template_name(&name) {
        Err(TemplateError::InvalidName(reason)) => assert!(reason.contains("512")),
        other => panic!("Expected InvalidName, got {:?}", other),
    }
}

/// Test: A definition without BODY fails regardless of other components
#[test]
fn test_missing_body_is_rejected() {
    let no_components = definition(ParameterFormat::Positional, vec![]);
    assert!(matches!(
        validate_template_definition(&no_components),
        Err(TemplateError::MissingBody)
    ));

    let header_and_footer = definition(
        ParameterFormat::Positional,
        vec![Component::header("Hi {{1}}"), Component::footer("bye")],
    );
    assert!(matches!(
        validate_template_definition(&header_and_footer),
        Err(TemplateError::MissingBody)
    ));

    // Body presence is checked before uniqueness.
    let duplicate_headers = definition(
        ParameterFormat::Positional,
        vec![Component::header("a {{1}}"), Component::header("b {{1}}")],
    );
    assert!(matches!(
        validate_template_definition(&duplicate_headers),
        Err(TemplateError::MissingBody)
    ));
}

/// Test: Two components with the same type are rejected
#[test]
fn test_duplicate_components_are_rejected() {
    let two_headers = definition(
        ParameterFormat::Positional,
        vec![
            Component::header("Hi {{1}}"),
            Component::body("Order {{1}}"),
            Component::header("Again {{2}}"),
        ],
    );
    assert!(matches!(
        validate_template_definition(&two_headers),
        Err(TemplateError::DuplicateComponent(ComponentType::Header))
    ));

    let two_bodies = definition(
        ParameterFormat::Positional,
        vec![Component::body("One {{1}}"), Component::body("Two {{1}}")],
    );
    assert!(matches!(
        validate_template_definition(&two_bodies),
        Err(TemplateError::DuplicateComponent(ComponentType::Body))
    ));
}

/// Test: Positional placeholders fail NAMED format but pass POSITIONAL
#[test]
fn test_positional_placeholder_depends_on_format() -> Result<()> {
    let named = definition(ParameterFormat::Named, vec![Component::body("Hello {{1}}")]);
    assert!(matches!(
        validate_template_definition(&named),
        Err(TemplateError::NamedParameterFormat)
    ));

    let positional = definition(ParameterFormat::Positional, vec![Component::body("Hello {{1}}")]);
    validate_template_definition(&positional)?;

    Ok(())
}

/// Test: Named placeholders fail POSITIONAL format but pass NAMED
#[test]
fn test_named_placeholder_depends_on_format() -> Result<()> {
    let positional = definition(
        ParameterFormat::Positional,
        vec![Component::body("Hello {{name}}")],
    );
    assert!(matches!(
        validate_template_definition(&positional),
        Err(TemplateError::PositionalParameterFormat)
    ));

    let named = definition(ParameterFormat::Named, vec![Component::body("Hello {{name}}")]);
    validate_template_definition(&named)?;

    Ok(())
}

/// Test: HEADER text is held to the same rule as BODY
#[test]
fn test_header_without_placeholder_is_rejected() {
    let named = definition(
        ParameterFormat::Named,
        vec![Component::header("Welcome"), Component::body("Hi {{name}}")],
    );
    assert!(matches!(
        validate_template_definition(&named),
        Err(TemplateError::NamedParameterFormat)
    ));
}

/// Test: FOOTER and BUTTONS never need placeholders
#[test]
fn test_footer_and_buttons_are_exempt() -> Result<()> {
    let named = definition(
        ParameterFormat::Named,
        vec![
            Component::body("Your code is {{code}}"),
            Component::footer("No placeholders here"),
            Component::buttons(vec![Button::CopyCode {
                example: "250FF".to_string(),
            }]),
        ],
    );
    validate_template_definition(&named)?;

    Ok(())
}

/// Test: Named identifiers must start with a letter or underscore
#[test]
fn test_named_identifier_shape() -> Result<()> {
    let leading_digit = definition(ParameterFormat::Named, vec![Component::body("Hi {{1abc}}")]);
    assert!(matches!(
        validate_template_definition(&leading_digit),
        Err(TemplateError::NamedParameterFormat)
    ));

    let underscore = definition(ParameterFormat::Named, vec![Component::body("Hi {{_first}}")]);
    validate_template_definition(&underscore)?;

    Ok(())
}

/// Test: One matching token is enough, mixed styles in a text are accepted
#[test]
fn test_mixed_placeholders_pass_when_one_token_matches() -> Result<()> {
    let named = definition(
        ParameterFormat::Named,
        vec![Component::body("Hi {{name}}, your code is {{1}}")],
    );
    validate_template_definition(&named)?;

    let positional = definition(
        ParameterFormat::Positional,
        vec![Component::body("Hi {{name}}, your code is {{1}}")],
    );
    validate_template_definition(&positional)?;

    Ok(())
}

/// Test: Unmodelled components are neither duplicates nor placeholder carriers
#[test]
fn test_other_components_are_ignored_by_structure_checks() -> Result<()> {
    let carousel = definition(
        ParameterFormat::Positional,
        vec![
            Component::Other,
            Component::body("Browse {{1}}"),
            Component::Other,
        ],
    );
    validate_template_definition(&carousel)?;

    Ok(())
}
