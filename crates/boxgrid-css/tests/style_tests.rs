//! Integration tests for style normalization and property lookup.

use boxgrid_css::style::{Clear, Float, Overflow, Rgb};
use boxgrid_css::{
    AutoLength, ColorValue, DisplayValue, DocumentSpec, Length, Position, Property, RawValue,
    Style, StyleError, StyleValue,
};
use strum::IntoEnumIterator;

fn style(declarations: &[(&str, RawValue)]) -> Style {
    Style::from_declarations(declarations.iter().cloned()).expect("valid declarations")
}

fn style_error(declarations: &[(&str, RawValue)]) -> StyleError {
    Style::from_declarations(declarations.iter().cloned()).expect_err("invalid declarations")
}

#[test]
fn test_defaults() {
    let style = Style::default();
    assert_eq!(style.display, DisplayValue::Block);
    assert_eq!(style.position, Position::Static);
    assert_eq!(style.width, AutoLength::Auto);
    assert_eq!(style.height, AutoLength::Auto);
    assert_eq!(style.margin, AutoLength::Length(Length::ZERO));
    assert_eq!(style.float, None);
    assert_eq!(style.clear, None);
    assert_eq!(style.max_width, None);
    assert_eq!(style.overflow_x, Overflow::Auto);
    assert_eq!(style.color, ColorValue::Inherit);
    assert_eq!(style.get(Property::WhiteSpace), None);
}

#[test]
fn test_numbers_and_unit_strings_become_lengths() {
    let style = style(&[
        ("width", 12.into()),
        ("height", "50%".into()),
        ("padding", "3px".into()),
        ("margin-left", 2.5_f32.into()),
    ]);
    assert_eq!(style.width, AutoLength::Length(Length::px(12.0)));
    assert_eq!(style.height, AutoLength::Length(Length::percent(50.0)));
    assert_eq!(style.padding, AutoLength::Length(Length::px(3.0)));
    assert_eq!(style.margin_left, Some(AutoLength::Length(Length::px(2.5))));
}

#[test]
fn test_auto_and_keywords() {
    let style = style(&[
        ("width", "auto".into()),
        ("margin", "AUTO".into()),
        ("display", "inline".into()),
        ("position", "Absolute".into()),
        ("float", "left".into()),
        ("clear", "both".into()),
        ("overflow-x", "hidden".into()),
        ("overflow-y", "auto".into()),
    ]);
    assert_eq!(style.width, AutoLength::Auto);
    assert_eq!(style.margin, AutoLength::Auto);
    assert_eq!(style.display, DisplayValue::Inline);
    assert_eq!(style.position, Position::Absolute);
    assert_eq!(style.float, Some(Float::Left));
    assert_eq!(style.clear, Some(Clear::Both));
    assert_eq!(style.overflow_x, Overflow::Hidden);
    assert_eq!(style.overflow_y, Overflow::Auto);
}

#[test]
fn test_overflow_sets_both_axes() {
    let style = style(&[("overflow", "visible".into())]);
    assert_eq!(style.overflow_x, Overflow::Visible);
    assert_eq!(style.overflow_y, Overflow::Visible);
}

#[test]
fn test_none_unsets_optional_properties() {
    let style = style(&[
        ("float", "right".into()),
        ("float", "none".into()),
        ("max-width", "none".into()),
    ]);
    assert_eq!(style.float, None);
    assert_eq!(style.max_width, None);
    assert_eq!(style.get(Property::Float), None);
}

#[test]
fn test_later_declarations_win() {
    let style = style(&[("width", 4.into()), ("width", "auto".into())]);
    assert_eq!(style.width, AutoLength::Auto);
}

#[test]
fn test_colors() {
    let style = style(&[
        ("color", "#fff".into()),
        ("background-color", "transparent".into()),
    ]);
    assert_eq!(
        style.get(Property::Color),
        Some(StyleValue::Color(ColorValue::Rgb(Rgb {
            r: 255,
            g: 255,
            b: 255,
        })))
    );
    assert_eq!(style.background_color, ColorValue::Transparent);

    assert_eq!(
        style_error(&[("color", "transparent".into())]),
        StyleError::InvalidColor {
            property: Property::Color,
            value: "transparent".to_string(),
        }
    );
    assert!(matches!(
        style_error(&[("background-color", "chartreuse-ish".into())]),
        StyleError::InvalidColor { .. }
    ));
}

#[test]
fn test_unknown_property_is_rejected() {
    assert_eq!(
        style_error(&[("z-index", 3.into())]),
        StyleError::UnknownProperty("z-index".to_string())
    );
}

#[test]
fn test_invalid_keyword_is_rejected() {
    assert_eq!(
        style_error(&[("display", "flex".into())]),
        StyleError::InvalidKeyword {
            property: Property::Display,
            value: "flex".to_string(),
        }
    );
}

#[test]
fn test_string_for_non_enumerated_property_is_rejected() {
    assert_eq!(
        style_error(&[("width", "wide".into())]),
        StyleError::NotEnumerated {
            property: Property::Width,
            value: "wide".to_string(),
        }
    );
}

#[test]
fn test_auto_is_accepted_by_every_length() {
    let style = style(&[
        ("padding", "auto".into()),
        ("border-width", "auto".into()),
        ("border-left-width", "auto".into()),
        ("min-width", "auto".into()),
        ("max-height", "auto".into()),
    ]);
    assert_eq!(style.padding, AutoLength::Auto);
    assert_eq!(style.border_width, AutoLength::Auto);
    assert_eq!(style.min_width, AutoLength::Auto);
    assert_eq!(style.max_height, Some(AutoLength::Auto));
    assert_eq!(style.get(Property::PaddingTop), Some(StyleValue::Auto));
    assert_eq!(style.get(Property::BorderLeftWidth), Some(StyleValue::Auto));

    // An auto edge resolves to zero pixels.
    assert_eq!(style.padding_top().to_px(40.0), 0.0);
    assert_eq!(style.border_left_width().to_px(40.0), 0.0);
}

#[test]
fn test_auto_for_keyword_property_is_rejected() {
    assert_eq!(
        style_error(&[("position", "auto".into())]),
        StyleError::AutoNotAllowed {
            property: Property::Position,
        }
    );
    assert_eq!(
        style_error(&[("display", "auto".into())]),
        StyleError::AutoNotAllowed {
            property: Property::Display,
        }
    );
}

#[test]
fn test_number_for_keyword_property_is_rejected() {
    assert_eq!(
        style_error(&[("display", 1.into())]),
        StyleError::LengthNotAllowed {
            property: Property::Display,
        }
    );
}

#[test]
fn test_reserved_properties_are_unsupported() {
    assert_eq!(
        style_error(&[("white-space", "nowrap".into())]),
        StyleError::Unsupported {
            property: Property::WhiteSpace,
        }
    );
}

#[test]
fn test_error_messages_name_the_property() {
    let error = style_error(&[("display", "flex".into())]);
    assert_eq!(error.to_string(), "got \"flex\" for display");
}

#[test]
fn test_side_falls_back_to_shorthand() {
    let style = style(&[("margin", 5.into()), ("padding", 2.into())]);
    let margin = Some(StyleValue::Length(Length::px(5.0)));
    assert_eq!(style.get(Property::MarginTop), margin);
    assert_eq!(style.get(Property::MarginLeft), margin);
    assert_eq!(style.get_by_name("margin-bottom"), margin);
    assert_eq!(style.get_by_name("margin_right"), margin);
    assert_eq!(
        style.get_by_name("padding_left"),
        Some(StyleValue::Length(Length::px(2.0)))
    );
    assert_eq!(
        style.get(Property::BorderTopWidth),
        Some(StyleValue::Length(Length::ZERO))
    );
}

#[test]
fn test_declared_side_overrides_shorthand() {
    let style = style(&[
        ("border-width", 1.into()),
        ("border-left-width", 0.into()),
        ("margin", "auto".into()),
        ("margin-top", 1.into()),
    ]);
    assert_eq!(
        style.get(Property::BorderLeftWidth),
        Some(StyleValue::Length(Length::ZERO))
    );
    assert_eq!(
        style.get(Property::BorderRightWidth),
        Some(StyleValue::Length(Length::px(1.0)))
    );
    assert_eq!(style.get(Property::MarginLeft), Some(StyleValue::Auto));
    assert_eq!(
        style.get(Property::MarginTop),
        Some(StyleValue::Length(Length::px(1.0)))
    );
}

#[test]
fn test_unknown_name_lookup_is_none() {
    assert_eq!(Style::default().get_by_name("z-index"), None);
}

#[test]
fn test_typed_accessors_agree_with_get() {
    let style = style(&[
        ("margin", "auto".into()),
        ("margin-bottom", "10%".into()),
        ("padding", 1.into()),
        ("padding-right", 4.into()),
        ("border-width", 2.into()),
        ("border-top-width", 0.into()),
    ]);
    for property in Property::iter() {
        let typed: Option<StyleValue> = match property {
            Property::MarginTop => Some(style.margin_top().into()),
            Property::MarginRight => Some(style.margin_right().into()),
            Property::MarginBottom => Some(style.margin_bottom().into()),
            Property::MarginLeft => Some(style.margin_left().into()),
            Property::PaddingTop => Some(style.padding_top().into()),
            Property::PaddingRight => Some(style.padding_right().into()),
            Property::PaddingBottom => Some(style.padding_bottom().into()),
            Property::PaddingLeft => Some(style.padding_left().into()),
            Property::BorderTopWidth => Some(style.border_top_width().into()),
            Property::BorderRightWidth => Some(style.border_right_width().into()),
            Property::BorderBottomWidth => Some(style.border_bottom_width().into()),
            Property::BorderLeftWidth => Some(style.border_left_width().into()),
            _ => continue,
        };
        assert_eq!(style.get(property), typed, "{property}");
    }
}

#[test]
fn test_property_names_round_trip() {
    for property in Property::iter() {
        let name = property.to_string();
        assert_eq!(Property::from_name(&name), Some(property));
        assert_eq!(Property::from_name(&name.replace('-', "_")), Some(property));
    }
}

#[test]
fn test_to_px() {
    assert_eq!(StyleValue::Auto.to_px(40.0), Ok(0.0));
    assert_eq!(
        StyleValue::Length(Length::percent(25.0)).to_px(40.0),
        Ok(10.0)
    );
    assert_eq!(StyleValue::Length(Length::px(3.0)).to_px(40.0), Ok(3.0));

    let error = StyleValue::Display(DisplayValue::Block)
        .to_px(40.0)
        .expect_err("keywords have no pixel value");
    assert!(error.to_string().starts_with("cannot convert"));
}

#[test]
fn test_document_spec_from_json() {
    let spec: DocumentSpec = serde_json::from_str(
        r#"{
            "name": "page",
            "id": "main",
            "class": ["wide"],
            "style": { "border-width": 1, "width": "50%", "margin_left": "auto" },
            "children": [
                { "name": "item", "style": { "display": "inline" }, "text": "hi" }
            ]
        }"#,
    )
    .expect("valid json");

    let node = spec.into_node().expect("valid styles");
    assert_eq!(node.name, "page");
    assert_eq!(node.id.as_deref(), Some("main"));
    assert_eq!(node.class, vec!["wide".to_string()]);
    assert_eq!(node.style.border_width, AutoLength::Length(Length::px(1.0)));
    assert_eq!(node.style.width, AutoLength::Length(Length::percent(50.0)));
    assert_eq!(node.style.margin_left(), AutoLength::Auto);
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].display(), DisplayValue::Inline);
    assert_eq!(node.children[0].text.as_deref(), Some("hi"));
}

#[test]
fn test_document_spec_reports_nested_style_errors() {
    let spec: DocumentSpec = serde_json::from_str(
        r#"{ "name": "page", "children": [ { "name": "bad", "style": { "display": "grid" } } ] }"#,
    )
    .expect("valid json");
    assert!(matches!(
        spec.into_node(),
        Err(StyleError::InvalidKeyword {
            property: Property::Display,
            ..
        })
    ));
}

#[test]
fn test_document_spec_applies_declarations_in_document_order() {
    let overridden: DocumentSpec = serde_json::from_str(
        r#"{ "name": "box", "style": { "overflow-x": "hidden", "overflow": "visible" } }"#,
    )
    .expect("valid json");
    assert_eq!(
        overridden.style.0,
        vec![
            ("overflow-x".to_string(), RawValue::from("hidden")),
            ("overflow".to_string(), RawValue::from("visible")),
        ]
    );
    let node = overridden.into_node().expect("valid styles");
    assert_eq!(node.style.overflow_x, Overflow::Visible);

    let overriding: DocumentSpec = serde_json::from_str(
        r#"{ "name": "box", "style": { "overflow": "visible", "overflow-x": "hidden" } }"#,
    )
    .expect("valid json");
    let node = overriding.into_node().expect("valid styles");
    assert_eq!(node.style.overflow_x, Overflow::Hidden);
    assert_eq!(node.style.overflow_y, Overflow::Visible);
}

#[test]
fn test_document_spec_style_serializes_as_an_object() {
    let spec: DocumentSpec =
        serde_json::from_str(r#"{ "name": "box", "style": { "width": 3, "margin": "auto" } }"#)
            .expect("valid json");
    let json = serde_json::to_value(&spec).expect("serializable");
    assert_eq!(json["style"]["width"], serde_json::json!(3.0));
    assert_eq!(json["style"]["margin"], serde_json::json!("auto"));
    assert!(json["style"].is_object());
}
