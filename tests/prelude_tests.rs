//! Facade tests: the helpers are reachable through `reinhardt_dom::prelude`
//! and work together.

use reinhardt_dom::prelude::*;
use rstest::rstest;
use scraper::Html;

#[rstest]
fn test_span_in_scope_example() {
	// Arrange
	let page = Html::parse_fragment(r#"<div><span class="x">x</span></div>"#);
	let scope = find_element(&page, "div", FindOptions::default())
		.unwrap()
		.unwrap();

	// Act
	let hit = find_element(&page, ".x", FindOptions::new().scoped(&scope)).unwrap();
	let miss = find_element(&page, ".y", FindOptions::new().scoped(&scope)).unwrap();

	// Assert
	assert_eq!(hit.map(|el| el.value().name().to_string()), Some("span".to_string()));
	assert!(miss.is_none());
}

#[rstest]
fn test_patch_style_from_rendered_attribute() {
	let page = Html::parse_fragment(r#"<p style="color: red; margin: 0">hi</p>"#);
	let paragraph = find_element(&page, "p", FindOptions::default())
		.unwrap()
		.unwrap();
	let style = InlineStyle::parse(paragraph.value().attr("style").unwrap_or_default());

	let handle = patch_style(&style, [(CssProperty::Color, "blue"), (CssProperty::Margin, "")]);
	assert_eq!(style.css_text(), "color: blue;");

	handle.revert();
	assert_eq!(style.css_text(), "color: red; margin: 0;");
}

#[rstest]
fn test_log_level_default_is_debug() {
	assert_eq!(LogLevel::default(), LogLevel::Debug);
	assert_eq!(query::script_selector("/app.js"), "script[src=\"/app.js\"]");
}
