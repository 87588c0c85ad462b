//! Browser tests for the web-sys style backend
//!
//! Run with: wasm-pack test --chrome --headless

#![cfg(target_arch = "wasm32")]

use reinhardt_dom_style::{CssProperty, StyleTarget, StyleValue, patch_element_style};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn element(style: &str) -> HtmlElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
	element.set_attribute("style", style).unwrap();
	element
}

#[wasm_bindgen_test]
fn test_patch_and_revert_element() {
	let el = element("color: red;");

	let handle = patch_element_style(&el, [("color", "blue"), ("width", "10px")]);
	assert_eq!(el.property_value("color"), "blue");
	assert_eq!(el.property_value("width"), "10px");

	handle.revert();
	assert_eq!(el.property_value("color"), "red");
	assert_eq!(el.property_value("width"), "");
	assert_eq!(el.style().length(), 1);
}

#[wasm_bindgen_test]
fn test_clear_removes_declaration() {
	let el = element("display: flex; opacity: 0.5;");

	let handle = patch_element_style(&el, [(CssProperty::Display, StyleValue::Clear)]);
	assert_eq!(el.style().length(), 1);

	handle.revert();
	assert_eq!(el.property_value("display"), "flex");
}

#[wasm_bindgen_test]
fn test_revert_keeps_important_priority() {
	let el = element("color: red !important;");

	let handle = patch_element_style(&el, [("color", "blue")]);
	assert_eq!(el.property_priority("color"), "");

	handle.revert();
	assert_eq!(el.property_value("color"), "red");
	assert_eq!(el.style().get_property_priority("color"), "important");
}

#[wasm_bindgen_test]
fn test_names_differing_in_case_revert_to_original() {
	let el = element("color: red;");

	let handle = patch_element_style(&el, [("Color", "blue"), ("color", "green")]);
	handle.revert();

	assert_eq!(el.property_value("color"), "red");
}
