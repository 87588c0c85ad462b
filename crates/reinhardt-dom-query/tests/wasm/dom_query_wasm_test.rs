//! Browser tests for the web-sys query backend
//!
//! Run with: wasm-pack test --chrome --headless

#![cfg(target_arch = "wasm32")]

use reinhardt_dom_query::{DomError, FindOptions, LogLevel, find_element, find_elements, web};
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> Element {
	let document = web::document().unwrap();
	let host = document.create_element("div").unwrap();
	host.set_inner_html(html);
	document.body().unwrap().append_child(&host).unwrap();
	host
}

#[wasm_bindgen_test]
fn test_scoped_hit_and_miss() {
	let host = mount(r#"<div><span class="x">x</span></div>"#);
	let document = web::document().unwrap();

	let hit = find_element(&document, ".x", FindOptions::new().scoped(&host)).unwrap();
	let miss = find_element(&document, ".y", FindOptions::new().scoped(&host)).unwrap();

	assert_eq!(hit.unwrap().tag_name(), "SPAN");
	assert!(miss.is_none());
	host.remove();
}

#[wasm_bindgen_test]
fn test_select_all_document_order() {
	let host = mount(r#"<i class="w">1</i><b><i class="w">2</i></b><i class="w">3</i>"#);

	let found = web::select_all(".w", FindOptions::new().scoped(&host))
		.unwrap()
		.unwrap();

	let texts: Vec<String> = found.iter().filter_map(|el| el.text_content()).collect();
	assert_eq!(texts, ["1", "2", "3"]);
	host.remove();
}

#[wasm_bindgen_test]
fn test_select_all_miss_is_sentinel() {
	let found = web::select_all(".never-rendered", FindOptions::new().silent()).unwrap();

	assert!(found.is_none());
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_thrown_value() {
	let err = web::select("div[", FindOptions::new().log_level(LogLevel::Error)).unwrap_err();

	assert!(matches!(err, DomError::Query(_)));
}

#[wasm_bindgen_test]
fn test_current_script_matches_module_url() {
	let Some(url) = web::module_url() else {
		return;
	};
	let document = web::document().unwrap();
	let script = document.create_element("script").unwrap();
	script.set_attribute("type", "application/json").unwrap();
	script.set_attribute("src", &url).unwrap();
	document.head().unwrap().append_child(&script).unwrap();

	let found = web::current_script().unwrap();

	assert_eq!(found, Some(script.clone()));
	script.remove();
}

#[wasm_bindgen_test]
fn test_find_elements_on_document_root() {
	let host = mount(r#"<p class="dq-doc">a</p><p class="dq-doc">b</p>"#);
	let document = web::document().unwrap();

	let found = find_elements(&document, ".dq-doc", FindOptions::default())
		.unwrap()
		.unwrap();

	assert_eq!(found.len(), 2);
	host.remove();
}
