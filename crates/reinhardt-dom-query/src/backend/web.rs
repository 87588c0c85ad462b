//! Browser backend and convenience functions (WASM only).
//!
//! [`Dom`] is implemented for `web_sys::Document`: thrown `SyntaxError`s are
//! returned as the original `JsValue`. The free functions here run against the
//! global `window.document`.

use crate::error::DomError;
use crate::finder::{find_element, find_elements};
use crate::host::Dom;
use crate::options::FindOptions;
use crate::script::find_script_by_src;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, NodeList};

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(thread_local_v2, js_namespace = ["import", "meta"], js_name = url)]
	static MODULE_URL: JsValue;
}

fn collect_elements(list: NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

impl Dom for Document {
	type Node<'a> = Element;
	type Error = JsValue;

	fn query_selector<'a>(
		&'a self,
		scope: Option<&Element>,
		selector: &str,
	) -> Result<Option<Element>, JsValue> {
		match scope {
			Some(root) => root.query_selector(selector),
			None => Document::query_selector(self, selector),
		}
	}

	fn query_selector_all<'a>(
		&'a self,
		scope: Option<&Element>,
		selector: &str,
	) -> Result<Vec<Element>, JsValue> {
		let list = match scope {
			Some(root) => root.query_selector_all(selector)?,
			None => Document::query_selector_all(self, selector)?,
		};
		Ok(collect_elements(list))
	}
}

/// Returns the global document.
pub fn document() -> Result<Document, DomError> {
	web_sys::window()
		.ok_or(DomError::NoWindow)?
		.document()
		.ok_or(DomError::NoDocument)
}

/// [`find_element`] against the global document.
///
/// # Example
///
/// ```ignore
/// use reinhardt_dom_query::{FindOptions, LogLevel, web};
///
/// let root = web::select("#app", FindOptions::new().log_level(LogLevel::Error))?;
/// ```
pub fn select(selector: &str, options: FindOptions<'_, Element>) -> Result<Option<Element>, DomError> {
	let document = document()?;
	find_element(&document, selector, options).map_err(DomError::Query)
}

/// [`find_elements`] against the global document.
pub fn select_all(
	selector: &str,
	options: FindOptions<'_, Element>,
) -> Result<Option<Vec<Element>>, DomError> {
	let document = document()?;
	find_elements(&document, selector, options).map_err(DomError::Query)
}

/// URL of the running module (`import.meta.url` of the JS glue).
///
/// Requires an ES module build (`--target web` or `bundler`). Returns `None`
/// when the value is not a string.
pub fn module_url() -> Option<String> {
	MODULE_URL.with(JsValue::as_string)
}

/// Returns the `<script>` element that loaded the running module.
///
/// Matches `src` against [`module_url`] exactly; misses are never reported.
pub fn current_script() -> Result<Option<Element>, DomError> {
	let Some(url) = module_url() else {
		return Ok(None);
	};
	let document = document()?;
	find_script_by_src(&document, &url).map_err(DomError::Query)
}
