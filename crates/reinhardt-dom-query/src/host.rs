//! Host query capability
//!
//! The finders never talk to a concrete DOM. They go through [`Dom`], which
//! models a document-like root able to run selector queries, optionally
//! confined to one of its own elements.
//!
//! Backends:
//!
//! | Backend | Target | `Node<'a>` | `Error` |
//! |---------|--------|------------|---------|
//! | `web_sys::Document` | wasm32 | `web_sys::Element` | `wasm_bindgen::JsValue` |
//! | `scraper::Html` | `html` feature | `scraper::ElementRef<'a>` | [`InvalidSelector`](crate::InvalidSelector) |

/// A document that can answer selector queries.
///
/// Implementations pass the selector to the host untouched. Syntax errors are
/// reported through [`Dom::Error`] exactly as the host produced them.
pub trait Dom {
	/// Element handle returned by queries.
	type Node<'a>
	where
		Self: 'a;

	/// Failure raised by the host for a query it cannot run.
	type Error;

	/// Returns the first element matching `selector` in document order.
	///
	/// With `scope` set, only descendants of that element are considered.
	fn query_selector<'a>(
		&'a self,
		scope: Option<&Self::Node<'a>>,
		selector: &str,
	) -> Result<Option<Self::Node<'a>>, Self::Error>;

	/// Returns every element matching `selector`, in document order.
	fn query_selector_all<'a>(
		&'a self,
		scope: Option<&Self::Node<'a>>,
		selector: &str,
	) -> Result<Vec<Self::Node<'a>>, Self::Error>;
}
