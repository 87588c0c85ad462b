//! Error types for DOM queries.
//!
//! A selector that matches nothing is not an error: the finders return `None`.
//! The types here cover queries the host refuses to run and a missing browser
//! environment.

use thiserror::Error;

/// A selector rejected by the HTML backend's parser.
#[cfg(feature = "html")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selector `{selector}`: {message}")]
pub struct InvalidSelector {
	/// Selector as supplied by the caller.
	pub selector: String,
	/// Parser diagnostic.
	pub message: String,
}

/// Errors raised by the browser convenience functions.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Error)]
pub enum DomError {
	/// `window` is not available (e.g. inside a worker).
	#[error("global `window` is not available")]
	NoWindow,
	/// `window.document` is not available.
	#[error("`window.document` is not available")]
	NoDocument,
	/// The browser rejected the query. Holds the thrown value untouched.
	#[error("selector query failed: {0:?}")]
	Query(wasm_bindgen::JsValue),
}

/// An unrecognized [`LogLevel`](crate::LogLevel) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLogLevelError(pub String);
