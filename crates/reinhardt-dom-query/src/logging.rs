//! Not-found reporting
//!
//! Misses are reported once per call at the severity chosen by the caller.
//!
//! | Target | `LogLevel::Debug` | `LogLevel::Error` |
//! |--------|-------------------|-------------------|
//! | WASM | `console.debug` | `console.error` |
//! | Non-WASM | `tracing::debug!` | `tracing::error!` |
//!
//! Native events use the `reinhardt_dom::query` target and carry `selector`
//! and `scoped` fields next to the message.

use crate::options::LogLevel;

/// Builds the diagnostic for a selector that matched nothing.
pub(crate) fn not_found_message(selector: &str, scoped: bool) -> String {
	format!(
		"no element matches selector `{}` (scope: {})",
		selector,
		if scoped { "element" } else { "document" }
	)
}

/// Emits one not-found diagnostic at `level`. No-op for `LogLevel::Disabled`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn report_not_found(level: LogLevel, selector: &str, scoped: bool) {
	let message = wasm_bindgen::JsValue::from(not_found_message(selector, scoped));
	match level {
		LogLevel::Debug => web_sys::console::debug_1(&message),
		LogLevel::Error => web_sys::console::error_1(&message),
		LogLevel::Disabled => {}
	}
}

/// Emits one not-found diagnostic at `level`. No-op for `LogLevel::Disabled`.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn report_not_found(level: LogLevel, selector: &str, scoped: bool) {
	match level {
		LogLevel::Debug => tracing::debug!(
			target: "reinhardt_dom::query",
			selector,
			scoped,
			"{}",
			not_found_message(selector, scoped)
		),
		LogLevel::Error => tracing::error!(
			target: "reinhardt_dom::query",
			selector,
			scoped,
			"{}",
			not_found_message(selector, scoped)
		),
		LogLevel::Disabled => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(".missing", false, "no element matches selector `.missing` (scope: document)")]
	#[case("#a > b", true, "no element matches selector `#a > b` (scope: element)")]
	fn test_not_found_message(#[case] selector: &str, #[case] scoped: bool, #[case] expected: &str) {
		assert_eq!(not_found_message(selector, scoped), expected);
	}

	#[rstest]
	fn test_report_not_found_without_subscriber() {
		// Must not panic when nothing listens
		report_not_found(LogLevel::Debug, ".a", false);
		report_not_found(LogLevel::Error, ".a", true);
		report_not_found(LogLevel::Disabled, ".a", true);
	}
}
