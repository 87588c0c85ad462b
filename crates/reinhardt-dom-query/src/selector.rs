//! Selector construction helpers.

/// Quotes `value` as a CSS string literal (double quotes).
///
/// Backslashes and double quotes are backslash-escaped, control characters
/// become hex escapes and NUL becomes U+FFFD, so the resulting attribute
/// selector matches `value` exactly.
pub fn quote_css_string(value: &str) -> String {
	let mut result = String::with_capacity(value.len() + 2);
	result.push('"');
	for ch in value.chars() {
		match ch {
			'\0' => result.push('\u{FFFD}'),
			'\u{0001}'..='\u{001F}' | '\u{007F}' => {
				result.push_str(&format!("\\{:x} ", ch as u32));
			}
			'"' | '\\' => {
				result.push('\\');
				result.push(ch);
			}
			_ => result.push(ch),
		}
	}
	result.push('"');
	result
}

/// Builds a selector matching `<script>` elements whose `src` attribute equals
/// `locator` exactly.
pub fn script_selector(locator: &str) -> String {
	format!("script[src={}]", quote_css_string(locator))
}
