//! Requested style values.

use serde::{Deserialize, Serialize};

/// Value requested for one inline style property.
///
/// [`StyleValue::Clear`] removes the property. The empty string converts to
/// `Clear` as well, so `""` never ends up as an empty declaration.
///
/// Serializes as an optional string: `null` (or `""`) is `Clear`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum StyleValue {
	/// Assign this value.
	Set(String),
	/// Remove the property.
	Clear,
}

impl StyleValue {
	/// Returns `true` for [`StyleValue::Clear`].
	pub fn is_clear(&self) -> bool {
		matches!(self, Self::Clear)
	}

	/// The value to assign, or `""` when clearing.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Set(value) => value,
			Self::Clear => "",
		}
	}
}

impl From<String> for StyleValue {
	fn from(value: String) -> Self {
		if value.is_empty() {
			Self::Clear
		} else {
			Self::Set(value)
		}
	}
}

impl From<&str> for StyleValue {
	fn from(value: &str) -> Self {
		Self::from(value.to_string())
	}
}

impl From<&String> for StyleValue {
	fn from(value: &String) -> Self {
		Self::from(value.as_str())
	}
}

impl<T: Into<String>> From<Option<T>> for StyleValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Clear, |v| Self::from(v.into()))
	}
}

impl From<StyleValue> for Option<String> {
	fn from(value: StyleValue) -> Self {
		match value {
			StyleValue::Set(value) => Some(value),
			StyleValue::Clear => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(StyleValue::from("red"), StyleValue::Set("red".to_string()))]
	#[case(StyleValue::from(""), StyleValue::Clear)]
	#[case(StyleValue::from(String::new()), StyleValue::Clear)]
	#[case(StyleValue::from(None::<&str>), StyleValue::Clear)]
	#[case(StyleValue::from(Some("1px")), StyleValue::Set("1px".to_string()))]
	fn test_style_value_conversions(#[case] actual: StyleValue, #[case] expected: StyleValue) {
		assert_eq!(actual, expected);
	}

	#[rstest]
	fn test_style_value_as_str() {
		assert_eq!(StyleValue::from("block").as_str(), "block");
		assert_eq!(StyleValue::Clear.as_str(), "");
		assert!(StyleValue::Clear.is_clear());
	}

	#[rstest]
	fn test_style_value_serde() {
		let values: Vec<StyleValue> = serde_json::from_str(r#"["red", null, ""]"#).unwrap();

		assert_eq!(
			values,
			[
				StyleValue::Set("red".to_string()),
				StyleValue::Clear,
				StyleValue::Clear
			]
		);
		assert_eq!(serde_json::to_string(&StyleValue::Clear).unwrap(), "null");
	}
}
