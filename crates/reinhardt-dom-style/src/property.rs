//! Typed CSS property vocabulary
//!
//! Style maps accept any `AsRef<str>` key. [`CssProperty`] is an optional
//! overlay for call sites that want the compiler to reject misspelled
//! property names; it converts to exactly the same string a literal would, so
//! runtime behavior does not change.
//!
//! ```ignore
//! use reinhardt_dom_style::{CssProperty, StyleMap};
//!
//! let typed: StyleMap<CssProperty> = [(CssProperty::Display, "none")].into_iter().collect();
//! let plain: StyleMap<&str> = [("display", "none")].into_iter().collect();
//! ```

use crate::error::UnknownProperty;
use std::fmt;
use std::str::FromStr;

macro_rules! css_properties {
	($($variant:ident => $name:literal,)*) => {
		/// A standard CSS property, named by its hyphenated CSS name.
		///
		/// Custom properties (`--*`) are not part of the vocabulary; use string
		/// keys for them.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		#[non_exhaustive]
		pub enum CssProperty {
			$(
				#[doc = concat!("`", $name, "`")]
				$variant,
			)*
		}

		impl CssProperty {
			/// Every property in the vocabulary.
			pub const ALL: &'static [CssProperty] = &[$(CssProperty::$variant,)*];

			/// The hyphenated CSS name.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $name,)*
				}
			}
		}

		impl FromStr for CssProperty {
			type Err = UnknownProperty;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s.to_ascii_lowercase().as_str() {
					$($name => Ok(Self::$variant),)*
					_ => Err(UnknownProperty(s.to_string())),
				}
			}
		}
	};
}

css_properties! {
	AlignItems => "align-items",
	Animation => "animation",
	Background => "background",
	BackgroundColor => "background-color",
	BackgroundImage => "background-image",
	Border => "border",
	BorderColor => "border-color",
	BorderRadius => "border-radius",
	BorderWidth => "border-width",
	Bottom => "bottom",
	BoxShadow => "box-shadow",
	BoxSizing => "box-sizing",
	Color => "color",
	Cursor => "cursor",
	Display => "display",
	Filter => "filter",
	Flex => "flex",
	FlexDirection => "flex-direction",
	FontFamily => "font-family",
	FontSize => "font-size",
	FontWeight => "font-weight",
	Gap => "gap",
	Height => "height",
	JustifyContent => "justify-content",
	Left => "left",
	LineHeight => "line-height",
	Margin => "margin",
	MarginBottom => "margin-bottom",
	MarginLeft => "margin-left",
	MarginRight => "margin-right",
	MarginTop => "margin-top",
	MaxHeight => "max-height",
	MaxWidth => "max-width",
	MinHeight => "min-height",
	MinWidth => "min-width",
	Opacity => "opacity",
	Outline => "outline",
	Overflow => "overflow",
	OverflowX => "overflow-x",
	OverflowY => "overflow-y",
	Padding => "padding",
	PaddingBottom => "padding-bottom",
	PaddingLeft => "padding-left",
	PaddingRight => "padding-right",
	PaddingTop => "padding-top",
	PointerEvents => "pointer-events",
	Position => "position",
	Right => "right",
	TextAlign => "text-align",
	TextDecoration => "text-decoration",
	Top => "top",
	Transform => "transform",
	Transition => "transition",
	UserSelect => "user-select",
	Visibility => "visibility",
	WhiteSpace => "white-space",
	Width => "width",
	ZIndex => "z-index",
}

impl AsRef<str> for CssProperty {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for CssProperty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
