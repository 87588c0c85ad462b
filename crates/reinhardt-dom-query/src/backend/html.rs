//! [`Dom`] backend for parsed HTML documents.
//!
//! Runs the finders against `scraper::Html`, which is how server-side code and
//! native tests inspect rendered markup. Scoped queries only consider
//! descendants of the scope element, matching `Element.querySelector`.

use crate::error::InvalidSelector;
use crate::host::Dom;
use scraper::{ElementRef, Html, Selector};

fn parse(selector: &str) -> Result<Selector, InvalidSelector> {
	Selector::parse(selector).map_err(|err| InvalidSelector {
		selector: selector.to_string(),
		message: err.to_string(),
	})
}

impl Dom for Html {
	type Node<'a> = ElementRef<'a>;
	type Error = InvalidSelector;

	fn query_selector<'a>(
		&'a self,
		scope: Option<&ElementRef<'a>>,
		selector: &str,
	) -> Result<Option<ElementRef<'a>>, InvalidSelector> {
		let selector = parse(selector)?;
		Ok(match scope {
			Some(root) => root.select(&selector).next(),
			None => self.select(&selector).next(),
		})
	}

	fn query_selector_all<'a>(
		&'a self,
		scope: Option<&ElementRef<'a>>,
		selector: &str,
	) -> Result<Vec<ElementRef<'a>>, InvalidSelector> {
		let selector = parse(selector)?;
		Ok(match scope {
			Some(root) => root.select(&selector).collect(),
			None => self.select(&selector).collect(),
		})
	}
}
