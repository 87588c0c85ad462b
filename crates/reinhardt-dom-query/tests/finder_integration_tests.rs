//! Finder integration tests against rendered HTML
//!
//! Covers the lookup contract end to end: scoped and unscoped hits, the absent
//! sentinel for misses, document order for multi-element results and
//! pass-through of selector errors.

use reinhardt_dom_query::{
	Dom, FindOptions, LogLevel, find_element, find_elements, find_script_by_src,
};
use rstest::rstest;
use scraper::{ElementRef, Html};

fn texts(elements: &[ElementRef<'_>]) -> Vec<String> {
	elements
		.iter()
		.map(|el| el.text().collect::<String>())
		.collect()
}

#[rstest]
fn test_scope_with_single_span() {
	// Arrange
	let page = Html::parse_fragment(r#"<div id="scope"><span class="x">found</span></div>"#);
	let scope = find_element(&page, "#scope", FindOptions::default())
		.unwrap()
		.unwrap();

	// Act
	let hit = find_element(&page, ".x", FindOptions::new().scoped(&scope)).unwrap();
	let miss = find_element(&page, ".y", FindOptions::new().scoped(&scope)).unwrap();

	// Assert
	let hit = hit.expect(".x should match inside the scope");
	assert_eq!(hit.value().name(), "span");
	assert_eq!(hit.text().collect::<String>(), "found");
	assert!(miss.is_none());
}

#[rstest]
#[case("li", &["a", "b", "c", "d"])]
#[case("li.even", &["b", "d"])]
#[case("ol > li", &["c", "d"])]
fn test_find_elements_returns_exact_matches_in_document_order(
	#[case] selector: &str,
	#[case] expected: &[&str],
) {
	let page = Html::parse_document(
		r#"<ul><li>a</li><li class="even">b</li></ul>
		<ol><li>c</li><li class="even">d</li></ol>"#,
	);

	let found = find_elements(&page, selector, FindOptions::default())
		.unwrap()
		.expect("selector should match");

	assert_eq!(texts(&found), expected);
}

#[rstest]
fn test_find_elements_agrees_with_host_query() {
	let page = Html::parse_document("<p>1</p><section><p>2</p></section><p>3</p>");

	let via_finder = find_elements(&page, "p", FindOptions::default())
		.unwrap()
		.unwrap();
	let via_host = page.query_selector_all(None, "p").unwrap();

	assert_eq!(via_finder, via_host);
}

#[rstest]
fn test_first_of_many_is_first_in_document_order() {
	let page = Html::parse_document(r#"<b class="m">1</b><i><b class="m">2</b></i>"#);

	let first = find_element(&page, ".m", FindOptions::default())
		.unwrap()
		.unwrap();

	assert_eq!(first.text().collect::<String>(), "1");
}

#[rstest]
#[case(LogLevel::Debug)]
#[case(LogLevel::Error)]
#[case(LogLevel::Disabled)]
fn test_miss_is_sentinel_regardless_of_level(#[case] level: LogLevel) {
	let page = Html::parse_fragment("<p></p>");

	let single = find_element(&page, "table", FindOptions::new().log_level(level)).unwrap();
	let multiple = find_elements(&page, "table", FindOptions::new().log_level(level)).unwrap();

	assert!(single.is_none());
	assert!(multiple.is_none());
}

#[rstest]
#[case("div[")]
#[case("##")]
#[case("")]
fn test_malformed_selector_is_passed_through(#[case] selector: &str) {
	let page = Html::parse_fragment("<p></p>");

	let err = find_element(&page, selector, FindOptions::default()).unwrap_err();

	assert_eq!(err.selector, selector);
	assert!(find_elements(&page, selector, FindOptions::default()).is_err());
}

#[rstest]
fn test_find_script_by_src() {
	let page = Html::parse_document(
		r#"<head><script src="/pkg/app.js"></script><script src="/pkg/app.js.map"></script></head>"#,
	);

	let script = find_script_by_src(&page, "/pkg/app.js").unwrap().unwrap();

	assert_eq!(script.value().attr("src"), Some("/pkg/app.js"));
}
