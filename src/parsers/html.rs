use crate::parsers::text::collapse_whitespace;
use crate::signals::{MetaTag, RawPage};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3").expect("heading selector should be valid"));
static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("meta selector should be valid"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector should be valid"));

/// Elements whose text never renders
const INVISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Parses an HTML document into a raw page record.
///
/// The URL is carried through untouched; domain derivation happens during
/// signal extraction.
pub fn extract(html: &str, url: &str) -> RawPage {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&TITLE_SELECTOR)
        .next()
        .map(|t| element_text(&t))
        .unwrap_or_default();

    let headings: Vec<String> = doc
        .select(&HEADING_SELECTOR)
        .map(|h| element_text(&h))
        .filter(|h| !h.is_empty())
        .collect();

    let meta_tags: Vec<MetaTag> = doc
        .select(&META_SELECTOR)
        .filter_map(|m| {
            let el = m.value();
            let name = el
                .attr("name")
                .or_else(|| el.attr("property"))
                .or_else(|| el.attr("http-equiv"))?;
            let content = el.attr("content")?;
            Some(MetaTag::new(name, content))
        })
        .collect();

    let body_text = doc
        .select(&BODY_SELECTOR)
        .next()
        .map(|b| visible_text(&b))
        .unwrap_or_default();

    ::log::debug!(
        "HTML extraction found {} headings, {} meta tags, {} body chars",
        headings.len(),
        meta_tags.len(),
        body_text.len()
    );

    RawPage {
        title: Some(title),
        headings: Some(headings),
        meta_tags: Some(meta_tags),
        body_text: Some(body_text),
        url: Some(url.to_string()),
        domain: None,
    }
}

fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Collects text nodes under `root`, skipping anything inside invisible elements
fn visible_text(root: &ElementRef) -> String {
    let parts: Vec<&str> = root
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| INVISIBLE_ELEMENTS.contains(&e.name()))
            });
            if hidden { None } else { Some(&**text) }
        })
        .collect();

    collapse_whitespace(&parts.join(" "))
}
