//! External content providers that extend the static catalog at startup.

use crate::error::ScanError;
use crate::types::{ContentItem, ContentType};
use scraper::{ElementRef, Html, Selector};

/// Source of content discovered on the currently loaded page.
pub trait ContentProvider {
    /// Return every dynamic item found on the page. An empty page is not an error.
    fn scan_page(&self) -> Result<Vec<ContentItem>, ScanError>;
}

/// A provider for pages without dynamic content.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPage;

impl ContentProvider for EmptyPage {
    fn scan_page(&self) -> Result<Vec<ContentItem>, ScanError> {
        Ok(Vec::new())
    }
}

/// Class markers and the content type of the elements they tag.
const MARKERS: &[(&str, ContentType)] = &[
    ("dynamic-tutorial", ContentType::Video),
    ("dynamic-qa", ContentType::Qa),
    ("dynamic-template", ContentType::Template),
];

const MARKED_SELECTOR: &str = ".dynamic-tutorial, .dynamic-qa, .dynamic-template";
const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
const PARAGRAPH_SELECTOR: &str = "p";

const DEFAULT_CATEGORY: &str = "dynamic";

fn selector(css: &'static str) -> Result<Selector, ScanError> {
    Selector::parse(css).map_err(|e| ScanError::Selector {
        selector: css,
        reason: format!("{:?}", e),
    })
}

/// Scans an HTML page for elements tagged as dynamic tutorials, Q&A entries or
/// templates.
///
/// The page is parsed the way a browser would: unclosed elements are recovered
/// and entities are decoded. Fields come from `data-*` attributes first, then
/// from the element's first heading (title) and first paragraph (description),
/// at any depth. A marked element nested inside another one is scanned on its
/// own as well.
#[derive(Debug)]
pub struct MarkupScanner {
    html: String,
    marked: Selector,
    heading: Selector,
    paragraph: Selector,
}

impl MarkupScanner {
    pub fn new(html: impl Into<String>) -> Result<Self, ScanError> {
        Ok(Self {
            html: html.into(),
            marked: selector(MARKED_SELECTOR)?,
            heading: selector(HEADING_SELECTOR)?,
            paragraph: selector(PARAGRAPH_SELECTOR)?,
        })
    }

    fn build_item(
        &self,
        element: ElementRef<'_>,
        kind: ContentType,
        position: usize,
    ) -> ContentItem {
        let node = element.value();
        let attr = |name: &str| {
            node.attr(name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let id = attr("data-id")
            .or_else(|| attr("id"))
            .unwrap_or_else(|| format!("dynamic-{}-{}", kind, position));
        let title = attr("data-title")
            .or_else(|| first_text(element, &self.heading))
            .unwrap_or_default();
        let description = attr("data-description")
            .or_else(|| first_text(element, &self.paragraph))
            .unwrap_or_default();
        let keywords = node
            .attr("data-keywords")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|keyword| !keyword.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        ContentItem {
            description,
            category: attr("data-category").unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            keywords,
            thumbnail: attr("data-thumbnail"),
            answer: attr("data-answer"),
            url: attr("data-url"),
            ..ContentItem::new(id, title, kind)
        }
    }
}

/// Content type for the first marker class the element carries.
fn marker_kind(element: ElementRef<'_>) -> Option<ContentType> {
    let node = element.value();
    MARKERS
        .iter()
        .find(|(marker, _)| node.classes().any(|class| class == *marker))
        .map(|(_, kind)| *kind)
}

/// Text content of the first descendant matching `selector`, whitespace collapsed.
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|found| collapse_whitespace(&found.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl ContentProvider for MarkupScanner {
    fn scan_page(&self) -> Result<Vec<ContentItem>, ScanError> {
        let document = Html::parse_document(&self.html);

        let items: Vec<ContentItem> = document
            .select(&self.marked)
            .filter_map(|element| marker_kind(element).map(|kind| (element, kind)))
            .enumerate()
            .map(|(idx, (element, kind))| self.build_item(element, kind, idx + 1))
            .collect();

        tracing::debug!("Scanned page markup: {} dynamic items", items.len());
        Ok(items)
    }
}
