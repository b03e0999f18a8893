//! Title and body extraction from article pages.
//!
//! Extraction is deliberately simple: the title comes from the first `<h1>`
//! (falling back to `<title>`), and the body is every non-empty paragraph of
//! the first matching content container.

use serde::Serialize;

use crate::Result;
use crate::parse::{Document, Element};

/// Content containers tried in order before falling back to `<body>`.
const CONTAINER_SELECTORS: &[&str] = &["article", "div.content", "div.post-content", "body"];

/// Separator between the title and the body, and between paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// The title and body text of one article page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub body: String,
}

impl ExtractedArticle {
    /// Title and body joined by a blank line, the form stored and scored.
    pub fn raw_text(&self) -> String {
        format!("{}{}{}", self.title, PARAGRAPH_SEPARATOR, self.body)
    }
}

/// Extracts the article title and body text from an HTML page.
///
/// # Example
///
/// ```rust
/// use mensura_core::extract_article;
///
/// let html = "<html><body><h1>Headline</h1><article><p>First.</p><p> </p><p>Second.</p></article></body></html>";
/// let article = extract_article(html).unwrap();
/// assert_eq!(article.title, "Headline");
/// assert_eq!(article.body, "First.\n\nSecond.");
/// ```
pub fn extract_article(html: &str) -> Result<ExtractedArticle> {
    let doc = Document::parse(html);
    let title = extract_title(&doc)?;

    let body = match find_container(&doc)? {
        Some(container) => paragraphs_text(&container)?,
        None => String::new(),
    };

    Ok(ExtractedArticle { title, body })
}

fn extract_title(doc: &Document) -> Result<String> {
    if let Some(h1) = doc.select_first("h1")? {
        return Ok(h1.trimmed_text());
    }
    Ok(doc.title().map(|t| t.trim().to_string()).unwrap_or_default())
}

fn find_container(doc: &Document) -> Result<Option<Element<'_>>> {
    for selector in CONTAINER_SELECTORS {
        if let Some(element) = doc.select_first(selector)? {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

fn paragraphs_text(container: &Element<'_>) -> Result<String> {
    let paragraphs: Vec<String> = container
        .select("p")?
        .iter()
        .map(Element::trimmed_text)
        .filter(|text| !text.is_empty())
        .collect();
    Ok(paragraphs.join(PARAGRAPH_SEPARATOR))
}
