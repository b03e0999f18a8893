//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and navigating the DOM tree using CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use mensura_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! assert_eq!(doc.select_first("h1").unwrap().unwrap().text(), "Title");
//! ```

use scraper::{Html, Selector};

use crate::{MensuraError, Result};

fn selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| MensuraError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// Represents a parsed HTML document.
///
/// Parsing is lenient: malformed markup is repaired by the HTML5 parser
/// rather than rejected.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects the first element matching a CSS selector, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MensuraError::HtmlParseError`] if the selector is invalid.
    pub fn select_first(&'_ self, selector_str: &str) -> Result<Option<Element<'_>>> {
        let sel = selector(selector_str)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Gets the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let sel = Selector::parse("title").ok()?;
        self.html.select(&sel).next().map(|el| el.text().collect::<String>())
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text content with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`MensuraError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector_str: &str) -> Result<Vec<Element<'a>>> {
        let sel = selector(selector_str)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>Heading</h1>
            <div class="content">
                <p>Paragraph 1</p>
                <p>Paragraph 2</p>
            </div>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_element_select_descendants() {
        let doc = Document::parse(SAMPLE_HTML);
        let container = doc.select_first("div.content").unwrap().unwrap();
        let paragraphs = container.select("p").unwrap();

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text(), "Paragraph 1");
        assert_eq!(paragraphs[1].trimmed_text(), "Paragraph 2");
    }

    #[test]
    fn test_select_first_missing() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(doc.select_first("article").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML);
        let result = doc.select_first("[[invalid");

        assert!(matches!(result, Err(MensuraError::HtmlParseError(_))));
    }
}
