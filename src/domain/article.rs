// ============================================================
// Layer 3 — Article Domain Type
// ============================================================
// Represents one scraped article: the page title and the text
// of every paragraph element, joined with single spaces.
//
// On disk an article is stored as:
//
//   <title>
//   <blank line>
//   <body>
//
// The metrics calculator reads the whole rendered text back,
// title included.

use serde::{Deserialize, Serialize};

/// Separator between the title and the body in a rendered article
pub const TITLE_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// The input identifier this article was fetched for
    pub identifier: String,

    /// Text of the page's <title> element
    pub title: String,

    /// Paragraph texts joined with single spaces
    pub body: String,
}

impl Article {
    pub fn new(
        identifier: impl Into<String>,
        title:      impl Into<String>,
        body:       impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title:      title.into(),
            body:       body.into(),
        }
    }

    /// Render the artifact text: `title + "\n\n" + body`
    pub fn render(&self) -> String {
        format!("{}{}{}", self.title, TITLE_SEPARATOR, self.body)
    }
}
