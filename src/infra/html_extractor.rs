// ============================================================
// Layer 6 — HTML Article Extractor
// ============================================================
// Pulls the two things an article artifact needs out of a page:
//
//   title — text of the first <title> element, trimmed
//   body  — text of every <p> element, joined with one space
//
// Paragraph text is taken as-is (all descendant text nodes,
// concatenated), so inline markup like <a> or <em> inside a
// paragraph does not break words apart.
//
// Pages with no <title>, or whose paragraphs are all empty,
// are reported as errors rather than written as blank files.

use scraper::{ElementRef, Html, Selector};

use crate::domain::{article::Article, error::FetchError};

/// Build an Article from raw HTML fetched for `identifier`.
pub fn extract_article(identifier: &str, url: &str, html: &str) -> Result<Article, FetchError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)
        .ok_or_else(|| FetchError::MissingTitle { url: url.to_string() })?;

    let paragraphs = extract_paragraphs(&document);
    if paragraphs.iter().all(|p| p.trim().is_empty()) {
        return Err(FetchError::NoParagraphs { url: url.to_string() });
    }

    Ok(Article::new(identifier, title, paragraphs.join(" ")))
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| element_text(&el).trim().to_string())
}

fn extract_paragraphs(document: &Html) -> Vec<String> {
    match Selector::parse("p") {
        Ok(selector) => document.select(&selector).map(|el| element_text(&el)).collect(),
        Err(_)       => Vec::new(),
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}
