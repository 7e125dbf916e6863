// ============================================================
// Layer 6 — Article Store
// ============================================================
// Persists scraped articles as loose text files, one per input
// identifier:
//
//   <dir>/
//     37.txt      ← "<title>\n\n<body>"
//     38.txt
//     ...
//
// Writing the same identifier twice replaces the earlier file.
// Writes go to a temporary sibling first and are renamed into
// place, so an interrupted run never leaves half an article.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::article::Article;

pub const ARTICLE_EXTENSION: &str = "txt";

pub struct ArticleStore {
    dir: PathBuf,
}

impl ArticleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<dir>/<identifier>.txt`
    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.dir.join(format!("{identifier}.{ARTICLE_EXTENSION}"))
    }

    /// Write an article, replacing any earlier one with the same identifier.
    pub fn save(&self, article: &Article) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create articles directory '{}'", self.dir.display()))?;

        let path = self.path_for(&article.identifier);
        let tmp  = path.with_extension(format!("{ARTICLE_EXTENSION}.partial"));

        fs::write(&tmp, article.render())
            .with_context(|| format!("Cannot write article '{}'", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Cannot move article into place at '{}'", path.display()))?;

        tracing::debug!("Saved article {} to '{}'", article.identifier, path.display());
        Ok(path)
    }

    /// Read the rendered text of an article.
    pub fn load_text(&self, identifier: &str) -> Result<String> {
        let path = self.path_for(identifier);
        fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read article '{}'. Has it been fetched?",
                path.display()
            )
        })
    }
}
