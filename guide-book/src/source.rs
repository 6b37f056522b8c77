//! Where page text comes from.
//!
//! The host owns page storage (resource packs, a mod jar, a directory on
//! disk).  The book only asks for a page by path and copes with a miss.

use std::path::Path;

use rustc_hash::FxHashMap;

use guide_text::{parse_paragraphs, Paragraph};

use crate::error::BookError;

/// Raw page as provided by a [`PageSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageDocument {
    pub title: Option<String>,
    pub markdown: String,
}

impl PageDocument {
    /// Use the first top-level header as the title.
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        let markdown = markdown.into();
        let title = parse_paragraphs(&markdown).iter().find_map(|p| match p {
            Paragraph::Header { level: 1, .. } => Some(p.plain_text()).filter(|t| !t.is_empty()),
            _ => None,
        });
        Self { title, markdown }
    }
}

/// Host capability: look up a page by path.
pub trait PageSource {
    fn load(&self, path: &str) -> Option<PageDocument>;
}

/// Pages held in memory, keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemoryPages {
    pages: FxHashMap<String, PageDocument>,
}

impl MemoryPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, document: PageDocument) {
        self.pages.insert(path.into(), document);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Load every `.md` file directly inside `dir`.  A file `foo.md` is
    /// stored under the path `/foo.md`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, BookError> {
        let dir = dir.as_ref();
        let io_error = |source: std::io::Error| BookError::PageSource {
            path: dir.display().to_string(),
            source,
        };
        let mut pages = Self::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                log::warn!("Skipping page with non UTF-8 name: {}", path.display());
                continue;
            };
            let markdown = std::fs::read_to_string(&path).map_err(|source| BookError::PageSource {
                path: path.display().to_string(),
                source,
            })?;
            pages.insert(format!("/{name}"), PageDocument::from_markdown(markdown));
        }
        log::debug!("Loaded {} pages from {}", pages.len(), dir.display());
        Ok(pages)
    }
}

impl PageSource for MemoryPages {
    fn load(&self, path: &str) -> Option<PageDocument> {
        self.pages.get(path).cloned()
    }
}

// ===================================================================
// Tests
// ===================================================================
