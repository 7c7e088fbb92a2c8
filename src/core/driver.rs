use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Keys the widget layer presses besides plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Ctrl+A chord.
    SelectAll,
    Delete,
    Return,
}

/// A live page that can be queried for candidate nodes.
///
/// Implementations return nodes in document order. An empty result is not an
/// error; callers decide what an empty candidate list means.
pub trait Session {
    type Node<'a>: DomNode
    where
        Self: 'a;

    fn find_by_class(&self, class_name: &str) -> Result<Vec<Self::Node<'_>>>;

    fn find_by_css(&self, selector: &str) -> Result<Vec<Self::Node<'_>>>;
}

/// One node handle handed out by a [`Session`].
pub trait DomNode: Sized {
    /// First descendant with the given tag. Missing descendants are driver errors.
    fn find_by_tag(&self, tag: &str) -> Result<Self>;

    /// All descendants with the given tag, in document order.
    fn find_all_by_tag(&self, tag: &str) -> Result<Vec<Self>>;

    /// Rendered text with surrounding whitespace trimmed.
    fn text(&self) -> Result<String>;

    fn send_text(&self, text: &str) -> Result<()>;

    fn press(&self, key: Key) -> Result<()>;

    fn click(&self) -> Result<()>;

    /// Hands a local file to a file input.
    fn attach_file(&self, path: &Path) -> Result<()>;
}

/// Page-level operations used by scenario scripts.
pub trait Navigator {
    /// Opens `path` relative to the application base URL.
    fn open(&self, path: &str) -> Result<()>;

    /// Whole visible text of the current page.
    fn page_text(&self) -> Result<String>;
}
