use serde::{Deserialize, Serialize};

/// A stable span in the original text used to redirect results that would
/// otherwise point inside inserted content (e.g. a type error raised on a
/// synthetic `satisfies` clause is reported on the export's name instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorSpan {
    /// Byte offset into the original text.
    pub start: usize,
    /// Length in bytes.
    pub length: usize,
}

impl AnchorSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }
}

/// A single text insertion anchored at an original-text byte offset.
///
/// `index` always refers to the *original* text, never the augmented one.
/// Splices never delete or reorder existing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splice {
    /// Insertion point as a byte offset into the original text.
    pub index: usize,
    /// The text inserted at `index`.
    pub content: String,
    /// Redirection target for results landing inside `content`.
    pub anchor: Option<AnchorSpan>,
}

impl Splice {
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
            anchor: None,
        }
    }

    pub fn anchored(index: usize, content: impl Into<String>, anchor: AnchorSpan) -> Self {
        Self {
            index,
            content: content.into(),
            anchor: Some(anchor),
        }
    }

    /// Length of the inserted content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
