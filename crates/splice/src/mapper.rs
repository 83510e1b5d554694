use crate::{AnchorSpan, Splice};

/// The result of mapping an augmented-text offset back to the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginalPosition {
    /// Byte offset into the original text. When the augmented offset fell
    /// inside inserted content, this is the insertion point of that splice.
    pub index: usize,
    /// The owning splice's anchor, when the offset fell inside inserted
    /// content and that splice carries one.
    pub anchor: Option<AnchorSpan>,
    /// True when the augmented offset fell inside inserted content. Absent
    /// an anchor, callers should fall back to a length-1 span rather than
    /// report a span extending into synthetic text.
    pub inside_insertion: bool,
}

/// Map an original-text offset into the augmented text.
///
/// Accumulates the lengths of every splice whose `index <= original_offset`.
/// Monotonic non-decreasing over `original_offset`.
pub(crate) fn to_augmented(splices: &[Splice], original_offset: usize) -> usize {
    let mut inserted = 0usize;
    for splice in splices {
        if splice.index > original_offset {
            break;
        }
        inserted += splice.len();
    }
    original_offset + inserted
}

/// Map an augmented-text offset back into the original text.
///
/// Walks the splices in ascending order, tracking how much inserted text
/// has been passed. An offset landing inside a splice's content resolves to
/// that splice's insertion point plus its anchor, if any.
pub(crate) fn to_original(splices: &[Splice], augmented_offset: usize) -> OriginalPosition {
    let mut inserted = 0usize;
    for splice in splices {
        let augmented_index = splice.index + inserted;

        // before this splice: falls in unmodified original text
        if augmented_offset < augmented_index {
            break;
        }

        // within this splice's inserted content
        if augmented_offset < augmented_index + splice.len() {
            return OriginalPosition {
                index: splice.index,
                anchor: splice.anchor,
                inside_insertion: true,
            };
        }

        inserted += splice.len();
    }
    OriginalPosition {
        index: augmented_offset.saturating_sub(inserted),
        anchor: None,
        inside_insertion: false,
    }
}
