use once_cell::sync::OnceCell;

use crate::mapper;
use crate::{OriginalPosition, Splice};

/// An immutable pairing of a module's original text with the splices that
/// produce its augmented view.
///
/// Construction sorts the splices ascending by `index` with a stable sort,
/// so splices sharing an index keep their caller-supplied order. The
/// augmented text is computed lazily and memoized; repeated queries against
/// the same module never re-run the edit.
///
/// A change to the underlying source must produce a brand-new
/// `AugmentedModule`; existing ones are never mutated.
#[derive(Debug)]
pub struct AugmentedModule {
    original: String,
    splices: Vec<Splice>,
    augmented: OnceCell<String>,
}

impl AugmentedModule {
    pub fn new(original: impl Into<String>, mut splices: Vec<Splice>) -> Self {
        splices.sort_by_key(|s| s.index);
        Self {
            original: original.into(),
            splices,
            augmented: OnceCell::new(),
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original
    }

    /// Splices in ascending `index` order.
    pub fn splices(&self) -> &[Splice] {
        &self.splices
    }

    /// The original text with all splices applied, memoized.
    pub fn augmented_text(&self) -> &str {
        self.augmented.get_or_init(|| apply(&self.original, &self.splices))
    }

    /// Map an original-text byte offset into the augmented text.
    pub fn to_augmented(&self, original_offset: usize) -> usize {
        mapper::to_augmented(&self.splices, original_offset)
    }

    /// Map an augmented-text byte offset back into the original text.
    pub fn to_original(&self, augmented_offset: usize) -> OriginalPosition {
        mapper::to_original(&self.splices, augmented_offset)
    }
}

/// Apply `splices` (sorted ascending by index) to `original`.
///
/// Insertions run in descending index order so that applying one never
/// shifts the target offset of an insertion still to be applied. For
/// splices sharing an index, descending application preserves their list
/// order in the output.
fn apply(original: &str, splices: &[Splice]) -> String {
    let extra: usize = splices.iter().map(Splice::len).sum();
    let mut out = String::with_capacity(original.len() + extra);
    out.push_str(original);
    for splice in splices.iter().rev() {
        out.insert_str(splice.index, &splice.content);
    }
    out
}
