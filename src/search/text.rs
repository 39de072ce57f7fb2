//! Character buffers prepared once per match.

/// The Unicode scalar values of a string alongside a case-folded copy.
///
/// Both vectors have the same length, so an index into one is an index into
/// the other. Folding keeps only the first scalar of a lowercase expansion
/// (`'İ'` folds to `'i'`) to preserve that alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chars {
    pub(crate) raw: Vec<char>,
    pub(crate) folded: Vec<char>,
}

impl Chars {
    pub(crate) fn new(text: &str) -> Self {
        let raw: Vec<char> = text.chars().collect();
        let folded = raw.iter().copied().map(fold).collect();
        Self { raw, folded }
    }

    pub(crate) fn len(&self) -> usize {
        self.raw.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Case-fold a single character without changing the character count.
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
