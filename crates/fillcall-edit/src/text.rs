use thiserror::Error;

/// A half-open text range `[start, end)` in UTF-8 byte offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid range: {start}..{end}");
        Self { start, end }
    }

    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Shift both endpoints by `offset`, rebasing a local range into an
    /// enclosing document.
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// A single edit against one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: TextRange::empty_at(offset),
            replacement: text.into(),
        }
    }

    pub fn replace(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            replacement: text.into(),
        }
    }

    pub fn delete(range: TextRange) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("overlapping edits: {first:?} overlaps {second:?}")]
    OverlappingEdits { first: TextRange, second: TextRange },
    #[error("text edit range {range:?} is outside the document bounds (len={len})")]
    OutOfBounds { range: TextRange, len: usize },
    #[error("offset {offset} is not a UTF-8 character boundary")]
    InvalidUtf8Boundary { offset: usize },
}

/// Apply a set of non-overlapping edits to `original`.
pub fn apply_text_edits(original: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(original.to_string());
    }

    let mut sorted = edits.to_vec();
    sorted.sort_by(|a, b| {
        a.range
            .start
            .cmp(&b.range.start)
            .then_with(|| a.range.end.cmp(&b.range.end))
    });

    let mut prev: Option<TextRange> = None;
    for edit in &sorted {
        if edit.range.end > original.len() {
            return Err(EditError::OutOfBounds {
                range: edit.range,
                len: original.len(),
            });
        }
        for offset in [edit.range.start, edit.range.end] {
            if !original.is_char_boundary(offset) {
                return Err(EditError::InvalidUtf8Boundary { offset });
            }
        }
        if let Some(prev_range) = prev {
            if edit.range.start < prev_range.end {
                return Err(EditError::OverlappingEdits {
                    first: prev_range,
                    second: edit.range,
                });
            }
        }
        prev = Some(edit.range);
    }

    // Apply back-to-front so earlier offsets stay valid.
    let mut out = original.to_string();
    for edit in sorted.iter().rev() {
        out.replace_range(edit.range.start..edit.range.end, &edit.replacement);
    }
    Ok(out)
}
