//! Highlight tracking.
//!
//! The mark tracker is an external collaborator: given the editor, it
//! knows how to paint a highlight class over a text range and remove it
//! again. [`SpanMarks`] is a plain in-memory implementation for hosts
//! that track highlights themselves (and for tests).

/// Highlight class for ranges driven from the preview side.
pub const PREVIEW_TO_EDITOR_CLASS: &str = "preview-to-editor-highlight";

/// Paints and clears highlight ranges in the editor.
pub trait MarkTracker {
    /// Highlight the range `[start, end)` with the given class.
    fn mark(&mut self, start: usize, end: usize, class: &str);

    /// Remove all active highlights.
    fn clear(&mut self);
}

/// A single active highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    /// Start offset of the highlighted range.
    pub start: usize,
    /// End offset (exclusive) of the highlighted range.
    pub end: usize,
    /// Highlight class.
    pub class: String,
}

/// In-memory mark tracker.
#[derive(Debug, Clone, Default)]
pub struct SpanMarks {
    marks: Vec<Mark>,
}

impl SpanMarks {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active marks, in the order they were added.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }
}

impl MarkTracker for SpanMarks {
    fn mark(&mut self, start: usize, end: usize, class: &str) {
        self.marks.push(Mark {
            start,
            end,
            class: class.to_string(),
        });
    }

    fn clear(&mut self) {
        self.marks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Mark, MarkTracker, SpanMarks};

    #[test]
    fn test_mark_and_clear() {
        let mut marks = SpanMarks::new();
        marks.mark(0, 9, super::PREVIEW_TO_EDITOR_CLASS);
        assert_eq!(
            marks.marks(),
            &[Mark {
                start: 0,
                end: 9,
                class: "preview-to-editor-highlight".to_string(),
            }]
        );

        marks.clear();
        assert!(marks.marks().is_empty());
    }
}
