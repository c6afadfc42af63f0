//! The consumed editor contract.
//!
//! The controller never owns editor state; it talks to whatever editor
//! the host embeds through [`EditorHandle`], and receives parse results
//! through [`ReparseEvent`]. A rope-backed [`TextBuffer`] is provided so
//! hosts have a ready-made implementation of the offset-to-position
//! conversions the contract requires.

mod buffer;

pub use buffer::{Position, TextBuffer};

use std::sync::Arc;

use crate::document::Snapshot;
use crate::route::Route;

/// The slice of the editor surface the controller drives.
///
/// Mirrors the consumed contract: cursor as a text offset
/// (`getCursor` + `indexFromPos`), viewport scrolling to an offset
/// (`posFromIndex` + `scrollIntoView`), and forcing the reparse
/// pipeline to run.
pub trait EditorHandle {
    /// The current cursor position as an offset into the source text.
    fn cursor_offset(&self) -> usize;

    /// Scroll the editor viewport so the given offset is visible.
    fn scroll_to_offset(&mut self, offset: usize);

    /// Force the editor to re-run its reparse pipeline, which will emit
    /// a fresh [`ReparseEvent`].
    fn request_reparse(&mut self);
}

/// Maps a text offset to the route of the rendered element containing it.
///
/// Supplied by the parser alongside each snapshot; the pair is replaced
/// together so route lookups never mix generations.
pub trait RouteResolver {
    /// Route of the element containing `offset`, empty when none does.
    fn route_at(&self, offset: usize) -> Route;
}

impl<F> RouteResolver for F
where
    F: Fn(usize) -> Route,
{
    fn route_at(&self, offset: usize) -> Route {
        self(offset)
    }
}

/// Payload of the editor's reparse event.
///
/// Carried wholesale on every reparse: the full source, the annotated
/// document tree, and the offset-to-route resolver for that same tree.
#[derive(Clone)]
pub struct ReparseEvent {
    /// Whether the parse failed. Error events are suppressed unless the
    /// controller is configured to ignore errors.
    pub error: bool,
    /// The complete source text that was parsed.
    pub source_code: String,
    /// The parsed document tree with source-offset metadata.
    pub document: Snapshot,
    /// Offset-to-route resolver matching `document`.
    pub resolver: Arc<dyn RouteResolver>,
}

impl ReparseEvent {
    /// A successful reparse carrying a snapshot and its resolver.
    pub fn success(
        source_code: impl Into<String>,
        document: Snapshot,
        resolver: Arc<dyn RouteResolver>,
    ) -> Self {
        Self {
            error: false,
            source_code: source_code.into(),
            document,
            resolver,
        }
    }

    /// A failed reparse. The snapshot is empty and the resolver maps
    /// every offset to the empty route; neither is observable unless
    /// the controller ignores errors.
    pub fn parse_error(source_code: impl Into<String>) -> Self {
        Self {
            error: true,
            source_code: source_code.into(),
            document: Snapshot::empty(),
            resolver: Arc::new(|_offset: usize| Route::empty()),
        }
    }
}

impl std::fmt::Debug for ReparseEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReparseEvent")
            .field("error", &self.error)
            .field("source_len", &self.source_code.len())
            .finish_non_exhaustive()
    }
}
