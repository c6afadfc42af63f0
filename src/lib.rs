// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. route::Route)
    clippy::module_name_repetitions
)]

//! # Previewlink
//!
//! Synchronizes a text editor's cursor and selection with a live-rendered
//! preview of the document it edits, inside a sandboxed rendering frame.
//!
//! On every reparse the full source is forwarded to the frame; a
//! bidirectional mapping between editor text offsets and rendered nodes
//! means clicking a rendered element highlights its source, and moving the
//! cursor highlights the matching rendered element.
//!
//! ## Architecture
//!
//! The crate is event-wiring glue between collaborators it does not own:
//! - An editor, behind [`editor::EditorHandle`]
//! - A parser that annotates nodes with source offsets, delivered as a
//!   [`document::Snapshot`] on each reparse
//! - A sandboxed render frame, behind [`frame::FrameHost`] and
//!   [`frame::FrameChannel`]
//! - A highlight tracker, behind [`marks::MarkTracker`]
//!
//! ## Modules
//!
//! - [`preview`]: The live preview controller
//! - [`route`]: Child-index paths into the rendered tree
//! - [`document`]: Parsed document snapshots with source-offset metadata
//! - [`protocol`]: JSON messages crossing the frame boundary
//! - [`editor`]: Editor contract and rope-backed text buffer
//! - [`marks`]: Highlight tracking
//! - [`frame`]: Frame channel and host contracts
//! - [`config`]: Construction options

pub mod config;
pub mod document;
pub mod editor;
pub mod frame;
pub mod marks;
pub mod preview;
pub mod protocol;
pub mod route;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::PreviewOptions;
    pub use crate::document::{Node, ParseInfo, Snapshot, TagSpan};
    pub use crate::preview::LivePreview;
    pub use crate::route::Route;
}
