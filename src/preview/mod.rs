//! The live preview controller.
//!
//! Owns the render frame's lifecycle and wires four independent event
//! sources together: editor reparses, preference changes, frame-origin
//! messages, and cursor activity. There is no state machine beyond
//! these handlers; behavior is fully determined by the order they are
//! called in, gated by the show-mappings flag and the presence of a
//! current snapshot/resolver pair.

use std::sync::Arc;

use anyhow::Context;

use crate::config::PreviewOptions;
use crate::document::Snapshot;
use crate::editor::{EditorHandle, ReparseEvent, RouteResolver};
use crate::frame::{self, ChannelError, FrameChannel, FrameHost};
use crate::marks::{MarkTracker, PREVIEW_TO_EDITOR_CLASS};
use crate::protocol::{InboundKind, Outbound, decode_inbound};

/// Synchronizes an editor with a live-rendered preview frame.
///
/// Construction leaves the frame detached with its source set to the
/// loader URL; the first successful reparse attaches it and captures
/// the communication channel. See the module docs for the event flow.
pub struct LivePreview<E, M, H> {
    editor: E,
    marks: M,
    host: H,
    options: PreviewOptions,
    channel: Option<Box<dyn FrameChannel>>,
    /// Snapshot and resolver are one field so they can only ever be
    /// replaced together; handlers must never observe a stale pairing.
    current: Option<(Snapshot, Arc<dyn RouteResolver>)>,
    show_mappings: bool,
    run_scripts: bool,
    last_payload: Option<Outbound>,
    view_link_observers: Vec<Box<dyn FnMut(&str)>>,
}

impl<E, M, H> LivePreview<E, M, H>
where
    E: EditorHandle,
    M: MarkTracker,
    H: FrameHost,
{
    /// Create a controller for the given collaborators.
    pub fn new(editor: E, marks: M, host: H, options: PreviewOptions) -> Self {
        Self {
            editor,
            marks,
            host,
            options,
            channel: None,
            current: None,
            show_mappings: true,
            run_scripts: false,
            last_payload: None,
            view_link_observers: Vec::new(),
        }
    }

    /// Whether element-to-source mapping is currently active.
    pub const fn show_mappings(&self) -> bool {
        self.show_mappings
    }

    /// Whether the frame has been attached and a channel captured.
    pub const fn is_attached(&self) -> bool {
        self.channel.is_some()
    }

    /// The options the controller was constructed with.
    pub const fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// The frame finished loading its bootstrap document.
    ///
    /// Forces the editor to re-run its reparse pipeline so the frame
    /// receives an initial full snapshot once it is ready.
    pub fn frame_loaded(&mut self) {
        tracing::debug!("preview frame loaded, requesting reparse");
        self.editor.request_reparse();
    }

    /// The reload button was clicked; force another reparse.
    pub fn reload(&mut self) {
        self.editor.request_reparse();
    }

    /// Handle a reparse event from the editor.
    ///
    /// Error events are skipped entirely unless `ignore_errors` is set:
    /// no frame update, no snapshot replacement. The first successful
    /// event attaches the frame; every event after that reuses the
    /// captured channel.
    ///
    /// # Errors
    /// Returns an error when attaching the frame fails or the
    /// `overwrite` payload cannot be delivered. Failures are logged
    /// before they propagate; there are no retries.
    pub fn handle_reparse(&mut self, event: ReparseEvent) -> anyhow::Result<()> {
        if event.error && !self.options.ignore_errors {
            tracing::debug!("skipping reparse event with parse error");
            return Ok(());
        }

        if self.channel.is_none() {
            let channel = self
                .host
                .attach(&self.options.preview_loader)
                .context("failed to attach the preview frame")?;
            self.channel = Some(channel);
            tracing::debug!(
                loader = %self.options.preview_loader,
                "preview frame attached"
            );
        }

        let payload = Outbound::Overwrite {
            runjs: self.run_scripts,
            source_code: event.source_code,
            show_mappings: self.show_mappings,
        };

        // Replace snapshot and resolver in a single assignment.
        self.current = Some((event.document, event.resolver));
        self.last_payload = Some(payload.clone());

        self.send(&payload)?;
        Ok(())
    }

    /// React to a change of the `showMapping` preference.
    ///
    /// Re-sends the last `overwrite` payload with the updated flag so
    /// the frame stops (or resumes) reporting element interactions, and
    /// clears any active highlight when mappings are now disabled.
    ///
    /// # Errors
    /// Returns a [`ChannelError`] when the re-send fails.
    pub fn set_show_mappings(&mut self, enabled: bool) -> Result<(), ChannelError> {
        self.show_mappings = enabled;
        if let Some(Outbound::Overwrite { show_mappings, .. }) = self.last_payload.as_mut() {
            *show_mappings = enabled;
        }
        if !enabled {
            self.marks.clear();
        }
        // Nothing to re-send before the first reparse builds a payload.
        if self.channel.is_none() {
            return Ok(());
        }
        let Some(payload) = self.last_payload.clone() else {
            return Ok(());
        };
        self.send(&payload)
    }

    /// Update the flag controlling script execution in the preview.
    ///
    /// Picked up by the next `overwrite` payload; the frame is not
    /// re-rendered just for this.
    pub const fn set_run_scripts(&mut self, enabled: bool) {
        self.run_scripts = enabled;
    }

    /// Handle a raw message posted by the frame.
    ///
    /// Recognized `previewloader:*` messages clear the active highlight
    /// and, for a non-empty route, highlight the source range of the
    /// addressed node. Clicks additionally scroll the editor to the
    /// range start. Everything else is silently dropped.
    pub fn handle_frame_message(&mut self, raw: &str) {
        if !self.show_mappings {
            return;
        }
        let Some(message) = decode_inbound(raw) else {
            tracing::debug!("dropping unrecognized frame message");
            return;
        };
        let Some((snapshot, _)) = self.current.as_ref() else {
            tracing::debug!("frame message before first snapshot, ignoring");
            return;
        };

        self.marks.clear();
        if message.route.is_empty() {
            return;
        }
        let Some(node) = snapshot.resolve(&message.route) else {
            tracing::warn!(route = ?message.route, "frame route does not resolve");
            return;
        };
        let Some(info) = node.parse_info() else {
            tracing::debug!(route = ?message.route, "resolved node has no parse info");
            return;
        };

        let (start, end) = info.source_range();
        self.marks.mark(start, end, PREVIEW_TO_EDITOR_CLASS);
        if message.kind == InboundKind::Click {
            self.editor.scroll_to_offset(start);
        }
    }

    /// Handle cursor movement in the editor.
    ///
    /// Resolves the cursor offset to a route and posts a `setcursor`
    /// message so the frame can highlight the matching rendered
    /// element. Skipped while mappings are disabled or before the first
    /// reparse delivers a resolver.
    ///
    /// # Errors
    /// Returns a [`ChannelError`] when the post fails; logged, not
    /// retried.
    pub fn handle_cursor_activity(&mut self) -> Result<(), ChannelError> {
        if !self.show_mappings {
            return Ok(());
        }
        let Some(resolver) = self.current.as_ref().map(|(_, resolver)| Arc::clone(resolver))
        else {
            return Ok(());
        };
        let position = self.editor.cursor_offset();
        let route = resolver.route_at(position);
        self.send(&Outbound::SetCursor { position, route })
    }

    /// Emit a `change:viewlink` notification to registered observers.
    pub fn set_view_link(&mut self, link: &str) {
        for observer in &mut self.view_link_observers {
            observer(link);
        }
    }

    /// Register an observer for `change:viewlink` notifications.
    pub fn on_view_link_change(&mut self, observer: impl FnMut(&str) + 'static) {
        self.view_link_observers.push(Box::new(observer));
    }

    fn send(&mut self, message: &Outbound) -> Result<(), ChannelError> {
        let Some(channel) = self.channel.as_mut() else {
            tracing::error!("attempted to post to the preview frame before it was attached");
            return Err(ChannelError::Detached);
        };
        frame::send(channel.as_mut(), message)
    }
}

impl<E, M, H> std::fmt::Debug for LivePreview<E, M, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivePreview")
            .field("show_mappings", &self.show_mappings)
            .field("run_scripts", &self.run_scripts)
            .field("attached", &self.channel.is_some())
            .field("has_snapshot", &self.current.is_some())
            .finish_non_exhaustive()
    }
}
