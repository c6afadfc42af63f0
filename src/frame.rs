//! Frame channel and host contracts.
//!
//! The render frame lives in a sandbox the controller cannot reach into;
//! all it holds is a post-only channel. The host owns the mount point:
//! attaching the frame to it is what yields the channel, which is why
//! the controller starts detached and attaches on the first successful
//! reparse.

use crate::protocol::Outbound;

/// Errors raised while sending to the preview frame.
///
/// Sends are fire-and-forget with no acknowledgment; every failure is
/// synchronous, logged at the send site, and propagated to the caller.
/// There are no retries.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// No channel yet: the frame has not been attached, or was detached.
    #[error("preview frame is not attached")]
    Detached,

    /// The outbound message could not be serialized.
    #[error("failed to encode frame message")]
    Encode(#[from] serde_json::Error),

    /// The frame rejected or never received the post.
    #[error("failed to deliver message to preview frame: {0}")]
    Delivery(String),
}

/// Post-only communication channel into the render frame.
///
/// The JSON payload is already encoded; the channel just carries text.
pub trait FrameChannel {
    /// Post a JSON-encoded message to the frame.
    ///
    /// # Errors
    /// Returns [`ChannelError::Delivery`] when the frame is unreachable
    /// or rejects the post.
    fn post(&mut self, json: &str) -> Result<(), ChannelError>;
}

/// Owns the mount container the frame is attached to.
///
/// The frame element exists from construction with its source set to the
/// loader URL, but stays detached until the first successful reparse.
pub trait FrameHost {
    /// Attach the frame to the mount container and hand back its
    /// communication channel.
    ///
    /// # Errors
    /// Returns an error when the frame cannot be mounted or its
    /// content window is unavailable.
    fn attach(&mut self, loader_url: &str) -> anyhow::Result<Box<dyn FrameChannel>>;
}

/// Encode and post an outbound message over a channel.
///
/// Failures are logged before being returned so a crash is still
/// observed even when the caller propagates it.
///
/// # Errors
/// Returns [`ChannelError`] on encoding or delivery failure.
pub(crate) fn send(
    channel: &mut dyn FrameChannel,
    message: &Outbound,
) -> Result<(), ChannelError> {
    let json = message.encode().inspect_err(|err| {
        tracing::error!("failed to encode message for the preview frame: {err}");
    })?;
    channel.post(&json).inspect_err(|err| {
        tracing::error!("failed to post message to the preview frame: {err}");
    })
}
