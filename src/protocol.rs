//! JSON messages crossing the frame boundary.
//!
//! Everything that passes between the controller and the render frame is
//! a JSON-encoded envelope with a `type` field. Outbound envelopes are
//! strongly typed; inbound ones are decoded leniently because the frame
//! relays whatever its loader script posts, and anything unrecognized
//! must be dropped silently rather than treated as an error.

use serde::Serialize;

use crate::route::Route;

/// Substring every recognized inbound message type must contain.
const INBOUND_TYPE_MARKER: &str = "previewloader";

/// Exact type of an inbound message that should also scroll the editor.
const INBOUND_TYPE_CLICK: &str = "previewloader:click";

/// Controller-to-frame messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outbound {
    /// Full-source refresh of the preview. All edits are treated as a
    /// complete overwrite; the frame does its own diffing if it wants to.
    #[serde(rename_all = "camelCase")]
    Overwrite {
        /// Whether the frame should execute scripts embedded in the source.
        runjs: bool,
        /// The complete current source text.
        source_code: String,
        /// Whether element-to-source mapping is active.
        show_mappings: bool,
    },
    /// Tell the frame where the editor cursor is so it can highlight the
    /// matching rendered element.
    #[serde(rename = "setcursor")]
    SetCursor {
        /// Cursor position as a text offset.
        position: usize,
        /// Route of the element containing the cursor.
        route: Route,
    },
}

impl Outbound {
    /// Encode the message for the wire.
    ///
    /// # Errors
    /// Returns the underlying serializer error if encoding fails.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// How an inbound message was triggered in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundKind {
    /// A click on a rendered element; highlights and scrolls the editor.
    Click,
    /// Any other `previewloader:*` interaction (hover); highlights only.
    Hover,
}

/// A decoded frame-to-controller message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// What triggered the message.
    pub kind: InboundKind,
    /// Route of the element the interaction landed on.
    pub route: Route,
}

/// Decode a raw frame message, dropping anything unrecognized.
///
/// Returns `None` when the payload is not valid JSON, the `type` field
/// is missing or not a string, or the type does not contain the
/// `previewloader` marker. A missing or malformed `route` decodes as an
/// empty route (which addresses nothing).
pub fn decode_inbound(raw: &str) -> Option<Inbound> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let message_type = value.get("type")?.as_str()?;
    if !message_type.contains(INBOUND_TYPE_MARKER) {
        return None;
    }
    let route = value
        .get("route")
        .and_then(|route| serde_json::from_value(route.clone()).ok())
        .unwrap_or_default();
    let kind = if message_type == INBOUND_TYPE_CLICK {
        InboundKind::Click
    } else {
        InboundKind::Hover
    };
    Some(Inbound { kind, route })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Inbound, InboundKind, Outbound, decode_inbound};
    use crate::route::Route;

    #[test]
    fn test_overwrite_wire_shape() {
        let message = Outbound::Overwrite {
            runjs: true,
            source_code: "<p>Hi</p>".to_string(),
            show_mappings: false,
        };
        let encoded: serde_json::Value =
            serde_json::from_str(&message.encode().unwrap()).unwrap();
        assert_eq!(
            encoded,
            json!({
                "type": "overwrite",
                "runjs": true,
                "sourceCode": "<p>Hi</p>",
                "showMappings": false,
            })
        );
    }

    #[test]
    fn test_setcursor_wire_shape() {
        let message = Outbound::SetCursor {
            position: 5,
            route: Route::new(vec![2, 1]),
        };
        let encoded: serde_json::Value =
            serde_json::from_str(&message.encode().unwrap()).unwrap();
        assert_eq!(
            encoded,
            json!({
                "type": "setcursor",
                "position": 5,
                "route": [2, 1],
            })
        );
    }

    #[test]
    fn test_decode_click() {
        let decoded = decode_inbound(r#"{"type":"previewloader:click","route":[0]}"#);
        assert_eq!(
            decoded,
            Some(Inbound {
                kind: InboundKind::Click,
                route: Route::new(vec![0]),
            })
        );
    }

    #[test]
    fn test_decode_hover_variant() {
        let decoded =
            decode_inbound(r#"{"type":"previewloader:mouseover","route":[1,2]}"#).unwrap();
        assert_eq!(decoded.kind, InboundKind::Hover);
        assert_eq!(decoded.route, Route::new(vec![1, 2]));
    }

    #[test]
    fn test_decode_drops_unrecognized_type() {
        assert!(decode_inbound(r#"{"type":"telemetry","route":[0]}"#).is_none());
        assert!(decode_inbound(r#"{"route":[0]}"#).is_none());
        assert!(decode_inbound(r#"{"type":42,"route":[0]}"#).is_none());
        assert!(decode_inbound("not json").is_none());
    }

    #[test]
    fn test_decode_missing_route_is_empty() {
        let decoded = decode_inbound(r#"{"type":"previewloader:click"}"#).unwrap();
        assert!(decoded.route.is_empty());
    }

    #[test]
    fn test_decode_malformed_route_is_empty() {
        let decoded =
            decode_inbound(r#"{"type":"previewloader:click","route":"nope"}"#).unwrap();
        assert!(decoded.route.is_empty());
    }
}
