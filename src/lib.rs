//! Deliver templated game-event notifications to Discord-compatible webhooks.
//!
//! The crate is split into three layers:
//!
//! - [`message`] — the notification domain: placeholder templates that render
//!   rich (markdown-linked) or plain text, the `[label](data)` wiki-search
//!   micro-syntax, and the serde wire model for webhook payloads.
//! - [`adapters`] — trait seams toward the host application (game state,
//!   screen capture) and the network (webhook transport), plus the reqwest
//!   production transport.
//! - [`dispatch`] — the [`dispatch::MessageDispatcher`] that fans one
//!   notification out to every configured endpoint, optionally waiting for a
//!   screenshot first.

pub mod adapters;
pub mod dispatch;
pub mod message;
pub mod params;
