// Trait definitions
pub mod frame_capture;
pub mod game_state;
pub mod webhook_transport;

// Implementations
pub mod http_webhook_transport;

// Re-exports for convenience
pub use frame_capture::{Frame, FrameCapture, encode_png};
pub use game_state::GameState;
pub use http_webhook_transport::HttpWebhookTransport;
pub use webhook_transport::WebhookTransport;
