// Mock implementations of adapter traits for testing

pub mod mock_frame_capture;
pub mod mock_game_state;
pub mod mock_transport;

pub use mock_frame_capture::MockFrameCapture;
pub use mock_game_state::MockGameState;
pub use mock_transport::{MockTransport, SentRequest};
