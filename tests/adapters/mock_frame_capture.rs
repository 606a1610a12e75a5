use std::sync::Mutex;

use async_trait::async_trait;
use runehook::adapters::{Frame, FrameCapture};

pub struct MockFrameCapture {
    frame: Option<Frame>,
    capture_count: Mutex<usize>,
}

impl MockFrameCapture {
    /// A capture source that yields a tiny valid frame.
    pub fn working() -> Self {
        Self {
            frame: Some(Frame {
                width: 1,
                height: 1,
                rgba: vec![0, 0, 0, 255],
            }),
            capture_count: Mutex::new(0),
        }
    }

    /// A capture source whose frame cannot be encoded (buffer/dimension
    /// mismatch).
    pub fn corrupt() -> Self {
        Self {
            frame: Some(Frame {
                width: 16,
                height: 16,
                rgba: vec![0; 4],
            }),
            capture_count: Mutex::new(0),
        }
    }

    /// A capture source that fails outright.
    pub fn failing() -> Self {
        Self {
            frame: None,
            capture_count: Mutex::new(0),
        }
    }

    pub fn captures(&self) -> usize {
        *self.capture_count.lock().unwrap()
    }
}

#[async_trait]
impl FrameCapture for MockFrameCapture {
    async fn next_frame(&self) -> anyhow::Result<Frame> {
        *self.capture_count.lock().unwrap() += 1;
        self.frame
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no frame available"))
    }
}
