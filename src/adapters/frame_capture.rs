use anyhow::Context as _;
use async_trait::async_trait;

/// A raw captured frame: tightly packed 8-bit RGBA rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Interface to the screen-capture subsystem.
///
/// Acquisition is single-shot and genuinely asynchronous: the capture
/// completes at most once, with no latency bound. The dispatcher awaits it
/// before contacting any endpoint so that every submission shares the same
/// image.
#[async_trait]
pub trait FrameCapture: Send + Sync {
    /// Wait for the next rendered frame.
    async fn next_frame(&self) -> anyhow::Result<Frame>;
}

/// Encode a frame as PNG, the lossless format attached to webhook posts.
pub fn encode_png(frame: &Frame) -> anyhow::Result<Vec<u8>> {
    let buffer = image::RgbaImage::from_raw(frame.width, frame.height, frame.rgba.clone())
        .context("Frame buffer does not match its dimensions")?;
    let mut bytes = Vec::new();
    buffer
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("Encoding frame as PNG")?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    #[test]
    fn encodes_a_frame_to_png() {
        let frame = Frame {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 255, 0, 255],
        };
        let bytes = encode_png(&frame).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn rejects_a_mismatched_buffer() {
        let frame = Frame {
            width: 4,
            height: 4,
            rgba: vec![0; 3],
        };
        assert!(encode_png(&frame).is_err());
    }
}
