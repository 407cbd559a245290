//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// One decoded GIF frame, indices plus its local palette
#[derive(Debug)]
pub struct DecodedFrame {
    pub width: u16,
    pub height: u16,
    pub delay: u16,
    pub dispose: gif::DisposalMethod,
    pub transparent: Option<u8>,
    pub palette: Vec<u8>,
    pub indices: Vec<u8>,
}

impl DecodedFrame {
    /// RGB color of the pixel at `i`
    pub fn color_at(&self, i: usize) -> [u8; 3] {
        let idx = self.indices[i] as usize * 3;
        [self.palette[idx], self.palette[idx + 1], self.palette[idx + 2]]
    }
}

/// A decoded GIF
#[derive(Debug)]
pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub repeat: gif::Repeat,
    pub frames: Vec<DecodedFrame>,
}

/// Decode a GIF file without expanding palettes
pub fn decode_gif(path: &Path) -> DecodedGif {
    let bytes = std::fs::read(path).expect("Failed to read GIF");
    assert_gif(&bytes);

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes.as_slice()).expect("Invalid GIF");

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().expect("Invalid GIF frame") {
        frames.push(DecodedFrame {
            width: frame.width,
            height: frame.height,
            delay: frame.delay,
            dispose: frame.dispose,
            transparent: frame.transparent,
            palette: frame.palette.clone().expect("Frame should have a local palette"),
            indices: frame.buffer.to_vec(),
        });
    }

    DecodedGif {
        width: decoder.width(),
        height: decoder.height(),
        repeat: decoder.repeat(),
        frames,
    }
}

/// Assert bytes carry a GIF89a signature
pub fn assert_gif(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"GIF89a"),
        "Expected GIF89a, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..6.min(bytes.len())]
    );
}

/// Assert every pixel of a frame decodes to the expected color
pub fn assert_solid(frame: &DecodedFrame, expected: [u8; 3]) {
    for i in 0..frame.indices.len() {
        assert_eq!(frame.color_at(i), expected, "pixel {i}");
    }
}
