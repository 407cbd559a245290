//! Test fixtures: PNG frames written into temporary directories.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Solid colors used for generated frames
pub mod colors {
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GREEN: [u8; 4] = [0, 255, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];
    pub const CLEAR: [u8; 4] = [0, 0, 0, 0];
}

/// A temporary directory holding generated frames and outputs.
pub struct FrameDir {
    dir: TempDir,
}

impl FrameDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path for an output file inside the directory
    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a single-color RGBA frame
    pub fn solid(&self, name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
        let pixels = rgba.repeat((width * height) as usize);
        self.rgba(name, width, height, &pixels)
    }

    /// Write a horizontal gradient so frames have many colors
    pub fn gradient(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[
                    (x * 255 / width.max(1)) as u8,
                    (y * 255 / height.max(1)) as u8,
                    128,
                    255,
                ]);
            }
        }
        self.rgba(name, width, height, &pixels)
    }

    /// Write raw RGBA pixels as a PNG
    pub fn rgba(&self, name: &str, width: u32, height: u32, pixels: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create frame subdir");
        }
        std::fs::write(&path, encode_png(width, height, pixels)).expect("Failed to write frame");
        path
    }

    /// Write a text file (configs, non-PNG clutter)
    pub fn text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for FrameDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode RGBA pixels as an 8-bit RGBA PNG
pub fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(pixels).expect("PNG data");
    }
    out
}
