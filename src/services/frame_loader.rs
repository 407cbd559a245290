use crate::error::FrameError;
use std::io::Cursor;
use std::path::Path;

/// A decoded frame as straight-alpha RGBA, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<LoadedFrame, FrameError> {
    let bytes = std::fs::read(path).map_err(|source| FrameError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let frame = decode_png(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = frame.width,
        height = frame.height,
        "Loaded frame"
    );
    Ok(frame)
}

/// Decode PNG bytes to 8-bit RGBA.
///
/// Palette, low-bit-depth and 16-bit images are expanded first. Grayscale
/// is widened to RGB, and images without alpha become fully opaque.
pub fn decode_png(bytes: &[u8]) -> Result<LoadedFrame, FrameError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&l| [l, l, l, 255]).collect(),
        other => return Err(FrameError::UnsupportedColor(other)),
    };

    Ok(LoadedFrame {
        width: info.width,
        height: info.height,
        rgba,
    })
}
