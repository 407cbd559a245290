use neuquant::Quantized;
use std::io::Cursor;

/// Encode a quantized image as an 8-bit indexed PNG with a 256-entry PLTE.
pub fn encode_indexed_png(
    width: u32,
    height: u32,
    quantized: &Quantized,
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(quantized.palette_bytes().to_vec());
        let mut writer = encoder.write_header()?;
        writer.write_image_data(quantized.indices())?;
    }
    Ok(buf.into_inner())
}
