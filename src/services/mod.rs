pub mod frame_loader;
pub mod pipeline;

pub use frame_loader::{decode_png, load_png, LoadedFrame};
pub use pipeline::{quantize_frame, quantize_png, EncodeSummary, GifPipeline};
