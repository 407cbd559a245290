pub mod gif;
pub mod png;

pub use self::gif::{delay_centiseconds, write_gif, GifFrame};
pub use self::png::encode_indexed_png;
