pub mod config;

pub use config::{
    ConfigOverrides, Disposal, EncodeConfig, FrameSource, FrameSpec, ResolvedFrame, CONFIG_ENV,
};
