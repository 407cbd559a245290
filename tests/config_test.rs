//! Tests for loading encode configs from YAML files.

mod common;

use common::fixtures::colors;
use common::{decode_gif, FrameDir};
use pretty_assertions::assert_eq;
use screencast_gif::models::{ConfigOverrides, Disposal, EncodeConfig};
use screencast_gif::{ConfigError, GifPipeline};

#[test]
fn test_config_file_drives_encoding() {
    let dir = FrameDir::new();
    let a = dir.solid("a.png", 4, 4, colors::RED);
    let b = dir.solid("b.png", 4, 4, colors::GREEN);
    let config_path = dir.text(
        "encode.yaml",
        &format!(
            r#"
quality: 1
delay_ms: 80
loop_count: 5
disposal: keep
transparent_index: 0
frames:
  - {}
  - path: {}
    delay_ms: 1000
    disposal: previous
"#,
            a.display(),
            b.display()
        ),
    );

    let config = EncodeConfig::load_from(Some(config_path.as_path()), None).unwrap();
    assert_eq!(config.quality, 1);

    let frames = config.resolve_frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].delay_ms, 80);
    assert_eq!(frames[0].disposal, Disposal::Keep);
    assert_eq!(frames[1].delay_ms, 1000);
    assert_eq!(frames[1].disposal, Disposal::Previous);
    assert_eq!(frames[1].transparent_index, Some(0));

    let output = dir.output("out.gif");
    GifPipeline::from_config(&config)
        .unwrap()
        .encode_to_file(&frames, &output)
        .unwrap();

    let gif = decode_gif(&output);
    assert_eq!(gif.repeat, gif::Repeat::Finite(5));
    assert_eq!(gif.frames[0].delay, 8);
    assert_eq!(gif.frames[0].dispose, gif::DisposalMethod::Keep);
    assert_eq!(gif.frames[0].transparent, Some(0));
    assert_eq!(gif.frames[1].delay, 100);
}

#[test]
fn test_cli_overrides_win_over_file() {
    let dir = FrameDir::new();
    let a = dir.solid("a.png", 4, 4, colors::RED);
    let config_path = dir.text("encode.yaml", "quality: 20\ndelay_ms: 500\n");

    let mut config = EncodeConfig::load_from(Some(config_path.as_path()), None).unwrap();
    config.apply(ConfigOverrides {
        delay_ms: Some(30),
        frames: vec![a],
        ..Default::default()
    });

    assert_eq!(config.quality, 20);
    let frames = config.resolve_frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].delay_ms, 30);
}

#[test]
fn test_invalid_yaml_is_error_when_explicit() {
    let dir = FrameDir::new();
    let config_path = dir.text("bad.yaml", "quality: [not, a, number]");

    let err = EncodeConfig::load_from(Some(config_path.as_path()), None).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_invalid_yaml_from_env_falls_back() {
    let dir = FrameDir::new();
    let config_path = dir.text("bad.yaml", "quality: [not, a, number]");

    let config = EncodeConfig::load_from(None, Some(config_path.as_path())).unwrap();
    assert_eq!(config, EncodeConfig::default());
}

#[test]
fn test_env_config_used_when_readable() {
    let dir = FrameDir::new();
    let config_path = dir.text("env.yaml", "background: \"#000000\"\n");

    let config = EncodeConfig::load_from(None, Some(config_path.as_path())).unwrap();
    assert_eq!(config.background, "#000000");
}
