//! Loading effects configuration from disk and applying it to surfaces

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use lustre_animation::Easing;
use lustre_effects::{ConfigError, EffectsConfig, MaterialSurface, Ripple, SolidFill};
use lustre_paint::{Color, Point, Rect, Size};

fn write_config(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lustre-effects-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_applies_every_section() {
    let path = write_config(
        "full.toml",
        r##"
        [ripple]
        expand_speed = 10.0
        fade_speed = 0.1
        initial_alpha = 0.5
        color = "#FF000080"
        tick_interval_ms = 20
        auto_fade_delay_ms = 40

        [shadow]
        color = "#1A237E"

        [animation]
        hover_duration_ms = 200
        easing = "Decelerate"
        "##,
    );

    let config = EffectsConfig::load(&path).unwrap();
    let ripple = config.ripple_config();
    assert_eq!(ripple.expand_speed, 10.0);
    assert_eq!(ripple.tick_interval, Duration::from_millis(20));
    assert_eq!(ripple.color, Color::from_rgba8(255, 0, 0, 128));
    assert_eq!(config.shadow_style().color, Color::from_hex(0x1A237E));
    assert_eq!(config.hover_easing(), Easing::EaseOutCubic);

    // 40ms at 20ms per tick: fading after two ticks
    let mut ripple = Ripple::new(Size::new(50.0, 50.0), ripple);
    ripple.trigger_ripple();
    ripple.tick();
    ripple.tick();
    assert_eq!(ripple.phase(), lustre_effects::RipplePhase::Fading);
    assert_eq!(ripple.center(), Point::new(25.0, 25.0));

    let _ = fs::remove_file(path);
}

#[test]
fn test_surface_uses_configured_timing() {
    let config = EffectsConfig::from_toml_str("[ripple]\ntick_interval_ms = 32").unwrap();
    let mut surface = MaterialSurface::with_config(
        1,
        Rect::new(0.0, 0.0, 100.0, 100.0),
        SolidFill::new(Color::WHITE),
        &config,
    );
    assert_eq!(surface.layer().ripple_config().tick_interval, Duration::from_millis(32));

    surface.handle_event(&lustre_core::events::Event::pointer_down(1, 50.0, 50.0));
    // 16ms is half a tick at this interval
    assert_eq!(surface.layer_mut().advance(Duration::from_millis(16)), 0);
    assert_eq!(surface.layer_mut().advance(Duration::from_millis(16)), 1);
}

#[test]
fn test_invalid_file_reports_field() {
    let path = write_config("bad.toml", "[ripple]\ninitial_alpha = 2.0\n");
    match EffectsConfig::load(&path) {
        Err(ConfigError::Invalid { field, reason }) => {
            assert_eq!(field, "ripple.initial_alpha");
            assert!(!reason.is_empty());
        }
        other => panic!("expected invalid config, got {other:?}"),
    }
    let _ = fs::remove_file(path);
}
