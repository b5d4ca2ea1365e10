//! Integration tests for elevation rendering through the public paint API

use lustre_paint::shadow::{ambient_layers, key_layers, ShadowKind};
use lustre_paint::{
    draw_key_shadow, draw_material_shadow, rounded_rect_path, Color, ElevationSpec, FillStyle,
    PaintCommand, PaintContext, PathCommand, Rect, ShadowCompositor, ShadowStyle, StrokeStyle,
};

const CARD: Rect = Rect::new(0.0, 0.0, 200.0, 120.0);

fn solid_fills(ctx: &PaintContext) -> Vec<Color> {
    ctx.commands()
        .iter()
        .filter_map(|c| match c {
            PaintCommand::FillPath {
                style: FillStyle::Color(color),
                ..
            } => Some(*color),
            _ => None,
        })
        .collect()
}

#[test]
fn test_material_shadow_layer_counts() {
    // level 4: one ambient halo, key blur 12 stepped by 2
    let mut ctx = PaintContext::new();
    draw_material_shadow(&mut ctx, CARD, 4, 8);
    assert_eq!(ctx.draw_call_count(), 7);

    // level 1: key blur 3 rounds up to two layers
    let mut ctx = PaintContext::new();
    draw_key_shadow(&mut ctx, CARD, 1, 0);
    assert_eq!(ctx.draw_call_count(), 2);
}

#[test]
fn test_ambient_halo_is_a_radial_fade() {
    let mut ctx = PaintContext::new();
    draw_material_shadow(&mut ctx, CARD, 2, 4);

    match &ctx.commands()[0] {
        PaintCommand::FillPath {
            style: FillStyle::Gradient(gradient),
            ..
        } => {
            let stops = gradient.stops();
            assert_eq!(stops.len(), 2);
            assert!(stops[0].color.a > 0.0);
            assert_eq!(stops[1].color.a, 0.0);
        }
        other => panic!("expected gradient halo first, got {other:?}"),
    }
}

#[test]
fn test_key_layers_darken_toward_the_surface() {
    let spec = ElevationSpec::new(CARD, 6, 4);
    let layers = key_layers(&spec);

    assert!(layers.iter().all(|l| l.kind == ShadowKind::Key));
    assert!(layers.windows(2).all(|w| w[0].alpha <= w[1].alpha));
    assert!(layers.windows(2).all(|w| w[0].rect.width > w[1].rect.width));
    // every key layer shares the same downward offset
    let offset = 12.0;
    for layer in &layers {
        assert_eq!(layer.rect.center().y, CARD.center().y + offset);
    }
    assert_eq!(layers.last().map(|l| l.alpha), Some(60));
}

#[test]
fn test_higher_surfaces_cast_larger_softer_halos() {
    let low = ambient_layers(&ElevationSpec::new(CARD, 1, 0));
    let high = ambient_layers(&ElevationSpec::new(CARD, 8, 0));

    assert!(high[0].blur_radius > low[0].blur_radius);
    assert!(high[0].rect.width > low[0].rect.width);
    assert!(high[0].alpha >= low[0].alpha);
}

#[test]
fn test_themed_surface_paint() {
    let compositor = ShadowCompositor::new(ShadowStyle {
        color: Color::from_hex(0x1A237E),
    });
    let spec = ElevationSpec::new(CARD, 3, 12);
    let border = StrokeStyle {
        color: Color::BLACK,
        width: 1.0,
    };

    let mut ctx = PaintContext::new();
    compositor.paint_elevated_surface(&mut ctx, &spec, Color::WHITE, Some(&border), |ctx| {
        ctx.fill_rect(Rect::new(8.0, 8.0, 40.0, 40.0), Color::BLACK);
    });

    let commands = ctx.commands();
    let stroke = commands
        .iter()
        .position(|c| matches!(c, PaintCommand::StrokePath { .. }))
        .unwrap();
    let content = commands
        .iter()
        .position(|c| matches!(c, PaintCommand::FillRect { .. }))
        .unwrap();
    assert!(stroke < content);
    assert!(matches!(commands[content - 1], PaintCommand::PushClip { .. }));

    // key layers carry the theme tint, the background is the last solid fill
    let theme = Color::from_hex(0x1A237E);
    let fills = solid_fills(&ctx);
    let (background, shadows) = fills.split_last().unwrap();
    assert_eq!(*background, Color::WHITE);
    assert!(!shadows.is_empty());
    assert!(shadows
        .iter()
        .all(|c| (c.r, c.g, c.b) == (theme.r, theme.g, theme.b) && c.a < 1.0));
}

#[test]
fn test_shared_outline_for_every_rounded_shape() {
    let path = rounded_rect_path(CARD, 12.0);
    let arcs: Vec<_> = path.arcs().collect();
    assert_eq!(arcs.len(), 4);
    assert!(path.is_closed());

    if let PathCommand::ArcTo { radius, .. } = arcs[0] {
        assert_eq!(*radius, 12.0);
    }
}
