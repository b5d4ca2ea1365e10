//! Integration tests for ripples driven through an effect layer
//!
//! These tests verify that:
//! - Host pointer events start and release ripples
//! - Frame time is converted into ticks and repaint requests
//! - One-shot ripples clean up after themselves
//! - Surfaces fan out from a shared event dispatcher

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lustre_core::events::{event_types, Event, EventData, EventDispatcher};
use lustre_effects::{EffectLayer, MaterialSurface, Ripple, RippleConfig, SolidFill};
use lustre_paint::{Color, PaintCommand, PaintContext, Point, Rect, Size};

const FRAME: Duration = Duration::from_millis(16);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn circle_of(ctx: &PaintContext) -> Option<(Point, f32, f32)> {
    ctx.commands().iter().find_map(|c| match c {
        PaintCommand::FillCircle { circle, style } => {
            Some((circle.center, circle.radius, style.alpha()))
        }
        _ => None,
    })
}

/// Press, hold until saturated, release, fade to nothing
#[test]
fn test_press_hold_release_cycle() {
    init_tracing();
    let mut layer = EffectLayer::new(1, Size::new(100.0, 50.0));
    layer.attach(Ripple::new(Size::ZERO, RippleConfig::default()));

    layer.dispatch(&Event::pointer_down(1, 10.0, 10.0));

    let mut radii = Vec::new();
    for _ in 0..8 {
        layer.advance(FRAME);
        let mut ctx = PaintContext::new();
        layer.paint(&mut ctx);
        let (center, radius, _) = circle_of(&ctx).expect("ripple visible while expanding");
        assert_eq!(center, Point::new(10.0, 10.0));
        radii.push(radius);
    }

    let max_radius = (90.0f32 * 90.0 + 40.0 * 40.0).sqrt();
    assert!(radii.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(radii[5], 90.0);
    assert!((radii[6] - max_radius).abs() < 1e-4);
    assert_eq!(radii[6], radii[7]);

    layer.dispatch(&Event::pointer_up(1, 10.0, 10.0));

    let mut last_alpha = f32::MAX;
    loop {
        layer.advance(FRAME);
        let mut ctx = PaintContext::new();
        layer.paint(&mut ctx);
        match circle_of(&ctx) {
            Some((_, _, alpha)) => {
                assert!(alpha <= last_alpha);
                last_alpha = alpha;
            }
            None => break,
        }
    }

    assert!(!layer.is_animating());
    assert_eq!(layer.len(), 1);
}

/// A saturated ripple stops asking for repaints until it fades
#[test]
fn test_saturated_ripple_stops_requesting_repaints() {
    let mut layer = EffectLayer::new(1, Size::new(30.0, 30.0));
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = requests.clone();
    layer.on_repaint(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    layer.attach(Ripple::new(Size::ZERO, RippleConfig::default()));

    layer.dispatch(&Event::pointer_down(1, 0.0, 0.0));
    // max radius = sqrt(30^2 + 30^2) ~ 42.4, reached on the third tick
    layer.advance(FRAME * 10);
    assert_eq!(requests.load(Ordering::SeqCst), 3);

    layer.dispatch(&Event::pointer_up(1, 0.0, 0.0));
    layer.advance(FRAME);
    assert_eq!(requests.load(Ordering::SeqCst), 4);
}

/// Programmatic triggers and one-shots share the same machine
#[test]
fn test_one_shots_overlap_and_self_dispose() {
    let config = RippleConfig {
        color: Color::from_hex(0x2196F3),
        ..RippleConfig::default()
    };
    let mut layer = EffectLayer::new(9, Size::new(64.0, 64.0)).with_ripple_config(config);

    let first = layer.spawn_one_shot(Point::new(8.0, 8.0));
    layer.advance(FRAME * 3);
    let second = layer.spawn_one_shot(Point::new(56.0, 56.0));
    assert_eq!(layer.len(), 2);

    let mut ctx = PaintContext::new();
    layer.paint(&mut ctx);
    assert_eq!(ctx.draw_call_count(), 1, "second ripple has radius 0 until its first tick");

    layer.advance(FRAME);
    let mut ctx = PaintContext::new();
    layer.paint(&mut ctx);
    assert_eq!(ctx.draw_call_count(), 2);

    for _ in 0..60 {
        layer.advance(FRAME);
    }
    assert!(!layer.contains(first));
    assert!(!layer.contains(second));
    assert!(layer.is_empty());
}

/// Detaching mid-flight disposes the ripple and closes its handle
#[test]
fn test_detach_mid_flight_stops_painting() {
    let mut layer = EffectLayer::new(2, Size::new(40.0, 40.0));
    let id = layer.attach(Ripple::new(Size::ZERO, RippleConfig::default()));
    layer.dispatch(&Event::pointer_down(2, 20.0, 20.0));
    layer.advance(FRAME);

    layer.detach(id).unwrap();
    assert!(layer.detach(id).is_err());

    let mut ctx = PaintContext::new();
    layer.paint(&mut ctx);
    assert!(ctx.commands().is_empty());
    assert_eq!(layer.advance(FRAME * 4), 0);
}

/// Several surfaces behind one dispatcher only react to their own events
#[test]
fn test_dispatcher_fans_out_to_surfaces() {
    let left = Arc::new(Mutex::new(MaterialSurface::new(
        1,
        Rect::new(0.0, 0.0, 50.0, 50.0),
        SolidFill::new(Color::WHITE),
    )));
    let right = Arc::new(Mutex::new(MaterialSurface::new(
        2,
        Rect::new(60.0, 0.0, 50.0, 50.0),
        SolidFill::new(Color::WHITE),
    )));

    let mut dispatcher = EventDispatcher::new();
    for surface in [&left, &right] {
        let id = surface.lock().unwrap().id();
        for event_type in [event_types::POINTER_DOWN, event_types::POINTER_UP] {
            let surface = Arc::clone(surface);
            dispatcher.register(id, event_type, move |event| {
                surface.lock().unwrap().handle_event(event);
            });
        }
    }

    dispatcher.dispatch(&mut Event::pointer_down(2, 5.0, 5.0));
    assert!(!left.lock().unwrap().layer().is_animating());
    assert!(right.lock().unwrap().layer().is_animating());
    assert!(right.lock().unwrap().state().pressed);

    dispatcher.dispatch(&mut Event::new(
        event_types::POINTER_UP,
        2,
        EventData::Pointer { x: 5.0, y: 5.0 },
    ));
    assert!(!right.lock().unwrap().state().pressed);

    assert_eq!(dispatcher.unregister_surface(1), 2);
    assert_eq!(dispatcher.len(), 2);
}

/// Tearing a surface down through the dispatcher stops its ripple mid-flight
#[test]
fn test_unmount_through_dispatcher_stops_ripple() {
    init_tracing();
    let surface = Arc::new(Mutex::new(MaterialSurface::new(
        5,
        Rect::new(0.0, 0.0, 80.0, 40.0),
        SolidFill::new(Color::WHITE),
    )));
    let repaints = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&repaints);
    surface.lock().unwrap().layer_mut().on_repaint(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut dispatcher = EventDispatcher::new();
    for event_type in [event_types::POINTER_DOWN, event_types::UNMOUNT] {
        let surface = Arc::clone(&surface);
        dispatcher.register(5, event_type, move |event| {
            surface.lock().unwrap().handle_event(event);
        });
    }

    dispatcher.dispatch(&mut Event::pointer_down(5, 20.0, 20.0));
    assert_eq!(surface.lock().unwrap().layer_mut().advance(FRAME), 1);

    dispatcher.dispatch(&mut Event::unmount(5));
    assert_eq!(dispatcher.unregister_surface(5), 2);
    assert!(dispatcher.is_empty());

    let mut surface = surface.lock().unwrap();
    assert!(!surface.is_animating());
    assert!(!surface.advance(FRAME * 10));
    assert_eq!(repaints.load(Ordering::SeqCst), 1);

    let mut ctx = PaintContext::new();
    surface.layer().paint(&mut ctx);
    assert!(ctx.commands().is_empty());
}
