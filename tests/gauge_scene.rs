use std::f64::consts::PI;

use btc_gauge_wasm::domain::analysis::DisplayScore;
use btc_gauge_wasm::domain::gauge::{DrawCommand, GaugeScene};

fn sample_scene() -> GaugeScene {
    GaugeScene::build(300.0, 160.0, DisplayScore::new(50.0))
}

#[test]
fn scene_holds_five_bands_a_pointer_and_a_hub() {
    let scene = sample_scene();
    assert_eq!(scene.commands().len(), 7);

    let arcs = scene
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokeArc { .. }))
        .count();
    assert_eq!(arcs, 5);
    assert!(matches!(
        &scene.commands()[5],
        DrawCommand::FillTriangle { color: "#444", .. }
    ));
    assert!(matches!(
        &scene.commands()[6],
        DrawCommand::FillCircle {
            radius: 6.0,
            color: "#888",
            ..
        }
    ));
}

#[test]
fn band_arcs_carry_the_fixed_palette_in_order() {
    let scene = sample_scene();
    let colors: Vec<&str> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokeArc { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec!["#e53935", "#f57c00", "#fbc02d", "#9acb82", "#4caf50"]
    );
}

#[test]
fn band_arcs_share_center_radius_and_stroke() {
    let scene = sample_scene();
    for command in scene.commands() {
        if let DrawCommand::StrokeArc {
            cx,
            cy,
            radius,
            line_width,
            ..
        } = command
        {
            assert_eq!(*cx, 150.0);
            assert_eq!(*cy, 118.0);
            assert_eq!(*radius, 125.0);
            assert_eq!(*line_width, 16.0);
        }
    }
}

#[test]
fn first_band_opens_the_semicircle() {
    let scene = sample_scene();
    let DrawCommand::StrokeArc {
        start_angle,
        end_angle,
        ..
    } = &scene.commands()[0]
    else {
        panic!("first command must be a band arc");
    };
    assert!((start_angle - PI).abs() < 1e-9);
    assert!((end_angle - 1.2 * PI).abs() < 1e-9);
}

#[test]
fn hub_sits_on_the_dial_center() {
    let scene = sample_scene();
    let DrawCommand::FillCircle { cx, cy, .. } = &scene.commands()[6] else {
        panic!("last command must be the hub");
    };
    assert_eq!(*cx, 150.0);
    assert_eq!(*cy, 118.0);
}

#[test]
fn only_the_pointer_depends_on_the_score() {
    let low = GaugeScene::build(300.0, 160.0, DisplayScore::new(10.0));
    let high = GaugeScene::build(300.0, 160.0, DisplayScore::new(90.0));

    assert_eq!(low.commands()[..5], high.commands()[..5]);
    assert_eq!(low.commands()[6], high.commands()[6]);
    assert_ne!(low.commands()[5], high.commands()[5]);
}
