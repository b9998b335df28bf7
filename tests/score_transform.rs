use btc_gauge_wasm::domain::analysis::{DisplayScore, RawScore};
use quickcheck_macros::quickcheck;

#[test]
fn multiplies_and_rounds_raw_scores() {
    assert_eq!(RawScore::from(7.83).to_display().value(), 78);
    assert_eq!(RawScore::from(8.5).to_display().value(), 85);
    assert_eq!(RawScore::from(7.2).to_display().value(), 72);
    assert_eq!(RawScore::from(0.0).to_display().value(), 0);
    assert_eq!(RawScore::from(10.0).to_display().value(), 100);
}

#[test]
fn clamps_out_of_range_input() {
    assert_eq!(DisplayScore::new(150.0), DisplayScore::MAX);
    assert_eq!(DisplayScore::new(-3.0), DisplayScore::ZERO);
    assert_eq!(DisplayScore::new(100.4).value(), 100);
}

#[test]
fn nan_counts_as_zero() {
    assert_eq!(DisplayScore::new(f64::NAN), DisplayScore::ZERO);
}

#[test]
fn infinities_fall_to_the_nearest_bound() {
    assert_eq!(DisplayScore::new(f64::INFINITY), DisplayScore::MAX);
    assert_eq!(DisplayScore::new(f64::NEG_INFINITY), DisplayScore::ZERO);
}

#[test]
fn rounds_half_away_from_zero() {
    assert_eq!(DisplayScore::new(49.5).value(), 50);
    assert_eq!(DisplayScore::new(49.4).value(), 49);
}

#[test]
fn ratio_maps_onto_unit_interval() {
    assert_eq!(DisplayScore::ZERO.ratio(), 0.0);
    assert_eq!(DisplayScore::MAX.ratio(), 1.0);
    assert_eq!(DisplayScore::new(50.0).ratio(), 0.5);
}

#[quickcheck]
fn always_within_gauge_range(score: f64) -> bool {
    DisplayScore::new(score).value() <= 100
}

#[quickcheck]
fn equals_score_of_clamped_input(score: f64) -> bool {
    let clamped = if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    };
    DisplayScore::new(score) == DisplayScore::new(clamped)
}
