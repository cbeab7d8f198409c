// Host-side tests for the parameter curves and the tear gate.

use crt_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_times() -> impl Iterator<Item = f64> {
    (-100_000..100_000).map(|i| i as f64 * 0.0137)
}

#[test]
fn blur_stays_within_bounds() {
    for t in sample_times() {
        let b = blur_at(t);
        assert!((5.0..=17.0).contains(&b), "blur({t}) = {b}");
    }
}

#[test]
fn noise_opacity_stays_within_bounds() {
    for t in sample_times() {
        let n = noise_opacity_at(t);
        assert!(n >= 0.3 && n <= 0.53 + 1e-12, "noise_opacity({t}) = {n}");
    }
}

#[test]
fn chromatic_offset_stays_within_bounds() {
    for t in sample_times() {
        let c = chromatic_offset_at(t);
        assert!((0.0..=6.0).contains(&c), "chromatic_offset({t}) = {c}");
    }
}

#[test]
fn curves_reach_their_extremes() {
    let peak_blur = std::f64::consts::FRAC_PI_2 / 0.3;
    assert!((blur_at(peak_blur) - 17.0).abs() < 1e-9);
    let peak_noise = std::f64::consts::FRAC_PI_2 / 0.5;
    assert!((noise_opacity_at(peak_noise) - 0.53).abs() < 1e-9);
    let peak_chroma = std::f64::consts::FRAC_PI_2 / 0.4;
    assert!((chromatic_offset_at(peak_chroma) - 6.0).abs() < 1e-9);
}

#[test]
fn values_at_time_zero() {
    assert_eq!(blur_at(0.0), 5.0);
    assert_eq!(noise_opacity_at(0.0), 0.3);
    assert_eq!(chromatic_offset_at(0.0), 0.0);
    assert!(tear_gate_open(0.0), "sin(0) = 0 lies inside the gate");
}

#[test]
fn tear_is_zero_outside_gate_and_bounded_inside() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut open = 0;
    let mut closed = 0;
    for t in sample_times() {
        let s = (0.8 * t).sin();
        let tear = tear_intensity_at(t, &mut rng);
        if s <= -0.8 || s >= 0.6 {
            assert_eq!(tear, 0.0, "tear must be 0 at t={t} (s={s})");
            closed += 1;
        } else {
            assert!((0.0..=100.0).contains(&tear), "tear({t}) = {tear}");
            open += 1;
        }
    }
    // asin(0.6) + asin(0.8) == pi / 2, so the gate is open half the time
    let share = open as f64 / (open + closed) as f64;
    assert!(share > 0.45 && share < 0.55, "open share {share}");
}

#[test]
fn tear_gate_flips_at_upper_threshold() {
    // sin(0.8 t) rises through 0.6 here
    let t = 0.6f64.asin() / 0.8;
    assert!(tear_gate_open(t - 1e-6));
    assert!(!tear_gate_open(t + 1e-6));
}

#[test]
fn tear_gate_flips_at_lower_threshold() {
    // sin(0.8 t) rises through -0.8 here
    let t = (-0.8f64).asin() / 0.8;
    assert!(!tear_gate_open(t - 1e-6));
    assert!(tear_gate_open(t + 1e-6));
}

#[test]
fn tear_gate_closed_at_crest_and_trough() {
    let crest = std::f64::consts::FRAC_PI_2 / 0.8;
    let trough = 3.0 * std::f64::consts::FRAC_PI_2 / 0.8;
    assert!(!tear_gate_open(crest));
    assert!(!tear_gate_open(trough));
}

#[test]
fn tear_intensity_is_randomized_while_open() {
    let mut rng = StdRng::seed_from_u64(8);
    let draws: Vec<f64> = (0..50).map(|_| tear_intensity_at(0.0, &mut rng)).collect();
    let first = draws[0];
    assert!(draws.iter().any(|d| *d != first), "tear never changed");
}

#[test]
fn modulator_holds_layer_offset() {
    let mut m = Modulator::new(StdRng::seed_from_u64(9));
    for i in 0..500 {
        let p = m.tick(i as f64 * 0.1);
        assert_eq!(p.layer_offset, LAYER_OFFSET_HELD);
    }
    // The curve itself exists and is bounded
    for t in sample_times().take(1000) {
        let v = layer_offset_at(t);
        assert!((0.0..=5.0).contains(&v));
    }
}

#[test]
fn modulator_tick_matches_curves() {
    let mut m = Modulator::new(StdRng::seed_from_u64(10));
    let t = 12.345;
    let p = m.tick(t);
    assert_eq!(p.blur, blur_at(t));
    assert_eq!(p.noise_opacity, noise_opacity_at(t));
    assert_eq!(p.chromatic_offset, chromatic_offset_at(t));
    assert_eq!(m.ticks(), 1);

    m.sample(t);
    assert_eq!(m.ticks(), 1, "sample must not count as a tick");
}

#[test]
fn negative_time_degrades_without_panicking() {
    let mut m = Modulator::new(StdRng::seed_from_u64(11));
    let p = m.tick(-42.0);
    assert!(p.blur >= 5.0);
    let p = m.tick(f64::NAN);
    assert!(p.blur.is_nan());
    assert_eq!(p.tear_intensity, 0.0, "NaN phase keeps the gate shut");
}

#[test]
fn manual_clock_advances() {
    let clock = ManualClock::new(1.5);
    assert_eq!(clock.now_secs(), 1.5);
    clock.advance(0.25);
    assert_eq!(clock.now_secs(), 1.75);
    clock.set(0.0);
    assert_eq!(clock.now_secs(), 0.0);
}

#[test]
fn monotonic_clock_starts_near_zero() {
    let clock = MonotonicClock::start();
    let a = clock.now_secs();
    let b = clock.now_secs();
    assert!(a >= 0.0 && a < 1.0);
    assert!(b >= a);
}
