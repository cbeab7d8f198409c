// Host-side tests for the grain generator.

use crt_core::{NoiseGenerator, PixelBuffer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generator(seed: u64) -> NoiseGenerator {
    NoiseGenerator::new(StdRng::seed_from_u64(seed))
}

#[test]
fn every_pixel_is_opaque_after_a_tick() {
    let mut buf = PixelBuffer::new(320, 180);
    let mut gen = generator(1);
    gen.tick(&mut buf);
    assert!(buf.pixels().iter().all(|p| p.a == 0xff));
    assert_eq!(gen.frames(), 1);
}

#[test]
fn consecutive_frames_are_independent_samples() {
    let mut buf = PixelBuffer::new(320, 180);
    let mut gen = generator(2);
    gen.tick(&mut buf);
    let first = buf.clone();
    gen.tick(&mut buf);
    let same = first
        .pixels()
        .iter()
        .zip(buf.pixels())
        .filter(|(a, b)| a == b)
        .count();
    // Chance of an identical RGB triple is 2^-24 per pixel
    assert!(same < 10, "{same} pixels repeated between frames");
    assert_eq!(gen.frames(), 2);
}

#[test]
fn channels_are_roughly_uniform() {
    let mut buf = PixelBuffer::new(1280, 720);
    generator(3).tick(&mut buf);
    let n = buf.pixels().len() as f64;
    let mean = |f: fn(&crt_core::Rgba) -> u8| {
        buf.pixels().iter().map(|p| f(p) as f64).sum::<f64>() / n
    };
    for (name, m) in [
        ("r", mean(|p| p.r)),
        ("g", mean(|p| p.g)),
        ("b", mean(|p| p.b)),
    ] {
        assert!((m - 127.5).abs() < 1.0, "channel {name} mean {m}");
    }
}

#[test]
fn channels_vary_independently() {
    let mut buf = PixelBuffer::new(256, 256);
    generator(4).tick(&mut buf);
    let grey = buf
        .pixels()
        .iter()
        .filter(|p| p.r == p.g && p.g == p.b)
        .count();
    assert!(grey < 10, "{grey} grey pixels; channels look correlated");
}

#[test]
fn buffer_is_reused_in_place() {
    let mut buf = PixelBuffer::new(64, 64);
    let ptr = buf.pixels().as_ptr();
    let mut gen = generator(5);
    for _ in 0..10 {
        gen.tick(&mut buf);
    }
    assert_eq!(buf.pixels().as_ptr(), ptr);
    assert_eq!(buf.pixels().len(), 64 * 64);
}

#[test]
fn empty_buffer_is_a_no_op() {
    let mut buf = PixelBuffer::new(0, 0);
    let mut gen = generator(6);
    gen.tick(&mut buf);
    assert_eq!(gen.frames(), 0);
}
