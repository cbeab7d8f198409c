// Host-side tests for the color bar test card.

use crt_core::pattern::*;
use crt_core::{PixelBuffer, Rgba, SURFACE_HEIGHT, SURFACE_WIDTH};

fn rendered(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    render(&mut buf);
    buf
}

fn row_run_lengths(buf: &PixelBuffer, y: u32) -> Vec<(Rgba, u32)> {
    let mut runs: Vec<(Rgba, u32)> = Vec::new();
    for x in 0..buf.width() {
        let px = buf.pixel(x, y).unwrap();
        match runs.last_mut() {
            Some((c, n)) if *c == px => *n += 1,
            _ => runs.push((px, 1)),
        }
    }
    runs
}

#[test]
fn render_is_idempotent() {
    let mut buf = rendered(SURFACE_WIDTH, SURFACE_HEIGHT);
    let first = buf.clone();
    render(&mut buf);
    assert_eq!(buf, first, "second render changed pixels");
}

#[test]
fn render_overwrites_previous_content() {
    let mut buf = PixelBuffer::new(640, 360);
    buf.fill_rect(0.0, 0.0, 640.0, 360.0, Rgba::opaque(0x123456));
    render(&mut buf);
    assert_eq!(buf, rendered(640, 360));
}

#[test]
fn every_pixel_is_painted_opaque() {
    let buf = rendered(SURFACE_WIDTH, SURFACE_HEIGHT);
    assert!(
        buf.pixels().iter().all(|p| p.a == 0xff),
        "test card left uncovered pixels"
    );
}

#[test]
fn top_bars_are_equal_width_when_width_divides_by_seven() {
    let buf = rendered(1260, 700);
    let runs = row_run_lengths(&buf, 0);
    assert_eq!(runs.len(), 7);
    for (i, (color, len)) in runs.iter().enumerate() {
        assert_eq!(*color, TOP_COLORS[i], "bar {i} color");
        assert_eq!(*len, 180, "bar {i} width");
    }
}

#[test]
fn band_heights_follow_fractions() {
    let (w, h) = (1260, 700);
    let buf = rendered(w, h);
    // Top band: 75 % of 700 = 525 rows
    assert_eq!(buf.pixel(0, 524), Some(TOP_COLORS[0]));
    assert_eq!(buf.pixel(0, 525), Some(MIDDLE_COLORS[0]));
    // Middle band: 7 % = 49 rows
    assert_eq!(buf.pixel(0, 573), Some(MIDDLE_COLORS[0]));
    // PLUGE: final 18 % = 126 rows
    assert_eq!(buf.pixel(0, 574), Some(PLUGE_MINUS_I));
    assert_eq!(buf.pixel(0, h - 1), Some(PLUGE_MINUS_I));

    let bottom_rows = (0..h)
        .filter(|&y| buf.pixel(0, y) == Some(PLUGE_MINUS_I))
        .count();
    assert_eq!(bottom_rows, 126);
}

#[test]
fn band_layout_fractions() {
    let layout = BandLayout::for_height(100);
    assert_eq!(layout.top_height, 75.0);
    assert!((layout.middle_height - 7.0).abs() < 1e-9);
    assert!((layout.bottom_height - 18.0).abs() < 1e-9);
    assert!((layout.bottom_y + layout.bottom_height - 100.0).abs() < 1e-9);
}

#[test]
fn middle_bars_share_top_columns() {
    let buf = rendered(1260, 700);
    let runs = row_run_lengths(&buf, 550);
    let expanded: Vec<Rgba> = runs
        .iter()
        .flat_map(|(c, n)| std::iter::repeat(*c).take(*n as usize))
        .collect();
    for (i, color) in MIDDLE_COLORS.iter().enumerate() {
        let x0 = i * 180;
        assert!(
            expanded[x0..x0 + 180].iter().all(|p| p == color),
            "middle bar {i} does not match its column"
        );
    }
}

#[test]
fn pluge_layout_left_to_right() {
    let buf = rendered(1260, 700);
    let y = 650;
    let runs = row_run_lengths(&buf, y);
    let expected = vec![
        (PLUGE_MINUS_I, 225),
        (PLUGE_WHITE, 225),
        (PLUGE_PLUS_I, 225),
        (PLUGE_BLACK, 180),
        (PLUGE_BELOW_BLACK, 135),
        (PLUGE_BLACK, 135),
        (PLUGE_ABOVE_BLACK, 135),
    ];
    assert_eq!(runs, expected);
}

#[test]
fn production_size_has_seven_top_bars() {
    let buf = rendered(SURFACE_WIDTH, SURFACE_HEIGHT);
    let runs = row_run_lengths(&buf, 0);
    let colors: Vec<Rgba> = runs.iter().map(|(c, _)| *c).collect();
    assert_eq!(colors, TOP_COLORS.to_vec());
    let total: u32 = runs.iter().map(|(_, n)| n).sum();
    assert_eq!(total, SURFACE_WIDTH);
    for (_, n) in runs {
        assert!(n == 182 || n == 183, "uneven bar width {n}");
    }
}

#[test]
fn empty_buffer_is_a_no_op() {
    let mut empty = PixelBuffer::new(0, 0);
    render(&mut empty);
    assert!(empty.is_empty());

    let mut thin = PixelBuffer::new(0, 10);
    render(&mut thin);
    assert!(thin.is_empty());
}

#[test]
fn fill_rect_uses_pixel_centres() {
    let mut buf = PixelBuffer::new(10, 1);
    let red = Rgba::opaque(0xff0000);
    buf.fill_rect(2.4, 0.0, 2.2, 1.0, red);
    // Covers centres 2.5, 3.5 and 4.5 (start 2.4, end 4.6)
    assert_eq!(buf.pixel(1, 0), Some(Rgba::default()));
    assert_eq!(buf.pixel(2, 0), Some(red));
    assert_eq!(buf.pixel(4, 0), Some(red));
    assert_eq!(buf.pixel(5, 0), Some(Rgba::default()));
}
