#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn percent_of_scales_into_range() {
    assert_eq!(percent_of(250.0, 1000.0), 25.0);
    assert_eq!(percent_of(0.0, 1000.0), 0.0);
}

#[test]
fn percent_of_clamps_outside_viewport() {
    assert_eq!(percent_of(-20.0, 1000.0), 0.0);
    assert_eq!(percent_of(1200.0, 1000.0), 100.0);
}

#[test]
fn percent_of_degenerate_extent_centres() {
    assert_eq!(percent_of(10.0, 0.0), 50.0);
    assert_eq!(percent_of(f64::NAN, 800.0), 50.0);
}

#[test]
fn css_percent_formats_two_decimals() {
    assert_eq!(css_percent(33.333), "33.33%");
}
