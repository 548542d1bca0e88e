#![no_main]

use std::f64::consts::PI;

use libfuzzer_sys::fuzz_target;

use geograph::geo::{haversine, Coordinate, EARTH_RADIUS_KM};

fuzz_target!(|input: (Coordinate, Coordinate)| {
    let (a, b) = input;
    let there = haversine(a, b);
    let back = haversine(b, a);

    assert!(there >= 0.0);
    assert!(there <= PI * EARTH_RADIUS_KM + 1e-6);
    assert!((there - back).abs() < 1e-6);
    assert_eq!(haversine(a, a), 0.0);
});
