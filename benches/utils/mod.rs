#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use packed_rtree::{Coordinate, Rectangle};

//// Utility functions

/// Small random boxes scattered over a 1000 x 1000 square.
pub(crate) fn get_random_boxes(n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        let x = rng.gen_range(0., 1000.);
        let y = rng.gen_range(0., 1000.);
        let w = rng.gen_range(0., 5.);
        let h = rng.gen_range(0., 5.);
        results.push(Rectangle::new(
            Coordinate::new(x, y),
            Coordinate::new(x + w, y + h),
        ));
    }
    results
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}
