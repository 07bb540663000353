#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

use packed_rtree::from_wkt::{parse_wkt, Geometry};
use packed_rtree::utils::rectangles_from_coordinates;
use packed_rtree::{Coordinate, Rectangle};

//// Utility functions

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn read_test_case(name: &str) -> Vec<Geometry> {
    let filename = format!("tests/testdata/{}.wkt", name);
    let filepath = Path::new(env!("CARGO_MANIFEST_DIR")).join(Path::new(&filename));
    let contents = fs::read_to_string(Path::new(&filepath)).unwrap();
    parse_wkt(&contents).unwrap()
}

pub(crate) fn get_positions_list(name: &str) -> Vec<Vec<Coordinate>> {
    read_test_case(name)
        .into_iter()
        .map(|geom| geom.coordinates().to_vec())
        .collect()
}

pub(crate) fn make_rectangles_list(positions_list: &[Vec<Coordinate>]) -> Vec<Vec<Rectangle>> {
    positions_list
        .iter()
        .map(|coords| rectangles_from_coordinates(coords))
        .collect()
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

pub(crate) fn get_random_rects(rect: Rectangle, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Rectangle::new(
            Coordinate::new(
                rng.gen_range(rect.x_min, rect.x_max),
                rng.gen_range(rect.y_min, rect.y_max),
            ),
            Coordinate::new(
                rng.gen_range(rect.x_min, rect.x_max),
                rng.gen_range(rect.y_min, rect.y_max),
            ),
        ));
    }

    results
}
