use std::cmp::Ordering;

use crate::{Coordinate, HasEnvelope, Rectangle};

/// One rectangle per segment of the path through `coords`.
pub fn rectangles_from_coordinates(coords: &[Coordinate]) -> Vec<Rectangle> {
    coords
        .windows(2)
        .map(|c| Rectangle::new(c[0], c[1]))
        .collect()
}

/// Order by low x bound.
pub(crate) fn cmp_x_min<E: HasEnvelope>(a: &E, b: &E) -> Ordering {
    a.envelope().x_min.total_cmp(&b.envelope().x_min)
}

/// Order by low y bound.
pub(crate) fn cmp_y_min<E: HasEnvelope>(a: &E, b: &E) -> Ordering {
    a.envelope().y_min.total_cmp(&b.envelope().y_min)
}

pub(crate) fn divup(dividend: usize, divisor: usize) -> usize {
    let quotient = dividend / divisor;
    match dividend % divisor {
        0 => quotient,
        _ => quotient + 1,
    }
}
