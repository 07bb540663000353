use crate::Coordinate;

/// An axis-aligned bounding box.
///
/// The empty rectangle has its minimums at `+inf` and its maximums at `-inf`,
/// so merging it with anything yields the other rectangle unchanged and it
/// intersects nothing.
#[derive(Copy, Clone, Debug)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.x_min == other.x_min
                && self.y_min == other.y_min
                && self.x_max == other.x_max
                && self.y_max == other.y_max
        }
    }
}

/// Anything that can report the extent it occupies.
pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl HasEnvelope for Coordinate {
    fn envelope(&self) -> Rectangle {
        Rectangle {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x,
            y_max: self.y,
        }
    }
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Rectangle {
        *self
    }
}

impl<T: HasEnvelope + ?Sized> HasEnvelope for &T {
    fn envelope(&self) -> Rectangle {
        (**self).envelope()
    }
}

/// A keyed payload: the key is opaque, the rectangle is its extent.
impl<K> HasEnvelope for (K, Rectangle) {
    fn envelope(&self) -> Rectangle {
        self.1
    }
}

impl From<Coordinate> for Rectangle {
    fn from(coord: Coordinate) -> Self {
        coord.envelope()
    }
}

impl From<(f64, f64)> for Rectangle {
    fn from(pair: (f64, f64)) -> Self {
        Coordinate::from(pair).envelope()
    }
}

impl Rectangle {
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    pub fn new_empty() -> Self {
        Rectangle {
            x_min: f64::INFINITY,
            y_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_max: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        // Written negated so that NaN bounds also count as empty.
        !(self.x_min <= self.x_max && self.y_min <= self.y_max)
    }

    pub fn of<T: HasEnvelope>(items: &[T]) -> Self {
        items.iter().fold(Rectangle::new_empty(), |mut s, r| {
            s.expand(r.envelope());
            s
        })
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: (self.x_max + self.x_min) / 2.,
            y: (self.y_max + self.y_min) / 2.,
        }
    }

    pub fn width(&self) -> f64 {
        (self.x_max - self.x_min).max(0.)
    }

    pub fn height(&self) -> f64 {
        (self.y_max - self.y_min).max(0.)
    }

    /// Area, zero for empty or inverted rectangles.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Half-perimeter, zero for empty or inverted rectangles.
    pub fn margin(&self) -> f64 {
        self.width() + self.height()
    }

    pub fn intersects<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }

    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /// The overlap of the two rectangles. Disjoint inputs produce an
    /// inverted rectangle, which reports zero area.
    pub fn intersection<T: HasEnvelope>(&self, item: T) -> Self {
        let rect = item.envelope();
        Rectangle {
            x_min: self.x_min.max(rect.x_min),
            y_min: self.y_min.max(rect.y_min),
            x_max: self.x_max.min(rect.x_max),
            y_max: self.y_max.min(rect.y_max),
        }
    }

    pub fn merge<T: HasEnvelope>(&self, item: T) -> Self {
        let rect = item.envelope();
        Rectangle {
            x_min: self.x_min.min(rect.x_min),
            y_min: self.y_min.min(rect.y_min),
            x_max: self.x_max.max(rect.x_max),
            y_max: self.y_max.max(rect.y_max),
        }
    }

    pub fn expand<T: HasEnvelope>(&mut self, item: T) {
        let rect = item.envelope();
        self.x_min = self.x_min.min(rect.x_min);
        self.y_min = self.y_min.min(rect.y_min);
        self.x_max = self.x_max.max(rect.x_max);
        self.y_max = self.y_max.max(rect.y_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rectangle {
        Rectangle::new((x_min, y_min).into(), (x_max, y_max).into())
    }

    #[test]
    fn test_empty_is_merge_identity() {
        let r = rect(1., 2., 3., 5.);
        let empty = Rectangle::new_empty();
        assert!(empty.is_empty());
        assert_eq!(empty.merge(r), r);
        assert_eq!(r.merge(empty), r);
        assert_eq!(Rectangle::of(&Vec::<Rectangle>::new()), empty);
    }

    #[test]
    fn test_empty_intersects_nothing() {
        let empty = Rectangle::new_empty();
        let everything = rect(f64::MIN, f64::MIN, f64::MAX, f64::MAX);
        assert!(!empty.intersects(everything));
        assert!(!everything.intersects(empty));
        assert!(!empty.intersects(empty));
        assert_eq!(empty.area(), 0.);
        assert_eq!(empty.margin(), 0.);
    }

    #[test]
    fn test_area_and_margin() {
        let r = rect(0., 0., 2., 3.);
        assert_eq!(r.area(), 6.);
        assert_eq!(r.margin(), 5.);
        let point = Rectangle::from((4., 4.));
        assert_eq!(point.area(), 0.);
        assert_eq!(point.margin(), 0.);
    }

    #[test]
    fn test_intersection() {
        let a = rect(0., 0., 2., 2.);
        let b = rect(1., 1., 3., 3.);
        assert_eq!(a.intersection(b), rect(1., 1., 2., 2.));
        assert_eq!(a.intersection(b).area(), 1.);

        let far = rect(10., 10., 11., 11.);
        assert!(!a.intersects(far));
        assert_eq!(a.intersection(far).area(), 0.);
        assert!(a.intersection(far).is_empty());
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = rect(0., 0., 1., 1.);
        let b = rect(1., 1., 2., 2.);
        assert!(a.intersects(b));
        assert!(b.intersects(&a));
        assert_eq!(a.intersection(b).area(), 0.);
    }

    #[test]
    fn test_contains() {
        let outer = rect(0., 0., 10., 10.);
        assert!(outer.contains(rect(1., 1., 2., 2.)));
        assert!(outer.contains(outer));
        assert!(!outer.contains(rect(5., 5., 11., 6.)));
    }

    #[test]
    fn test_keyed_payload_envelope() {
        let keyed = ("road", rect(0., 0., 1., 1.));
        assert_eq!(keyed.envelope(), rect(0., 0., 1., 1.));
        assert_eq!((&keyed).envelope(), rect(0., 0., 1., 1.));
    }
}
