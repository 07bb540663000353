//! Reading rectangles and geometries out of WKT text.
//!
//! Input may hold several WKT documents separated by blank lines. Multi
//! geometries and collections are flattened into their parts.

use wkt::types::{Coord, LineString, Polygon as WktPolygon};
use wkt::Wkt;

use crate::utils::rectangles_from_coordinates;
use crate::{Coordinate, HasEnvelope, RTreeError, RTreeResult, Rectangle};

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub shell: Vec<Coordinate>,
    pub holes: Vec<Vec<Coordinate>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    Polygon(Polygon),
}

impl Geometry {
    /// The vertices of the geometry; for polygons, the shell only.
    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Geometry::Point(coord) => std::slice::from_ref(coord),
            Geometry::LineString(coords) => coords,
            Geometry::Polygon(poly) => &poly.shell,
        }
    }

    /// One rectangle per segment of the geometry's outline.
    pub fn segments(&self) -> Vec<Rectangle> {
        match self {
            Geometry::Point(coord) => vec![coord.envelope()],
            _ => rectangles_from_coordinates(self.coordinates()),
        }
    }
}

impl HasEnvelope for Geometry {
    fn envelope(&self) -> Rectangle {
        Rectangle::of(self.coordinates())
    }
}

pub fn parse_wkt(text: &str) -> RTreeResult<Vec<Geometry>> {
    let mut geometries = Vec::new();
    for document in text.split("\n\n") {
        if document.trim().is_empty() {
            continue;
        }
        let parsed: Wkt<f64> =
            Wkt::from_str(document.trim()).map_err(|e| RTreeError::Wkt(e.to_string()))?;
        for item in parsed.items {
            push_geometry(item, &mut geometries);
        }
    }
    Ok(geometries)
}

/// The envelope of every geometry in `text`.
pub fn envelopes_from_wkt(text: &str) -> RTreeResult<Vec<Rectangle>> {
    Ok(parse_wkt(text)?.iter().map(|g| g.envelope()).collect())
}

fn push_geometry(geometry: wkt::Geometry<f64>, geometries: &mut Vec<Geometry>) {
    match geometry {
        wkt::Geometry::Point(point) => {
            if let Some(coord) = point.0 {
                geometries.push(Geometry::Point(to_coordinate(&coord)));
            }
        }
        wkt::Geometry::LineString(line) => {
            geometries.push(Geometry::LineString(to_coordinates(&line)));
        }
        wkt::Geometry::Polygon(poly) => {
            if let Some(poly) = to_polygon(&poly) {
                geometries.push(Geometry::Polygon(poly));
            }
        }
        wkt::Geometry::MultiPoint(points) => {
            geometries.extend(
                points
                    .0
                    .iter()
                    .filter_map(|p| p.0.as_ref())
                    .map(|c| Geometry::Point(to_coordinate(c))),
            );
        }
        wkt::Geometry::MultiLineString(lines) => {
            geometries.extend(
                lines
                    .0
                    .iter()
                    .map(|l| Geometry::LineString(to_coordinates(l))),
            );
        }
        wkt::Geometry::MultiPolygon(polys) => {
            geometries.extend(polys.0.iter().filter_map(to_polygon).map(Geometry::Polygon));
        }
        wkt::Geometry::GeometryCollection(collection) => {
            for geometry in collection.0 {
                push_geometry(geometry, geometries);
            }
        }
    }
}

fn to_coordinate(coord: &Coord<f64>) -> Coordinate {
    Coordinate::new(coord.x, coord.y)
}

fn to_coordinates(line: &LineString<f64>) -> Vec<Coordinate> {
    line.0.iter().map(to_coordinate).collect()
}

/// `None` for the empty polygon.
fn to_polygon(poly: &WktPolygon<f64>) -> Option<Polygon> {
    let mut rings = poly.0.iter().map(to_coordinates);
    let shell = rings.next()?;
    Some(Polygon {
        shell,
        holes: rings.collect(),
    })
}
