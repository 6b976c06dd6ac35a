//! Region filling
//!
//! Two breadth-first expansions over 4-connected neighbors:
//!
//! - [`fill_interior`] seeds at the centroid of a polygon's vertices and
//!   may not cross the polygon's rasterized outline.
//! - [`flood_fill`] seeds at an arbitrary canvas pixel and stops only at
//!   already-painted pixels or the canvas edge (paint bucket).
//!
//! A 4-connected expansion can never slip through the diagonal steps of an
//! 8-connected outline, so the rasterizer's outlines are watertight for
//! both.

use crate::error::{RegionError, RegionResult};
use pixgroup_core::{Canvas, Pixel, PixelSet, Vertex, bounding_box, centroid};
use std::collections::VecDeque;

/// Anything that can answer "is this pixel already painted".
pub trait Occupancy {
    fn is_occupied(&self, p: Pixel) -> bool;
}

impl Occupancy for PixelSet {
    fn is_occupied(&self, p: Pixel) -> bool {
        self.contains(&p)
    }
}

impl<T: Occupancy + ?Sized> Occupancy for &T {
    fn is_occupied(&self, p: Pixel) -> bool {
        (**self).is_occupied(p)
    }
}

/// Fill the interior of a closed outline.
///
/// # Arguments
///
/// * `boundary` - Rasterized closed outline of the polygon
/// * `vertices` - The polygon's vertices; their centroid seeds the fill
///
/// # Returns
///
/// The outline together with every pixel reachable from the seed without
/// crossing it.
///
/// # Errors
///
/// - [`RegionError::InsufficientGeometry`] if the outline has fewer than 3
///   pixels or the polygon fewer than 3 vertices
/// - [`RegionError::DegenerateShape`] if the seed lies on the outline
/// - [`RegionError::FillEscaped`] if the seed lies outside the closed
///   outline (the expansion reached the outline's bounding-box border)
///
/// For a self-intersecting outline only the cell containing the centroid
/// is filled.
pub fn fill_interior(boundary: &PixelSet, vertices: &[Vertex]) -> RegionResult<PixelSet> {
    let insufficient = || RegionError::InsufficientGeometry {
        boundary: boundary.len(),
        vertices: vertices.len(),
    };
    if boundary.len() < 3 || vertices.len() < 3 {
        return Err(insufficient());
    }
    let (lo, hi) = bounding_box(boundary).ok_or_else(insufficient)?;
    let seed = centroid(vertices)
        .map(Vertex::to_pixel)
        .ok_or_else(insufficient)?;

    if boundary.contains(&seed) {
        return Err(RegionError::DegenerateShape {
            x: seed.x,
            y: seed.y,
        });
    }

    let on_border = |p: Pixel| p.x <= lo.x || p.x >= hi.x || p.y <= lo.y || p.y >= hi.y;
    if on_border(seed) {
        return Err(RegionError::FillEscaped {
            x: seed.x,
            y: seed.y,
        });
    }

    let mut filled = boundary.clone();
    filled.insert(seed);
    let mut queue = VecDeque::from([seed]);

    while let Some(p) = queue.pop_front() {
        for n in p.neighbors4() {
            if filled.contains(&n) {
                continue;
            }
            if on_border(n) {
                return Err(RegionError::FillEscaped {
                    x: seed.x,
                    y: seed.y,
                });
            }
            filled.insert(n);
            queue.push_back(n);
        }
    }

    log::trace!(
        "fill_interior: {} boundary + {} interior pixels",
        boundary.len(),
        filled.len() - boundary.len()
    );
    Ok(filled)
}

/// Flood fill the unpainted region containing `seed`.
///
/// # Arguments
///
/// * `seed` - Starting pixel
/// * `occupied` - Pixels that already belong to a group
/// * `canvas` - Canvas bounds the fill may not leave
///
/// # Returns
///
/// The seed and every unpainted pixel 4-connected to it. Returns an empty
/// set when the seed itself is already painted.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is off canvas.
pub fn flood_fill<O: Occupancy + ?Sized>(
    seed: Pixel,
    occupied: &O,
    canvas: Canvas,
) -> RegionResult<PixelSet> {
    if !canvas.contains(seed) {
        return Err(RegionError::InvalidSeed {
            x: seed.x,
            y: seed.y,
        });
    }

    let mut region = PixelSet::new();
    if occupied.is_occupied(seed) {
        return Ok(region);
    }

    region.insert(seed);
    let mut queue = VecDeque::from([seed]);

    while let Some(p) = queue.pop_front() {
        for n in p.neighbors4() {
            if !canvas.contains(n) || region.contains(&n) || occupied.is_occupied(n) {
                continue;
            }
            region.insert(n);
            queue.push_back(n);
        }
    }

    log::trace!("flood_fill from {}: {} pixels", seed, region.len());
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgroup_core::rasterize;

    fn square(size: f64) -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(size, 0.0),
            Vertex::new(size, size),
            Vertex::new(0.0, size),
        ]
    }

    #[test]
    fn test_fill_square() {
        let vs = square(10.0);
        let boundary = rasterize(&vs, true);
        let filled = fill_interior(&boundary, &vs).unwrap();
        assert_eq!(filled.len(), 121);
        assert!(boundary.is_subset(&filled));
    }

    #[test]
    fn test_fill_insufficient_geometry() {
        let vs = vec![Vertex::new(0.0, 0.0), Vertex::new(10.0, 0.0)];
        let boundary = rasterize(&vs, true);
        assert!(matches!(
            fill_interior(&boundary, &vs),
            Err(RegionError::InsufficientGeometry { vertices: 2, .. })
        ));
    }

    #[test]
    fn test_fill_degenerate_shape() {
        // Flat triangle: the centroid lands on the outline.
        let vs = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(5.0, 1.0),
        ];
        let boundary = rasterize(&vs, true);
        let err = fill_interior(&boundary, &vs).unwrap_err();
        assert!(matches!(err, RegionError::DegenerateShape { .. }));
        assert!(err.is_fill_fallback());
    }

    #[test]
    fn test_fill_escape_detected() {
        // A "C" shape whose vertex centroid lies in the open mouth.
        let vs = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(20.0, 0.0),
            Vertex::new(20.0, 4.0),
            Vertex::new(4.0, 4.0),
            Vertex::new(4.0, 16.0),
            Vertex::new(20.0, 16.0),
            Vertex::new(20.0, 20.0),
            Vertex::new(0.0, 20.0),
        ];
        let boundary = rasterize(&vs, true);
        assert!(matches!(
            fill_interior(&boundary, &vs),
            Err(RegionError::FillEscaped { .. })
        ));
    }

    #[test]
    fn test_flood_fill_bounded_by_canvas() {
        let canvas = Canvas::new(5, 4).unwrap();
        let region = flood_fill(Pixel::new(2, 2), &PixelSet::new(), canvas).unwrap();
        assert_eq!(region.len(), 20);
    }

    #[test]
    fn test_flood_fill_stops_at_occupied() {
        let canvas = Canvas::new(6, 3).unwrap();
        // Vertical wall at x = 2 splits the canvas.
        let wall: PixelSet = (0..3).map(|y| Pixel::new(2, y)).collect();
        let left = flood_fill(Pixel::new(0, 0), &wall, canvas).unwrap();
        assert_eq!(left.len(), 6);
        assert!(left.iter().all(|p| p.x < 2));

        let right = flood_fill(Pixel::new(5, 2), &wall, canvas).unwrap();
        assert_eq!(right.len(), 9);
    }

    #[test]
    fn test_flood_fill_seed_cases() {
        let canvas = Canvas::new(3, 3).unwrap();
        let occupied: PixelSet = [Pixel::new(1, 1)].into_iter().collect();
        assert!(flood_fill(Pixel::new(1, 1), &occupied, canvas)
            .unwrap()
            .is_empty());
        assert!(matches!(
            flood_fill(Pixel::new(3, 0), &occupied, canvas),
            Err(RegionError::InvalidSeed { x: 3, y: 0 })
        ));
    }
}
