//! Polyline rasterization
//!
//! Converts real-valued outlines into the exact set of integer pixels lying
//! on them. Each segment is split at its midpoint until both halves round
//! to the same pixel, so the output is an unbroken 8-connected run even for
//! shallow or near-axis slopes.

use crate::canvas::Canvas;
use crate::pixel::{Pixel, PixelSet, Vertex};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Rasterize a polyline.
///
/// If `closed` is true, the last vertex is connected back to the first.
///
/// # Arguments
///
/// * `vertices` - Outline vertices, in traversal order
/// * `closed` - Whether the outline is a closed polygon
///
/// # Returns
///
/// The union of the pixels of every segment. An empty slice yields an
/// empty set and a single vertex yields its rounded pixel.
pub fn rasterize(vertices: &[Vertex], closed: bool) -> PixelSet {
    let mut pixels = PixelSet::new();
    match vertices.len() {
        0 => {}
        1 => {
            pixels.insert(vertices[0].to_pixel());
        }
        n => {
            for pair in vertices.windows(2) {
                rasterize_segment_into(pair[0], pair[1], &mut pixels);
            }
            if closed {
                rasterize_segment_into(vertices[n - 1], vertices[0], &mut pixels);
            }
        }
    }
    pixels
}

/// Rasterize a polyline, keeping only the part inside `canvas`.
///
/// Each segment is clipped to the canvas before it is subdivided, so the
/// work is bounded by the canvas size however far the vertices reach.
/// Segments that miss the canvas contribute nothing.
///
/// # Returns
///
/// The clipped pixels and the number of segments that were shortened or
/// dropped.
pub fn rasterize_clipped(vertices: &[Vertex], closed: bool, canvas: Canvas) -> (PixelSet, usize) {
    let mut pixels = PixelSet::new();
    let mut clipped = 0;
    let mut segment = |a: Vertex, b: Vertex, pixels: &mut PixelSet| {
        match canvas.clip_segment(a, b) {
            Some((ca, cb)) => {
                if (ca, cb) != (a, b) {
                    clipped += 1;
                }
                rasterize_segment_into(ca, cb, pixels);
            }
            None => clipped += 1,
        }
    };

    match vertices.len() {
        0 => {}
        1 => segment(vertices[0], vertices[0], &mut pixels),
        n => {
            for pair in vertices.windows(2) {
                segment(pair[0], pair[1], &mut pixels);
            }
            if closed {
                segment(vertices[n - 1], vertices[0], &mut pixels);
            }
        }
    }
    (pixels, clipped)
}

/// Rasterize a single segment.
///
/// The result does not depend on endpoint order.
pub fn rasterize_segment(p0: Vertex, p1: Vertex) -> PixelSet {
    let mut pixels = PixelSet::new();
    rasterize_segment_into(p0, p1, &mut pixels);
    pixels
}

/// Add the pixels of segment `p0`-`p1` to `pixels`.
pub fn rasterize_segment_into(p0: Vertex, p1: Vertex, pixels: &mut PixelSet) {
    // Walk every segment in one canonical direction.
    let (p0, p1) = if compare_vertices(p0, p1) == Ordering::Greater {
        (p1, p0)
    } else {
        (p0, p1)
    };

    let mut seen: HashSet<(Pixel, Pixel)> = HashSet::new();
    let mut work = vec![(p0, p1)];

    while let Some((a, b)) = work.pop() {
        let pa = a.to_pixel();
        let pb = b.to_pixel();
        if !seen.insert((pa, pb)) {
            continue;
        }
        pixels.insert(pa);
        pixels.insert(pb);
        if pa == pb {
            continue;
        }
        let mid = a.midpoint(b);
        work.push((mid, b));
        work.push((a, mid));
    }
}

fn compare_vertices(a: Vertex, b: Vertex) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipped_long_segment() {
        let canvas = Canvas::new(10, 10).unwrap();
        let (pixels, clipped) = rasterize_clipped(&[v(0.0, 5.0), v(1e12, 5.0)], false, canvas);
        assert_eq!(clipped, 1);
        assert_eq!(pixels, (0..10).map(|x| Pixel::new(x, 5)).collect());
    }

    #[test]
    fn test_clipped_matches_unclipped_inside() {
        let canvas = Canvas::new(40, 40).unwrap();
        let tri = [v(2.0, 3.0), v(30.5, 8.0), v(12.0, 35.0)];
        let (pixels, clipped) = rasterize_clipped(&tri, true, canvas);
        assert_eq!(clipped, 0);
        assert_eq!(pixels, rasterize(&tri, true));
    }

    #[test]
    fn test_clipped_off_canvas_vertex() {
        let canvas = Canvas::new(10, 10).unwrap();
        let (pixels, clipped) = rasterize_clipped(&[v(-4.0, 20.0)], false, canvas);
        assert!(pixels.is_empty());
        assert_eq!(clipped, 1);
    }

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(x, y)
    }

    #[test]
    fn test_degenerate_segment() {
        let pixels = rasterize(&[v(0.0, 0.0), v(0.0, 0.0)], false);
        assert_eq!(pixels.len(), 1);
        assert!(pixels.contains(&Pixel::new(0, 0)));
    }

    #[test]
    fn test_empty_and_single_vertex() {
        assert!(rasterize(&[], true).is_empty());
        let one = rasterize(&[v(2.4, 6.6)], true);
        assert_eq!(one.into_iter().collect::<Vec<_>>(), vec![Pixel::new(2, 7)]);
    }

    #[test]
    fn test_horizontal_segment() {
        let pixels = rasterize_segment(v(-17.0, 20.0), v(10.0, 20.0));
        assert_eq!(pixels.len(), 28);
        assert!(pixels.iter().all(|p| p.y == 20));
    }

    #[test]
    fn test_vertical_segment() {
        let pixels = rasterize_segment(v(-5.0, 10.0), v(-5.0, 15.0));
        let mut ys: Vec<i32> = pixels.iter().map(|p| p.y).collect();
        ys.sort_unstable();
        assert_eq!(ys, vec![10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_shallow_slope_has_no_column_gaps() {
        let pixels = rasterize_segment(v(0.0, 0.0), v(100.0, 1.0));
        for x in 0..=100 {
            assert!(pixels.iter().any(|p| p.x == x), "missing column {x}");
        }
        assert!(pixels.iter().all(|p| p.y == 0 || p.y == 1));
    }

    #[test]
    fn test_open_vs_closed() {
        let tri = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)];
        let open = rasterize(&tri, false);
        let closed = rasterize(&tri, true);
        assert!(closed.len() > open.len());
        assert!(open.is_subset(&closed));
        assert!(closed.contains(&Pixel::new(5, 5)));
        assert!(!open.contains(&Pixel::new(5, 5)));
    }

    #[test]
    fn test_collinear_vertices() {
        let pixels = rasterize(&[v(0.0, 0.0), v(5.0, 5.0), v(10.0, 10.0)], true);
        assert_eq!(pixels.len(), 11);
    }
}
