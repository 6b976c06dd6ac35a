//! Regression test for polyline rasterization and shape outlines
//!
//! Checks connectivity, endpoint inclusion and order independence of
//! segment rasterization, and that every stamped shape outline is one
//! unbroken 8-connected run.

use pixgroup_core::{
    Pixel, PixelSet, ShapeKind, Vertex, rasterize, rasterize_segment, shape_vertices,
};
use pixgroup_test::{RegParams, is_8_connected};

const SEGMENTS: [(f64, f64, f64, f64); 10] = [
    (1.0, 3.0, 7.0, 11.0),
    (7.0, 11.0, 1.0, 3.0),
    (-17.0, 20.0, 10.0, 20.0),
    (-5.0, 10.0, -5.0, 15.0),
    (0.0, 0.0, 0.0, 0.0),
    (10.0, 20.0, 20.0, 10.0),
    (0.0, 0.0, 100.0, 1.0),
    (0.5, 1.5, 5.0, 10.0),
    (3.25, -7.75, -40.5, 2.125),
    (0.0, 0.0, 1.0, 250.0),
];

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    for &(x0, y0, x1, y1) in &SEGMENTS {
        let a = Vertex::new(x0, y0);
        let b = Vertex::new(x1, y1);
        let forward = rasterize_segment(a, b);
        let backward = rasterize_segment(b, a);

        rp.check(is_8_connected(&forward), "segment is 8-connected");
        rp.check(forward.contains(&a.to_pixel()), "contains start");
        rp.check(forward.contains(&b.to_pixel()), "contains end");
        rp.compare_pixel_sets(&forward, &backward);

        // Never wider than the bounding box of the rounded endpoints.
        let (pa, pb) = (a.to_pixel(), b.to_pixel());
        let inside = forward.iter().all(|p| {
            p.x >= pa.x.min(pb.x)
                && p.x <= pa.x.max(pb.x)
                && p.y >= pa.y.min(pb.y)
                && p.y <= pa.y.max(pb.y)
        });
        rp.check(inside, "segment stays in its bounding box");
    }

    assert!(rp.cleanup());
}

#[test]
fn degenerate_line_reg() {
    let mut rp = RegParams::new("degenerate_line");

    let single: PixelSet = [Pixel::new(0, 0)].into_iter().collect();
    let got = rasterize(&[Vertex::new(0.0, 0.0), Vertex::new(0.0, 0.0)], false);
    rp.compare_pixel_sets(&single, &got);

    let got = rasterize(&[Vertex::new(0.2, -0.3)], true);
    rp.compare_pixel_sets(&single, &got);

    rp.compare_values(0.0, rasterize(&[], true).len() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn shape_outline_reg() {
    let mut rp = RegParams::new("shape_outline");
    let a = Vertex::new(12.0, 30.0);
    let b = Vertex::new(212.0, 130.0);

    for kind in ShapeKind::ALL {
        let vertices = shape_vertices(kind, a, b);
        let outline = rasterize(&vertices, kind.is_closed());
        rp.check(is_8_connected(&outline), kind.name());
        for v in &vertices {
            rp.check(outline.contains(&v.to_pixel()), "vertex on outline");
        }
    }

    // A 10x10 square outline has 40 pixels.
    let square = shape_vertices(
        ShapeKind::Rectangle,
        Vertex::new(0.0, 0.0),
        Vertex::new(10.0, 10.0),
    );
    rp.compare_values(40.0, rasterize(&square, true).len() as f64, 0.0);

    assert!(rp.cleanup());
}
