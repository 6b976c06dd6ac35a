//! Regression test for the drawing engine and script driver
//!
//! Stamps overlapping and distant squares, checks that touching shapes
//! share a group and color, and that erasing one group leaves the others
//! intact.

use pixgroup::engine::{draw_shape, erase, flood_fill_at, render};
use pixgroup::io::{ImageFormat, read_image, write_image};
use pixgroup::region::Occupancy;
use pixgroup::script::{parse_script, run_commands};
use pixgroup::{CanvasConfig, GroupingStore, Pixel, Rgb, ShapeKind, Vertex};
use pixgroup_test::RegParams;

fn square(store: &mut GroupingStore, x: f64, y: f64) {
    draw_shape(
        store,
        ShapeKind::Rectangle,
        Vertex::new(x, y),
        Vertex::new(x + 9.0, y + 9.0),
    )
    .unwrap();
}

#[test]
fn end_to_end_reg() {
    let mut rp = RegParams::new("end_to_end");
    let mut store = GroupingStore::with_size(100, 100).unwrap();

    square(&mut store, 0.0, 0.0);
    square(&mut store, 9.0, 0.0);
    let left = store.group_of(Pixel::new(2, 2)).unwrap();
    let right = store.group_of(Pixel::new(16, 7)).unwrap();
    rp.check(left == right, "overlapping squares fused");
    rp.check(
        store.buffer().get(Pixel::new(2, 2)) == store.buffer().get(Pixel::new(16, 7)),
        "fused squares share a color",
    );

    square(&mut store, 60.0, 60.0);
    let far = store.group_of(Pixel::new(65, 65)).unwrap();
    rp.check(far != left, "distant square has its own group");
    rp.check(
        store.color_of(far) != store.color_of(left),
        "distant square has its own color",
    );
    rp.compare_values(2.0, store.group_count() as f64, 0.0);
    rp.write_buffer(store.buffer()).unwrap();

    let far_members: Vec<Pixel> = store.members(far).unwrap().iter().copied().collect();
    let kept = store.group_len(left);
    rp.check(erase(&mut store, Pixel::new(65, 65)).unwrap() == Some(far), "erase far");
    rp.check(
        far_members
            .iter()
            .all(|p| store.buffer().get(*p) == Some(Rgb::BLACK) && !store.is_occupied(*p)),
        "far square cleared",
    );
    rp.compare_values(kept as f64, store.group_len(left) as f64, 0.0);
    rp.check(
        store.group_of(Pixel::new(16, 7)) == Some(left),
        "first squares still grouped",
    );
    rp.check(store.is_consistent(), "store consistent");

    assert!(rp.cleanup());
}

#[test]
fn bucket_reg() {
    let mut rp = RegParams::new("bucket");
    let mut store = GroupingStore::with_size(40, 40).unwrap();

    // A closed frame; filling inside touches the frame and fuses with it.
    draw_shape(
        &mut store,
        ShapeKind::Star,
        Vertex::new(5.0, 5.0),
        Vertex::new(35.0, 35.0),
    )
    .unwrap();
    let frame = store.group_of(Pixel::new(20, 5)).unwrap();
    let summary = flood_fill_at(&mut store, Pixel::new(20, 22)).unwrap();
    rp.check(summary.pixels > 0, "bucket painted something");
    rp.check(
        store.group_of(Pixel::new(20, 22)) == Some(frame),
        "bucket fused with frame",
    );
    rp.compare_values(1.0, store.group_count() as f64, 0.0);
    rp.check(store.is_consistent(), "store consistent");

    assert!(rp.cleanup());
}

#[test]
fn script_reg() {
    let mut rp = RegParams::new("script");
    let script = "\
# fused pair, a distant triangle, then erase the triangle
shape rectangle 0 0 9 9
shape rectangle 9 0 18 9
shape triangle-up 60 60 80 80
polyline open 0 40 10 45 20 40
erase 70 75
fill 300 300
";
    let commands = parse_script(script).unwrap();
    let config = CanvasConfig::new(100, 100).with_normalize(true);
    let mut store = GroupingStore::new(config).unwrap();
    let summary = run_commands(&mut store, &commands);

    rp.compare_values(5.0, summary.applied as f64, 0.0);
    rp.compare_values(1.0, summary.failed as f64, 0.0);
    rp.compare_values(1.0, summary.erased as f64, 0.0);
    rp.compare_values(2.0, store.group_count() as f64, 0.0);
    rp.check(store.group_of(Pixel::new(70, 75)).is_none(), "triangle erased");

    let frame = render(&store);
    rp.check(
        frame
            .iter_occupied()
            .all(|(_, c)| (c.magnitude() - 200.0).abs() <= 1.0),
        "rendered colors normalized",
    );

    let dir = tempfile::tempdir().unwrap();
    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        let path = dir.path().join(format!("script.{}", format.extension()));
        write_image(&frame, &path, format).unwrap();
        rp.compare_buffers(&frame, &read_image(&path).unwrap());
    }

    assert!(rp.cleanup());
}

#[test]
fn far_polyline_reg() {
    let mut rp = RegParams::new("far_polyline");
    let mut store = GroupingStore::with_size(10, 10).unwrap();

    // Segments reaching far past the canvas are clipped before
    // rasterization, so only the visible part is ever walked.
    let commands = parse_script(
        "polyline open 0 5 1e12 5\n\
         polyline closed -1e15 -1e15 1e15 -1e15 1e15 -1e15\n",
    )
    .unwrap();
    let summary = run_commands(&mut store, &commands);

    rp.compare_values(2.0, summary.applied as f64, 0.0);
    rp.compare_values(0.0, summary.failed as f64, 0.0);
    rp.compare_values(30.0, store.pixel_count() as f64, 0.0);
    rp.check(
        (0..10).all(|x| store.is_occupied(Pixel::new(x, 5))),
        "visible row drawn",
    );
    rp.check(store.is_consistent(), "store consistent");

    assert!(rp.cleanup());
}

#[test]
fn config_file_reg() {
    let mut rp = RegParams::new("config_file");
    let config: CanvasConfig = toml::from_str(
        "width = 64\nheight = 32\nbrightness = 120\npalette = [[255, 0, 0], [0, 0, 255]]\n",
    )
    .unwrap();
    rp.compare_values(64.0, config.width as f64, 0.0);
    rp.compare_values(2.0, config.palette.len() as f64, 0.0);
    rp.check(!config.normalize, "normalize defaults off");

    let empty: Result<CanvasConfig, _> = toml::from_str("palette = []\n");
    rp.check(empty.is_err(), "empty palette rejected");
    let black: Result<CanvasConfig, _> =
        toml::from_str("palette = [[255, 0, 0], [0, 0, 0]]\n");
    rp.check(black.is_err(), "black palette entry rejected");

    let store = GroupingStore::new(config).unwrap();
    rp.compare_values(32.0, store.canvas().height() as f64, 0.0);

    assert!(rp.cleanup());
}
