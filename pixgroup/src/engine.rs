//! Engine operations over a [`GroupingStore`]
//!
//! Every operation takes the store explicitly. Shape corners and the
//! vertices of filled polylines are clamped into the canvas, outline
//! segments are clipped to it before rasterization, and flood-fill or erase
//! seeds outside the canvas are rejected with [`RegionError::InvalidSeed`].

use pixgroup_color::normalize_brightness;
use pixgroup_core::{
    ColorBuffer, Error, Pixel, ShapeKind, Vertex, rasterize_clipped, shape_vertices,
};
use pixgroup_region::{
    CommitSummary, GroupId, GroupingStore, RegionError, RegionResult, fill_interior, flood_fill,
};

/// Result of drawing a shape or polyline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Whether the interior was filled (false when fill was not requested
    /// or fell back to the outline)
    pub filled: bool,
    /// Outline segments shortened or dropped at the canvas edge
    pub clipped: usize,
    /// What the commit did to the store
    pub commit: CommitSummary,
}

/// Draw a shape spanned by two corner points.
///
/// Rectangles, triangles and pentagons are filled; stars and lines are
/// drawn as outlines. A fill that fails with a recoverable error falls back
/// to committing the outline alone.
///
/// # Example
///
/// ```
/// use pixgroup::engine::draw_shape;
/// use pixgroup::{GroupingStore, ShapeKind, Vertex};
///
/// let mut store = GroupingStore::with_size(40, 40).unwrap();
/// let outcome = draw_shape(
///     &mut store,
///     ShapeKind::Rectangle,
///     Vertex::new(5.0, 5.0),
///     Vertex::new(14.0, 14.0),
/// )
/// .unwrap();
/// assert!(outcome.filled);
/// assert_eq!(store.group_count(), 1);
/// ```
pub fn draw_shape(
    store: &mut GroupingStore,
    kind: ShapeKind,
    a: Vertex,
    b: Vertex,
) -> RegionResult<DrawOutcome> {
    let canvas = store.canvas();
    let vertices = shape_vertices(kind, canvas.clamp_vertex(a), canvas.clamp_vertex(b));
    draw_polyline(store, &vertices, kind.is_closed(), kind.is_fillable())
}

/// Draw a polyline through `vertices`, optionally filling its interior.
///
/// `fill` only applies to closed polylines. A filled polygon has its
/// vertices clamped into the canvas first; an outline keeps its geometry
/// and only the on-canvas part of each segment is drawn.
///
/// # Errors
///
/// Returns [`RegionError::Core`] if a vertex has a non-finite coordinate.
pub fn draw_polyline(
    store: &mut GroupingStore,
    vertices: &[Vertex],
    closed: bool,
    fill: bool,
) -> RegionResult<DrawOutcome> {
    if let Some(v) = vertices.iter().find(|v| !(v.x.is_finite() && v.y.is_finite())) {
        let msg = format!("non-finite vertex ({}, {})", v.x, v.y);
        return Err(Error::InvalidParameter(msg).into());
    }

    let canvas = store.canvas();
    let fill = fill && closed;
    let clamped: Vec<Vertex>;
    let vertices = if fill {
        clamped = vertices.iter().map(|v| canvas.clamp_vertex(*v)).collect();
        clamped.as_slice()
    } else {
        vertices
    };

    let (outline, clipped) = rasterize_clipped(vertices, closed, canvas);
    if clipped > 0 {
        log::debug!("clipped {} segment(s) at the canvas edge", clipped);
    }

    let (pixels, filled) = if fill {
        match fill_interior(&outline, vertices) {
            Ok(region) => (region, true),
            Err(e) if e.is_fill_fallback() => {
                log::warn!("fill skipped, committing outline only: {}", e);
                (outline, false)
            }
            Err(e) => return Err(e),
        }
    } else {
        (outline, false)
    };

    let commit = store.commit_pixel_set(&pixels)?;
    Ok(DrawOutcome {
        filled,
        clipped,
        commit,
    })
}

/// Paint-bucket fill from `seed` and commit the region as one shape.
///
/// An occupied seed commits nothing and returns an empty summary.
pub fn flood_fill_at(store: &mut GroupingStore, seed: Pixel) -> RegionResult<CommitSummary> {
    let region = flood_fill(seed, &*store, store.canvas())?;
    if region.is_empty() {
        log::debug!("flood fill at {} hit an occupied pixel", seed);
        return Ok(CommitSummary::default());
    }
    store.commit_pixel_set(&region)
}

/// Erase the group containing `p`.
///
/// Returns the deleted group id, or `None` when `p` is unoccupied.
pub fn erase(store: &mut GroupingStore, p: Pixel) -> RegionResult<Option<GroupId>> {
    if !store.canvas().contains(p) {
        return Err(RegionError::InvalidSeed { x: p.x, y: p.y });
    }
    store.delete_group(p)
}

/// Snapshot of the color buffer for display.
///
/// When the store's configuration enables normalization the copy is
/// rescaled to the configured brightness; the store's own buffer is never
/// modified.
pub fn render(store: &GroupingStore) -> ColorBuffer {
    let mut buffer = store.buffer().clone();
    let config = store.config();
    if config.normalize {
        if let Err(e) = normalize_brightness(&mut buffer, config.brightness) {
            log::warn!("normalization skipped: {}", e);
        }
    }
    buffer
}
