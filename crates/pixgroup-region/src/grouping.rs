//! Incremental pixel grouping
//!
//! [`GroupingStore`] is a disjoint-set structure keyed by pixel coordinate.
//! Unlike a parent-pointer union-find it keeps an explicit member set per
//! group, so a whole group can be deleted and recolored in time linear in
//! its size. Merges relabel the smaller group into the larger one, which
//! bounds the total relabelling work to `O(n log n)`.
//!
//! The store also owns the canvas [`ColorBuffer`]. Every operation that
//! changes a pixel's group id repaints that pixel before returning, so
//! the buffer always satisfies
//! `buffer[p] == palette[id(p) mod palette.len()]` for occupied pixels and
//! is black elsewhere.

use crate::error::{RegionError, RegionResult};
use crate::fill::Occupancy;
use pixgroup_core::{Canvas, CanvasConfig, ColorBuffer, Palette, Pixel, PixelSet, Rgb};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// Identifier of a connectivity group.
///
/// Ids are allocated in increasing order and never reused, including
/// after the group is deleted or absorbed by a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u64);

impl GroupId {
    /// Raw id value
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of [`GroupingStore::commit_pixel_set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Number of pixels handed to the store
    pub pixels: usize,
    /// Groups the committed pixels belong to afterwards
    pub groups: BTreeSet<GroupId>,
}

/// Incremental union-find over canvas pixels with a color cache.
#[derive(Debug, Clone)]
pub struct GroupingStore {
    config: CanvasConfig,
    canvas: Canvas,
    ids: HashMap<Pixel, GroupId>,
    groups: HashMap<GroupId, HashSet<Pixel>>,
    next_group_id: u64,
    buffer: ColorBuffer,
}

impl GroupingStore {
    /// Create an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Core`] if the configuration describes an
    /// empty canvas.
    pub fn new(config: CanvasConfig) -> RegionResult<Self> {
        let canvas = config.canvas()?;
        Ok(Self {
            config,
            canvas,
            ids: HashMap::new(),
            groups: HashMap::new(),
            next_group_id: 0,
            buffer: ColorBuffer::new(canvas),
        })
    }

    /// Empty store over a `width × height` canvas with default palette.
    pub fn with_size(width: u32, height: u32) -> RegionResult<Self> {
        Self::new(CanvasConfig::new(width, height))
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    /// The color buffer read by renderers.
    pub fn buffer(&self) -> &ColorBuffer {
        &self.buffer
    }

    /// Color of a group.
    #[inline]
    pub fn color_of(&self, id: GroupId) -> Rgb {
        self.config.palette.color_for(id.0)
    }

    /// Group of an occupied pixel.
    #[inline]
    pub fn group_of(&self, p: Pixel) -> Option<GroupId> {
        self.ids.get(&p).copied()
    }

    /// Members of a live group.
    pub fn members(&self, id: GroupId) -> Option<&HashSet<Pixel>> {
        self.groups.get(&id)
    }

    /// Number of pixels in a group, zero if the group does not exist.
    pub fn group_len(&self, id: GroupId) -> usize {
        self.groups.get(&id).map_or(0, HashSet::len)
    }

    /// Number of live groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of occupied pixels.
    pub fn pixel_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids of the live groups in ascending order.
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self.groups.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Id the next created group will receive.
    pub fn next_group_id(&self) -> GroupId {
        GroupId(self.next_group_id)
    }

    /// Put `a` and `b` in the same group.
    ///
    /// # Returns
    ///
    /// The id of the group now holding both pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfCanvas`] if either pixel is off canvas;
    /// the store is left unchanged.
    pub fn union(&mut self, a: Pixel, b: Pixel) -> RegionResult<GroupId> {
        for p in [a, b] {
            if !self.canvas.contains(p) {
                return Err(RegionError::OutOfCanvas { x: p.x, y: p.y });
            }
        }

        match (self.group_of(a), self.group_of(b)) {
            (Some(ia), Some(ib)) if ia == ib => Ok(ia),
            (Some(ia), Some(ib)) => self.merge(ia, ib),
            (Some(ia), None) => self.add(b, ia),
            (None, Some(ib)) => self.add(a, ib),
            (None, None) => self.create(a, b),
        }
    }

    /// Neither pixel has a group: start a new one.
    fn create(&mut self, a: Pixel, b: Pixel) -> RegionResult<GroupId> {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;

        let members: HashSet<Pixel> = HashSet::from([a, b]);
        for &p in &members {
            self.ids.insert(p, id);
            self.paint(p, id)?;
        }
        self.groups.insert(id, members);

        log::trace!("create group {} with {} and {}", id, a, b);
        Ok(id)
    }

    /// `p` has no group: join group `id`.
    fn add(&mut self, p: Pixel, id: GroupId) -> RegionResult<GroupId> {
        self.ids.insert(p, id);
        self.groups.entry(id).or_default().insert(p);
        self.paint(p, id)?;
        Ok(id)
    }

    /// Relabel the smaller group into the larger one.
    ///
    /// On equal sizes the newer group (larger id) is absorbed into the
    /// older one.
    fn merge(&mut self, ia: GroupId, ib: GroupId) -> RegionResult<GroupId> {
        let (la, lb) = (self.group_len(ia), self.group_len(ib));
        let (absorbed, survivor) = if la < lb || (la == lb && ia > ib) {
            (ia, ib)
        } else {
            (ib, ia)
        };

        let moved = self.groups.remove(&absorbed).unwrap_or_default();
        let color = self.color_of(survivor);
        for &p in &moved {
            self.ids.insert(p, survivor);
            self.buffer.set(p, color)?;
        }

        log::debug!(
            "merge group {} ({} px) into {} ({} px)",
            absorbed,
            moved.len(),
            survivor,
            self.group_len(survivor)
        );
        self.groups.entry(survivor).or_default().extend(moved);
        Ok(survivor)
    }

    #[inline]
    fn paint(&mut self, p: Pixel, id: GroupId) -> RegionResult<()> {
        let color = self.color_of(id);
        self.buffer.set(p, color)?;
        Ok(())
    }

    /// Delete the whole group containing `p`.
    ///
    /// Every member is cleared to the background color and forgotten.
    ///
    /// # Returns
    ///
    /// The deleted group's id, or `None` (and no change) when `p` is not
    /// occupied.
    pub fn delete_group(&mut self, p: Pixel) -> RegionResult<Option<GroupId>> {
        let Some(id) = self.group_of(p) else {
            return Ok(None);
        };
        let members = self.groups.remove(&id).unwrap_or_default();
        for m in &members {
            self.ids.remove(m);
            self.buffer.clear_pixel(*m)?;
        }
        log::debug!("delete group {} ({} px)", id, members.len());
        Ok(Some(id))
    }

    /// Commit a rasterized or filled pixel set as one shape.
    ///
    /// Each pixel is registered (`union(p, p)`) and then joined with each
    /// of its on-canvas 4-neighbors, so a shape absorbs the one-pixel ring
    /// around it and fuses with every group it touches or overlaps.
    /// Pixels are visited in ascending order, which makes group id
    /// allocation deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfCanvas`] before changing anything if any
    /// pixel of the set is off canvas.
    pub fn commit_pixel_set(&mut self, pixels: &PixelSet) -> RegionResult<CommitSummary> {
        if let Some(p) = pixels.iter().find(|p| !self.canvas.contains(**p)) {
            return Err(RegionError::OutOfCanvas { x: p.x, y: p.y });
        }

        let mut ordered: Vec<Pixel> = pixels.iter().copied().collect();
        ordered.sort_unstable();

        for &p in &ordered {
            self.union(p, p)?;
            for n in p.neighbors4() {
                if self.canvas.contains(n) {
                    self.union(p, n)?;
                }
            }
        }

        let groups: BTreeSet<GroupId> = ordered.iter().filter_map(|p| self.group_of(*p)).collect();
        log::debug!(
            "commit {} px -> {} group(s), {} live",
            ordered.len(),
            groups.len(),
            self.groups.len()
        );
        Ok(CommitSummary {
            pixels: ordered.len(),
            groups,
        })
    }

    /// Clear everything, keeping the configuration.
    pub fn reset(&mut self) {
        self.ids.clear();
        self.groups.clear();
        self.next_group_id = 0;
        self.buffer.clear();
        log::debug!("store reset");
    }

    /// Check every store invariant.
    ///
    /// Intended for tests and debug assertions; walks the whole canvas.
    pub fn is_consistent(&self) -> bool {
        let ids_ok = self.ids.iter().all(|(p, id)| {
            id.0 < self.next_group_id
                && self.groups.get(id).is_some_and(|m| m.contains(p))
                && self.buffer.get(*p) == Some(self.color_of(*id))
        });
        let groups_ok = self
            .groups
            .iter()
            .all(|(id, members)| members.iter().all(|p| self.ids.get(p) == Some(id)));
        let sizes_ok = self.groups.values().map(HashSet::len).sum::<usize>() == self.ids.len();
        let background_ok = self
            .buffer
            .iter_occupied()
            .all(|(p, _)| self.ids.contains_key(&p));

        ids_ok && groups_ok && sizes_ok && background_ok
    }
}

impl Occupancy for GroupingStore {
    fn is_occupied(&self, p: Pixel) -> bool {
        self.ids.contains_key(&p)
    }
}
