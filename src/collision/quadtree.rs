//! Quadtree broad phase
//!
//! Rebuilt every frame from the colliders that are live that frame. An entry
//! is recorded at every level whose bounds it overlaps, so a shape straddling
//! a split line lands in each leaf it touches. Queries therefore return
//! duplicates and the caller is expected to dedup pairs.

use crate::scene::NodeId;

use super::shape::{BoxShape, Shape};

/// Hard ceiling on split depth, whatever the config asks for
pub const MAX_DEPTH_LIMIT: u32 = 8;

/// A node's collider snapshot as stored in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadEntry {
    pub id: NodeId,
    pub shape: Shape,
}

#[derive(Debug)]
pub struct Quadtree {
    bounds: BoxShape,
    depth: u32,
    capacity: usize,
    max_depth: u32,
    entries: Vec<QuadEntry>,
    /// NW, NE, SW, SE once split
    quadrants: Option<Box<[Quadtree; 4]>>,
}

impl Quadtree {
    pub fn new(bounds: BoxShape, capacity: usize, max_depth: u32) -> Self {
        Self::with_depth(bounds, 0, capacity.max(1), max_depth.min(MAX_DEPTH_LIMIT))
    }

    fn with_depth(bounds: BoxShape, depth: u32, capacity: usize, max_depth: u32) -> Self {
        Self {
            bounds,
            depth,
            capacity,
            max_depth,
            entries: Vec::new(),
            quadrants: None,
        }
    }

    pub fn bounds(&self) -> BoxShape {
        self.bounds
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn is_split(&self) -> bool {
        self.quadrants.is_some()
    }

    /// Entries recorded at this level
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn overlaps(&self, shape: &Shape) -> bool {
        shape.collided_with(&Shape::Box(self.bounds))
    }

    /// Record `entry` here and in every quadrant it overlaps.
    ///
    /// Returns false (and stores nothing) when the shape misses this level.
    pub fn insert(&mut self, entry: QuadEntry) -> bool {
        if !self.overlaps(&entry.shape) {
            return false;
        }
        self.entries.push(entry);

        match self.quadrants.as_deref_mut() {
            Some(quadrants) => {
                for quadrant in quadrants.iter_mut() {
                    quadrant.insert(entry);
                }
            }
            None => {
                if self.entries.len() > self.capacity
                    && self.depth < self.max_depth
                    && self.any_entry_fits_quadrant()
                {
                    self.split();
                }
            }
        }
        true
    }

    /// Splitting only pays off if some entry is small enough to land in a
    /// single quadrant. Otherwise every entry would be copied four ways.
    fn any_entry_fits_quadrant(&self) -> bool {
        let (w, h) = (self.bounds.width * 0.5, self.bounds.height * 0.5);
        self.entries.iter().any(|entry| {
            let bounds = entry.shape.bounds();
            bounds.width <= w && bounds.height <= h
        })
    }

    /// Subdivide into four equal quadrants and push every entry down.
    fn split(&mut self) {
        let BoxShape { position, width, height } = self.bounds;
        let (w, h) = (width * 0.5, height * 0.5);
        let depth = self.depth + 1;
        let make = |x: f32, y: f32| {
            Quadtree::with_depth(BoxShape::new(x, y, w, h), depth, self.capacity, self.max_depth)
        };

        let mut quadrants = Box::new([
            make(position.x, position.y),
            make(position.x + w, position.y),
            make(position.x, position.y + h),
            make(position.x + w, position.y + h),
        ]);
        for entry in &self.entries {
            for quadrant in quadrants.iter_mut() {
                quadrant.insert(*entry);
            }
        }

        log::trace!(
            "quadtree split at depth {} ({} entries)",
            self.depth,
            self.entries.len()
        );
        self.quadrants = Some(quadrants);
    }

    /// Append every id sharing a leaf with `shape` to `out`.
    ///
    /// Only quadrants the shape overlaps are visited. The result can contain
    /// the same id more than once, and it contains the querying node itself
    /// if that node was inserted.
    pub fn retrieve(&self, out: &mut Vec<NodeId>, shape: &Shape) {
        if !self.overlaps(shape) {
            return;
        }
        match self.quadrants.as_deref() {
            Some(quadrants) => {
                for quadrant in quadrants.iter() {
                    quadrant.retrieve(out, shape);
                }
            }
            None => out.extend(self.entries.iter().map(|entry| entry.id)),
        }
    }

    /// Drop every entry and every quadrant.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.quadrants = None;
    }

    /// Bounds of every leaf, for debug overlays.
    pub fn leaf_bounds(&self, out: &mut Vec<BoxShape>) {
        match self.quadrants.as_deref() {
            Some(quadrants) => {
                for quadrant in quadrants.iter() {
                    quadrant.leaf_bounds(out);
                }
            }
            None => out.push(self.bounds),
        }
    }
}
