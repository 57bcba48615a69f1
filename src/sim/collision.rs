//! Axis-aligned collision volumes
//!
//! The rig body and every block are plain AABBs; a run ends the moment the
//! body volume overlaps any block volume. Bounds are closed: touching
//! faces count as an intersection, matching engine-style bounds checks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::Block;

/// An axis-aligned box described by center and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Interval overlap on all three axes (closed bounds)
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        d.x <= reach.x && d.y <= reach.y && d.z <= reach.z
    }

    /// Whether a point lies inside or on the box
    pub fn contains_point(&self, p: Vec3) -> bool {
        let d = (p - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }
}

/// Scan blocks in id order; returns the id of the first block the body
/// volume overlaps, if any.
pub fn rig_hits_any(body: &Aabb, blocks: &[Block]) -> Option<u32> {
    blocks
        .iter()
        .find(|block| body.intersects(&block.aabb()))
        .map(|block| block.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u32, pos: Vec3) -> Block {
        Block {
            id,
            pos,
            half_extents: Vec3::splat(0.5),
        }
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::new(Vec3::new(1.5, 0.0, 0.0), Vec3::splat(1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_faces_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let b = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        // Overlapping on X and Y, separated on Z
        let b = Aabb::new(Vec3::new(0.5, 0.5, 3.0), Vec3::splat(1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point() {
        let a = Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::splat(0.5));
        assert!(a.contains_point(Vec3::new(1.2, 0.8, 1.0)));
        assert!(a.contains_point(Vec3::new(1.5, 1.0, 1.0))); // on the face
        assert!(!a.contains_point(Vec3::new(1.6, 1.0, 1.0)));
    }

    #[test]
    fn test_rig_hits_first_in_id_order() {
        let body = Aabb::new(Vec3::ZERO, Vec3::new(0.5, 1.0, 0.5));
        let blocks = vec![
            block(1, Vec3::new(5.0, 0.0, 0.0)), // clear
            block(2, Vec3::new(0.5, 0.0, 0.0)), // hit
            block(3, Vec3::new(0.0, 0.0, 0.5)), // also a hit, but later in order
        ];
        assert_eq!(rig_hits_any(&body, &blocks), Some(2));
    }

    #[test]
    fn test_rig_misses_all() {
        let body = Aabb::new(Vec3::ZERO, Vec3::new(0.5, 1.0, 0.5));
        let blocks = vec![block(1, Vec3::new(5.0, 0.0, 20.0))];
        assert_eq!(rig_hits_any(&body, &blocks), None);
    }
}
