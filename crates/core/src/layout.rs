//! Picker layout - where each letter slot sits and what it responds to
//!
//! Slots are spread evenly around a circle centred on the picker origin,
//! slot 0 at angle 0 (to the right) and proceeding clockwise on screen
//! (`+y` points down). Each slot owns a circular hit region.
//!
//! Hover tie-break: when regions overlap, the lowest [`LetterId`] wins.

use arrayvec::ArrayVec;

use crate::types::{LetterId, Point, LETTER_HIT_RADIUS, MAX_POOL_LETTERS, PICKER_RADIUS};

/// Circular hit region of one picker slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub center: Point,
    pub radius: f32,
}

impl HitRegion {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_sq(p) <= self.radius * self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerLayout {
    regions: ArrayVec<HitRegion, MAX_POOL_LETTERS>,
    radius: f32,
}

impl PickerLayout {
    /// Evenly spaced slots on a circle of `radius`.
    pub fn circular(count: usize, radius: f32, hit_radius: f32) -> Self {
        let count = count.min(MAX_POOL_LETTERS);
        let regions = (0..count)
            .map(|i| {
                let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
                HitRegion {
                    center: Point::new(radius * angle.cos(), radius * angle.sin()),
                    radius: hit_radius,
                }
            })
            .collect();
        Self { regions, radius }
    }

    /// Layout with the default picker geometry.
    pub fn standard(count: usize) -> Self {
        Self::circular(count, PICKER_RADIUS, LETTER_HIT_RADIUS)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Circle radius the slots sit on.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self, id: LetterId) -> Option<Point> {
        self.regions.get(id.index()).map(|r| r.center)
    }

    /// First slot, in id order, whose region contains `p` and that `skip`
    /// does not exclude.
    pub fn hit_test(&self, p: Point, skip: impl Fn(LetterId) -> bool) -> Option<LetterId> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (LetterId(i as u8), r))
            .find(|(id, r)| !skip(*id) && r.contains(p))
            .map(|(id, _)| id)
    }

    /// Radius of the picker disc: the slot circle plus the hit margin.
    ///
    /// Releases beyond it count as released outside the picker.
    pub fn extent(&self) -> f32 {
        let margin = self.regions.first().map(|r| r.radius).unwrap_or(0.0);
        self.radius + margin
    }
}
