//! Placement of core buckets around the full circle.

use log::debug;

use techradar_core::{
    geometry::{FULL_CIRCLE, Point, RadialRange},
    semantic::Item,
};

use super::{
    RowPlanner, SinglePlacement,
    bucket::{ArcPolicy, place_rows, ring_radii},
    engine::{Engine, RadarGeometry},
};

impl Engine {
    /// Radius interval for core dots in `ring`.
    ///
    /// The inner bound never drops below the label-safe radius, so dots stay
    /// clear of the origin and the core ring's own label.
    pub(super) fn core_radii(&self, ring: usize, ring_step: f32) -> RadialRange {
        ring_radii(ring, ring_step, self.core_inset).with_inner_floor(self.core_label_safe_radius)
    }

    pub(super) fn place_core_bucket<'a>(
        &self,
        ring: usize,
        items: &[&'a Item],
        geometry: RadarGeometry,
    ) -> Vec<(&'a Item, Point)> {
        let radial = self.core_radii(ring, geometry.ring_step());
        let min_rows = if items.len() > self.core_multi_row_threshold {
            2
        } else {
            1
        };
        let plan = RowPlanner::new(self.min_spacing)
            .with_min_rows(min_rows)
            .with_single_placement(SinglePlacement::Outer)
            .plan(items.len(), radial, FULL_CIRCLE);

        debug!(
            ring,
            items_count = items.len(),
            rows_count = plan.len();
            "Placing core bucket",
        );

        place_rows(items, &plan, ArcPolicy::Staggered, geometry.center())
    }
}
