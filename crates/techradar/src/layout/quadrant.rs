//! Placement of quadrant buckets.

use std::f32::consts::FRAC_PI_2;

use log::debug;

use techradar_core::{
    geometry::{AngleRange, Point},
    semantic::{Item, QuadrantSlot},
};

use super::{
    RowPlanner,
    bucket::{ArcPolicy, place_rows, ring_radii},
    engine::{Engine, RadarGeometry},
};

/// Half-width of the arc used when padding swallows a quadrant entirely.
const COLLAPSED_HALF_SPAN: f32 = 0.04;

impl Engine {
    /// Angular bounds for dots in `slot`.
    ///
    /// The quadrant interval is inset by the axis padding on both ends. The
    /// two upper quadrants additionally keep clear of the top axis, where the
    /// ring labels are drawn. If nothing is left, a narrow arc around the
    /// quadrant's middle is used instead.
    pub(super) fn quadrant_angles(&self, slot: QuadrantSlot) -> AngleRange {
        let base = slot.angle_range();
        let padded = base.inset(self.axis_padding);

        let range = match slot {
            QuadrantSlot::UpperRight => AngleRange::new(
                padded.start().max(-FRAC_PI_2 + self.top_label_gap),
                padded.end(),
            ),
            QuadrantSlot::UpperLeft => AngleRange::new(
                padded.start(),
                padded.end().min(-FRAC_PI_2 - self.top_label_gap),
            ),
            QuadrantSlot::LowerLeft | QuadrantSlot::LowerRight => padded,
        };

        if range.is_collapsed() {
            AngleRange::around(base.midpoint(), COLLAPSED_HALF_SPAN)
        } else {
            range
        }
    }

    pub(super) fn place_quadrant_bucket<'a>(
        &self,
        slot: QuadrantSlot,
        ring: usize,
        items: &[&'a Item],
        geometry: RadarGeometry,
    ) -> Vec<(&'a Item, Point)> {
        let angles = self.quadrant_angles(slot);
        let radial = ring_radii(ring, geometry.ring_step(), self.ring_inset);
        let plan = RowPlanner::new(self.min_spacing).plan(items.len(), radial, angles.span());

        debug!(
            quadrant = slot.index(),
            ring,
            items_count = items.len(),
            rows_count = plan.len();
            "Placing quadrant bucket",
        );

        place_rows(items, &plan, ArcPolicy::Inset(angles), geometry.center())
    }
}
