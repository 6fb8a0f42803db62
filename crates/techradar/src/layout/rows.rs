//! Row planning: how many concentric sub-rows a bucket needs.
//!
//! A bucket owns a radius interval. The planner tries one row, then two,
//! and so on up to the number of rows that fit radially, and keeps the first
//! row count whose combined capacity holds every item. When even the densest
//! plan is too small, the last row absorbs the shortfall so no item is lost.

use log::trace;

use techradar_core::geometry::RadialRange;

use super::capacity_at;

/// Where a plan with a single row puts that row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SinglePlacement {
    /// At the midpoint of the radius interval.
    #[default]
    Mid,
    /// At the outer edge of the radius interval.
    Outer,
}

/// One planned row: a radius and the number of dots it may hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    radius: f32,
    capacity: usize,
}

impl Row {
    pub fn radius(self) -> f32 {
        self.radius
    }

    pub fn capacity(self) -> usize {
        self.capacity
    }
}

/// Ordered rows of a bucket, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPlan {
    rows: Vec<Row>,
}

impl RowPlan {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn capacities(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.capacity).collect()
    }

    pub fn total_capacity(&self) -> usize {
        self.rows.iter().map(|row| row.capacity).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Chooses row radii and capacities for a bucket.
///
/// # Examples
///
/// ```
/// # use techradar::layout::RowPlanner;
/// # use techradar_core::geometry::RadialRange;
/// # use std::f32::consts::FRAC_PI_2;
/// let plan = RowPlanner::new(33.0).plan(3, RadialRange::new(40.0, 200.0), FRAC_PI_2);
///
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.rows()[0].radius(), 120.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RowPlanner {
    min_spacing: f32,
    min_rows: usize,
    single_placement: SinglePlacement,
}

impl RowPlanner {
    /// Create a planner for dots at least `min_spacing` apart, with no row floor.
    pub fn new(min_spacing: f32) -> Self {
        Self {
            min_spacing,
            min_rows: 1,
            single_placement: SinglePlacement::Mid,
        }
    }

    /// Require at least `min_rows` rows in every plan.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows.max(1);
        self
    }

    /// Set where a lone row sits inside the radius interval.
    pub fn with_single_placement(mut self, placement: SinglePlacement) -> Self {
        self.single_placement = placement;
        self
    }

    /// Plan rows for `count` items within `radial`, each row spanning `angular_span` radians.
    ///
    /// Never fails: if no row count fits, the last row's capacity is grown by
    /// the shortfall.
    pub fn plan(&self, count: usize, radial: RadialRange, angular_span: f32) -> RowPlan {
        let max_rows = self.max_rows(radial);

        for row_count in self.min_rows..=max_rows {
            let plan = self.build(radial, row_count, angular_span);
            if plan.total_capacity() >= count {
                trace!(count, row_count; "Row plan fits");
                return plan;
            }
        }

        let mut plan = self.build(radial, max_rows.max(self.min_rows), angular_span);
        let total = plan.total_capacity();
        if total < count {
            trace!(count, total, rows = plan.len(); "Bucket overflows, growing last row");
            if let Some(last) = plan.rows.last_mut() {
                last.capacity += count - total;
            }
        }
        plan
    }

    /// Most rows that fit radially without two rows colliding.
    fn max_rows(&self, radial: RadialRange) -> usize {
        let fit = (radial.width() / self.min_spacing).floor();
        if fit.is_finite() && fit > 0.0 {
            fit as usize + 1
        } else {
            1
        }
    }

    fn build(&self, radial: RadialRange, row_count: usize, angular_span: f32) -> RowPlan {
        let rows = row_radii(radial, row_count, self.single_placement)
            .into_iter()
            .map(|radius| Row {
                radius,
                capacity: capacity_at(radius, angular_span, self.min_spacing),
            })
            .collect();
        RowPlan { rows }
    }
}

/// Spreads `row_count` radii evenly across `radial`, both ends included.
fn row_radii(radial: RadialRange, row_count: usize, single: SinglePlacement) -> Vec<f32> {
    if row_count <= 1 {
        let radius = match single {
            SinglePlacement::Mid => radial.midpoint(),
            SinglePlacement::Outer => radial.outer(),
        };
        return vec![radius];
    }

    let step = radial.width() / (row_count - 1) as f32;
    (0..row_count)
        .map(|index| radial.inner() + step * index as f32)
        .collect()
}
