//! Buckets: groups of items laid out together.
//!
//! Quadrant and core placement differ only in policy (angular span, where a
//! lone row goes, how angles are spread within a row). Both feed the same
//! plan → distribute → place pipeline implemented here.

use std::{cmp::Ordering, collections::BTreeMap, f32::consts::FRAC_PI_2};

use techradar_core::{
    geometry::{AngleRange, FULL_CIRCLE, Point, RadialRange},
    semantic::{Item, Placement, QuadrantSlot},
};

use super::{RowPlan, distribute};

/// Grouping key for layout. Core buckets sort before quadrant buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum BucketKey {
    Core { ring: usize },
    Quadrant { slot: QuadrantSlot, ring: usize },
}

impl BucketKey {
    fn of(item: &Item) -> Self {
        match item.placement() {
            Placement::Core => BucketKey::Core { ring: item.ring() },
            Placement::Quadrant(slot) => BucketKey::Quadrant {
                slot,
                ring: item.ring(),
            },
        }
    }
}

/// Groups items into buckets in key order, each sorted by [`name_order`].
pub(super) fn group_buckets<'a, I>(items: I) -> BTreeMap<BucketKey, Vec<&'a Item>>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut buckets: BTreeMap<BucketKey, Vec<&'a Item>> = BTreeMap::new();
    for item in items {
        buckets.entry(BucketKey::of(item)).or_default().push(item);
    }
    for members in buckets.values_mut() {
        members.sort_by(|a, b| name_order(a.name(), b.name()));
    }
    buckets
}

/// Display-name order within a bucket.
///
/// Case-insensitive first, so `apple` sorts before `Banana`; names equal
/// up to case fall back to byte order to keep the order total.
pub(super) fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Radius interval of ring `ring`, shrunk by `inset` on both sides.
pub(super) fn ring_radii(ring: usize, ring_step: f32, inset: f32) -> RadialRange {
    let inner = ring as f32 * ring_step + inset;
    let outer = (ring + 1) as f32 * ring_step - inset;
    RadialRange::new(inner, outer)
}

/// How angles are assigned to the dots of one row.
#[derive(Debug, Clone, Copy)]
pub(super) enum ArcPolicy {
    /// Dots evenly inset from both ends of a bounded arc.
    Inset(AngleRange),
    /// Dots around the full circle starting at the top, odd rows shifted by half a step.
    Staggered,
}

impl ArcPolicy {
    /// Angular span a row covers under this policy.
    pub(super) fn span(self) -> f32 {
        match self {
            ArcPolicy::Inset(range) => range.span(),
            ArcPolicy::Staggered => FULL_CIRCLE,
        }
    }

    /// Angle of dot `column` out of `count` on row `row_index`.
    fn angle(self, row_index: usize, column: usize, count: usize) -> f32 {
        match self {
            ArcPolicy::Inset(range) => {
                range.lerp((column + 1) as f32 / (count + 1) as f32)
            }
            ArcPolicy::Staggered => {
                if count == 1 {
                    return -FRAC_PI_2;
                }
                let step = FULL_CIRCLE / count as f32;
                let offset = if row_index % 2 == 1 { 0.5 } else { 0.0 };
                -FRAC_PI_2 + step * (column as f32 + offset)
            }
        }
    }
}

/// Assigns coordinates to name-sorted `items` following `plan`.
///
/// Rows are filled innermost first; each row takes the next run of items
/// from the sorted list.
pub(super) fn place_rows<'a>(
    items: &[&'a Item],
    plan: &RowPlan,
    policy: ArcPolicy,
    center: Point,
) -> Vec<(&'a Item, Point)> {
    let counts = distribute(items.len(), &plan.capacities());
    let mut remaining = items.iter();
    let mut placed = Vec::with_capacity(items.len());

    for (row_index, (row, &count)) in plan.rows().iter().zip(&counts).enumerate() {
        for (column, &item) in remaining.by_ref().take(count).enumerate() {
            let angle = policy.angle(row_index, column, count);
            placed.push((item, center.add_polar(row.radius(), angle)));
        }
    }

    placed
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use float_cmp::approx_eq;

    use super::*;

    fn quadrant_item(name: &str, slot: QuadrantSlot, ring: usize) -> Item {
        Item::new(name, ring, Placement::Quadrant(slot))
    }

    #[test]
    fn test_group_buckets_orders_keys_and_names() {
        let items = vec![
            quadrant_item("zeta", QuadrantSlot::LowerLeft, 1),
            quadrant_item("alpha", QuadrantSlot::UpperRight, 2),
            Item::core("core-b"),
            quadrant_item("beta", QuadrantSlot::UpperRight, 2),
            Item::core("core-a"),
        ];

        let buckets = group_buckets(&items);
        let keys: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                BucketKey::Core { ring: 0 },
                BucketKey::Quadrant {
                    slot: QuadrantSlot::UpperRight,
                    ring: 2
                },
                BucketKey::Quadrant {
                    slot: QuadrantSlot::LowerLeft,
                    ring: 1
                },
            ]
        );

        let core: Vec<_> = buckets[&BucketKey::Core { ring: 0 }]
            .iter()
            .map(|item| item.name())
            .collect();
        assert_eq!(core, vec!["core-a", "core-b"]);
    }

    #[test]
    fn test_names_sort_case_insensitively() {
        let items = vec![
            quadrant_item("cherry", QuadrantSlot::LowerRight, 1),
            quadrant_item("Banana", QuadrantSlot::LowerRight, 1),
            quadrant_item("apple", QuadrantSlot::LowerRight, 1),
            quadrant_item("banana", QuadrantSlot::LowerRight, 1),
        ];

        let buckets = group_buckets(&items);
        let key = BucketKey::Quadrant {
            slot: QuadrantSlot::LowerRight,
            ring: 1,
        };
        let names: Vec<_> = buckets[&key].iter().map(|item| item.name()).collect();
        assert_eq!(names, vec!["apple", "Banana", "banana", "cherry"]);
    }

    #[test]
    fn test_ring_radii_insets_and_swaps() {
        let radial = ring_radii(1, 97.0, 28.0);
        assert_eq!(radial.inner(), 125.0);
        assert_eq!(radial.outer(), 166.0);

        let inverted = ring_radii(1, 40.0, 28.0);
        assert_eq!(inverted.inner(), 52.0);
        assert_eq!(inverted.outer(), 68.0);
    }

    #[test]
    fn test_inset_policy_never_touches_ends() {
        let policy = ArcPolicy::Inset(AngleRange::new(0.0, 1.0));
        assert!(approx_eq!(f32, policy.angle(0, 0, 3), 0.25));
        assert!(approx_eq!(f32, policy.angle(0, 1, 3), 0.5));
        assert!(approx_eq!(f32, policy.angle(0, 2, 3), 0.75));
        assert!(approx_eq!(f32, policy.angle(0, 0, 1), 0.5));
    }

    #[test]
    fn test_staggered_policy_offsets_odd_rows() {
        let policy = ArcPolicy::Staggered;
        assert!(approx_eq!(f32, policy.angle(0, 0, 8), -FRAC_PI_2));
        assert!(approx_eq!(
            f32,
            policy.angle(1, 0, 8),
            -FRAC_PI_2 + PI / 8.0,
            epsilon = 1e-6
        ));
        assert!(approx_eq!(f32, policy.angle(2, 0, 8), -FRAC_PI_2));
        // A lone dot always sits at the top.
        assert!(approx_eq!(f32, policy.angle(1, 0, 1), -FRAC_PI_2));
    }
}
