//! The placement engine and its builder.
//!
//! [`Engine::calculate`] is the layout composer: it places every core
//! bucket, then every quadrant bucket, and numbers the combined sequence.

use log::{debug, info};

use techradar_core::{
    geometry::{Point, Size},
    semantic::{Item, PlacedId, PlacedItem, QuadrantSlot},
};

use super::bucket::{BucketKey, group_buckets};
use crate::config::LayoutConfig;

/// Per-run geometry: where the diagram center is and how wide each ring is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    center: Point,
    ring_step: f32,
}

impl RadarGeometry {
    pub fn new(center: Point, ring_step: f32) -> Self {
        Self { center, ring_step }
    }

    /// Geometry of a radar with `ring_count` rings drawn with `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use techradar::{config::LayoutConfig, layout::RadarGeometry};
    /// let geometry = RadarGeometry::for_rings(&LayoutConfig::default(), 5);
    /// assert_eq!(geometry.ring_step(), 97.0);
    /// assert_eq!(geometry.center().x(), 490.0);
    /// ```
    pub fn for_rings(config: &LayoutConfig, ring_count: usize) -> Self {
        Self {
            center: Size::square(config.diagram_size()).center(),
            ring_step: config.outer_radius() / ring_count.max(1) as f32,
        }
    }

    pub fn center(self) -> Point {
        self.center
    }

    pub fn ring_step(self) -> f32 {
        self.ring_step
    }
}

/// Result of one layout run: every input item with an identifier and coordinates.
///
/// Core items come first, then quadrant items; identifiers follow that order.
#[derive(Debug, Clone)]
pub struct RadarLayout<'a> {
    geometry: RadarGeometry,
    placed: Vec<PlacedItem<'a>>,
}

impl<'a> RadarLayout<'a> {
    pub fn geometry(&self) -> RadarGeometry {
        self.geometry
    }

    pub fn items(&self) -> &[PlacedItem<'a>] {
        &self.placed
    }

    /// Looks up a placed item by identifier.
    pub fn get(&self, id: PlacedId) -> Option<&PlacedItem<'a>> {
        // Identifiers are sequential indices.
        self.placed.get(id.value())
    }

    pub fn core_items(&self) -> impl Iterator<Item = &PlacedItem<'a>> {
        self.placed.iter().filter(|placed| placed.item().is_core())
    }

    pub fn quadrant_items(&self, slot: QuadrantSlot) -> impl Iterator<Item = &PlacedItem<'a>> {
        self.placed
            .iter()
            .filter(move |placed| placed.item().placement().quadrant() == Some(slot))
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

/// Radial placement engine.
///
/// The engine is immutable and holds only sizing constants; every call to
/// [`Engine::calculate`] is independent.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(super) min_spacing: f32,
    pub(super) axis_padding: f32,
    pub(super) top_label_gap: f32,
    pub(super) ring_inset: f32,
    pub(super) core_inset: f32,
    pub(super) core_label_safe_radius: f32,
    pub(super) core_multi_row_threshold: usize,
}

impl Engine {
    /// Place every item in `items`.
    ///
    /// Never fails: crowded buckets are packed more densely rather than
    /// dropping items, and empty rings or quadrants simply yield nothing.
    pub fn calculate<'a>(&self, items: &'a [Item], geometry: RadarGeometry) -> RadarLayout<'a> {
        info!(items_count = items.len(); "Calculating radar layout");

        let buckets = group_buckets(items);
        debug!(buckets_count = buckets.len(); "Items grouped into buckets");

        // Core keys order before quadrant keys, so core items come first.
        let placed = buckets
            .iter()
            .flat_map(|(key, members)| match *key {
                BucketKey::Core { ring } => self.place_core_bucket(ring, members, geometry),
                BucketKey::Quadrant { slot, ring } => {
                    self.place_quadrant_bucket(slot, ring, members, geometry)
                }
            })
            .enumerate()
            .map(|(id, (item, position))| PlacedItem::new(PlacedId::new(id), item, position))
            .collect::<Vec<_>>();

        debug!(placed_count = placed.len(); "Layout calculated");

        RadarLayout { geometry, placed }
    }
}

/// Builder for configuring an [`Engine`].
///
/// Defaults match [`LayoutConfig::default`].
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    min_spacing: f32,
    axis_padding: f32,
    top_label_gap: f32,
    ring_inset: f32,
    core_inset: f32,
    core_label_safe_radius: f32,
    core_multi_row_threshold: usize,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl EngineBuilder {
    /// Create a new engine builder with the default radar sizing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from layout configuration
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            min_spacing: config.min_spacing(),
            axis_padding: config.axis_padding(),
            top_label_gap: config.top_label_gap(),
            ring_inset: config.ring_inset() + config.ring_edge_padding(),
            core_inset: config.dot_radius() + 4.0 + config.ring_edge_padding(),
            core_label_safe_radius: config.core_label_safe_radius(),
            core_multi_row_threshold: config.core_multi_row_threshold(),
        }
    }

    /// Set the minimum center-to-center spacing between dots on a row
    pub fn with_min_spacing(mut self, spacing: f32) -> Self {
        self.min_spacing = spacing;
        self
    }

    /// Set the angular padding kept clear next to each axis
    pub fn with_axis_padding(mut self, padding: f32) -> Self {
        self.axis_padding = padding;
        self
    }

    /// Set the angular gap kept clear on both sides of the top axis
    pub fn with_top_label_gap(mut self, gap: f32) -> Self {
        self.top_label_gap = gap;
        self
    }

    /// Set the radial inset between ring boundaries and quadrant dots
    pub fn with_ring_inset(mut self, inset: f32) -> Self {
        self.ring_inset = inset;
        self
    }

    /// Set the radial inset between ring boundaries and core dots
    pub fn with_core_inset(mut self, inset: f32) -> Self {
        self.core_inset = inset;
        self
    }

    /// Set the smallest radius a core dot may use
    pub fn with_core_label_safe_radius(mut self, radius: f32) -> Self {
        self.core_label_safe_radius = radius;
        self
    }

    /// Set the core bucket size above which two rows are forced
    pub fn with_core_multi_row_threshold(mut self, threshold: usize) -> Self {
        self.core_multi_row_threshold = threshold;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            min_spacing: self.min_spacing,
            axis_padding: self.axis_padding,
            top_label_gap: self.top_label_gap,
            ring_inset: self.ring_inset,
            core_inset: self.core_inset,
            core_label_safe_radius: self.core_label_safe_radius,
            core_multi_row_threshold: self.core_multi_row_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use techradar_core::semantic::Placement;

    use super::*;

    fn geometry() -> RadarGeometry {
        RadarGeometry::for_rings(&LayoutConfig::default(), 5)
    }

    #[test]
    fn test_empty_input_yields_empty_layout() {
        let layout = EngineBuilder::new().build().calculate(&[], geometry());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_core_items_come_first_with_sequential_ids() {
        let items = vec![
            Item::new("Quadrant item", 1, Placement::Quadrant(QuadrantSlot::UpperRight)),
            Item::core("Core item"),
        ];
        let layout = EngineBuilder::new().build().calculate(&items, geometry());

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.items()[0].item().name(), "Core item");
        assert_eq!(layout.items()[0].id(), PlacedId::new(0));
        assert_eq!(layout.items()[1].item().name(), "Quadrant item");
        assert_eq!(layout.items()[1].id(), PlacedId::new(1));
    }

    #[test]
    fn test_lookup_by_id() {
        let items = vec![Item::core("a"), Item::core("b")];
        let layout = EngineBuilder::new().build().calculate(&items, geometry());
        let second = layout.get(PlacedId::new(1)).unwrap();
        assert_eq!(second.item().name(), "b");
        assert!(layout.get(PlacedId::new(2)).is_none());
    }

    #[test]
    fn test_filters_by_quadrant() {
        let items = vec![
            Item::new("x", 1, Placement::Quadrant(QuadrantSlot::LowerLeft)),
            Item::new("y", 2, Placement::Quadrant(QuadrantSlot::LowerLeft)),
            Item::new("z", 1, Placement::Quadrant(QuadrantSlot::UpperLeft)),
            Item::core("c"),
        ];
        let layout = EngineBuilder::new().build().calculate(&items, geometry());
        assert_eq!(layout.quadrant_items(QuadrantSlot::LowerLeft).count(), 2);
        assert_eq!(layout.quadrant_items(QuadrantSlot::LowerRight).count(), 0);
        assert_eq!(layout.core_items().count(), 1);
    }

    #[test]
    fn test_builder_from_config_derives_insets() {
        let engine = EngineBuilder::from_config(&LayoutConfig::default()).build();
        assert_eq!(engine.min_spacing, 33.0);
        assert_eq!(engine.ring_inset, 28.0);
        assert_eq!(engine.core_inset, 22.5);
    }
}
