//! Semantic radar model types.
//!
//! These types represent a fully validated radar: rings, quadrants and the
//! items assigned to them. They are produced by the validation pass and
//! consumed by the placement engine, which turns every [`Item`] into a
//! [`PlacedItem`].
//!
//! # Pipeline Position
//!
//! ```text
//! Radar document (JSON) + narrative markdown
//!     ↓ validate
//! Semantic Model (these types)
//!     ↓ layout
//! Placed items (coordinates)
//!     ↓ export
//! SVG
//! ```

use std::{
    collections::BTreeMap,
    f32::consts::{FRAC_PI_2, PI},
    fmt,
};

use crate::{
    color::Color,
    geometry::{AngleRange, Point},
};

/// A concentric ring of the radar.
///
/// Rings are identified by their position in [`Radar::rings`]; ring `0` is
/// the core ring and spans the full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    name: String,
    color: Option<Color>,
}

impl Ring {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// One of the four fixed angular quarters of the radar.
///
/// The discriminant matches the quadrant index used in radar documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuadrantSlot {
    UpperRight = 0,
    UpperLeft = 1,
    LowerLeft = 2,
    LowerRight = 3,
}

impl QuadrantSlot {
    /// All slots in index order.
    pub const ALL: [QuadrantSlot; 4] = [
        QuadrantSlot::UpperRight,
        QuadrantSlot::UpperLeft,
        QuadrantSlot::LowerLeft,
        QuadrantSlot::LowerRight,
    ];

    /// Returns the slot for a document quadrant index, or `None` outside `0..4`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the document quadrant index of this slot.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the half-open angular interval covered by this slot.
    ///
    /// Together the four slots partition the full circle. Angles follow the
    /// SVG orientation, so `-π/2` is straight up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use techradar_core::semantic::QuadrantSlot;
    /// # use std::f32::consts::FRAC_PI_2;
    /// let range = QuadrantSlot::UpperRight.angle_range();
    /// assert_eq!(range.start(), -FRAC_PI_2);
    /// assert_eq!(range.end(), 0.0);
    /// ```
    pub fn angle_range(self) -> AngleRange {
        match self {
            QuadrantSlot::UpperRight => AngleRange::new(-FRAC_PI_2, 0.0),
            QuadrantSlot::UpperLeft => AngleRange::new(-PI, -FRAC_PI_2),
            QuadrantSlot::LowerLeft => AngleRange::new(FRAC_PI_2, PI),
            QuadrantSlot::LowerRight => AngleRange::new(0.0, FRAC_PI_2),
        }
    }
}

impl fmt::Display for QuadrantSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A named, colored quadrant occupying one [`QuadrantSlot`].
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrant {
    slot: QuadrantSlot,
    name: String,
    color: Color,
}

impl Quadrant {
    pub fn new(slot: QuadrantSlot, name: impl Into<String>, color: Color) -> Self {
        Self {
            slot,
            name: name.into(),
            color,
        }
    }

    pub fn slot(&self) -> QuadrantSlot {
        self.slot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Where an item lives on the radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    /// Core item: no quadrant, lives in ring 0 around the full circle.
    Core,
    /// Regular item confined to one quadrant, in ring 1 or above.
    Quadrant(QuadrantSlot),
}

impl Placement {
    pub fn is_core(self) -> bool {
        matches!(self, Placement::Core)
    }

    /// Returns the quadrant slot, or `None` for core items.
    pub fn quadrant(self) -> Option<QuadrantSlot> {
        match self {
            Placement::Core => None,
            Placement::Quadrant(slot) => Some(slot),
        }
    }
}

/// How an item moved since the previous edition of the radar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Movement {
    MovedOut,
    #[default]
    Unchanged,
    MovedIn,
}

impl Movement {
    /// Maps the document encoding (`-1`, `0`, `1`) to a movement.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Movement::MovedOut),
            0 => Some(Movement::Unchanged),
            1 => Some(Movement::MovedIn),
            _ => None,
        }
    }

    pub fn value(self) -> i64 {
        match self {
            Movement::MovedOut => -1,
            Movement::Unchanged => 0,
            Movement::MovedIn => 1,
        }
    }
}

/// Display payload of an item. The placement engine never reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    pub link: String,
    pub link_name: String,
    pub moved: Movement,
    pub description: String,
    pub tags: Vec<String>,
    pub downloads: f64,
    pub forks: f64,
    pub activity_metric: f64,
    pub languages: BTreeMap<String, f64>,
}

/// A validated radar item, assigned to one ring and optionally one quadrant.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    ring: usize,
    placement: Placement,
    details: ItemDetails,
}

impl Item {
    pub fn new(name: impl Into<String>, ring: usize, placement: Placement) -> Self {
        Self {
            name: name.into(),
            ring,
            placement,
            details: ItemDetails::default(),
        }
    }

    /// Shorthand for a core item in ring 0.
    pub fn core(name: impl Into<String>) -> Self {
        Self::new(name, 0, Placement::Core)
    }

    pub fn with_details(mut self, details: ItemDetails) -> Self {
        self.details = details;
        self
    }

    /// Display name, also the deterministic sort key within a bucket.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ring(&self) -> usize {
        self.ring
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_core(&self) -> bool {
        self.placement.is_core()
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }
}

/// Identifier assigned to a placed item, unique within one layout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacedId(usize);

impl PlacedId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlacedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item together with its identifier and absolute diagram coordinates.
///
/// Placed items borrow the item they position; they are created fresh on
/// every layout run and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem<'a> {
    id: PlacedId,
    item: &'a Item,
    position: Point,
}

impl<'a> PlacedItem<'a> {
    pub fn new(id: PlacedId, item: &'a Item, position: Point) -> Self {
        Self { id, item, position }
    }

    pub fn id(&self) -> PlacedId {
        self.id
    }

    pub fn item(&self) -> &'a Item {
        self.item
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A complete, validated radar: rings, quadrants, items and narrative text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Radar {
    rings: Vec<Ring>,
    quadrants: Vec<Quadrant>,
    items: Vec<Item>,
    story_markdown: String,
}

impl Radar {
    pub fn new(rings: Vec<Ring>, quadrants: Vec<Quadrant>, items: Vec<Item>) -> Self {
        Self {
            rings,
            quadrants,
            items,
            story_markdown: String::new(),
        }
    }

    pub fn with_story_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.story_markdown = markdown.into();
        self
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn quadrants(&self) -> &[Quadrant] {
        &self.quadrants
    }

    /// Returns the quadrant configured for `slot`, if any.
    pub fn quadrant(&self, slot: QuadrantSlot) -> Option<&Quadrant> {
        self.quadrants.iter().find(|q| q.slot() == slot)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Raw narrative markdown; empty when the document has no text file.
    pub fn story_markdown(&self) -> &str {
        &self.story_markdown
    }
}
