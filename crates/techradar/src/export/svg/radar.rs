//! SVG rendering of a placed radar.

use log::{debug, trace};
use svg::{self, node::element as svg_element};

use techradar_core::{
    color::Color,
    geometry::{Point, Size},
    semantic::{PlacedItem, Placement, Radar},
};

use super::Svg;
use crate::{export, layout::RadarLayout};

const FONT_FAMILY: &str = "Arial, sans-serif";
const RING_STROKE: &str = "#cbd5e1";
const AXIS_STROKE: &str = "#94a3b8";
const LABEL_COLOR: &str = "#334155";
const NO_DESCRIPTION: &str = "No description available.";

/// Fill opacity of a dot in ring `ring` out of `ring_count` rings.
///
/// Inner rings are fully opaque; opacity falls linearly to `min_opacity` at
/// the outermost ring.
///
/// # Examples
///
/// ```
/// # use techradar::export::svg::ring_opacity;
/// assert_eq!(ring_opacity(0, 5, 0.2), 1.0);
/// assert_eq!(ring_opacity(4, 5, 0.2), 0.2);
/// ```
pub fn ring_opacity(ring: usize, ring_count: usize, min_opacity: f32) -> f32 {
    let max_ring = ring_count.saturating_sub(1).max(1);
    let ratio = 1.0 - ring.min(max_ring) as f32 / max_ring as f32;
    min_opacity + (1.0 - min_opacity) * ratio
}

impl Svg {
    /// Renders `radar` with the positions of `layout` into an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured style color cannot
    /// be parsed.
    pub fn render_radar(
        &self,
        radar: &Radar,
        layout: &RadarLayout<'_>,
    ) -> Result<svg::Document, export::Error> {
        let size = Size::square(self.layout.diagram_size());
        let geometry = layout.geometry();
        let center = geometry.center();
        let step = geometry.ring_step();
        let ring_count = radar.rings().len().max(1);

        let core_color = match radar.rings().first().and_then(|ring| ring.color()) {
            Some(color) => color,
            None => self.style.core_color().map_err(render_error)?,
        };

        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        if let Some(background) = self.style.background_color().map_err(render_error)? {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", background.to_string()),
            );
        }

        let mut group = svg_element::Group::new().add(
            svg_element::Circle::new()
                .set("class", "core-area")
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", step)
                .set("fill", core_color.to_string()),
        );

        for index in 0..radar.rings().len() {
            group = group.add(
                svg_element::Circle::new()
                    .set("class", "ring")
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", step * (index + 1) as f32)
                    .set("fill", "none")
                    .set("stroke", RING_STROKE),
            );
        }

        let outer = self.layout.outer_radius();
        for (start, end) in axis_segments(center, step, outer) {
            group = group.add(
                svg_element::Line::new()
                    .set("class", "axis")
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y())
                    .set("stroke", AXIS_STROKE),
            );
        }

        for placed in layout.items() {
            let fill = self.item_color(radar, placed, core_color)?;
            group = group.add(self.render_dot(placed, fill, ring_count));
        }
        trace!(dots_count = layout.len(); "Dots rendered");

        // Labels are added last so they stay on top of the dots.
        for (index, ring) in radar.rings().iter().enumerate() {
            let offset = if index == 0 {
                0.0
            } else {
                (index as f32 + 0.5) * step
            };
            group = group.add(
                svg_element::Text::new(ring.name().to_uppercase())
                    .set("class", "ring-label")
                    .set("x", center.x())
                    .set("y", center.y() - offset)
                    .set("dy", "0.35em")
                    .set("text-anchor", "middle")
                    .set("font-family", FONT_FAMILY)
                    .set("fill", LABEL_COLOR),
            );
        }

        debug!(rings_count = radar.rings().len(), dots_count = layout.len(); "Radar rendered");
        Ok(doc.add(group))
    }

    fn item_color(
        &self,
        radar: &Radar,
        placed: &PlacedItem<'_>,
        core_color: Color,
    ) -> Result<Color, export::Error> {
        match placed.item().placement() {
            Placement::Core => Ok(core_color),
            Placement::Quadrant(slot) => match radar.quadrant(slot) {
                Some(quadrant) => Ok(quadrant.color()),
                None => self.style.quadrant_color(slot.index()).map_err(render_error),
            },
        }
    }

    fn render_dot(
        &self,
        placed: &PlacedItem<'_>,
        fill: Color,
        ring_count: usize,
    ) -> svg_element::Circle {
        let item = placed.item();
        let position = placed.position();
        let description = match item.details().description.as_str() {
            "" => NO_DESCRIPTION,
            text => text,
        };
        let opacity = ring_opacity(item.ring(), ring_count, self.style.min_ring_opacity());

        svg_element::Circle::new()
            .set("class", "blip")
            .set("data-id", placed.id().value())
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.layout.dot_radius())
            .set("fill", fill.to_string())
            .set("fill-opacity", opacity)
            .add(svg_element::Title::new(format!(
                "{}: {description}",
                item.name()
            )))
    }
}

/// The four axis segments, each running from the core boundary outward.
fn axis_segments(center: Point, core_boundary: f32, outer: f32) -> [(Point, Point); 4] {
    let (cx, cy) = (center.x(), center.y());
    [
        (Point::new(cx - outer, cy), Point::new(cx - core_boundary, cy)),
        (Point::new(cx + core_boundary, cy), Point::new(cx + outer, cy)),
        (Point::new(cx, cy - outer), Point::new(cx, cy - core_boundary)),
        (Point::new(cx, cy + core_boundary), Point::new(cx, cy + outer)),
    ]
}

fn render_error(err: impl std::fmt::Display) -> export::Error {
    export::Error::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use techradar_core::semantic::{Item, Quadrant, QuadrantSlot, Ring};

    use super::*;
    use crate::{
        config::{LayoutConfig, StyleConfig},
        layout::{EngineBuilder, RadarGeometry},
    };

    fn sample_radar() -> Radar {
        let rings = vec![Ring::new("Core"), Ring::new("Adopt"), Ring::new("Trial")];
        let quadrants = vec![Quadrant::new(
            QuadrantSlot::UpperRight,
            "Tools",
            Color::new("#3b82f6").unwrap(),
        )];
        let items = vec![
            Item::core("Kernel"),
            Item::new("Hammer", 1, Placement::Quadrant(QuadrantSlot::UpperRight)),
            Item::new("Saw", 2, Placement::Quadrant(QuadrantSlot::LowerLeft)),
        ];
        Radar::new(rings, quadrants, items)
    }

    fn render(radar: &Radar, style: StyleConfig) -> Result<String, export::Error> {
        let config = LayoutConfig::default();
        let geometry = RadarGeometry::for_rings(&config, radar.rings().len());
        let layout = EngineBuilder::from_config(&config)
            .build()
            .calculate(radar.items(), geometry);
        let svg = Svg::new("unused.svg", config, style);
        svg.render_radar(radar, &layout).map(|doc| doc.to_string())
    }

    #[test]
    fn test_ring_opacity_formula() {
        assert!(approx_eq!(f32, ring_opacity(1, 5, 0.2), 0.8));
        assert!(approx_eq!(f32, ring_opacity(9, 5, 0.2), 0.2));
        // A single ring radar still has a non-zero denominator.
        assert!(approx_eq!(f32, ring_opacity(0, 1, 0.2), 1.0));
        assert!(approx_eq!(f32, ring_opacity(1, 1, 0.2), 0.2));
    }

    #[test]
    fn test_axis_segments_skip_core() {
        let segments = axis_segments(Point::new(100.0, 100.0), 10.0, 50.0);
        assert_eq!(segments[0].0, Point::new(50.0, 100.0));
        assert_eq!(segments[0].1, Point::new(90.0, 100.0));
        assert_eq!(segments[3].1, Point::new(100.0, 150.0));
    }

    #[test]
    fn test_renders_every_element() {
        let output = render(&sample_radar(), StyleConfig::default()).unwrap();

        assert_eq!(output.matches("class=\"blip\"").count(), 3);
        assert_eq!(output.matches("class=\"ring\"").count(), 3);
        assert_eq!(output.matches("class=\"axis\"").count(), 4);
        assert_eq!(output.matches("class=\"ring-label\"").count(), 3);
        assert!(output.contains("ADOPT"));
        assert!(output.contains("Kernel: No description available."));
        assert!(output.contains("data-id=\"2\""));
    }

    #[test]
    fn test_labels_follow_dots() {
        let output = render(&sample_radar(), StyleConfig::default()).unwrap();
        let last_dot = output.rfind("class=\"blip\"").unwrap();
        let first_label = output.find("class=\"ring-label\"").unwrap();
        assert!(first_label > last_dot);
    }

    #[test]
    fn test_invalid_background_is_render_error() {
        let style: StyleConfig = toml::from_str(r#"background_color = "nope""#).unwrap();
        let result = render(&sample_radar(), style);
        assert!(matches!(result, Err(export::Error::Render(_))));
    }
}
