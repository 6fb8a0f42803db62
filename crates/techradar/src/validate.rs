//! Validation of raw radar documents into a typed [`Radar`].
//!
//! Every check reports the first problem it meets as a [`ValidationError`];
//! nothing is silently repaired except whitespace around text values and
//! blank tags, which are dropped.

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use serde_json::{Map, Value};
use thiserror::Error;

use techradar_core::{
    color::{Color, ColorError},
    semantic::{Item, ItemDetails, Movement, Placement, Quadrant, QuadrantSlot, Radar, Ring},
};

use crate::{
    config::StyleConfig,
    document::{QuadrantSection, RadarDocument},
    overrides::{TextOverride, parse_overrides},
};

/// Quadrant label that core entries must carry.
pub const CORE_LABEL: &str = "CORE";

/// Fields every raw entry must define, even when their value is empty.
pub const REQUIRED_ENTRY_FIELDS: [&str; 11] = [
    "Name",
    "Quadrant",
    "Ring",
    "Link",
    "Moved",
    "Description",
    "Tags",
    "Downloads",
    "Forks",
    "Activity Metric",
    "Languages",
];

/// Reasons a radar document is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("the first ring must be named \"Core\"")]
    MissingCoreRing,

    #[error("quadrant #{position} needs an index between 0 and 3 and a non-empty name")]
    InvalidQuadrant { position: usize },

    #[error("invalid color for {owner}: {source}")]
    InvalidColor {
        owner: String,
        #[source]
        source: ColorError,
    },

    #[error("each entry must be an object")]
    NotAnObject,

    #[error("entry is missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("entry Name is required")]
    MissingName,

    #[error("entry \"{entry}\": {field} is required")]
    EmptyField { entry: String, field: &'static str },

    #[error("entry \"{entry}\": Quadrant \"{label}\" must match \"{expected}\"")]
    QuadrantMismatch {
        entry: String,
        label: String,
        expected: String,
    },

    #[error("entry \"{entry}\": Ring \"{ring}\" does not exist in the configured rings")]
    UnknownRing { entry: String, ring: String },

    #[error("core entry \"{entry}\": Ring must be the core ring")]
    CoreRingRequired { entry: String },

    #[error("entry \"{entry}\": non-core entries cannot use the core ring")]
    CoreRingReserved { entry: String },

    #[error("entry \"{entry}\": Moved must be -1, 0, or 1")]
    InvalidMoved { entry: String },

    #[error("entry \"{entry}\": Tags must be an array")]
    TagsNotArray { entry: String },

    #[error("entry \"{entry}\": Tags must include at least one value")]
    NoTags { entry: String },

    #[error("entry \"{entry}\": {field} must be a non-negative number")]
    InvalidNumber { entry: String, field: &'static str },

    #[error("entry \"{entry}\": Languages must be an object")]
    LanguagesNotObject { entry: String },

    #[error("entry \"{entry}\": Languages keys must be non-empty strings")]
    EmptyLanguageKey { entry: String },

    #[error("entry \"{entry}\": Languages[\"{language}\"] must be a non-negative number")]
    InvalidLanguageAmount { entry: String, language: String },
}

/// Validates `document` and builds the typed radar.
///
/// `story_markdown` is the narrative text (possibly empty); its `## name`
/// blocks override item descriptions and link names.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, in document order.
pub fn build_radar(
    document: &RadarDocument,
    story_markdown: &str,
    style: &StyleConfig,
) -> Result<Radar, ValidationError> {
    let rings = build_rings(document)?;
    let ring_index: HashMap<String, usize> = rings
        .iter()
        .enumerate()
        .map(|(index, ring)| (ring.name().to_lowercase(), index))
        .collect();
    let overrides = parse_overrides(story_markdown);

    let mut items = Vec::new();
    let core_context = EntryContext {
        ring_index: &ring_index,
        expected_quadrant: CORE_LABEL,
        placement: Placement::Core,
    };
    for raw in &document.core.entries {
        items.push(core_context.build_item(raw, &overrides)?);
    }

    let mut quadrants: Vec<Quadrant> = Vec::new();
    for (position, section) in document.quadrants.iter().enumerate() {
        let quadrant = build_quadrant(position, section, style)?;
        let context = EntryContext {
            ring_index: &ring_index,
            expected_quadrant: quadrant.name(),
            placement: Placement::Quadrant(quadrant.slot()),
        };
        for raw in &section.entries {
            items.push(context.build_item(raw, &overrides)?);
        }

        // A later header for the same slot replaces the earlier one.
        quadrants.retain(|existing| existing.slot() != quadrant.slot());
        quadrants.push(quadrant);
    }
    quadrants.sort_by_key(|quadrant| quadrant.slot());

    debug!(
        rings_count = rings.len(),
        quadrants_count = quadrants.len(),
        items_count = items.len();
        "Radar document validated",
    );

    Ok(Radar::new(rings, quadrants, items).with_story_markdown(story_markdown))
}

fn build_rings(document: &RadarDocument) -> Result<Vec<Ring>, ValidationError> {
    let is_core = document
        .rings
        .first()
        .is_some_and(|ring| ring.name.trim().eq_ignore_ascii_case("core"));
    if !is_core {
        return Err(ValidationError::MissingCoreRing);
    }

    document
        .rings
        .iter()
        .map(|spec| {
            let name = spec.name.trim();
            let ring = Ring::new(name);
            match spec.color.as_deref().filter(|color| !color.trim().is_empty()) {
                Some(color) => {
                    let color = parse_color(color, || format!("ring \"{name}\""))?;
                    Ok(ring.with_color(color))
                }
                None => Ok(ring),
            }
        })
        .collect()
}

fn build_quadrant(
    position: usize,
    section: &QuadrantSection,
    style: &StyleConfig,
) -> Result<Quadrant, ValidationError> {
    let invalid = || ValidationError::InvalidQuadrant { position };
    let spec = section.quadrant.as_ref().ok_or_else(invalid)?;

    let slot = spec
        .index
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|index| QuadrantSlot::from_index(index as usize))
        .ok_or_else(invalid)?;
    let name = spec
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(invalid)?;

    let color = match spec.color.as_deref().filter(|color| !color.trim().is_empty()) {
        Some(color) => parse_color(color, || format!("quadrant \"{name}\""))?,
        None => style
            .quadrant_color(slot.index())
            .map_err(|source| ValidationError::InvalidColor {
                owner: format!("quadrant \"{name}\" (style fallback)"),
                source,
            })?,
    };

    trace!(slot:% = slot, name; "Quadrant header validated");
    Ok(Quadrant::new(slot, name, color))
}

fn parse_color(value: &str, owner: impl FnOnce() -> String) -> Result<Color, ValidationError> {
    Color::new(value.trim()).map_err(|source| ValidationError::InvalidColor {
        owner: owner(),
        source,
    })
}

/// What an entry must agree with, given the section it appears in.
struct EntryContext<'a> {
    ring_index: &'a HashMap<String, usize>,
    expected_quadrant: &'a str,
    placement: Placement,
}

impl EntryContext<'_> {
    fn build_item(
        &self,
        raw: &Value,
        overrides: &HashMap<String, TextOverride>,
    ) -> Result<Item, ValidationError> {
        let entry = raw.as_object().ok_or(ValidationError::NotAnObject)?;

        let missing: Vec<&'static str> = REQUIRED_ENTRY_FIELDS
            .into_iter()
            .filter(|field| !entry.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let name = text_field(entry, "Name");
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let required = |field: &'static str| {
            let value = text_field(entry, field);
            if value.is_empty() {
                Err(ValidationError::EmptyField {
                    entry: name.clone(),
                    field,
                })
            } else {
                Ok(value)
            }
        };

        let label = required("Quadrant")?;
        if !label.eq_ignore_ascii_case(self.expected_quadrant) {
            return Err(ValidationError::QuadrantMismatch {
                entry: name.clone(),
                label,
                expected: self.expected_quadrant.to_string(),
            });
        }

        let ring_label = required("Ring")?;
        let ring = *self
            .ring_index
            .get(&ring_label.to_lowercase())
            .ok_or_else(|| ValidationError::UnknownRing {
                entry: name.clone(),
                ring: ring_label.clone(),
            })?;
        match (self.placement.is_core(), ring == 0) {
            (true, false) => {
                return Err(ValidationError::CoreRingRequired {
                    entry: name.clone(),
                });
            }
            (false, true) => {
                return Err(ValidationError::CoreRingReserved {
                    entry: name.clone(),
                });
            }
            _ => {}
        }

        let link = required("Link")?;
        let moved = number_value(&entry["Moved"])
            .filter(|value| value.fract() == 0.0)
            .and_then(|value| Movement::from_value(value as i64))
            .ok_or_else(|| ValidationError::InvalidMoved {
                entry: name.clone(),
            })?;
        let description = required("Description")?;
        let tags = tags_field(&name, &entry["Tags"])?;
        let downloads = non_negative(&name, entry, "Downloads")?;
        let forks = non_negative(&name, entry, "Forks")?;
        let activity_metric = non_negative(&name, entry, "Activity Metric")?;
        let languages = languages_field(&name, &entry["Languages"])?;

        let text = overrides.get(&name).cloned().unwrap_or_default();
        let details = ItemDetails {
            link_name: if text.link_name.is_empty() {
                hostname(&link)
            } else {
                text.link_name
            },
            description: if text.description.is_empty() {
                description
            } else {
                text.description
            },
            link,
            moved,
            tags,
            downloads,
            forks,
            activity_metric,
            languages,
        };

        Ok(Item::new(name, ring, self.placement).with_details(details))
    }
}

/// Trimmed textual form of a scalar field; empty for anything else.
fn text_field(entry: &Map<String, Value>, field: &str) -> String {
    entry.get(field).map(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

/// Finite number from a JSON number or a numeric string.
fn number_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn non_negative(
    name: &str,
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    number_value(&entry[field])
        .filter(|value| *value >= 0.0)
        .ok_or_else(|| ValidationError::InvalidNumber {
            entry: name.to_string(),
            field,
        })
}

fn tags_field(name: &str, value: &Value) -> Result<Vec<String>, ValidationError> {
    let raw = value.as_array().ok_or_else(|| ValidationError::TagsNotArray {
        entry: name.to_string(),
    })?;
    let tags: Vec<String> = raw
        .iter()
        .map(|tag| match tag {
            Value::String(text) => text.trim().to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .filter(|tag| !tag.is_empty())
        .collect();
    if tags.is_empty() {
        return Err(ValidationError::NoTags {
            entry: name.to_string(),
        });
    }
    Ok(tags)
}

fn languages_field(name: &str, value: &Value) -> Result<BTreeMap<String, f64>, ValidationError> {
    let raw = value
        .as_object()
        .ok_or_else(|| ValidationError::LanguagesNotObject {
            entry: name.to_string(),
        })?;

    raw.iter()
        .map(|(language, amount)| {
            let language = language.trim();
            if language.is_empty() {
                return Err(ValidationError::EmptyLanguageKey {
                    entry: name.to_string(),
                });
            }
            let amount = number_value(amount)
                .filter(|amount| *amount >= 0.0)
                .ok_or_else(|| ValidationError::InvalidLanguageAmount {
                    entry: name.to_string(),
                    language: language.to_string(),
                })?;
            Ok((language.to_string(), amount))
        })
        .collect()
}

/// Host name of `link` without a leading `www.`, or `link` itself when it
/// has no recognisable host.
///
/// # Examples
///
/// ```
/// # use techradar::validate::hostname;
/// assert_eq!(hostname("https://www.rust-lang.org/learn"), "rust-lang.org");
/// assert_eq!(hostname("not a url"), "not a url");
/// ```
pub fn hostname(link: &str) -> String {
    let Some((scheme, rest)) = link.split_once("://") else {
        return link.to_string();
    };
    let valid_scheme = scheme
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return link.to_string();
    }

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = if host_port.starts_with('[') {
        host_port
            .find(']')
            .map_or(host_port, |end| &host_port[..=end])
    } else {
        host_port.split(':').next().unwrap_or_default()
    };

    if host.is_empty() || host.contains(char::is_whitespace) {
        return link.to_string();
    }
    let host = host.to_lowercase();
    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}
