//! Color handling for radar diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Ring, quadrant and core colors all arrive as CSS
//! color strings and are parsed through here.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use thiserror::Error;

/// Error returned when a CSS color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorError {
    input: String,
    reason: String,
}

/// A parsed CSS color, rendered back through `Display` for SVG attributes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    inner: DynamicColor,
}

impl Color {
    /// Parses a CSS color string: hex, `rgb(..)` or a named color.
    ///
    /// # Examples
    ///
    /// ```
    /// use techradar_core::color::Color;
    ///
    /// let teal = Color::new("#0f766e").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert_ne!(teal, blue);
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        DynamicColor::from_str(input)
            .map(|inner| Self { inner })
            .map_err(|err| ColorError {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
