//! Techradar Core Types and Definitions
//!
//! This crate provides the foundational types shared by the technology radar
//! placement engine and its renderers. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, polar conversion and angular/radial ranges ([`geometry`] module)
//! - **Semantic**: Rings, quadrants, items and placed items ([`semantic`] module)

pub mod color;
pub mod geometry;
pub mod semantic;
