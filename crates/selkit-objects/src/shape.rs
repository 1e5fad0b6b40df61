//! Shape records.
//!
//! Both records are plain data (serializable field-for-field) with behavior
//! provided by the [`Shape`] trait, so a value decoded from JSON carries the
//! same methods as one built in code.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Something with an area.
pub trait Shape {
    /// Area in square units.
    fn area(&self) -> f64;
}

/// An axis-aligned rectangle.
///
/// Serializes as `{"width":..,"height":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        Self::area(self)
    }
}

/// Shorthand for [`Rectangle::new`].
#[must_use]
pub const fn rectangle(width: f64, height: f64) -> Rectangle {
    Rectangle::new(width, height)
}

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Distance from center to edge.
    pub radius: f64,
}

impl Circle {
    /// Create a circle.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
