use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

/// Common capability every shape variant supports.
pub trait Shape: fmt::Debug {
    fn area(&self) -> f64;

    /// Multi-line description with dimensions and the area to two decimals.
    fn shape_info(&self) -> String;

    fn summary(&self) -> ShapeSummary;

    fn display_shape_info(&self) {
        println!("{}", self.shape_info());
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn shape_info(&self) -> String {
        format!(
            "Circle Information:\n  Radius: {}\n  Area: {:.2}",
            self.radius,
            round_half_away(self.area())
        )
    }

    fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            kind: "circle",
            dimensions: vec![("radius", self.radius)],
            area: self.area(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn shape_info(&self) -> String {
        format!(
            "Rectangle Information:\n  Width: {}\n  Height: {}\n  Area: {:.2}",
            self.width,
            self.height,
            round_half_away(self.area())
        )
    }

    fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            kind: "rectangle",
            dimensions: vec![("width", self.width), ("height", self.height)],
            area: self.area(),
        }
    }
}

/// Rounds to two decimals with ties going away from zero, so `0.125` shows as `0.13`.
fn round_half_away(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Serializable snapshot of a shape for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub kind: &'static str,
    #[serde(serialize_with = "serialize_dimensions")]
    pub dimensions: Vec<(&'static str, f64)>,
    pub area: f64,
}

fn serialize_dimensions<S>(
    dimensions: &[(&'static str, f64)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(dimensions.len()))?;
    for (name, value) in dimensions {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

/// Closed set of shape variants that can be built from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl ShapeSpec {
    pub fn build(self) -> Result<Box<dyn Shape>, ShapeError> {
        let shape: Box<dyn Shape> = match self {
            ShapeSpec::Circle { radius } => {
                check_dimension("radius", radius)?;
                Box::new(Circle::new(radius))
            }
            ShapeSpec::Rectangle { width, height } => {
                check_dimension("width", width)?;
                check_dimension("height", height)?;
                Box::new(Rectangle::new(width, height))
            }
        };

        let area = shape.area();
        if !area.is_finite() {
            return Err(ShapeError::AreaOverflow { spec: self });
        }
        Ok(shape)
    }
}

fn check_dimension(dimension: &'static str, value: f64) -> Result<(), ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension { dimension, value })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("{dimension} must be a finite, non-negative number (got {value})")]
    InvalidDimension { dimension: &'static str, value: f64 },
    #[error("area of {spec:?} does not fit in a finite number")]
    AreaOverflow { spec: ShapeSpec },
}
