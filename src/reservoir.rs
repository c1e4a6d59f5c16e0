//! Reservoir Module
//!
//! A named rectangular-prism vessel and the quantities derived from it.
//!
//! ## Derived Quantities
//! - Volume: `width * length * max_depth` (cubic meters)
//! - Surface area: `width * length` (square meters, top footprint)
//!
//! Neither is stored. Both are recomputed from the current field values on
//! every call, so a setter is immediately reflected in the next result.
//! Dimensions are not validated; negative inputs produce negative results.

use std::fmt;

/// Shape tag for a reservoir
///
/// There is a single shape today. The tag exists so that `are_same_type`
/// compares something real once other shapes are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservoirKind {
    /// Flat bottom, vertical walls, rectangular footprint
    #[default]
    RectangularPrism,
}

/// A named rectangular-prism reservoir (dimensions in meters)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reservoir {
    name: String,
    width: f64,
    length: f64,
    max_depth: f64,
}

impl Reservoir {
    /// Create a reservoir with the given name and dimensions, taken verbatim
    pub fn new(name: impl Into<String>, width: f64, length: f64, max_depth: f64) -> Self {
        Self {
            name: name.into(),
            width,
            length,
            max_depth,
        }
    }

    // =========================================================================
    // Derived Quantities
    // =========================================================================

    /// Volume in cubic meters
    pub fn calculate_volume(&self) -> f64 {
        self.width * self.length * self.max_depth
    }

    /// Top surface area in square meters
    pub fn calculate_surface_area(&self) -> f64 {
        self.width * self.length
    }

    /// Shape tag of this reservoir
    pub fn kind(&self) -> ReservoirKind {
        ReservoirKind::RectangularPrism
    }

    /// Whether both reservoirs share a shape (always true with one shape)
    pub fn are_same_type(&self, other: &Reservoir) -> bool {
        self.kind() == other.kind()
    }

    /// True iff both share a shape and this surface area is strictly smaller
    ///
    /// Orders by surface area only; reservoirs with equal area compare
    /// false in both directions.
    pub fn compare_surface_area(&self, other: &Reservoir) -> bool {
        if self.are_same_type(other) {
            return self.calculate_surface_area() < other.calculate_surface_area();
        }
        false
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    pub fn set_max_depth(&mut self, max_depth: f64) {
        self.max_depth = max_depth;
    }

    /// Print the six-line summary to stdout
    pub fn display_info(&self) {
        print!("{}", self);
    }
}

/// Six-line summary, each line newline-terminated
///
/// Shared by `display_info` and the text exporter.
impl fmt::Display for Reservoir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservoir: {}", self.name)?;
        writeln!(f, "Width: {} meters", self.width)?;
        writeln!(f, "Length: {} meters", self.length)?;
        writeln!(f, "Max Depth: {} meters", self.max_depth)?;
        writeln!(f, "Volume: {} cubic meters", self.calculate_volume())?;
        writeln!(f, "Surface Area: {} square meters", self.calculate_surface_area())
    }
}
