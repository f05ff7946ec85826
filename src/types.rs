//! Core types for the inkboard drawing core.
//!
//! Points come in three coordinate spaces and each space has its own type,
//! so a call site can never be ambiguous about which one it holds:
//!
//! - [`ClientPoint`] - raw input device coordinates, before pan/zoom
//! - [`ViewPoint`] - document coordinates, invariant under pan/zoom
//! - [`PixelPoint`] - integer raster indices into a [`PixelBuffer`](crate::raster::PixelBuffer)

use crate::error::{CanvasError, CanvasResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Points
// ============================================================================

/// A point in client space (raw pointer/touch coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientPoint {
    pub x: f32,
    pub y: f32,
}

impl ClientPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance `|dx| + |dy|` to another client point.
    #[inline]
    pub fn manhattan_distance(&self, other: ClientPoint) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance to another client point.
    #[inline]
    pub fn distance(&self, other: ClientPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn midpoint(&self, other: ClientPoint) -> ClientPoint {
        ClientPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A point in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewPoint {
    pub x: f32,
    pub y: f32,
}

impl ViewPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the raster pixel containing this document point.
    #[inline]
    pub fn to_pixel(self) -> PixelPoint {
        PixelPoint::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// An integer raster index. May be negative or past the buffer edge;
/// bounds are checked by whoever indexes the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle, `width`/`height` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle covering both inclusive corners.
    pub fn from_corners(min: PixelPoint, max: PixelPoint) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: (max.x - min.x + 1).max(0) as u32,
            height: (max.y - min.y + 1).max(0) as u32,
        }
    }

    #[inline]
    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && (p.x as i64) < self.x as i64 + self.width as i64
            && (p.y as i64) < self.y as i64 + self.height as i64
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

// ============================================================================
// Color
// ============================================================================

/// Packed RGBA color, `0xRRGGBBAA`.
///
/// Serialized as a `#rrggbbaa` hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0x0000_00ff);
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const RED: Color = Color(0xff00_00ff);

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(u32::from_be_bytes([r, g, b, a]))
    }

    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.to_rgba()[0]
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.to_rgba()[1]
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.to_rgba()[2]
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.to_rgba()[3]
    }

    /// Largest per-channel absolute difference (R, G, B and A).
    #[inline]
    pub fn distance(self, other: Color) -> u8 {
        let a = self.to_rgba();
        let b = other.to_rgba();
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.abs_diff(*y))
            .max()
            .unwrap_or(0)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> CanvasResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || CanvasError::InvalidColor(hex.to_string());
        let parse = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        if !digits.is_ascii() {
            return Err(invalid());
        }
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                    channels[i] = v * 17;
                }
                Ok(Color::from_rgba(channels[0], channels[1], channels[2], 0xff))
            }
            6 | 8 => {
                let r = parse(&digits[0..2])?;
                let g = parse(&digits[2..4])?;
                let b = parse(&digits[4..6])?;
                let a = if digits.len() == 8 { parse(&digits[6..8])? } else { 0xff };
                Ok(Color::from_rgba(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:08x}", self.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tools & Modifiers
// ============================================================================

/// Active drawing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand strokes through the smoothing filter
    #[default]
    Brush,
    /// Paint-bucket flood fill at the pointer
    Bucket,
}

/// Keyboard modifiers held during an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub control: bool,
    #[serde(default)]
    pub platform: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
}

impl Modifiers {
    /// Control or Command/Meta: the modifier that turns drags into pans
    /// and wheel scrolls into zooms.
    #[inline]
    pub fn pan_zoom(&self) -> bool {
        self.control || self.platform
    }
}
