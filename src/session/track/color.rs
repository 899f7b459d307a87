//! Colors and color scales.

use crate::session::track::format_float;

/// An RGB color, written as `r,g,b`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color {
    /// The red channel.
    red: u8,

    /// The green channel.
    green: u8,

    /// The blue channel.
    blue: u8,
}

impl Color {
    /// Creates a new [`Color`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::track::Color;
    ///
    /// assert_eq!(Color::new(185, 185, 185).to_string(), "185,185,185");
    /// ```
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

/// A continuous color scale that interpolates between two colors.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuousColorScale {
    /// The value mapped to the low color.
    minimum: f64,

    /// The value mapped to the high color.
    maximum: f64,

    /// The color at the minimum.
    low: Color,

    /// The color at the maximum.
    high: Color,
}

impl ContinuousColorScale {
    /// Creates a new [`ContinuousColorScale`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::track::Color;
    /// use igvsession::session::track::ContinuousColorScale;
    ///
    /// let scale = ContinuousColorScale::new(
    ///     0.0,
    ///     127.0,
    ///     Color::new(255, 255, 255),
    ///     Color::new(0, 0, 178),
    /// );
    ///
    /// assert_eq!(
    ///     scale.to_string(),
    ///     "ContinuousColorScale;0.0;127.0;255,255,255;0,0,178"
    /// );
    /// ```
    pub fn new(minimum: f64, maximum: f64, low: Color, high: Color) -> Self {
        Self {
            minimum,
            maximum,
            low,
            high,
        }
    }
}

impl std::fmt::Display for ContinuousColorScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ContinuousColorScale;{};{};{};{}",
            format_float(self.minimum),
            format_float(self.maximum),
            self.low,
            self.high
        )
    }
}
