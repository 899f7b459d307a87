//! The value range of a numeric track.

use crate::session::track::format_float;
use crate::xml::Element;

/// The axis scale of every [`DataRange`].
const LINEAR: &str = "LINEAR";

/// The displayed value range of a numeric track.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRange {
    /// The baseline value.
    baseline: f64,

    /// Whether the baseline is drawn.
    draw_baseline: bool,

    /// Whether the axis is flipped, if specified.
    flip_axis: Option<bool>,

    /// The maximum value, if fixed.
    ///
    /// Autoscaled tracks leave this unset.
    maximum: Option<f64>,

    /// The minimum value.
    minimum: f64,
}

impl DataRange {
    /// Creates a linear [`DataRange`] with a drawn baseline at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::track::DataRange;
    ///
    /// let range = DataRange::linear(0.0, Some(1.0)).with_flip_axis(false);
    /// let element = range.to_element();
    ///
    /// assert_eq!(element.attribute("maximum"), Some("1.0"));
    /// assert_eq!(element.attribute("flipAxis"), Some("false"));
    /// assert_eq!(element.attribute("type"), Some("LINEAR"));
    /// ```
    pub fn linear(minimum: f64, maximum: Option<f64>) -> Self {
        Self {
            baseline: 0.0,
            draw_baseline: true,
            flip_axis: None,
            maximum,
            minimum,
        }
    }

    /// Sets whether the axis is flipped.
    pub fn with_flip_axis(mut self, flip_axis: bool) -> Self {
        self.flip_axis = Some(flip_axis);
        self
    }

    /// Gets the minimum value.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Gets the maximum value, if fixed.
    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    /// Converts the [`DataRange`] into a `DataRange` element.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("DataRange")
            .with_attribute("baseline", format_float(self.baseline))
            .with_attribute("drawBaseline", self.draw_baseline.to_string());

        if let Some(flip_axis) = self.flip_axis {
            element.push_attribute("flipAxis", flip_axis.to_string());
        }

        if let Some(maximum) = self.maximum {
            element.push_attribute("maximum", format_float(maximum));
        }

        element
            .with_attribute("minimum", format_float(self.minimum))
            .with_attribute("type", LINEAR)
    }
}
