//! The relative vertical sizing of panels.
//!
//! A layout is a sequence of divider positions, each a fraction of the total
//! height, separating adjacent panels. With implicit endpoints at `0` and `1`,
//! the size of each panel is the difference between consecutive dividers.
//! For example, the dividers `0.15,0.75` describe three panels sized 15%, 60%,
//! and 25% of the total height.

use crate::xml::Element;

/// The delimiter between divider fractions.
const DELIMITER: char = ',';

/// The number of decimal places in which divider fractions are written.
const PRECISION: usize = 2;

/// The largest distance from a multiple of `10^-PRECISION` still considered
/// equal to it.
const TOLERANCE: f64 = 1e-9;

/// An error related to a [`Layout`].
#[derive(Debug)]
pub enum Error {
    /// A divider fraction was not strictly between zero and one.
    OutOfRange(f64),

    /// A divider fraction did not come after the previous one.
    NotIncreasing(f64, f64),

    /// A divider fraction had more decimal places than are written.
    TooPrecise(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange(fraction) => write!(
                f,
                "divider fraction {fraction} is not strictly between 0 and 1"
            ),
            Error::NotIncreasing(previous, fraction) => write!(
                f,
                "divider fraction {fraction} does not come after the previous divider fraction \
                 {previous}"
            ),
            Error::TooPrecise(fraction) => write!(
                f,
                "divider fraction {fraction} has more than {PRECISION} decimal places"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// The divider positions between panels.
///
/// The default layout has no dividers and describes a single panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout(Vec<f64>);

impl Layout {
    /// Attempts to create a new [`Layout`] from divider fractions.
    ///
    /// Fractions must lie strictly between zero and one, strictly increase,
    /// and have at most two decimal places (the precision in which they are
    /// written).
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Layout;
    ///
    /// let layout = Layout::try_new([0.15, 0.75])?;
    /// assert_eq!(layout.panel_count(), 3);
    /// assert_eq!(layout.to_string(), "0.15,0.75");
    ///
    /// assert!(Layout::try_new([0.75, 0.15]).is_err());
    /// assert!(Layout::try_new([1.0]).is_err());
    /// assert!(Layout::try_new([0.151, 0.152]).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(fractions: impl IntoIterator<Item = f64>) -> Result<Self> {
        let fractions = fractions.into_iter().collect::<Vec<_>>();

        let mut previous: Option<f64> = None;
        for &fraction in &fractions {
            // NOTE: written so that `NaN` is rejected as out of range.
            if !(fraction > 0.0 && fraction < 1.0) {
                return Err(Error::OutOfRange(fraction));
            }

            if !is_representable(fraction) {
                return Err(Error::TooPrecise(fraction));
            }

            if let Some(previous) = previous {
                if fraction <= previous {
                    return Err(Error::NotIncreasing(previous, fraction));
                }
            }

            previous = Some(fraction);
        }

        Ok(Self(fractions))
    }

    /// Gets the divider fractions.
    pub fn divider_fractions(&self) -> &[f64] {
        &self.0
    }

    /// The number of panels described by the [`Layout`].
    pub fn panel_count(&self) -> usize {
        self.0.len() + 1
    }

    /// The fraction of the total height given to each panel, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Layout;
    ///
    /// let layout = Layout::try_new([0.3])?;
    /// let heights = layout.panel_fractions();
    ///
    /// assert_eq!(heights.len(), 2);
    /// assert!((heights[0] - 0.3).abs() < 1e-9);
    /// assert!((heights[1] - 0.7).abs() < 1e-9);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn panel_fractions(&self) -> Vec<f64> {
        let mut bounds = Vec::with_capacity(self.0.len() + 2);
        bounds.push(0.0);
        bounds.extend_from_slice(&self.0);
        bounds.push(1.0);

        bounds.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }

    /// Converts the [`Layout`] into a `PanelLayout` element.
    pub fn to_element(&self) -> Element {
        Element::new("PanelLayout").with_attribute("dividerFractions", self.to_string())
    }
}

/// Whether a fraction is written without rounding.
fn is_representable(fraction: f64) -> bool {
    let scaled = fraction * 10f64.powi(PRECISION as i32);
    (scaled - scaled.round()).abs() <= TOLERANCE * scaled.abs().max(1.0)
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fractions = self
            .0
            .iter()
            .map(|fraction| format!("{:.*}", PRECISION, fraction))
            .collect::<Vec<_>>();

        write!(f, "{}", fractions.join(DELIMITER.to_string().as_str()))
    }
}
