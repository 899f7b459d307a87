//! Rendering options for alignment tracks.

use crate::xml::Element;

/// Colors reads by the likelihood of a base modification, using two colors.
const BASE_MODIFICATION_2COLOR: &str = "BASE_MODIFICATION_2COLOR";

/// Hides duplicate reads.
const FILTER: &str = "FILTER";

/// Groups reads by their haplotype phase tag.
const PHASE: &str = "PHASE";

/// Rendering options for an alignment track.
///
/// Only the options that have been set are written; everything else is left
/// to the viewer's defaults.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    /// The base modification filter (e.g., `m,` for 5mC).
    basemod_filter: Option<String>,

    /// Whether reads are colored by base modification.
    base_modification_coloring: bool,

    /// Whether duplicate reads are hidden.
    duplicates_filtered: bool,

    /// Whether reads are grouped by phase.
    grouped_by_phase: bool,

    /// Whether indels below the threshold are hidden.
    hide_small_indels: Option<bool>,

    /// Whether bases are shaded by quality.
    shade_bases: Option<bool>,

    /// Whether mismatches are shown.
    show_mismatches: Option<bool>,

    /// The size below which indels are considered small.
    small_indel_threshold: Option<u32>,
}

impl RenderOptions {
    /// Sets the base modification filter.
    pub fn with_basemod_filter(mut self, filter: impl Into<String>) -> Self {
        self.basemod_filter = Some(filter.into());
        self
    }

    /// Colors reads by base modification likelihood.
    pub fn with_base_modification_coloring(mut self) -> Self {
        self.base_modification_coloring = true;
        self
    }

    /// Hides duplicate reads.
    pub fn with_duplicates_filtered(mut self) -> Self {
        self.duplicates_filtered = true;
        self
    }

    /// Groups reads by haplotype phase.
    pub fn with_grouping_by_phase(mut self) -> Self {
        self.grouped_by_phase = true;
        self
    }

    /// Hides indels smaller than `threshold`.
    pub fn with_small_indels_hidden(mut self, threshold: u32) -> Self {
        self.hide_small_indels = Some(true);
        self.small_indel_threshold = Some(threshold);
        self
    }

    /// Sets whether bases are shaded by quality.
    pub fn with_shade_bases(mut self, shade: bool) -> Self {
        self.shade_bases = Some(shade);
        self
    }

    /// Sets whether mismatches are shown.
    pub fn with_show_mismatches(mut self, show: bool) -> Self {
        self.show_mismatches = Some(show);
        self
    }

    /// Converts the [`RenderOptions`] into a `RenderOptions` element.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::track::RenderOptions;
    ///
    /// let element = RenderOptions::default()
    ///     .with_grouping_by_phase()
    ///     .to_element();
    ///
    /// assert_eq!(element.attributes().len(), 1);
    /// assert_eq!(element.attribute("groupByOption"), Some("PHASE"));
    /// ```
    pub fn to_element(&self) -> Element {
        let attributes = [
            ("basemodFilter", self.basemod_filter.clone()),
            (
                "colorOption",
                self.base_modification_coloring
                    .then(|| BASE_MODIFICATION_2COLOR.to_string()),
            ),
            (
                "duplicatesOption",
                self.duplicates_filtered.then(|| FILTER.to_string()),
            ),
            (
                "groupByOption",
                self.grouped_by_phase.then(|| PHASE.to_string()),
            ),
            ("hideSmallIndels", self.hide_small_indels.map(|v| v.to_string())),
            ("shadeBasesOption", self.shade_bases.map(|v| v.to_string())),
            ("showMismatches", self.show_mismatches.map(|v| v.to_string())),
            (
                "smallIndelThreshold",
                self.small_indel_threshold.map(|v| v.to_string()),
            ),
        ];

        attributes
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .fold(Element::new("RenderOptions"), |element, (key, value)| {
                element.with_attribute(key, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_writes_nothing_by_default() {
        assert!(RenderOptions::default().to_element().attributes().is_empty());
    }

    #[test]
    fn it_pairs_the_indel_threshold_with_hiding() {
        let element = RenderOptions::default()
            .with_small_indels_hidden(50)
            .to_element();

        assert_eq!(element.attribute("hideSmallIndels"), Some("true"));
        assert_eq!(element.attribute("smallIndelThreshold"), Some("50"));
    }

    #[test]
    fn it_writes_the_long_read_options_alphabetically() {
        let element = RenderOptions::default()
            .with_show_mismatches(true)
            .with_grouping_by_phase()
            .with_duplicates_filtered()
            .with_base_modification_coloring()
            .with_basemod_filter("m,")
            .to_element();

        assert_eq!(
            element.attributes(),
            &[
                (String::from("basemodFilter"), String::from("m,")),
                (
                    String::from("colorOption"),
                    String::from("BASE_MODIFICATION_2COLOR")
                ),
                (String::from("duplicatesOption"), String::from("FILTER")),
                (String::from("groupByOption"), String::from("PHASE")),
                (String::from("showMismatches"), String::from("true")),
            ]
        );
    }
}
