//! Tracks.
//!
//! A [`Track`] is the visual representation of a single resource (or, for
//! the reference sequence, of the genome itself) within a panel. Every track
//! carries an identifier, which the viewer uses as a lookup key, a display
//! name, a font size, and a visibility flag. Everything else depends on the
//! track's [`Kind`].
//!
//! Track attributes are written in lexicographic order by key, which is the
//! order the viewer itself uses when saving a session.

pub mod color;
pub mod data_range;
pub mod render_options;
pub mod strand;

use std::collections::BTreeMap;

pub use color::Color;
pub use color::ContinuousColorScale;
pub use data_range::DataRange;
pub use render_options::RenderOptions;
pub use strand::Strand;

use crate::xml::Element;

/// The default font size for track labels.
pub const DEFAULT_FONT_SIZE: u32 = 10;

/// The feature visibility window that never hides features.
pub const UNBOUNDED_VISIBILITY_WINDOW: i32 = i32::MAX;

/// How data source tracks are drawn.
const BAR_CHART: &str = "BAR_CHART";

/// How data source values are summarized when zoomed out.
const MEAN: &str = "mean";

/// The sequencing experiment behind alignment tracks (long reads).
const THIRD_GEN: &str = "THIRD_GEN";

/// Formats a float the way the viewer writes them (`0.0`, `1.0`, `0.2`).
pub(crate) fn format_float(value: f64) -> String {
    format!("{value:?}")
}

////////////////////////////////////////////////////////////////////////////////////////
// Display settings
////////////////////////////////////////////////////////////////////////////////////////

/// How densely features or alignments are packed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayMode {
    /// Overlapping features share one row.
    Collapsed,

    /// Every alignment is drawn at full height.
    Full,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Collapsed => write!(f, "COLLAPSED"),
            DisplayMode::Full => write!(f, "FULL"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Kinds
////////////////////////////////////////////////////////////////////////////////////////

/// A numeric signal track (e.g., a bigWig), drawn as a fixed-range bar chart
/// of mean values.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSource {
    /// The displayed range.
    data_range: DataRange,
}

impl DataSource {
    /// Creates a new [`DataSource`] over `data_range`.
    pub fn new(data_range: DataRange) -> Self {
        Self { data_range }
    }

    /// Gets the displayed range.
    pub fn data_range(&self) -> &DataRange {
        &self.data_range
    }
}

/// The read coverage computed from an alignment file.
#[derive(Clone, Debug, PartialEq)]
pub struct Coverage {
    /// Whether the range is autoscaled.
    auto_scale: bool,

    /// The allele fraction above which mismatches are highlighted.
    snp_threshold: f64,

    /// The displayed range.
    data_range: DataRange,
}

impl Coverage {
    /// Creates an autoscaled coverage track.
    pub fn new(snp_threshold: f64, data_range: DataRange) -> Self {
        Self {
            auto_scale: true,
            snp_threshold,
            data_range,
        }
    }

    /// Gets the displayed range.
    pub fn data_range(&self) -> &DataRange {
        &self.data_range
    }
}

/// Individual long-read alignments.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    /// The default read color.
    color: Color,

    /// The display mode.
    display_mode: DisplayMode,

    /// The rendering options.
    render_options: RenderOptions,
}

impl Alignment {
    /// Creates a new [`Alignment`].
    pub fn new(color: Color, display_mode: DisplayMode, render_options: RenderOptions) -> Self {
        Self {
            color,
            display_mode,
            render_options,
        }
    }

    /// Gets the rendering options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }
}

/// Interval features (e.g., BED records or gene annotations).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
    /// The color scale for scored features.
    color_scale: Option<ContinuousColorScale>,

    /// The widest span (in bases) at which features are still loaded.
    feature_visibility_window: Option<i32>,

    /// Whether features are grouped by strand.
    group_by_strand: Option<bool>,
}

impl Feature {
    /// Sets the color scale.
    pub fn with_color_scale(mut self, color_scale: ContinuousColorScale) -> Self {
        self.color_scale = Some(color_scale);
        self
    }

    /// Loads features at any zoom level.
    pub fn with_unbounded_visibility_window(mut self) -> Self {
        self.feature_visibility_window = Some(UNBOUNDED_VISIBILITY_WINDOW);
        self
    }

    /// Sets whether features are grouped by strand.
    pub fn with_group_by_strand(mut self, group_by_strand: bool) -> Self {
        self.group_by_strand = Some(group_by_strand);
        self
    }
}

/// The reference sequence.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sequence {
    /// The translation strand and whether the translation is shown.
    translation: Option<(Strand, bool)>,
}

impl Sequence {
    /// Sets the translation strand and whether the translation is shown.
    pub fn with_translation(mut self, strand: Strand, shown: bool) -> Self {
        self.translation = Some((strand, shown));
        self
    }
}

/// Variant calls.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Variant {
    /// The display mode, if not the viewer's default.
    display_mode: Option<DisplayMode>,
}

impl Variant {
    /// Sets the display mode.
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = Some(display_mode);
        self
    }
}

/// The kind of a [`Track`].
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    /// A numeric signal track.
    DataSource(DataSource),

    /// A coverage track.
    Coverage(Coverage),

    /// An alignment track.
    Alignment(Alignment),

    /// A feature track.
    Feature(Feature),

    /// A reference sequence track.
    Sequence(Sequence),

    /// A variant track.
    Variant(Variant),
}

impl Kind {
    /// The viewer class implementing this kind of track.
    pub fn class(&self) -> &'static str {
        match self {
            Kind::DataSource(_) => "org.broad.igv.track.DataSourceTrack",
            Kind::Coverage(_) => "org.broad.igv.sam.CoverageTrack",
            Kind::Alignment(_) => "org.broad.igv.sam.AlignmentTrack",
            Kind::Feature(_) => "org.broad.igv.track.FeatureTrack",
            Kind::Sequence(_) => "org.broad.igv.track.SequenceTrack",
            Kind::Variant(_) => "org.broad.igv.variant.VariantTrack",
        }
    }

    /// Adds the kind-specific attributes and returns the nested element, if
    /// any.
    fn write(&self, attributes: &mut BTreeMap<&'static str, String>) -> Option<Element> {
        match self {
            Kind::DataSource(source) => {
                attributes.insert("autoScale", false.to_string());
                attributes.insert("renderer", BAR_CHART.to_string());
                attributes.insert("windowFunction", MEAN.to_string());
                Some(source.data_range.to_element())
            }
            Kind::Coverage(coverage) => {
                attributes.insert("autoScale", coverage.auto_scale.to_string());
                attributes.insert("snpThreshold", format_float(coverage.snp_threshold));
                Some(coverage.data_range.to_element())
            }
            Kind::Alignment(alignment) => {
                attributes.insert("color", alignment.color.to_string());
                attributes.insert("displayMode", alignment.display_mode.to_string());
                attributes.insert("experimentType", THIRD_GEN.to_string());
                Some(alignment.render_options.to_element())
            }
            Kind::Feature(feature) => {
                if let Some(scale) = &feature.color_scale {
                    attributes.insert("colorScale", scale.to_string());
                }

                if let Some(window) = feature.feature_visibility_window {
                    attributes.insert("featureVisibilityWindow", window.to_string());
                }

                if let Some(group) = feature.group_by_strand {
                    attributes.insert("groupByStrand", group.to_string());
                }

                None
            }
            Kind::Sequence(sequence) => {
                if let Some((strand, shown)) = sequence.translation {
                    attributes.insert("sequenceTranslationStrandValue", strand.to_string());
                    attributes.insert("shouldShowTranslation", shown.to_string());
                }

                None
            }
            Kind::Variant(variant) => {
                if let Some(mode) = variant.display_mode {
                    attributes.insert("displayMode", mode.to_string());
                }

                None
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Tracks
////////////////////////////////////////////////////////////////////////////////////////

/// A track within a panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// The identifier, unique within a session.
    id: String,

    /// The display name.
    name: String,

    /// The key used to match sample attributes, if any.
    attribute_key: Option<String>,

    /// The font size of the track label.
    font_size: u32,

    /// Whether the track is visible.
    visible: bool,

    /// The kind of track.
    kind: Kind,
}

impl Track {
    /// Creates a new, visible [`Track`] with the default font size.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Track;
    /// use igvsession::session::track::Kind;
    /// use igvsession::session::track::Variant;
    ///
    /// let track = Track::new(
    ///     "http://localhost:8080/vcfs/a.vcf.gz",
    ///     "All variants",
    ///     Kind::Variant(Variant::default()),
    /// )
    /// .with_attribute_key("joint_vcf");
    ///
    /// assert_eq!(track.attribute_key(), Some("joint_vcf"));
    /// assert_eq!(track.font_size(), 10);
    /// assert!(track.visible());
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: Kind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attribute_key: None,
            font_size: DEFAULT_FONT_SIZE,
            visible: true,
            kind,
        }
    }

    /// Sets the attribute key.
    pub fn with_attribute_key(mut self, key: impl Into<String>) -> Self {
        self.attribute_key = Some(key.into());
        self
    }

    /// Gets the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the attribute key, if any.
    pub fn attribute_key(&self) -> Option<&str> {
        self.attribute_key.as_deref()
    }

    /// Gets the font size.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Gets whether the track is visible.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Gets the kind.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Converts the [`Track`] into a `Track` element.
    pub fn to_element(&self) -> Element {
        let mut attributes = BTreeMap::new();

        if let Some(key) = &self.attribute_key {
            attributes.insert("attributeKey", key.clone());
        }

        attributes.insert("clazz", self.kind.class().to_string());
        attributes.insert("fontSize", self.font_size.to_string());
        attributes.insert("id", self.id.clone());
        attributes.insert("name", self.name.clone());
        attributes.insert("visible", self.visible.to_string());

        let nested = self.kind.write(&mut attributes);

        let mut element = attributes
            .into_iter()
            .fold(Element::new("Track"), |element, (key, value)| {
                element.with_attribute(key, value)
            });

        if let Some(nested) = nested {
            element.push_child(nested);
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(element: &Element) -> Vec<&str> {
        element
            .attributes()
            .iter()
            .map(|(key, _)| key.as_str())
            .collect()
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(0.2), "0.2");
        assert_eq!(format_float(127.0), "127.0");
    }

    #[test]
    fn it_writes_data_source_tracks() {
        let track = Track::new(
            "http://h/a.bw",
            "a.bw",
            Kind::DataSource(DataSource::new(DataRange::linear(0.0, Some(1.0)))),
        )
        .with_attribute_key("a.bw");

        let element = track.to_element();
        assert_eq!(
            keys(&element),
            [
                "attributeKey",
                "autoScale",
                "clazz",
                "fontSize",
                "id",
                "name",
                "renderer",
                "visible",
                "windowFunction"
            ]
        );
        assert_eq!(element.attribute("renderer"), Some("BAR_CHART"));
        assert_eq!(element.attribute("windowFunction"), Some("mean"));
        assert_eq!(element.attribute("autoScale"), Some("false"));
        assert_eq!(element.children().len(), 1);
        assert_eq!(element.children()[0].name(), "DataRange");
    }

    #[test]
    fn it_writes_alignment_tracks() {
        let track = Track::new(
            "http://h/a.bam",
            "a.bam",
            Kind::Alignment(Alignment::new(
                Color::new(185, 185, 185),
                DisplayMode::Full,
                RenderOptions::default(),
            )),
        );

        let element = track.to_element();
        assert_eq!(
            keys(&element),
            [
                "clazz",
                "color",
                "displayMode",
                "experimentType",
                "fontSize",
                "id",
                "name",
                "visible"
            ]
        );
        assert_eq!(element.attribute("clazz"), Some("org.broad.igv.sam.AlignmentTrack"));
        assert_eq!(element.attribute("displayMode"), Some("FULL"));
        assert_eq!(element.attribute("experimentType"), Some("THIRD_GEN"));
        assert_eq!(element.children()[0].name(), "RenderOptions");
    }

    #[test]
    fn it_writes_feature_tracks_without_children() {
        let track = Track::new(
            "http://h/a.bed.gz",
            "a.bed.gz",
            Kind::Feature(
                Feature::default()
                    .with_unbounded_visibility_window()
                    .with_group_by_strand(false),
            ),
        );

        let element = track.to_element();
        assert_eq!(element.attribute("featureVisibilityWindow"), Some("2147483647"));
        assert_eq!(element.attribute("groupByStrand"), Some("false"));
        assert_eq!(element.attribute("colorScale"), None);
        assert!(element.children().is_empty());
    }

    #[test]
    fn it_writes_sequence_translation_only_when_set() {
        let plain = Track::new(
            "Reference sequence",
            "Reference sequence",
            Kind::Sequence(Sequence::default()),
        )
        .to_element();
        assert_eq!(keys(&plain), ["clazz", "fontSize", "id", "name", "visible"]);

        let translated = Track::new(
            "Reference sequence",
            "Reference sequence",
            Kind::Sequence(Sequence::default().with_translation(Strand::Positive, false)),
        )
        .to_element();
        assert_eq!(
            translated.attribute("sequenceTranslationStrandValue"),
            Some("+")
        );
        assert_eq!(translated.attribute("shouldShowTranslation"), Some("false"));
    }
}
