//! Sessions for a single individual.
//!
//! A single-individual session shows, from top to bottom:
//!
//! - a data panel with the founder-phased methylation signal for each parent,
//! - optionally, a panel with the read-backed phased alignments (coverage
//!   and reads grouped by haplotype and colored by base modification), and
//! - a feature panel with the reference sequence, RefSeq Select genes, and the
//!   founder-phased haplotype blocks for each parent.

use crate::naming::Convention;
use crate::naming::DATA_PANEL;
use crate::naming::DEFAULT_BASE_URL;
use crate::naming::DEFAULT_GENOME;
use crate::naming::FEATURE_PANEL;
use crate::naming::MethylationType;
use crate::naming::Parent;
use crate::naming::REFERENCE_SEQUENCE;
use crate::naming::REFSEQ_SELECT_URL;
use crate::session;
use crate::session::Builder;
use crate::session::Layout;
use crate::session::Panel;
use crate::session::Resource;
use crate::session::Session;
use crate::session::Track;
use crate::session::resource;
use crate::session::track::Alignment;
use crate::session::track::Color;
use crate::session::track::ContinuousColorScale;
use crate::session::track::Coverage;
use crate::session::track::DataRange;
use crate::session::track::DataSource;
use crate::session::track::DisplayMode;
use crate::session::track::Feature;
use crate::session::track::Kind;
use crate::session::track::RenderOptions;
use crate::session::track::Sequence;
use crate::session::track::Strand;

/// The nominal height of the data panel.
const DATA_PANEL_HEIGHT: usize = 200;

/// The nominal height of the alignment panel.
const BAM_PANEL_HEIGHT: usize = 400;

/// The nominal height of the feature panel.
const FEATURE_PANEL_HEIGHT: usize = 150;

/// Dividers for the data (15%), alignment (60%), and feature (25%) panels.
const DIVIDERS_WITH_BAM: [f64; 2] = [0.15, 0.75];

/// Dividers for the data (30%) and feature (70%) panels.
const DIVIDERS_WITHOUT_BAM: [f64; 1] = [0.30];

/// The allele fraction above which coverage mismatches are highlighted.
const SNP_THRESHOLD: f64 = 0.2;

/// Indels shorter than this are hidden in the alignment track.
const SMALL_INDEL_THRESHOLD: u32 = 50;

/// The name of the RefSeq Select track.
const REFSEQ_SELECT: &str = "Refseq Select";

/// The order in which methylation and block tracks are displayed.
const PARENTS: [Parent; 2] = [Parent::Paternal, Parent::Maternal];

/// Options for a single-individual session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// The reference genome.
    genome: String,

    /// The base URL from which data files are served.
    base_url: String,

    /// Whether the alignment panel is included.
    include_bam_tracks: bool,

    /// The methylation type.
    methylation_type: MethylationType,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            genome: DEFAULT_GENOME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            include_bam_tracks: true,
            methylation_type: MethylationType::default(),
        }
    }
}

impl Options {
    /// Sets the reference genome.
    pub fn with_genome(mut self, genome: impl Into<String>) -> Self {
        self.genome = genome.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets whether the alignment panel is included.
    pub fn with_bam_tracks(mut self, include_bam_tracks: bool) -> Self {
        self.include_bam_tracks = include_bam_tracks;
        self
    }

    /// Sets the methylation type.
    pub fn with_methylation_type(mut self, methylation_type: MethylationType) -> Self {
        self.methylation_type = methylation_type;
        self
    }

    /// Gets the reference genome.
    pub fn genome(&self) -> &str {
        &self.genome
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets whether the alignment panel is included.
    pub fn include_bam_tracks(&self) -> bool {
        self.include_bam_tracks
    }

    /// Gets the methylation type.
    pub fn methylation_type(&self) -> MethylationType {
        self.methylation_type
    }

    /// The naming convention described by these options.
    fn convention(&self) -> Convention {
        Convention::new(
            self.base_url.as_str(),
            self.genome.as_str(),
            self.methylation_type,
        )
    }
}

/// Builds the session for a single individual.
///
/// Neither the individual identifier nor the locus is validated: both are
/// written into the document verbatim.
///
/// # Examples
///
/// ```
/// use igvsession::individual;
/// use igvsession::individual::Options;
///
/// let session = individual::build("200081", "chr14:100826000-100827000", &Options::default())?;
///
/// assert_eq!(session.genome(), "hg38");
/// assert_eq!(session.panels().len(), 3);
/// assert_eq!(session.layout().to_string(), "0.15,0.75");
///
/// let session = individual::build(
///     "200081",
///     "chr14:100826000-100827000",
///     &Options::default().with_bam_tracks(false),
/// )?;
///
/// assert_eq!(session.panels().len(), 2);
/// assert_eq!(session.layout().to_string(), "0.30");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build(individual: &str, locus: &str, options: &Options) -> Result<Session, session::Error> {
    let convention = options.convention();

    let mut builder = Builder::default().genome(options.genome())?.locus(locus)?;

    for parent in [Parent::Maternal, Parent::Paternal] {
        builder = builder.push_resource(Resource::new(
            convention.methylation_path(individual, parent),
            resource::Kind::BigWig,
        ));
    }

    for parent in PARENTS {
        builder = builder.push_resource(Resource::new(
            convention.haplotype_blocks_path(individual, parent),
            resource::Kind::Bed,
        ));
    }

    if options.include_bam_tracks() {
        builder = builder.push_resource(Resource::new(
            convention.haplotagged_bam_path(individual),
            resource::Kind::Bam,
        ));
    }

    let mut data = Panel::new(DATA_PANEL, DATA_PANEL_HEIGHT);
    for parent in PARENTS {
        data.push_track(methylation_track(&convention, individual, parent));
    }
    builder = builder.push_panel(data);

    if options.include_bam_tracks() {
        builder = builder.push_panel(bam_panel(&convention, individual));
    }

    let mut features = Panel::new(FEATURE_PANEL, FEATURE_PANEL_HEIGHT);
    features.push_track(reference_sequence_track());
    features.push_track(refseq_select_track());
    for parent in PARENTS {
        features.push_track(haplotype_blocks_track(&convention, individual, parent));
    }
    builder = builder.push_panel(features);

    let layout = if options.include_bam_tracks() {
        Layout::try_new(DIVIDERS_WITH_BAM)?
    } else {
        Layout::try_new(DIVIDERS_WITHOUT_BAM)?
    };

    Ok(builder.layout(layout)?.try_build()?)
}

/// A fixed-range methylation bar chart for one parent.
fn methylation_track(convention: &Convention, individual: &str, parent: Parent) -> Track {
    let file_name = convention.methylation_file_name(individual, parent);
    let range = DataRange::linear(0.0, Some(1.0)).with_flip_axis(false);

    Track::new(
        convention.methylation_path(individual, parent),
        file_name.as_str(),
        Kind::DataSource(DataSource::new(range)),
    )
    .with_attribute_key(file_name)
}

/// The panel holding the haplotagged coverage and alignments.
fn bam_panel(convention: &Convention, individual: &str) -> Panel {
    let path = convention.haplotagged_bam_path(individual);
    let file_name = convention.haplotagged_bam_file_name(individual);

    let coverage_name = format!("{file_name} Coverage");
    let coverage = Track::new(
        format!("{path}_coverage"),
        coverage_name.as_str(),
        Kind::Coverage(Coverage::new(
            SNP_THRESHOLD,
            DataRange::linear(0.0, None).with_flip_axis(false),
        )),
    )
    .with_attribute_key(coverage_name);

    let render_options = RenderOptions::default()
        .with_basemod_filter("m,")
        .with_base_modification_coloring()
        .with_duplicates_filtered()
        .with_grouping_by_phase()
        .with_small_indels_hidden(SMALL_INDEL_THRESHOLD)
        .with_shade_bases(false)
        .with_show_mismatches(true);

    let alignments = Track::new(
        path,
        file_name.as_str(),
        Kind::Alignment(Alignment::new(
            Color::new(185, 185, 185),
            DisplayMode::Full,
            render_options,
        )),
    )
    .with_attribute_key(file_name);

    let mut panel = Panel::new(format!("Panel{individual}_bam"), BAM_PANEL_HEIGHT);
    panel.push_track(coverage);
    panel.push_track(alignments);
    panel
}

/// The reference sequence, with translation hidden.
fn reference_sequence_track() -> Track {
    Track::new(
        REFERENCE_SEQUENCE,
        REFERENCE_SEQUENCE,
        Kind::Sequence(Sequence::default().with_translation(Strand::Positive, false)),
    )
    .with_attribute_key(REFERENCE_SEQUENCE)
}

/// The RefSeq Select gene annotations.
fn refseq_select_track() -> Track {
    let scale = ContinuousColorScale::new(
        0.0,
        127.0,
        Color::new(255, 255, 255),
        Color::new(0, 0, 178),
    );

    Track::new(
        REFSEQ_SELECT_URL,
        REFSEQ_SELECT,
        Kind::Feature(
            Feature::default()
                .with_color_scale(scale)
                .with_group_by_strand(false),
        ),
    )
    .with_attribute_key(REFSEQ_SELECT)
}

/// The haplotype blocks for one parent, loaded at any zoom level.
fn haplotype_blocks_track(convention: &Convention, individual: &str, parent: Parent) -> Track {
    let file_name = convention.haplotype_blocks_file_name(individual, parent);

    Track::new(
        convention.haplotype_blocks_path(individual, parent),
        file_name.as_str(),
        Kind::Feature(
            Feature::default()
                .with_unbounded_visibility_window()
                .with_group_by_strand(false),
        ),
    )
    .with_attribute_key(file_name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::xml::Element;
    use crate::xml::tests::parse;

    const INDIVIDUAL: &str = "200081";

    const LOCUS: &str = "chr14:100826000-100827000";

    fn xml(options: &Options) -> Result<String, Box<dyn std::error::Error>> {
        Ok(build(INDIVIDUAL, LOCUS, options)?.to_xml()?)
    }

    /// Collects every element of a tree in document order.
    fn flatten(element: &Element) -> Vec<&Element> {
        let mut elements = vec![element];
        for child in element.children() {
            elements.extend(flatten(child));
        }
        elements
    }

    #[test]
    fn it_matches_the_reference_document_with_alignments(
    ) -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            xml(&Options::default())?,
            include_str!("../tests/fixtures/individual-with-bam.xml")
        );
        Ok(())
    }

    #[test]
    fn it_matches_the_reference_document_without_alignments(
    ) -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            xml(&Options::default().with_bam_tracks(false))?,
            include_str!("../tests/fixtures/individual-without-bam.xml")
        );
        Ok(())
    }

    #[test]
    fn it_writes_the_session_attributes() -> Result<(), Box<dyn std::error::Error>> {
        let root = parse(&xml(&Options::default())?)?;

        assert_eq!(root.name(), "Session");
        assert_eq!(root.attribute("genome"), Some("hg38"));
        assert_eq!(root.attribute("locus"), Some(LOCUS));
        assert_eq!(root.attribute("version"), Some("8"));

        let root = parse(&xml(&Options::default().with_genome("hs1"))?)?;
        assert_eq!(root.attribute("genome"), Some("hs1"));

        Ok(())
    }

    #[test]
    fn it_references_the_expected_methylation_files() -> Result<(), Box<dyn std::error::Error>> {
        let session = build(INDIVIDUAL, LOCUS, &Options::default())?;
        let paths = session
            .resources()
            .iter()
            .map(|resource| resource.path())
            .collect::<Vec<_>>();

        assert!(paths.contains(
            &"http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.mat.count.hg38.bw"
        ));
        assert!(paths.contains(
            &"http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.pat.count.hg38.bw"
        ));
        assert!(session.panel("Panel200081_bam").is_some());

        let session = build(
            INDIVIDUAL,
            LOCUS,
            &Options::default()
                .with_base_url("https://example.org/data")
                .with_methylation_type(MethylationType::Model),
        )?;
        assert_eq!(
            session.resources()[0].path(),
            "https://example.org/data/founder-phased/200081.dna-methylation.founder-phased.mat.model.hg38.bw"
        );

        Ok(())
    }

    #[test]
    fn toggling_alignments_changes_only_the_alignment_elements(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let with = parse(&xml(&Options::default())?)?;
        let without = parse(&xml(&Options::default().with_bam_tracks(false))?)?;

        let mut expected = Element::new("Session");
        for (key, value) in with.attributes() {
            expected.push_attribute(key.as_str(), value.as_str());
        }

        for child in with.children() {
            match child.name() {
                "Resources" => {
                    let mut resources = Element::new("Resources");
                    for resource in child.children() {
                        if resource.attribute("type") != Some("bam") {
                            resources.push_child(resource.clone());
                        }
                    }
                    expected.push_child(resources);
                }
                "Panel" if child.attribute("name") == Some("Panel200081_bam") => {}
                "PanelLayout" => {
                    assert_eq!(child.attribute("dividerFractions"), Some("0.15,0.75"));
                    expected.push_child(
                        Element::new("PanelLayout").with_attribute("dividerFractions", "0.30"),
                    );
                }
                _ => expected.push_child(child.clone()),
            }
        }

        assert_eq!(without, expected);

        Ok(())
    }

    #[test]
    fn indexed_resources_carry_a_matching_index() -> Result<(), Box<dyn std::error::Error>> {
        let root = parse(&xml(&Options::default())?)?;

        let resources = flatten(&root)
            .into_iter()
            .filter(|element| element.name() == "Resource")
            .collect::<Vec<_>>();
        assert_eq!(resources.len(), 5);

        for resource in resources {
            let path = resource.attribute("path").ok_or("missing path")?;

            match resource.attribute("type") {
                Some("bw") => assert_eq!(resource.attribute("index"), None),
                Some("bed") | Some("vcf") => {
                    assert_eq!(resource.attribute("index"), Some(&*format!("{path}.tbi")))
                }
                Some("bam") => {
                    assert_eq!(resource.attribute("index"), Some(&*format!("{path}.bai")))
                }
                other => panic!("unexpected resource type: {other:?}"),
            }
        }

        Ok(())
    }

    #[test]
    fn track_ids_are_unique() -> Result<(), Box<dyn std::error::Error>> {
        let root = parse(&xml(&Options::default())?)?;

        let ids = flatten(&root)
            .into_iter()
            .filter(|element| element.name() == "Track")
            .map(|track| track.attribute("id").ok_or("missing id"))
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(ids.len(), 8);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());

        Ok(())
    }

    #[test]
    fn it_passes_special_characters_through() -> Result<(), Box<dyn std::error::Error>> {
        let locus = "chr1:1-100 <&> \"quoted\"";
        let root = parse(&build("a&b", locus, &Options::default())?.to_xml()?)?;

        assert_eq!(root.attribute("locus"), Some(locus));
        assert!(flatten(&root)
            .iter()
            .any(|element| element.attribute("name") == Some("Panela&b_bam")));

        Ok(())
    }

    #[test]
    fn degenerate_inputs_still_produce_a_document() -> Result<(), Box<dyn std::error::Error>> {
        let session = build("", "", &Options::default())?;

        assert_eq!(session.locus(), "");
        assert_eq!(
            session.resources()[2].path(),
            "http://localhost:8080/founder-phased/.hap-map-blocks.paternal.sorted.bed.gz"
        );
        assert!(session.to_xml().is_ok());

        Ok(())
    }
}
