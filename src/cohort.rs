//! Sessions spanning multiple samples.
//!
//! A multi-sample session never includes alignments. It has two panels shared
//! by every sample: a data panel with each sample's founder-phased methylation
//! signal, and a feature panel with the cohort-wide variant calls, each
//! sample's haplotype blocks, and the reference sequence.

use crate::naming::Convention;
use crate::naming::DATA_PANEL;
use crate::naming::DEFAULT_BASE_URL;
use crate::naming::DEFAULT_GENOME;
use crate::naming::FEATURE_PANEL;
use crate::naming::MethylationType;
use crate::naming::Parent;
use crate::naming::REFERENCE_SEQUENCE;
use crate::session;
use crate::session::Builder;
use crate::session::Layout;
use crate::session::Panel;
use crate::session::Resource;
use crate::session::Session;
use crate::session::Track;
use crate::session::resource;
use crate::session::track::DataRange;
use crate::session::track::DataSource;
use crate::session::track::DisplayMode;
use crate::session::track::Feature;
use crate::session::track::Kind;
use crate::session::track::Sequence;
use crate::session::track::Variant;

/// The nominal height of the data panel.
const DATA_PANEL_HEIGHT: usize = 400;

/// The nominal height of the feature panel.
const FEATURE_PANEL_HEIGHT: usize = 200;

/// Dividers for the data (60%) and feature (40%) panels.
const DIVIDERS: [f64; 1] = [0.60];

/// The order in which each sample's tracks are displayed.
const PARENTS: [Parent; 2] = [Parent::Paternal, Parent::Maternal];

/// Options for a multi-sample session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// The reference genome.
    genome: String,

    /// The base URL from which data files are served.
    base_url: String,

    /// The methylation type.
    methylation_type: MethylationType,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            genome: DEFAULT_GENOME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
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

    /// Gets the methylation type.
    pub fn methylation_type(&self) -> MethylationType {
        self.methylation_type
    }
}

/// Builds the session for a set of samples.
///
/// Samples are displayed in the order they are provided. Sample identifiers
/// are not validated: a repeated sample is written again with the same track
/// identifiers (see [`Session::duplicate_track_ids()`]).
///
/// # Examples
///
/// ```
/// use igvsession::cohort;
/// use igvsession::cohort::Options;
///
/// let session = cohort::build(&["s1", "s2"], "chr1:1-100", &Options::default())?;
///
/// assert_eq!(session.panel("DataPanel").unwrap().tracks().len(), 4);
/// assert_eq!(session.panel("FeaturePanel").unwrap().tracks().len(), 7);
/// assert_eq!(session.layout().to_string(), "0.60");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build<S: AsRef<str>>(
    samples: &[S],
    locus: &str,
    options: &Options,
) -> Result<Session, session::Error> {
    let convention = Convention::new(
        options.base_url(),
        options.genome(),
        options.methylation_type(),
    );

    let mut builder = Builder::default().genome(options.genome())?.locus(locus)?;
    let mut data = Panel::new(DATA_PANEL, DATA_PANEL_HEIGHT);
    let mut features = Panel::new(FEATURE_PANEL, FEATURE_PANEL_HEIGHT);

    let joint = convention.joint_vcf_path();
    builder = builder.push_resource(Resource::new(joint.as_str(), resource::Kind::Vcf));
    features.push_track(
        Track::new(
            joint,
            "All variants",
            Kind::Variant(Variant::default().with_display_mode(DisplayMode::Collapsed)),
        )
        .with_attribute_key("joint_vcf"),
    );

    let phased = convention.phased_vcf_path();
    builder = builder.push_resource(Resource::new(phased.as_str(), resource::Kind::Vcf));
    features.push_track(
        Track::new(
            phased,
            "Phased variants (PAT|MAT)",
            Kind::Variant(Variant::default()),
        )
        .with_attribute_key("joint_vcf_iht_phased"),
    );

    for sample in samples {
        let sample = sample.as_ref();

        for parent in PARENTS {
            let path = convention.methylation_path(sample, parent);
            builder = builder.push_resource(Resource::new(path.as_str(), resource::Kind::BigWig));
            data.push_track(methylation_track(path, sample, parent));
        }

        for parent in PARENTS {
            let path = convention.haplotype_blocks_path(sample, parent);
            builder = builder.push_resource(Resource::new(path.as_str(), resource::Kind::Bed));
            features.push_track(haplotype_blocks_track(path, sample, parent));
        }
    }

    features.push_track(Track::new(
        REFERENCE_SEQUENCE,
        REFERENCE_SEQUENCE,
        Kind::Sequence(Sequence::default()),
    ));

    Ok(builder
        .push_panel(data)
        .push_panel(features)
        .layout(Layout::try_new(DIVIDERS)?)?
        .try_build()?)
}

/// A fixed-range methylation bar chart for one sample and parent.
fn methylation_track(path: String, sample: &str, parent: Parent) -> Track {
    Track::new(
        path,
        format!("{} {} Methylation", sample, parent.label()),
        Kind::DataSource(DataSource::new(DataRange::linear(0.0, Some(1.0)))),
    )
    .with_attribute_key(format!("{}_{}_meth", sample, parent.short()))
}

/// The haplotype blocks for one sample and parent.
fn haplotype_blocks_track(path: String, sample: &str, parent: Parent) -> Track {
    Track::new(
        path,
        format!("{} {} Blocks", sample, parent.label()),
        Kind::Feature(Feature::default().with_unbounded_visibility_window()),
    )
    .with_attribute_key(format!("{}_{}_blocks", sample, parent.long()))
}
