//! File naming conventions for the phased data served to the viewer.
//!
//! Every resource in a session is referenced by URL, and every URL is derived
//! from a base URL, a sample (or individual) identifier, and a handful of
//! fixed naming conventions. All of those conventions live here.

use std::str::FromStr;

/// The default reference genome.
pub const DEFAULT_GENOME: &str = "hg38";

/// The default base URL from which data files are served.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The source of the RefSeq Select gene annotations.
pub const REFSEQ_SELECT_URL: &str =
    "https://hgdownload.soe.ucsc.edu/goldenPath/hg38/database/ncbiRefSeqSelect.txt.gz";

/// The name of the panel holding methylation signal.
pub const DATA_PANEL: &str = "DataPanel";

/// The name of the panel holding sequence, annotation, and block features.
pub const FEATURE_PANEL: &str = "FeaturePanel";

/// The identifier (and name) of the reference sequence track.
pub const REFERENCE_SEQUENCE: &str = "Reference sequence";

/// The directory containing founder-phased data.
const FOUNDER_PHASED_DIR: &str = "founder-phased";

/// The directory containing read-backed phased alignments.
const READ_BACKED_PHASED_DIR: &str = "read-backed-phased";

/// The joint-called variant set, relative to the base URL.
const JOINT_VCF: &str = "vcfs/CEPH-1463.joint.GRCh38.deepvariant.glnexus.phased.vcf.gz";

/// The long-read phased variant set, relative to the base URL.
const PHASED_VCF: &str = "vcfs-iht-phased/CEPH1463.GRCh38.pass.sorted.vcf.gz";

////////////////////////////////////////////////////////////////////////////////////////
// Parents
////////////////////////////////////////////////////////////////////////////////////////

/// The parent of origin for a haplotype.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parent {
    /// The paternal haplotype.
    Paternal,

    /// The maternal haplotype.
    Maternal,
}

impl Parent {
    /// The short form used in methylation file names (`pat` or `mat`).
    pub fn short(&self) -> &'static str {
        match self {
            Parent::Paternal => "pat",
            Parent::Maternal => "mat",
        }
    }

    /// The long form used in haplotype block file names (`paternal` or
    /// `maternal`).
    pub fn long(&self) -> &'static str {
        match self {
            Parent::Paternal => "paternal",
            Parent::Maternal => "maternal",
        }
    }

    /// The label used in display names (`PAT` or `MAT`).
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::naming::Parent;
    ///
    /// assert_eq!(Parent::Paternal.label(), "PAT");
    /// assert_eq!(Parent::Maternal.label(), "MAT");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Parent::Paternal => "PAT",
            Parent::Maternal => "MAT",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Methylation types
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to parsing a [`MethylationType`].
#[derive(Debug)]
pub struct ParseMethylationTypeError(String);

impl std::fmt::Display for ParseMethylationTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "parse methylation type error: {} is not a valid methylation type",
            self.0
        )
    }
}

impl std::error::Error for ParseMethylationTypeError {}

/// The method by which methylation levels were computed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MethylationType {
    /// Model-based methylation probabilities (`model`).
    Model,

    /// Count-based methylation levels (`count`).
    #[default]
    Count,
}

impl FromStr for MethylationType {
    type Err = ParseMethylationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model" => Ok(Self::Model),
            "count" => Ok(Self::Count),
            value => Err(ParseMethylationTypeError(value.to_string())),
        }
    }
}

impl std::fmt::Display for MethylationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethylationType::Model => write!(f, "model"),
            MethylationType::Count => write!(f, "count"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Conventions
////////////////////////////////////////////////////////////////////////////////////////

/// The naming convention for files served under a particular base URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Convention {
    /// The base URL from which files are served.
    base_url: String,

    /// The reference genome.
    genome: String,

    /// The methylation type.
    methylation_type: MethylationType,
}

impl Convention {
    /// Creates a new [`Convention`].
    ///
    /// The base URL is used verbatim: no trailing slash is added or removed.
    pub fn new(
        base_url: impl Into<String>,
        genome: impl Into<String>,
        methylation_type: MethylationType,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            genome: genome.into(),
            methylation_type,
        }
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets the reference genome.
    pub fn genome(&self) -> &str {
        &self.genome
    }

    /// Gets the methylation type.
    pub fn methylation_type(&self) -> MethylationType {
        self.methylation_type
    }

    /// The file name of a founder-phased methylation bigWig.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::naming::Convention;
    /// use igvsession::naming::MethylationType;
    /// use igvsession::naming::Parent;
    ///
    /// let convention = Convention::new("http://localhost:8080", "hg38", MethylationType::Count);
    ///
    /// assert_eq!(
    ///     convention.methylation_file_name("200081", Parent::Maternal),
    ///     "200081.dna-methylation.founder-phased.mat.count.hg38.bw"
    /// );
    /// ```
    pub fn methylation_file_name(&self, sample: &str, parent: Parent) -> String {
        format!(
            "{}.dna-methylation.founder-phased.{}.{}.{}.bw",
            sample,
            parent.short(),
            self.methylation_type,
            self.genome
        )
    }

    /// The URL of a founder-phased methylation bigWig.
    pub fn methylation_path(&self, sample: &str, parent: Parent) -> String {
        self.founder_phased(&self.methylation_file_name(sample, parent))
    }

    /// The file name of a founder-phased haplotype block BED file.
    pub fn haplotype_blocks_file_name(&self, sample: &str, parent: Parent) -> String {
        format!("{}.hap-map-blocks.{}.sorted.bed.gz", sample, parent.long())
    }

    /// The URL of a founder-phased haplotype block BED file.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::naming::Convention;
    /// use igvsession::naming::MethylationType;
    /// use igvsession::naming::Parent;
    ///
    /// let convention = Convention::new("http://localhost:8080", "hg38", MethylationType::Count);
    ///
    /// assert_eq!(
    ///     convention.haplotype_blocks_path("200081", Parent::Paternal),
    ///     "http://localhost:8080/founder-phased/200081.hap-map-blocks.paternal.sorted.bed.gz"
    /// );
    /// ```
    pub fn haplotype_blocks_path(&self, sample: &str, parent: Parent) -> String {
        self.founder_phased(&self.haplotype_blocks_file_name(sample, parent))
    }

    /// The file name of a haplotagged alignment file.
    ///
    /// Alignments are always against GRCh38, regardless of the genome the
    /// session is displayed against.
    pub fn haplotagged_bam_file_name(&self, sample: &str) -> String {
        format!("{}.GRCh38.haplotagged.bam", sample)
    }

    /// The URL of a haplotagged alignment file.
    pub fn haplotagged_bam_path(&self, sample: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            READ_BACKED_PHASED_DIR,
            self.haplotagged_bam_file_name(sample)
        )
    }

    /// The URL of the joint-called variant set.
    pub fn joint_vcf_path(&self) -> String {
        format!("{}/{}", self.base_url, JOINT_VCF)
    }

    /// The URL of the long-read phased variant set.
    pub fn phased_vcf_path(&self) -> String {
        format!("{}/{}", self.base_url, PHASED_VCF)
    }

    /// Joins a file name onto the founder-phased directory.
    fn founder_phased(&self, file_name: &str) -> String {
        format!("{}/{}/{}", self.base_url, FOUNDER_PHASED_DIR, file_name)
    }
}

impl Default for Convention {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_GENOME, MethylationType::default())
    }
}
