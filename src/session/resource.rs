//! Resources (remote data files) declared by a session.

use crate::xml::Element;

/// The file format of a resource.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// A bigWig signal file (`bw`).
    BigWig,

    /// A bgzipped, tabix-indexed BED file (`bed`).
    Bed,

    /// An indexed BAM alignment file (`bam`).
    Bam,

    /// A bgzipped, tabix-indexed VCF file (`vcf`).
    Vcf,
}

impl Kind {
    /// The suffix appended to a resource path to locate its index.
    ///
    /// [`None`] is returned for formats that are not indexed.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::resource::Kind;
    ///
    /// assert_eq!(Kind::BigWig.index_suffix(), None);
    /// assert_eq!(Kind::Bed.index_suffix(), Some(".tbi"));
    /// assert_eq!(Kind::Bam.index_suffix(), Some(".bai"));
    /// assert_eq!(Kind::Vcf.index_suffix(), Some(".tbi"));
    /// ```
    pub fn index_suffix(&self) -> Option<&'static str> {
        match self {
            Kind::BigWig => None,
            Kind::Bed | Kind::Vcf => Some(".tbi"),
            Kind::Bam => Some(".bai"),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::BigWig => write!(f, "bw"),
            Kind::Bed => write!(f, "bed"),
            Kind::Bam => write!(f, "bam"),
            Kind::Vcf => write!(f, "vcf"),
        }
    }
}

/// A reference to a remote data file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resource {
    /// The path (usually a URL).
    path: String,

    /// The path of the index, if the format is indexed.
    index: Option<String>,

    /// The file format.
    kind: Kind,
}

impl Resource {
    /// Creates a new [`Resource`].
    ///
    /// The index path is derived from the path and the kind, so an indexed
    /// format always carries a matching index.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Resource;
    /// use igvsession::session::resource::Kind;
    ///
    /// let resource = Resource::new("http://localhost:8080/a.bam", Kind::Bam);
    /// assert_eq!(resource.index(), Some("http://localhost:8080/a.bam.bai"));
    ///
    /// let resource = Resource::new("http://localhost:8080/a.bw", Kind::BigWig);
    /// assert_eq!(resource.index(), None);
    /// ```
    pub fn new(path: impl Into<String>, kind: Kind) -> Self {
        let path = path.into();
        let index = kind.index_suffix().map(|suffix| format!("{path}{suffix}"));

        Self { path, index, kind }
    }

    /// Gets the path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Gets the index path, if any.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Gets the kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Converts the [`Resource`] into a `Resource` element.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("Resource");

        if let Some(index) = &self.index {
            element.push_attribute("index", index.as_str());
        }

        element
            .with_attribute("path", self.path.as_str())
            .with_attribute("type", self.kind.to_string())
    }
}
