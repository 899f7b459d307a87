//! Genomic loci in the `contig:start-end` form understood by the viewer.
//!
//! Session builders never validate the locus they are given; it is written
//! into the document verbatim. [`Locus`] exists so that callers (such as the
//! command line tools) can check whether a locus _looks_ right before handing
//! it over.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a `contig:start-end` locus, allowing thousands separators.
static REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:\s]+):([0-9][0-9,]*)-([0-9][0-9,]*)$").unwrap());

/// A genomic locus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Locus {
    /// The contig (e.g., `chr14`).
    contig: String,

    /// The start position.
    start: u64,

    /// The end position.
    end: u64,
}

impl Locus {
    /// Attempts to create a new locus from its textual form.
    ///
    /// [`None`] is returned if the value is not of the form
    /// `contig:start-end`, if either position does not fit into a [`u64`], or
    /// if the start comes after the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::locus::Locus;
    ///
    /// let locus = Locus::try_new("chr14:100,826,000-100,827,000").unwrap();
    /// assert_eq!(locus.contig(), "chr14");
    /// assert_eq!(locus.start(), 100_826_000);
    /// assert_eq!(locus.end(), 100_827_000);
    ///
    /// assert!(Locus::try_new("chr14").is_none());
    /// ```
    pub fn try_new(value: impl AsRef<str>) -> Option<Self> {
        let groups = REGEX.captures(value.as_ref())?;

        let contig = groups.get(1)?.as_str().to_string();
        let start = parse_position(groups.get(2)?.as_str())?;
        let end = parse_position(groups.get(3)?.as_str())?;

        if start > end {
            return None;
        }

        Some(Self { contig, start, end })
    }

    /// Gets the contig.
    pub fn contig(&self) -> &str {
        &self.contig
    }

    /// Gets the start position.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> u64 {
        self.end
    }
}

impl std::fmt::Display for Locus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.end)
    }
}

/// Parses a position, ignoring thousands separators.
fn parse_position(value: &str) -> Option<u64> {
    value.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        let locus = Locus::try_new("chr1:1-100").unwrap();

        assert_eq!(locus.contig(), "chr1");
        assert_eq!(locus.start(), 1);
        assert_eq!(locus.end(), 100);
        assert_eq!(locus.to_string(), "chr1:1-100");

        let locus = Locus::try_new("HLA-A*01:01:01:01:5-10");
        assert!(locus.is_none());

        let locus = Locus::try_new("chrUn_KI270742v1:5-5").unwrap();
        assert_eq!(locus.contig(), "chrUn_KI270742v1");
    }

    #[test]
    fn invalid() {
        assert!(Locus::try_new("").is_none());
        assert!(Locus::try_new("chr1").is_none());
        assert!(Locus::try_new("chr1:100").is_none());
        assert!(Locus::try_new("chr1:100-").is_none());
        assert!(Locus::try_new("chr1:200-100").is_none());
        assert!(Locus::try_new("chr 1:1-100").is_none());
        assert!(Locus::try_new("chr1:1-99999999999999999999999").is_none());
    }
}
