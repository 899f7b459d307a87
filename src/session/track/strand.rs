//! The strand along which the reference sequence is translated.

/// The translation strand of a sequence track.
///
/// The viewer writes the strand as `+` or `-` in the
/// `sequenceTranslationStrandValue` attribute.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strand {
    /// Translate the forward strand.
    #[default]
    Positive,

    /// Translate the reverse strand.
    Negative,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Positive => write!(f, "+"),
            Strand::Negative => write!(f, "-"),
        }
    }
}
