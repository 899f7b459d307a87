//! A builder for a session.

use std::collections::HashSet;

use crate::session::Layout;
use crate::session::Panel;
use crate::session::Resource;
use crate::session::Session;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No genome was provided to the [`Builder`].
    Genome,

    /// No locus was provided to the [`Builder`].
    Locus,

    /// No layout was provided to the [`Builder`].
    Layout,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Genome => write!(f, "genome"),
            MissingError::Locus => write!(f, "locus"),
            MissingError::Layout => write!(f, "layout"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error that occurs when a singular field was provided multiple times to
/// the [`Builder`].
#[derive(Debug)]
pub enum MultipleError {
    /// The genome field was provided multiple times to the [`Builder`].
    Genome,

    /// The locus field was provided multiple times to the [`Builder`].
    Locus,

    /// The layout field was provided multiple times to the [`Builder`].
    Layout,
}

impl std::fmt::Display for MultipleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleError::Genome => write!(f, "genome"),
            MultipleError::Locus => write!(f, "locus"),
            MultipleError::Layout => write!(f, "layout"),
        }
    }
}

impl std::error::Error for MultipleError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// An error where a singular field was provided to the [`Builder`] more
    /// than once.
    Multiple(MultipleError),

    /// Two panels share the same name.
    DuplicatePanelName(String),

    /// The number of divider fractions does not match the number of panels.
    LayoutMismatch {
        /// The number of panels in the session.
        panels: usize,

        /// The number of divider fractions in the layout.
        dividers: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::Multiple(err) => write!(f, "singular field set multiple times: {err}"),
            Error::DuplicatePanelName(name) => write!(f, "duplicate panel name: `{name}`"),
            Error::LayoutMismatch { panels, dividers } => write!(
                f,
                "layout mismatch: {panels} panel(s) require {} divider fraction(s), found \
                 {dividers}",
                panels.saturating_sub(1)
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Session`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The reference genome identifier.
    genome: Option<String>,

    /// The initial locus.
    locus: Option<String>,

    /// The resources.
    resources: Vec<Resource>,

    /// The panels.
    panels: Vec<Panel>,

    /// The panel layout.
    layout: Option<Layout>,
}

impl Builder {
    /// Sets the reference genome for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Builder;
    ///
    /// let builder = Builder::default().genome("hg38")?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn genome(mut self, genome: impl Into<String>) -> Result<Self> {
        if self.genome.is_some() {
            return Err(Error::Multiple(MultipleError::Genome));
        }

        self.genome = Some(genome.into());
        Ok(self)
    }

    /// Sets the initial locus for the [`Builder`].
    ///
    /// The locus is not validated in any way.
    pub fn locus(mut self, locus: impl Into<String>) -> Result<Self> {
        if self.locus.is_some() {
            return Err(Error::Multiple(MultipleError::Locus));
        }

        self.locus = Some(locus.into());
        Ok(self)
    }

    /// Pushes a [`Resource`] into the [`Builder`].
    pub fn push_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Pushes a [`Panel`] into the [`Builder`].
    ///
    /// Panels are displayed top to bottom in the order they are pushed.
    pub fn push_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Sets the panel layout for the [`Builder`].
    pub fn layout(mut self, layout: Layout) -> Result<Self> {
        if self.layout.is_some() {
            return Err(Error::Multiple(MultipleError::Layout));
        }

        self.layout = Some(layout);
        Ok(self)
    }

    /// Consumes `self` to attempt to build a [`Session`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Builder;
    /// use igvsession::session::Layout;
    /// use igvsession::session::Panel;
    /// use igvsession::session::Resource;
    /// use igvsession::session::resource::Kind;
    ///
    /// let session = Builder::default()
    ///     .genome("hg38")?
    ///     .locus("chr14:100826000-100827000")?
    ///     .push_resource(Resource::new("http://localhost:8080/a.bam", Kind::Bam))
    ///     .push_panel(Panel::new("DataPanel", 200))
    ///     .push_panel(Panel::new("FeaturePanel", 150))
    ///     .layout(Layout::try_new([0.3])?)?
    ///     .try_build()?;
    ///
    /// assert_eq!(session.genome(), "hg38");
    /// assert_eq!(session.resources().len(), 1);
    /// assert_eq!(session.panels().len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Session> {
        let genome = self.genome.ok_or(Error::Missing(MissingError::Genome))?;
        let locus = self.locus.ok_or(Error::Missing(MissingError::Locus))?;
        let layout = self.layout.ok_or(Error::Missing(MissingError::Layout))?;

        if layout.panel_count() != self.panels.len() {
            return Err(Error::LayoutMismatch {
                panels: self.panels.len(),
                dividers: layout.divider_fractions().len(),
            });
        }

        let mut names = HashSet::new();

        for panel in &self.panels {
            if !names.insert(panel.name()) {
                return Err(Error::DuplicatePanelName(panel.name().to_string()));
            }
        }

        Ok(Session {
            genome,
            locus,
            resources: self.resources,
            panels: self.panels,
            layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Track;
    use crate::session::track::Kind;
    use crate::session::track::Sequence;

    fn reference_track() -> Track {
        Track::new(
            "Reference sequence",
            "Reference sequence",
            Kind::Sequence(Sequence::default()),
        )
    }

    #[test]
    fn it_fails_to_produce_a_session_when_no_genome_is_provided(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .locus("chr1:1-2")?
            .layout(Layout::default())?
            .try_build()
            .unwrap_err();

        assert_eq!(err.to_string(), "missing required field: genome");

        Ok(())
    }

    #[test]
    fn it_fails_to_produce_a_session_when_no_layout_is_provided(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .genome("hg38")?
            .locus("chr1:1-2")?
            .try_build()
            .unwrap_err();

        assert_eq!(err.to_string(), "missing required field: layout");

        Ok(())
    }

    #[test]
    fn it_fails_when_the_locus_is_provided_more_than_once(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .locus("chr1:1-2")?
            .locus("chr1:1-2")
            .unwrap_err();

        assert_eq!(err.to_string(), "singular field set multiple times: locus");

        Ok(())
    }

    #[test]
    fn it_fails_when_the_layout_does_not_match_the_panels(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .genome("hg38")?
            .locus("chr1:1-2")?
            .push_panel(Panel::new("DataPanel", 200))
            .push_panel(Panel::new("FeaturePanel", 150))
            .layout(Layout::try_new([0.15, 0.75])?)?
            .try_build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "layout mismatch: 2 panel(s) require 1 divider fraction(s), found 2"
        );

        Ok(())
    }

    #[test]
    fn it_fails_on_duplicate_panel_names() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let err = Builder::default()
            .genome("hg38")?
            .locus("chr1:1-2")?
            .push_panel(Panel::new("DataPanel", 200))
            .push_panel(Panel::new("DataPanel", 150))
            .layout(Layout::try_new([0.5])?)?
            .try_build()
            .unwrap_err();

        assert_eq!(err.to_string(), "duplicate panel name: `DataPanel`");

        Ok(())
    }

    #[test]
    fn it_keeps_duplicate_track_ids_across_panels(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut data = Panel::new("DataPanel", 200);
        data.push_track(reference_track());

        let mut feature = Panel::new("FeaturePanel", 150);
        feature.push_track(reference_track());

        let session = Builder::default()
            .genome("hg38")?
            .locus("chr1:1-2")?
            .push_panel(data)
            .push_panel(feature)
            .layout(Layout::try_new([0.5])?)?
            .try_build()?;

        assert_eq!(session.tracks().count(), 2);
        assert_eq!(session.duplicate_track_ids(), ["Reference sequence"]);

        Ok(())
    }
}
