//! Session documents.
//!
//! A [`Session`] is the root of a document read by the viewer. It declares the
//! [resources](Resource) (remote data files) the viewer should load, the
//! vertically stacked [panels](Panel) containing the [tracks](Track) that
//! display those resources, and the [layout](Layout) describing how much
//! vertical space each panel receives.
//!
//! Sessions are assembled through a [`Builder`], which checks the document
//! invariants before handing back an immutable [`Session`]. Once built, a
//! session is converted to text with [`Session::to_xml()`].

pub mod builder;
pub mod layout;
pub mod panel;
pub mod resource;
pub mod track;

pub use builder::Builder;
pub use layout::Layout;
pub use panel::Panel;
pub use resource::Resource;
pub use track::Track;

use std::collections::HashSet;

use crate::xml;
use crate::xml::Element;

/// The session schema version understood by the viewer.
pub const VERSION: &str = "8";

/// An error related to assembling a [`Session`].
#[derive(Debug)]
pub enum Error {
    /// The session could not be built.
    Builder(builder::Error),

    /// The panel layout was invalid.
    Layout(layout::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Builder(err) => write!(f, "builder error: {err}"),
            Error::Layout(err) => write!(f, "layout error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<builder::Error> for Error {
    fn from(err: builder::Error) -> Self {
        Error::Builder(err)
    }
}

impl From<layout::Error> for Error {
    fn from(err: layout::Error) -> Self {
        Error::Layout(err)
    }
}

/// A session document.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// The reference genome identifier.
    genome: String,

    /// The initial locus.
    locus: String,

    /// The resources in declaration order.
    resources: Vec<Resource>,

    /// The panels in display order (top to bottom).
    panels: Vec<Panel>,

    /// The panel layout.
    layout: Layout,
}

impl Session {
    /// Gets the reference genome identifier.
    pub fn genome(&self) -> &str {
        &self.genome
    }

    /// Gets the initial locus.
    pub fn locus(&self) -> &str {
        &self.locus
    }

    /// Gets the schema version.
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Gets the resources in declaration order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Gets the panels in display order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Looks up a panel by name.
    pub fn panel(&self, name: &str) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.name() == name)
    }

    /// Gets the panel layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Iterates over every track in the session, panel by panel.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.panels.iter().flat_map(|panel| panel.tracks().iter())
    }

    /// Gets the identifiers shared by more than one track, in the order their
    /// first repeat appears.
    ///
    /// Sessions with repeated identifiers are still valid and are written as
    /// given.
    pub fn duplicate_track_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for track in self.tracks() {
            if !seen.insert(track.id()) && !duplicates.contains(&track.id()) {
                duplicates.push(track.id());
            }
        }

        duplicates
    }

    /// Converts the [`Session`] into its XML element tree.
    pub fn to_element(&self) -> Element {
        let mut resources = Element::new("Resources");
        for resource in &self.resources {
            resources.push_child(resource.to_element());
        }

        let mut session = Element::new("Session")
            .with_attribute("genome", self.genome.as_str())
            .with_attribute("locus", self.locus.as_str())
            .with_attribute("version", VERSION)
            .with_child(resources);

        for panel in &self.panels {
            session.push_child(panel.to_element());
        }

        session.with_child(self.layout.to_element())
    }

    /// Serializes the [`Session`] as a pretty-printed XML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Builder;
    /// use igvsession::session::Layout;
    /// use igvsession::session::Panel;
    ///
    /// let session = Builder::default()
    ///     .genome("hg38")?
    ///     .locus("chr1:1-100")?
    ///     .push_panel(Panel::new("DataPanel", 200))
    ///     .push_panel(Panel::new("FeaturePanel", 150))
    ///     .layout(Layout::try_new([0.3])?)?
    ///     .try_build()?;
    ///
    /// let xml = session.to_xml()?;
    /// assert!(xml.starts_with("<?xml version=\"1.0\" ?>\n<Session genome=\"hg38\""));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_xml(&self) -> xml::Result<String> {
        self.to_element().to_pretty_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::resource::Kind;
    use crate::session::track::Sequence;

    fn session() -> Result<Session, Box<dyn std::error::Error>> {
        let mut panel = Panel::new("FeaturePanel", 150);
        panel.push_track(Track::new(
            "Reference sequence",
            "Reference sequence",
            track::Kind::Sequence(Sequence::default()),
        ));

        Ok(Builder::default()
            .genome("hg38")?
            .locus("chr1:1-100")?
            .push_resource(Resource::new("http://host/a.bed.gz", Kind::Bed))
            .push_panel(Panel::new("DataPanel", 200))
            .push_panel(panel)
            .layout(Layout::try_new([0.3])?)?
            .try_build()?)
    }

    #[test]
    fn it_orders_session_children() -> Result<(), Box<dyn std::error::Error>> {
        let element = session()?.to_element();

        let names = element
            .children()
            .iter()
            .map(|child| child.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Resources", "Panel", "Panel", "PanelLayout"]);

        assert_eq!(
            element.attributes(),
            &[
                (String::from("genome"), String::from("hg38")),
                (String::from("locus"), String::from("chr1:1-100")),
                (String::from("version"), String::from("8")),
            ]
        );

        Ok(())
    }

    #[test]
    fn it_looks_up_panels_and_tracks() -> Result<(), Box<dyn std::error::Error>> {
        let session = session()?;

        assert_eq!(session.version(), "8");
        assert!(session.panel("DataPanel").unwrap().tracks().is_empty());
        assert!(session.panel("BamPanel").is_none());
        assert_eq!(session.tracks().count(), 1);

        Ok(())
    }

    #[test]
    fn it_reports_each_duplicate_track_id_once() -> Result<(), Box<dyn std::error::Error>> {
        let track = || Track::new("a", "A", track::Kind::Sequence(Sequence::default()));

        let mut panel = Panel::new("FeaturePanel", 150);
        panel.push_track(track());
        panel.push_track(Track::new("b", "B", track::Kind::Sequence(Sequence::default())));
        panel.push_track(track());
        panel.push_track(track());

        let repeated = Builder::default()
            .genome("hg38")?
            .locus("chr1:1-100")?
            .push_panel(panel)
            .layout(Layout::default())?
            .try_build()?;

        assert_eq!(repeated.duplicate_track_ids(), ["a"]);
        assert!(session()?.duplicate_track_ids().is_empty());

        Ok(())
    }

    #[test]
    fn it_serializes_empty_panels_as_self_closing() -> Result<(), Box<dyn std::error::Error>> {
        let xml = session()?.to_xml()?;

        assert!(xml.contains("\n    <Panel name=\"DataPanel\" height=\"200\"/>\n"));
        assert!(xml.ends_with("    <PanelLayout dividerFractions=\"0.30\"/>\n</Session>"));

        Ok(())
    }
}
