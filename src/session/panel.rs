//! Panels.

use crate::session::Track;
use crate::xml::Element;

/// A named, vertically stacked display region holding tracks.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// The panel name, unique within a session.
    name: String,

    /// The nominal height in pixels.
    ///
    /// The viewer treats this as advisory; the session layout decides the
    /// actual split.
    height: usize,

    /// The tracks in display order.
    tracks: Vec<Track>,
}

impl Panel {
    /// Creates a new, empty [`Panel`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igvsession::session::Panel;
    ///
    /// let panel = Panel::new("DataPanel", 200);
    /// assert_eq!(panel.name(), "DataPanel");
    /// assert_eq!(panel.height(), 200);
    /// assert!(panel.tracks().is_empty());
    /// ```
    pub fn new(name: impl Into<String>, height: usize) -> Self {
        Self {
            name: name.into(),
            height,
            tracks: Vec::new(),
        }
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the nominal height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the tracks in display order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Appends a track to the bottom of the [`Panel`].
    pub fn push_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Converts the [`Panel`] into a `Panel` element.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("Panel")
            .with_attribute("name", self.name.as_str())
            .with_attribute("height", self.height.to_string());

        for track in &self.tracks {
            element.push_child(track.to_element());
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::track::Kind;
    use crate::session::track::Variant;

    #[test]
    fn it_writes_name_before_height() {
        let element = Panel::new("FeaturePanel", 150).to_element();

        assert_eq!(
            element.attributes(),
            &[
                (String::from("name"), String::from("FeaturePanel")),
                (String::from("height"), String::from("150")),
            ]
        );
    }

    #[test]
    fn it_keeps_tracks_in_push_order() {
        let mut panel = Panel::new("FeaturePanel", 200);
        panel.push_track(Track::new("b", "B", Kind::Variant(Variant::default())));
        panel.push_track(Track::new("a", "A", Kind::Variant(Variant::default())));

        let ids = panel.tracks().iter().map(|t| t.id()).collect::<Vec<_>>();
        assert_eq!(ids, ["b", "a"]);

        let element = panel.to_element();
        assert_eq!(element.children()[0].attribute("id"), Some("b"));
        assert_eq!(element.children()[1].attribute("id"), Some("a"));
    }
}
