//! Which page sections are visible: all the main ones, or a single legal
//! page on its own.

use std::borrow::Cow;

pub const MAIN_SECTIONS: [&str; 8] = [
    "hero",
    "o-nas",
    "fotogaleria",
    "stravovanie",
    "cennik",
    "informacie",
    "dokumenty",
    "kontakt",
];

pub const LEGAL_SECTIONS: [&str; 2] = ["ochrana-udajov", "podmienky-pouzivania"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionView {
    #[default]
    Main,
    Legal(&'static str),
}

impl SectionView {
    /// Result of following an in-page link to `#id`. `None` means the link
    /// has no fragment and nothing changes.
    pub fn from_link(id: &str) -> Option<Self> {
        if id.is_empty() {
            return None;
        }
        Some(Self::for_id(id))
    }

    /// View after a `hashchange`. Anything that is not a legal page shows
    /// the main sections.
    pub fn from_location_hash(hash: &str) -> Self {
        Self::for_id(&fragment_id(hash))
    }

    fn for_id(id: &str) -> Self {
        match legal_section(id) {
            Some(legal) => SectionView::Legal(legal),
            None => SectionView::Main,
        }
    }

    pub fn is_visible(&self, section_id: &str) -> bool {
        match self {
            SectionView::Main => MAIN_SECTIONS.contains(&section_id),
            SectionView::Legal(id) => *id == section_id,
        }
    }
}

pub fn legal_section(id: &str) -> Option<&'static str> {
    LEGAL_SECTIONS.iter().copied().find(|legal| *legal == id)
}

/// Strips the leading `#` and percent-decoding from a fragment or href.
pub fn fragment_id(raw: &str) -> String {
    let trimmed = raw.strip_prefix('#').unwrap_or(raw);
    urlencoding::decode(trimmed)
        .unwrap_or(Cow::Borrowed(trimmed))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(view: SectionView) -> Vec<&'static str> {
        MAIN_SECTIONS
            .iter()
            .chain(LEGAL_SECTIONS.iter())
            .copied()
            .filter(|id| view.is_visible(id))
            .collect()
    }

    #[test]
    fn default_shows_all_main_sections() {
        assert_eq!(visible(SectionView::default()), MAIN_SECTIONS.to_vec());
    }

    #[test]
    fn legal_link_shows_only_that_section() {
        let view = SectionView::from_link(&fragment_id("#ochrana-udajov"));
        assert_eq!(view, Some(SectionView::Legal("ochrana-udajov")));
        assert_eq!(visible(view.unwrap()), vec!["ochrana-udajov"]);
    }

    #[test]
    fn main_link_after_legal_restores_main_sections() {
        let legal = SectionView::from_link("podmienky-pouzivania").unwrap();
        assert_eq!(visible(legal), vec!["podmienky-pouzivania"]);

        let main = SectionView::from_link("cennik").unwrap();
        let shown = visible(main);
        assert_eq!(shown.len(), 8);
        assert!(LEGAL_SECTIONS.iter().all(|id| !shown.contains(id)));
    }

    #[test]
    fn unknown_link_counts_as_main() {
        assert_eq!(SectionView::from_link("top"), Some(SectionView::Main));
    }

    #[test]
    fn bare_hash_link_changes_nothing() {
        assert_eq!(SectionView::from_link(&fragment_id("#")), None);
    }

    #[test]
    fn hash_change_uses_same_rule() {
        assert_eq!(
            SectionView::from_location_hash("#podmienky-pouzivania"),
            SectionView::Legal("podmienky-pouzivania")
        );
        assert_eq!(SectionView::from_location_hash("#kontakt"), SectionView::Main);
        assert_eq!(SectionView::from_location_hash(""), SectionView::Main);
        assert_eq!(SectionView::from_location_hash("#nowhere"), SectionView::Main);
    }

    #[test]
    fn fragments_are_percent_decoded() {
        assert_eq!(fragment_id("#o%2Dnas"), "o-nas");
        assert_eq!(fragment_id("ochrana%2Dudajov"), "ochrana-udajov");
        assert_eq!(
            SectionView::from_location_hash("#ochrana%2Dudajov"),
            SectionView::Legal("ochrana-udajov")
        );
    }
}
