use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::loader::LoadOutcome;
use super::pager::{page_slice, Pager, PagerControls};
use super::photo::PhotoRecord;
use super::preview::{PreviewNav, PreviewState};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Empty,
    Unavailable,
}

pub enum GalleryAction {
    Loaded(LoadOutcome),
    PreviousPage,
    NextPage,
    GoToPage(usize),
    OpenPreview(String),
    PreviewNext,
    PreviewPrevious,
    ClosePreview,
    /// The section holding the gallery stopped being shown.
    SectionHidden,
}

/// Everything the gallery knows. Only changed through [`GalleryAction`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    photos: Rc<[PhotoRecord]>,
    status: LoadStatus,
    pager: Option<Pager>,
    preview: PreviewState,
    page_size: usize,
    page_buttons: usize,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(config::PHOTOS_PER_PAGE, config::PAGE_BUTTON_COUNT)
    }
}

impl GalleryState {
    pub fn new(page_size: usize, page_buttons: usize) -> Self {
        Self {
            photos: Rc::from(Vec::new()),
            status: LoadStatus::Loading,
            pager: None,
            preview: PreviewState::closed(),
            page_size,
            page_buttons,
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn pager(&self) -> Option<&Pager> {
        self.pager.as_ref()
    }

    pub fn preview(&self) -> PreviewState {
        self.preview
    }

    /// Tiles on the current page; nothing while there is no pager.
    pub fn visible_photos(&self) -> &[PhotoRecord] {
        match &self.pager {
            Some(pager) => page_slice(&self.photos[..], pager.current_page(), self.page_size),
            None => &[],
        }
    }

    pub fn controls(&self) -> Option<PagerControls> {
        self.pager.map(|pager| pager.controls(self.page_buttons))
    }

    pub fn preview_photo(&self) -> Option<&PhotoRecord> {
        self.preview.active_photo(&self.photos)
    }

    pub fn preview_nav(&self) -> PreviewNav {
        self.preview.navigation(self.photos.len())
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self.status {
            LoadStatus::Empty => Some(config::PLACEHOLDER_EMPTY),
            LoadStatus::Unavailable => Some(config::PLACEHOLDER_UNAVAILABLE),
            LoadStatus::Loading | LoadStatus::Ready => None,
        }
    }

    fn apply(&mut self, action: GalleryAction) -> bool {
        match action {
            GalleryAction::Loaded(outcome) => {
                self.load(outcome);
                true
            }
            GalleryAction::PreviousPage => self.pager.as_mut().map_or(false, Pager::go_previous),
            GalleryAction::NextPage => self.pager.as_mut().map_or(false, Pager::go_next),
            GalleryAction::GoToPage(page) => {
                self.pager.as_mut().map_or(false, |pager| pager.go_to(page))
            }
            GalleryAction::OpenPreview(src) => self.preview.open(&self.photos, &src),
            GalleryAction::PreviewNext => self.preview.next(&self.photos),
            GalleryAction::PreviewPrevious => self.preview.previous(&self.photos),
            GalleryAction::ClosePreview | GalleryAction::SectionHidden => self.preview.close(),
        }
    }

    fn load(&mut self, outcome: LoadOutcome) {
        self.preview = PreviewState::closed();
        match outcome {
            LoadOutcome::Loaded(photos) => {
                self.pager = Pager::new(photos.len(), self.page_size);
                self.status = if self.pager.is_some() {
                    LoadStatus::Ready
                } else {
                    LoadStatus::Empty
                };
                self.photos = Rc::from(photos);
            }
            LoadOutcome::Empty => {
                self.photos = Rc::from(Vec::new());
                self.pager = None;
                self.status = LoadStatus::Empty;
            }
            LoadOutcome::Unavailable => {
                self.photos = Rc::from(Vec::new());
                self.pager = None;
                self.status = LoadStatus::Unavailable;
            }
        }
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            debug!(
                "Gallery page {:?}, preview {:?}",
                next.pager.map(|p| p.current_page()),
                next.preview.active_index()
            );
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::photo::PhotoDescriptor;

    fn records(count: usize) -> Vec<PhotoRecord> {
        (0..count)
            .map(|i| {
                PhotoRecord::from(PhotoDescriptor {
                    path: format!("assets/img/gallery/room_{:02}.jpg", i),
                })
            })
            .collect()
    }

    fn loaded(count: usize) -> Rc<GalleryState> {
        Rc::new(GalleryState::default()).reduce(GalleryAction::Loaded(LoadOutcome::Loaded(
            records(count),
        )))
    }

    fn visible_srcs(state: &GalleryState) -> Vec<String> {
        state.visible_photos().iter().map(|p| p.src.clone()).collect()
    }

    #[test]
    fn starts_loading_without_tiles_or_controls() {
        let state = GalleryState::default();
        assert_eq!(state.status(), LoadStatus::Loading);
        assert!(state.visible_photos().is_empty());
        assert_eq!(state.controls(), None);
        assert_eq!(state.placeholder(), None);
    }

    #[test]
    fn load_renders_first_page() {
        let state = loaded(14);
        assert_eq!(state.status(), LoadStatus::Ready);
        assert_eq!(state.pager().map(|p| p.total_pages()), Some(3));
        assert_eq!(visible_srcs(&state), visible_srcs_for(0..6));
        assert_eq!(state.controls().and_then(|c| c.active_page()), Some(1));
    }

    fn visible_srcs_for(range: std::ops::Range<usize>) -> Vec<String> {
        range
            .map(|i| format!("assets/img/gallery/room_{:02}.jpg", i))
            .collect()
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let state = loaded(14)
            .reduce(GalleryAction::NextPage)
            .reduce(GalleryAction::NextPage);
        assert_eq!(state.pager().map(|p| p.current_page()), Some(3));
        assert_eq!(visible_srcs(&state), visible_srcs_for(12..14));
    }

    #[test]
    fn guarded_page_moves_keep_the_same_state() {
        let first = loaded(14);
        let after_previous = first.clone().reduce(GalleryAction::PreviousPage);
        assert!(Rc::ptr_eq(&first, &after_previous));

        let last = first.reduce(GalleryAction::GoToPage(3));
        let after_next = last.clone().reduce(GalleryAction::NextPage);
        assert!(Rc::ptr_eq(&last, &after_next));

        let after_jump = last.clone().reduce(GalleryAction::GoToPage(4));
        assert!(Rc::ptr_eq(&last, &after_jump));
    }

    #[test]
    fn empty_data_shows_not_available_and_no_controls() {
        let state = Rc::new(GalleryState::default())
            .reduce(GalleryAction::Loaded(LoadOutcome::Empty));
        assert_eq!(state.status(), LoadStatus::Empty);
        assert_eq!(state.placeholder(), Some(config::PLACEHOLDER_EMPTY));
        assert_eq!(state.controls(), None);
        assert!(state.visible_photos().is_empty());
    }

    #[test]
    fn failed_fetch_shows_added_later() {
        let state = Rc::new(GalleryState::default())
            .reduce(GalleryAction::Loaded(LoadOutcome::Unavailable));
        assert_eq!(state.status(), LoadStatus::Unavailable);
        assert_eq!(state.placeholder(), Some(config::PLACEHOLDER_UNAVAILABLE));
        assert_eq!(state.controls(), None);
    }

    #[test]
    fn loaded_with_no_records_falls_back_to_empty() {
        let state = Rc::new(GalleryState::default())
            .reduce(GalleryAction::Loaded(LoadOutcome::Loaded(Vec::new())));
        assert_eq!(state.status(), LoadStatus::Empty);
        assert!(state.pager().is_none());
    }

    #[test]
    fn actions_before_load_are_noops() {
        let initial = Rc::new(GalleryState::default());
        for action in [
            GalleryAction::PreviousPage,
            GalleryAction::NextPage,
            GalleryAction::GoToPage(1),
            GalleryAction::OpenPreview("assets/img/gallery/room_00.jpg".to_string()),
            GalleryAction::PreviewNext,
            GalleryAction::PreviewPrevious,
            GalleryAction::ClosePreview,
        ] {
            let next = initial.clone().reduce(action);
            assert!(Rc::ptr_eq(&initial, &next));
        }
    }

    #[test]
    fn preview_spans_the_whole_collection() {
        let state = loaded(14).reduce(GalleryAction::OpenPreview(
            "assets/img/gallery/room_05.jpg".to_string(),
        ));
        assert_eq!(state.preview().active_index(), Some(5));

        let state = state.reduce(GalleryAction::PreviewNext);
        assert_eq!(state.preview().active_index(), Some(6));
        assert_eq!(state.pager().map(|p| p.current_page()), Some(1));
        assert_eq!(
            state.preview_photo().map(|p| p.filename.as_str()),
            Some("room_06.jpg")
        );
    }

    #[test]
    fn preview_at_first_photo_hides_previous_arrow() {
        let state = loaded(14).reduce(GalleryAction::OpenPreview(
            "assets/img/gallery/room_00.jpg".to_string(),
        ));
        let nav = state.preview_nav();
        assert!(!nav.show_previous);
        assert!(nav.show_next);
    }

    #[test]
    fn close_resets_from_any_state() {
        let open = loaded(3).reduce(GalleryAction::OpenPreview(
            "assets/img/gallery/room_02.jpg".to_string(),
        ));
        let closed = open.reduce(GalleryAction::ClosePreview);
        assert_eq!(closed.preview().active_index_or_closed(), -1);

        let again = closed.clone().reduce(GalleryAction::ClosePreview);
        assert!(Rc::ptr_eq(&closed, &again));
    }

    #[test]
    fn paging_leaves_preview_alone() {
        let state = loaded(14)
            .reduce(GalleryAction::OpenPreview(
                "assets/img/gallery/room_13.jpg".to_string(),
            ))
            .reduce(GalleryAction::PreviousPage)
            .reduce(GalleryAction::NextPage);
        assert_eq!(state.preview().active_index(), Some(13));
        assert_eq!(state.pager().map(|p| p.current_page()), Some(2));
    }

    #[test]
    fn hiding_the_section_closes_an_open_preview() {
        let open = loaded(14).reduce(GalleryAction::OpenPreview(
            "assets/img/gallery/room_07.jpg".to_string(),
        ));
        let hidden = open.reduce(GalleryAction::SectionHidden);
        assert!(!hidden.preview().is_open());
        assert!(hidden.preview_photo().is_none());

        // Nothing reopens once the section is back
        let shown_again = hidden.clone().reduce(GalleryAction::NextPage);
        assert!(!shown_again.preview().is_open());
    }

    #[test]
    fn hiding_the_section_with_preview_closed_is_noop() {
        let state = loaded(14);
        let hidden = state.clone().reduce(GalleryAction::SectionHidden);
        assert!(Rc::ptr_eq(&state, &hidden));
    }
}
