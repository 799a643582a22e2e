use super::photo::PhotoRecord;

/// The preview modal: closed, or open on one index of the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewState {
    active: Option<usize>,
}

/// Which arrow buttons the modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewNav {
    pub show_previous: bool,
    pub show_next: bool,
}

impl PreviewState {
    pub fn closed() -> Self {
        Self { active: None }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The index with `-1` standing for closed.
    pub fn active_index_or_closed(&self) -> isize {
        self.active.map_or(-1, |i| i as isize)
    }

    pub fn active_photo<'a>(&self, photos: &'a [PhotoRecord]) -> Option<&'a PhotoRecord> {
        self.active.and_then(|i| photos.get(i))
    }

    /// Opens on the photo whose `src` matches exactly.
    ///
    /// Paths are expected to be unique in the gallery data. With duplicates
    /// the first occurrence wins, so stepping from a later duplicate jumps
    /// back to the first one's neighbours.
    pub fn open(&mut self, photos: &[PhotoRecord], src: &str) -> bool {
        match photos.iter().position(|p| p.src == src) {
            Some(index) => {
                let changed = self.active != Some(index);
                self.active = Some(index);
                changed
            }
            None => false,
        }
    }

    pub fn next(&mut self, photos: &[PhotoRecord]) -> bool {
        match self.active {
            Some(i) if i + 1 < photos.len() => {
                let src = photos[i + 1].src.clone();
                self.open(photos, &src)
            }
            _ => false,
        }
    }

    pub fn previous(&mut self, photos: &[PhotoRecord]) -> bool {
        match self.active {
            Some(i) if i > 0 && i <= photos.len() => {
                let src = photos[i - 1].src.clone();
                self.open(photos, &src)
            }
            _ => false,
        }
    }

    pub fn close(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn navigation(&self, photo_count: usize) -> PreviewNav {
        let index = self.active_index_or_closed();
        PreviewNav {
            show_previous: index > 0,
            show_next: index < photo_count as isize - 1,
        }
    }
}

/// Escape closes the modal, but only while it is showing.
pub fn closes_on_key(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

/// A pointer event closes the modal only when it lands on the backdrop
/// itself, not on anything inside it.
pub fn is_backdrop_target<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}
