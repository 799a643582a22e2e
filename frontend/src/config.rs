use log::Level;

/// Where the gallery descriptors live, relative to the page.
pub const DEFAULT_GALLERY_DATA_URL: &str = "./assets/json/gallery.json";

pub const PHOTOS_PER_PAGE: usize = 6;

/// Numbered buttons in the pagination group. Pages past this count are only
/// reachable through the next button.
pub const PAGE_BUTTON_COUNT: usize = 5;

pub const PLACEHOLDER_UNAVAILABLE: &str = "Fotografie budú doplnené neskôr";
pub const PLACEHOLDER_EMPTY: &str = "Fotografií nie sú dostupné";

pub fn gallery_data_url() -> &'static str {
    option_env!("GALLERY_DATA_URL").unwrap_or(DEFAULT_GALLERY_DATA_URL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
