use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::{window, Element, MouseEvent};
use wasm_bindgen::JsCast;

mod config;
mod sections;
mod components {
    pub mod mobile_menu;
}
mod gallery {
    pub mod photo;
    pub mod loader;
    pub mod pager;
    pub mod preview;
    pub mod state;
    pub mod view;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use components::mobile_menu::MobileMenu;
use pages::{
    home::MainSections,
    legal::{Footer, LegalSections},
};
use sections::{fragment_id, SectionView};

const NAV_LINKS: &[(&str, &str)] = &[
    ("o-nas", "O nás"),
    ("fotogaleria", "Fotogaléria"),
    ("stravovanie", "Stravovanie"),
    ("cennik", "Cenník"),
    ("informacie", "Informácie"),
    ("dokumenty", "Dokumenty"),
    ("kontakt", "Kontakt"),
];

/// Fragment of the in-page link the click landed on, if any.
fn clicked_fragment(e: &MouseEvent) -> Option<String> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest("a[href^='#']").ok()??;
    let href = link.get_attribute("href")?;
    Some(fragment_id(&href))
}

fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="sticky top-0 z-40 bg-white shadow-sm">
            <div class="relative max-w-6xl mx-auto flex items-center justify-between px-6 py-4">
                <a href="#hero" class="text-xl font-bold text-[var(--primary-color)]">{"Domov"}</a>
                <div class="hidden md:flex gap-6">
                    {
                        NAV_LINKS.iter().map(|(id, label)| html! {
                            <a href={format!("#{}", id)} class="text-[var(--dark-text-color)] hover:text-[var(--primary-color)]">
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
                <MobileMenu links={NAV_LINKS.to_vec()} />
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let view = use_state_eq(SectionView::default);

    {
        let view = view.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(id) = clicked_fragment(&e) else {
                return;
            };
            match SectionView::from_link(&id) {
                Some(SectionView::Legal(section)) => {
                    e.prevent_default();
                    info!("Showing legal section {}", section);
                    view.set(SectionView::Legal(section));
                    if let Some(window) = window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                Some(SectionView::Main) => view.set(SectionView::Main),
                None => {}
            }
        });
    }

    // Back/forward navigation
    {
        let view = view.clone();
        use_event_with_window("hashchange", move |_: Event| {
            view.set(SectionView::from_location_hash(&current_hash()));
        });
    }

    html! {
        <>
            <Nav />
            <main>
                <MainSections view={*view} />
                <LegalSections view={*view} />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting site frontend");
    yew::Renderer::<App>::new().render();
}
