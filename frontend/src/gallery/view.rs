use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::loader;
use super::pager::PagerControls;
use super::photo::PhotoRecord;
use super::preview::{closes_on_key, is_backdrop_target};
use super::state::{GalleryAction, GalleryState};
use crate::config;

const ACTIVE_PAGE_CLASSES: &[&str] = &["bg-[var(--primary-color)]", "text-white"];
const INACTIVE_PAGE_CLASSES: &[&str] = &[
    "bg-white",
    "text-[var(--dark-text-color)]",
    "hover:bg-[var(--primary-color)]",
    "hover:text-white",
];

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    /// Whether the surrounding section is currently shown.
    #[prop_or(true)]
    pub visible: bool,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let state = use_reducer(GalleryState::default);

    // Single best-effort load per page view
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = loader::load_photos(config::gallery_data_url()).await;
                    state.dispatch(GalleryAction::Loaded(outcome));
                });
                || ()
            },
            (),
        );
    }

    // A preview must not survive its section being hidden
    {
        let state = state.clone();
        use_effect_with_deps(
            move |visible| {
                if !*visible {
                    state.dispatch(GalleryAction::SectionHidden);
                }
                || ()
            },
            props.visible,
        );
    }

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closes_on_key(&e.key(), state.preview().is_open()) {
                state.dispatch(GalleryAction::ClosePreview);
            }
        });
    }

    let on_open = {
        let state = state.clone();
        Callback::from(move |src: String| state.dispatch(GalleryAction::OpenPreview(src)))
    };

    let body = match state.placeholder() {
        Some(message) => html! {
            <p class="col-span-full text-center text-gray-500 py-8">{message}</p>
        },
        None => state
            .visible_photos()
            .iter()
            .map(|photo| {
                html! {
                    <Tile key={photo.src.clone()} photo={photo.clone()} on_open={on_open.clone()} />
                }
            })
            .collect::<Html>(),
    };

    let pagination = match state.controls() {
        Some(controls) => {
            let dispatch = |action: fn() -> GalleryAction| {
                let state = state.clone();
                Callback::from(move |_: MouseEvent| state.dispatch(action()))
            };
            let on_page = {
                let state = state.clone();
                Callback::from(move |page: usize| state.dispatch(GalleryAction::GoToPage(page)))
            };
            html! {
                <Pagination
                    {controls}
                    on_previous={dispatch(|| GalleryAction::PreviousPage)}
                    on_next={dispatch(|| GalleryAction::NextPage)}
                    {on_page}
                />
            }
        }
        None => html! {},
    };

    let modal = {
        let dispatch = |action: fn() -> GalleryAction| {
            let state = state.clone();
            Callback::from(move |_: ()| state.dispatch(action()))
        };
        let nav = state.preview_nav();
        html! {
            <PreviewModal
                photo={state.preview_photo().cloned()}
                show_previous={nav.show_previous}
                show_next={nav.show_next}
                on_previous={dispatch(|| GalleryAction::PreviewPrevious)}
                on_next={dispatch(|| GalleryAction::PreviewNext)}
                on_close={dispatch(|| GalleryAction::ClosePreview)}
            />
        }
    };

    html! {
        <>
            <div id="fotogallery-con" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {body}
            </div>
            {pagination}
            {modal}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct TileProps {
    pub photo: PhotoRecord,
    pub on_open: Callback<String>,
}

#[function_component(Tile)]
fn tile(props: &TileProps) -> Html {
    let broken = use_state(|| false);

    let onclick = {
        let on_open = props.on_open.clone();
        let src = props.photo.src.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(src.clone()))
    };

    let onerror = {
        let broken = broken.clone();
        Callback::from(move |_: Event| broken.set(true))
    };

    html! {
        <div
            class="group relative overflow-hidden rounded-2xl aspect-square cursor-pointer"
            style={(*broken).then(|| "opacity: 0.5;")}
            title={(*broken).then(|| "Unable to load image")}
            {onclick}
        >
            <img
                src={props.photo.src.clone()}
                alt={props.photo.tag.clone()}
                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                {onerror}
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end p-4">
                <span class="text-white font-medium">{props.photo.tag.clone()}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub controls: PagerControls,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
fn pagination(props: &PaginationProps) -> Html {
    let controls = &props.controls;
    let dimmed = |disabled: bool| if disabled { "opacity: 0.5;" } else { "opacity: 1;" };
    let base = "w-10 h-10 rounded-full items-center justify-center transition-colors";

    html! {
        <div
            class="flex justify-center items-center gap-2 mt-8"
            data-current-page={controls.active_page().map(|page| page.to_string())}
        >
            <button
                class={classes!(base, "flex", INACTIVE_PAGE_CLASSES.to_vec())}
                disabled={controls.previous_disabled}
                style={dimmed(controls.previous_disabled)}
                onclick={props.on_previous.clone()}
            >
                {"‹"}
            </button>
            {
                controls.pages.iter().map(|page| {
                    let number = page.number;
                    let on_page = props.on_page.clone();
                    let state_classes = if page.active { ACTIVE_PAGE_CLASSES } else { INACTIVE_PAGE_CLASSES };
                    html! {
                        <button
                            key={number}
                            class={classes!(base, state_classes.to_vec())}
                            style={if page.visible { "display: flex;" } else { "display: none;" }}
                            onclick={Callback::from(move |_: MouseEvent| on_page.emit(number))}
                        >
                            {number}
                        </button>
                    }
                }).collect::<Html>()
            }
            <button
                class={classes!(base, "flex", INACTIVE_PAGE_CLASSES.to_vec())}
                disabled={controls.next_disabled}
                style={dimmed(controls.next_disabled)}
                onclick={props.on_next.clone()}
            >
                {"›"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewModalProps {
    pub photo: Option<PhotoRecord>,
    pub show_previous: bool,
    pub show_next: bool,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(PreviewModal)]
fn preview_modal(props: &PreviewModalProps) -> Html {
    let backdrop = use_node_ref();

    // Only a click that lands on the backdrop itself closes the modal
    let on_backdrop_click = {
        let backdrop = backdrop.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if is_backdrop_target(target.as_ref(), backdrop.get().as_ref()) {
                on_close.emit(());
            }
        })
    };

    let button = |emit: &Callback<()>| {
        let emit = emit.clone();
        Callback::from(move |_: MouseEvent| emit.emit(()))
    };
    let shown = |visible: bool| if visible { "display: flex;" } else { "display: none;" };

    let (src, tag) = props
        .photo
        .as_ref()
        .map(|p| (p.src.clone(), p.tag.clone()))
        .unwrap_or_default();

    html! {
        <div
            id="photo-preview-modal"
            ref={backdrop}
            class={classes!(
                "fixed", "inset-0", "z-50", "bg-black/80", "flex", "items-center", "justify-center", "p-4",
                props.photo.is_none().then_some("hidden")
            )}
            onclick={on_backdrop_click}
        >
            <div class="relative max-w-5xl w-full flex flex-col items-center">
                <button
                    class="absolute -top-12 right-0 text-white text-4xl"
                    onclick={button(&props.on_close)}
                >
                    {"×"}
                </button>
                <button
                    id="preview-prev"
                    class="absolute left-2 top-1/2 -translate-y-1/2 w-12 h-12 rounded-full bg-white/80 items-center justify-center"
                    style={shown(props.show_previous)}
                    onclick={button(&props.on_previous)}
                >
                    {"‹"}
                </button>
                <img id="preview-image" class="max-h-[80vh] w-auto rounded-2xl" src={src} alt={tag.clone()} />
                <span id="preview-tag" class="mt-4 text-white text-lg font-medium">{tag}</span>
                <button
                    id="preview-next"
                    class="absolute right-2 top-1/2 -translate-y-1/2 w-12 h-12 rounded-full bg-white/80 items-center justify-center"
                    style={shown(props.show_next)}
                    onclick={button(&props.on_next)}
                >
                    {"›"}
                </button>
            </div>
        </div>
    }
}
