use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkSelected,
    OutsideClick,
}

/// Whether the panel is open after `event`.
pub fn menu_open_after(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::LinkSelected | MenuEvent::OutsideClick => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    /// `(section id, label)` pairs.
    pub links: Vec<(&'static str, &'static str)>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let open = use_state(|| false);
    let container = use_node_ref();

    let apply = {
        let open = open.clone();
        move |event: MenuEvent| {
            let next = menu_open_after(*open, event);
            if next != *open {
                open.set(next);
            }
        }
    };

    // Toggle and panel share the container, so clicks on either stay inside
    {
        let apply = apply.clone();
        use_click_away(container.clone(), move |_: Event| apply(MenuEvent::OutsideClick));
    }

    let toggle = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(MenuEvent::Toggle))
    };

    html! {
        <div ref={container} class="md:hidden">
            <button id="mobile-menu-toggle" class="p-2 text-2xl" onclick={toggle}>
                {"☰"}
            </button>
            <div
                id="mobile-menu"
                class={classes!("absolute", "left-0", "right-0", "top-full", "bg-white", "shadow-lg", (!*open).then_some("hidden"))}
            >
                {
                    props.links.iter().map(|(id, label)| {
                        let apply = apply.clone();
                        html! {
                            <a
                                href={format!("#{}", id)}
                                class="block px-6 py-3 text-[var(--dark-text-color)] hover:bg-gray-100"
                                onclick={Callback::from(move |_: MouseEvent| apply(MenuEvent::LinkSelected))}
                            >
                                {*label}
                            </a>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_visibility() {
        assert!(menu_open_after(false, MenuEvent::Toggle));
        assert!(!menu_open_after(true, MenuEvent::Toggle));
    }

    #[test]
    fn link_and_outside_click_close() {
        for event in [MenuEvent::LinkSelected, MenuEvent::OutsideClick] {
            assert!(!menu_open_after(true, event));
            assert!(!menu_open_after(false, event));
        }
    }
}
