use yew::prelude::*;

use crate::gallery::view::Gallery;
use crate::sections::SectionView;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: &'static str,
    pub view: SectionView,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that hides itself when the current view excludes it.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id}
            class={classes!(props.class.clone(), (!props.view.is_visible(props.id)).then_some("hidden"))}
        >
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MainSectionsProps {
    pub view: SectionView,
}

#[function_component(MainSections)]
pub fn main_sections(props: &MainSectionsProps) -> Html {
    let view = props.view;
    let block = "py-20 px-6 max-w-6xl mx-auto";
    let hero = "min-h-[70vh] flex flex-col items-center justify-center text-center bg-[var(--primary-color)] text-white px-6";

    html! {
        <>
            <Section id="hero" {view} class={classes!(hero)}>
                <h1 class="text-5xl font-bold mb-6">{"Vitajte"}</h1>
                <p class="text-xl max-w-2xl">{"Pokojné miesto na oddych, dobré jedlo a spoločné chvíle."}</p>
                <a href="#kontakt" class="mt-8 inline-block rounded-full bg-white text-[var(--dark-text-color)] px-8 py-3 font-medium">
                    {"Kontaktujte nás"}
                </a>
            </Section>
            <Section id="o-nas" {view} class={classes!(block)}>
                <h2 class="text-3xl font-bold mb-6">{"O nás"}</h2>
                <p>{"Rodinné zariadenie s dlhoročnou tradíciou a priateľskou atmosférou."}</p>
            </Section>
            <Section id="fotogaleria" {view} class={classes!(block)}>
                <h2 class="text-3xl font-bold mb-8">{"Fotogaléria"}</h2>
                <Gallery visible={view.is_visible("fotogaleria")} />
            </Section>
            <Section id="stravovanie" {view} class={classes!(block)}>
                <h2 class="text-3xl font-bold mb-6">{"Stravovanie"}</h2>
                <p>{"Raňajky, obedy a večere pripravované z lokálnych surovín."}</p>
            </Section>
            <Section id="cennik" {view} class={classes!(block)}>
                <h2 class="text-3xl font-bold mb-6">{"Cenník"}</h2>
                <p>{"Aktuálne ceny vám radi poskytneme na vyžiadanie."}</p>
            </Section>
            <Section id="informacie" {view} class={classes!(block)}>
                <h2 class="text-3xl font-bold mb-6">{"Informácie"}</h2>
                <p>{"Príchod od 14:00, odchod do 10:00."}</p>
            </Section>
            <Section id="dokumenty" {view} class={classes!(block)}>
                <h2 class="text-3xl font-bold mb-6">{"Dokumenty"}</h2>
                <p>{"Prevádzkový poriadok a ďalšie dokumenty na stiahnutie."}</p>
            </Section>
            <Section id="kontakt" {view} class={classes!(block)}>
                <h2 class="text-3xl font-bold mb-6">{"Kontakt"}</h2>
                <p>{"Napíšte nám alebo zavolajte, radi odpovieme na vaše otázky."}</p>
            </Section>
        </>
    }
}
