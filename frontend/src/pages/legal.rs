use yew::prelude::*;

use crate::pages::home::Section;
use crate::sections::SectionView;

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub view: SectionView,
}

#[function_component(LegalSections)]
pub fn legal_sections(props: &LegalProps) -> Html {
    let view = props.view;
    let block = "legal-content py-20 px-6 max-w-3xl mx-auto";

    html! {
        <>
            <Section id="ochrana-udajov" {view} class={classes!(block)}>
                <h1 class="text-3xl font-bold mb-8">{"Ochrana osobných údajov"}</h1>
                <p>{"Osobné údaje spracúvame len v rozsahu nevyhnutnom na vybavenie vašej rezervácie alebo otázky."}</p>
                <p>{"Údaje neposkytujeme tretím stranám a uchovávame ich len po nevyhnutnú dobu."}</p>
                <a href="#hero" class="inline-block mt-8 underline">{"Späť na hlavnú stránku"}</a>
            </Section>
            <Section id="podmienky-pouzivania" {view} class={classes!(block)}>
                <h1 class="text-3xl font-bold mb-8">{"Podmienky používania"}</h1>
                <p>{"Obsah stránky má informatívny charakter a môže sa meniť bez predchádzajúceho upozornenia."}</p>
                <a href="#hero" class="inline-block mt-8 underline">{"Späť na hlavnú stránku"}</a>
            </Section>
        </>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="py-10 px-6 bg-[var(--dark-text-color)] text-white text-sm">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row gap-4 justify-between">
                <span>{"Všetky práva vyhradené."}</span>
                <div class="flex gap-6">
                    <a href="#ochrana-udajov" class="hover:underline">{"Ochrana osobných údajov"}</a>
                    <a href="#podmienky-pouzivania" class="hover:underline">{"Podmienky používania"}</a>
                </div>
            </div>
        </footer>
    }
}
