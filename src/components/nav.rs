use yew::prelude::*;

use crate::viewport::registry::SectionId;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: SectionId,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, scrolled, menu_open, on_toggle_menu, on_navigate } = props;

    let go = |id: SectionId| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(id);
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    {"Tech"}<span class="accent">{"Forge"}</span>
                </div>

                <div class="nav-links">
                    { for SectionId::ALL.into_iter().map(|id| html! {
                        <button
                            key={id.as_str()}
                            class={classes!("nav-link", (*active == id).then_some("active"))}
                            onclick={go(id)}
                        >
                            { id.label() }
                        </button>
                    }) }
                    <button class="nav-cta" onclick={go(SectionId::Contact)}>
                        {"Get Started"}
                    </button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for SectionId::ALL.into_iter().map(|id| html! {
                                <button key={id.as_str()} class="mobile-link" onclick={go(id)}>
                                    { id.label() }
                                </button>
                            }) }
                            <button class="nav-cta mobile-cta" onclick={go(SectionId::Contact)}>
                                {"Get Started"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
