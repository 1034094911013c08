use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub subtitle: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub center: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("section-title", props.center.then_some("center"))}>
            <div class="section-badge">{ props.subtitle.clone() }</div>
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(description) = &props.description {
                    html! { <p class="section-description">{ description.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
