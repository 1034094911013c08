use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod error;
mod viewport;
mod components {
    pub mod counter;
    pub mod lazy_image;
    pub mod nav;
    pub mod section_title;
    pub mod sections;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing content={props.content.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let content = match SiteContent::load() {
        Ok(content) => content,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { content: Rc::new(content) }).render();
}
