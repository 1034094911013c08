use std::rc::Rc;

use stylist::Style;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::error::SiteError;
use crate::viewport::observer::{use_visibility, Crossing, ObserverConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaLoadState {
    Pending,
    Loaded,
    Failed,
}

/// How the preloaded image settled. A response that arrives but can't be
/// decoded (an HTML fallback page, truncated bytes) is an `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageEvent {
    Load,
    Error,
}

/// Proof that a fetch was started for one load cycle. Results carrying a
/// ticket from an older cycle are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    cycle: u32,
    pub src: String,
}

#[derive(Debug)]
pub struct MediaLoader {
    src: String,
    state: MediaLoadState,
    cycle: u32,
    requested: bool,
    attempts: u32,
}

impl MediaLoader {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            state: MediaLoadState::Pending,
            cycle: 0,
            requested: false,
            attempts: 0,
        }
    }

    pub fn state(&self) -> MediaLoadState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Hands out the single fetch of the current cycle.
    pub fn begin(&mut self) -> Option<FetchTicket> {
        if self.state != MediaLoadState::Pending || self.requested {
            return None;
        }
        self.requested = true;
        self.attempts += 1;
        Some(FetchTicket { cycle: self.cycle, src: self.src.clone() })
    }

    /// Returns whether the state changed.
    pub fn complete(&mut self, ticket: &FetchTicket, ok: bool) -> bool {
        if ticket.cycle != self.cycle || self.state != MediaLoadState::Pending {
            return false;
        }
        self.state = if ok { MediaLoadState::Loaded } else { MediaLoadState::Failed };
        true
    }

    pub fn settle(&mut self, ticket: &FetchTicket, event: ImageEvent) -> bool {
        self.complete(ticket, event == ImageEvent::Load)
    }

    /// A new source starts a fresh cycle back in `Pending`. Returns false if
    /// the source didn't change.
    pub fn reset(&mut self, src: &str) -> bool {
        if self.src == src {
            return false;
        }
        self.src = src.to_string();
        self.state = MediaLoadState::Pending;
        self.cycle += 1;
        self.requested = false;
        true
    }
}

/// Off-screen image that downloads and decodes `src`, reporting once
/// through `on_settled`. Dropping it detaches the handlers, so a late result
/// after teardown or a source change is never delivered.
struct ImagePreload {
    image: HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl ImagePreload {
    fn start(src: &str, on_settled: impl Fn(ImageEvent) + 'static) -> Result<Self, SiteError> {
        let image = HtmlImageElement::new()
            .map_err(|_| SiteError::EnvironmentUnsupported("HTMLImageElement"))?;

        let on_settled = Rc::new(on_settled);
        let on_load = {
            let on_settled = on_settled.clone();
            Closure::<dyn FnMut()>::new(move || on_settled(ImageEvent::Load))
        };
        let on_error = Closure::<dyn FnMut()>::new(move || on_settled(ImageEvent::Error));

        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        image.set_src(src);

        Ok(Self { image, _on_load: on_load, _on_error: on_error })
    }
}

impl Drop for ImagePreload {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

const FRAME_CSS: &str = r#"
    position: relative;
    overflow: hidden;

    img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        display: block;
    }

    .skeleton {
        width: 100%;
        height: 100%;
        background: linear-gradient(135deg, #e5e7eb, #d1d5db);
        animation: tf-pulse 1.6s ease-in-out infinite;
    }

    .fallback {
        width: 100%;
        height: 100%;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: linear-gradient(135deg, #d1d5db, #9ca3af);
        color: #4b5563;
        font-size: 0.85rem;
    }

    .fallback-icon {
        font-size: 2rem;
        margin-bottom: 0.5rem;
    }
"#;

fn frame_class() -> Classes {
    match Style::new(FRAME_CSS) {
        Ok(style) => classes!(style.get_class_name().to_string()),
        Err(err) => {
            log::warn!("lazy image style rejected: {err}");
            classes!()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that is only fetched once its frame comes near the viewport.
/// Shows a skeleton until then and a placeholder if the image fails to load
/// or decode.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loader = use_mut_ref(|| MediaLoader::new(props.src.to_string()));
    let state = use_state_eq(|| MediaLoadState::Pending);
    let preload = use_mut_ref(|| None::<ImagePreload>);
    let is_mounted = use_is_mounted();
    let frame_class = use_memo(|_| frame_class(), ());

    {
        let loader = loader.clone();
        let state = state.clone();
        let preload = preload.clone();
        use_effect_with_deps(
            move |src| {
                if loader.borrow_mut().reset(src) {
                    preload.borrow_mut().take();
                    state.set(MediaLoadState::Pending);
                }
                move || {
                    preload.borrow_mut().take();
                }
            },
            props.src.clone(),
        );
    }

    let on_crossing = {
        let loader = loader.clone();
        let state = state.clone();
        let preload = preload.clone();
        Callback::from(move |crossing: Crossing| {
            if !crossing.visible {
                return;
            }
            let Some(ticket) = loader.borrow_mut().begin() else {
                return;
            };

            let on_settled = {
                let loader = loader.clone();
                let state = state.clone();
                let is_mounted = is_mounted.clone();
                let ticket = ticket.clone();
                move |event: ImageEvent| {
                    if !is_mounted() {
                        return;
                    }
                    let mut loader = loader.borrow_mut();
                    if event == ImageEvent::Error {
                        let err = SiteError::ResourceLoad {
                            src: ticket.src.clone(),
                            reason: "image did not load or decode".to_string(),
                        };
                        gloo_console::error!(format!("{err} (attempt {})", loader.attempts()));
                    }
                    if loader.settle(&ticket, event) {
                        state.set(loader.state());
                    }
                }
            };

            match ImagePreload::start(&ticket.src, on_settled) {
                Ok(started) => *preload.borrow_mut() = Some(started),
                Err(err) => {
                    log::warn!("{err}");
                    let mut loader = loader.borrow_mut();
                    if loader.settle(&ticket, ImageEvent::Error) {
                        state.set(loader.state());
                    }
                }
            }
        })
    };

    use_visibility(node.clone(), ObserverConfig::lazy_media(), props.src.clone(), on_crossing);

    let body = match *state {
        MediaLoadState::Loaded => html! {
            <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" />
        },
        MediaLoadState::Failed => html! {
            <div class="fallback" role="img" aria-label={props.alt.clone()}>
                <div class="fallback-icon">{"🏗️"}</div>
                <p>{"Image placeholder"}</p>
            </div>
        },
        MediaLoadState::Pending => html! { <div class="skeleton"></div> },
    };

    html! {
        <div ref={node} class={classes!((*frame_class).clone(), props.class.clone())}>
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_terminal() {
        let mut loader = MediaLoader::new("/assets/Industrial.jpeg");
        let ticket = loader.begin().unwrap();
        assert!(loader.complete(&ticket, true));
        assert_eq!(loader.state(), MediaLoadState::Loaded);

        assert!(loader.begin().is_none());
        assert!(!loader.complete(&ticket, false));
        assert_eq!(loader.state(), MediaLoadState::Loaded);
    }

    #[test]
    fn failure_makes_exactly_one_attempt() {
        let mut loader = MediaLoader::new("/assets/missing.jpeg");
        let ticket = loader.begin().unwrap();
        // repeated visibility while the fetch is in flight
        assert!(loader.begin().is_none());
        assert!(loader.complete(&ticket, false));
        assert_eq!(loader.state(), MediaLoadState::Failed);

        assert!(loader.begin().is_none());
        assert_eq!(loader.attempts(), 1);
    }

    #[test]
    fn new_source_resets_and_fetches_once_more() {
        let mut loader = MediaLoader::new("/assets/missing.jpeg");
        let ticket = loader.begin().unwrap();
        loader.complete(&ticket, false);

        assert!(loader.reset("/assets/Financial.jpeg"));
        assert_eq!(loader.state(), MediaLoadState::Pending);

        let ticket = loader.begin().unwrap();
        assert_eq!(ticket.src, "/assets/Financial.jpeg");
        assert!(loader.begin().is_none());
        assert_eq!(loader.attempts(), 2);
    }

    #[test]
    fn same_source_is_not_a_reset() {
        let mut loader = MediaLoader::new("/a.png");
        let ticket = loader.begin().unwrap();
        loader.complete(&ticket, true);
        assert!(!loader.reset("/a.png"));
        assert_eq!(loader.state(), MediaLoadState::Loaded);
    }

    #[test]
    fn undecodable_response_settles_as_failed() {
        // the server answered, but with something the browser can't decode
        let mut loader = MediaLoader::new("/assets/images/missing.svg");
        let ticket = loader.begin().unwrap();
        assert!(loader.settle(&ticket, ImageEvent::Error));
        assert_eq!(loader.state(), MediaLoadState::Failed);
        assert_eq!(loader.attempts(), 1);

        // a stray load event afterwards changes nothing
        assert!(!loader.settle(&ticket, ImageEvent::Load));
        assert_eq!(loader.state(), MediaLoadState::Failed);
    }

    #[test]
    fn load_event_settles_as_loaded() {
        let mut loader = MediaLoader::new("/assets/images/industrial.svg");
        let ticket = loader.begin().unwrap();
        assert!(loader.settle(&ticket, ImageEvent::Load));
        assert_eq!(loader.state(), MediaLoadState::Loaded);
    }

    #[test]
    fn late_result_from_old_source_is_dropped() {
        let mut loader = MediaLoader::new("/old.png");
        let stale = loader.begin().unwrap();
        loader.reset("/new.png");

        assert!(!loader.complete(&stale, true));
        assert_eq!(loader.state(), MediaLoadState::Pending);

        let fresh = loader.begin().unwrap();
        assert!(loader.complete(&fresh, false));
        assert_eq!(loader.state(), MediaLoadState::Failed);
    }
}
