use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use super::registry::{SectionId, SectionRegistry, SharedRegistry};

/// Past this offset the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
/// The point below the top of the viewport that decides the active section.
pub const ACTIVE_BAND_OFFSET_PX: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub is_past_threshold: bool,
    pub active_section: SectionId,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            is_past_threshold: false,
            active_section: SectionId::Home,
        }
    }
}

impl ScrollState {
    /// State after the page settled at `offset`. The active section is
    /// sticky: when nothing contains the band the previous one is kept.
    pub fn next(&self, offset: f64, registry: &SectionRegistry) -> ScrollState {
        ScrollState {
            is_past_threshold: offset > SCROLL_THRESHOLD_PX,
            active_section: registry
                .first_containing(offset + ACTIVE_BAND_OFFSET_PX)
                .unwrap_or(self.active_section),
        }
    }
}

/// Collapses a burst of scroll events into one evaluation per frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    /// True if the caller should schedule a frame; false if one is pending.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Call at the start of the scheduled frame.
    pub fn settle(&mut self) {
        self.ticking = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerSpec {
    pub event: &'static str,
    pub passive: bool,
}

/// The tracker only reads the offset, so the browser may scroll without
/// waiting on it.
pub const SCROLL_LISTENER: ListenerSpec = ListenerSpec { event: "scroll", passive: true };

impl ListenerSpec {
    fn options(&self) -> AddEventListenerOptions {
        let mut options = AddEventListenerOptions::new();
        options.passive(self.passive);
        options
    }
}

/// Logs a failed subscribe or unsubscribe. Returns whether it went through.
fn check_listener<E: Debug>(action: &str, spec: ListenerSpec, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("could not {action} {} events: {err:?}", spec.event);
            false
        }
    }
}

fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Tracks the window scroll position against the sections in `registry`.
/// Reads happen at most once per frame and always use the latest offset.
#[hook]
pub fn use_scroll_tracker(registry: SharedRegistry) -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |registry| {
                let registry = registry.clone();
                let latest = Rc::new(RefCell::new(ScrollState::default()));

                let evaluate = Rc::new(move || {
                    let next = registry.with(|sections| latest.borrow().next(current_offset(), sections));
                    *latest.borrow_mut() = next.clone();
                    state.set(next);
                });

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
                    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

                    let on_scroll = {
                        let pending = pending.clone();
                        let evaluate = evaluate.clone();
                        Closure::<dyn Fn()>::new(move || {
                            if !throttle.borrow_mut().request() {
                                return;
                            }
                            let throttle = throttle.clone();
                            let evaluate = evaluate.clone();
                            let frame = request_animation_frame(move |_| {
                                throttle.borrow_mut().settle();
                                evaluate();
                            });
                            *pending.borrow_mut() = Some(frame);
                        })
                    };

                    check_listener(
                        "subscribe to",
                        SCROLL_LISTENER,
                        window.add_event_listener_with_callback_and_add_event_listener_options(
                            SCROLL_LISTENER.event,
                            on_scroll.as_ref().unchecked_ref(),
                            &SCROLL_LISTENER.options(),
                        ),
                    );

                    // page may be restored mid-scroll
                    evaluate();

                    Box::new(move || {
                        check_listener(
                            "unsubscribe from",
                            SCROLL_LISTENER,
                            window.remove_event_listener_with_callback(
                                SCROLL_LISTENER.event,
                                on_scroll.as_ref().unchecked_ref(),
                            ),
                        );
                        pending.borrow_mut().take();
                        drop(on_scroll);
                    })
                } else {
                    Box::new(|| ())
                };

                destructor
            },
            registry,
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::registry::tests::{stacked_page, FakeSection};

    #[test]
    fn threshold_is_strict() {
        let registry = stacked_page();
        let state = ScrollState::default();
        assert!(!state.next(0.0, &registry).is_past_threshold);
        assert!(!state.next(50.0, &registry).is_past_threshold);
        assert!(state.next(50.5, &registry).is_past_threshold);
        assert!(state.next(51.0, &registry).is_past_threshold);
    }

    #[test]
    fn band_sits_100px_below_the_top() {
        let registry = stacked_page();
        let state = ScrollState::default();
        // about starts at 800: 699 + 100 = 799 is still home
        assert_eq!(state.next(699.0, &registry).active_section, SectionId::Home);
        assert_eq!(state.next(700.0, &registry).active_section, SectionId::About);
        assert_eq!(state.next(1600.0, &registry).active_section, SectionId::Services);
    }

    #[test]
    fn active_section_is_sticky_outside_all_sections() {
        let mut registry = SectionRegistry::default();
        registry.register(SectionId::Home, FakeSection::at(0.0, 500.0));
        // a gap between 500 and 900, e.g. the unregistered principles block
        registry.register(SectionId::Services, FakeSection::at(900.0, 500.0));

        let state = ScrollState::default().next(1000.0, &registry);
        assert_eq!(state.active_section, SectionId::Services);

        let state = state.next(600.0, &registry);
        assert_eq!(state.active_section, SectionId::Services);
        assert!(state.is_past_threshold);
    }

    #[test]
    fn active_section_is_always_a_known_id() {
        let registry = stacked_page();
        let mut state = ScrollState::default();
        for offset in (0..12_000).step_by(37) {
            state = state.next(offset as f64, &registry);
            assert!(SectionId::ALL.contains(&state.active_section));
        }
        // past the last section the contact link stays lit
        assert_eq!(state.active_section, SectionId::Contact);
    }

    #[test]
    fn scroll_listener_is_passive() {
        assert_eq!(SCROLL_LISTENER.event, "scroll");
        assert!(SCROLL_LISTENER.passive);
    }

    #[test]
    fn listener_failures_are_reported_not_swallowed() {
        assert!(check_listener::<&str>("subscribe to", SCROLL_LISTENER, Ok(())));
        assert!(!check_listener("unsubscribe from", SCROLL_LISTENER, Err("detached window")));
    }

    #[test]
    fn throttle_admits_one_frame_at_a_time() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        throttle.settle();
        assert!(throttle.request());
    }
}
