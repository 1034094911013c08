//! Visibility observation shared by the lazy images and the stat counters.
//!
//! [`VisibilityGate`] holds the per-target decision logic and knows nothing
//! about the browser. [`VisibilityObserver`] wires one gate to an
//! `IntersectionObserver` and disconnects it when dropped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the target that must be on screen, 0.0 to 1.0.
    pub threshold: f64,
    /// Grows the viewport by this many pixels on every side.
    pub root_margin_px: i32,
    pub once: bool,
}

impl ObserverConfig {
    /// Start fetching images a little before they scroll in.
    pub fn lazy_media() -> Self {
        Self { threshold: 0.1, root_margin_px: 50, once: true }
    }

    pub fn counter() -> Self {
        Self { threshold: 0.2, root_margin_px: 0, once: true }
    }

    fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// A qualifying visibility change delivered to the subscriber.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub visible: bool,
    pub ratio: f64,
}

impl Crossing {
    /// What subscribers receive when the browser can't observe anything.
    pub fn assumed_visible() -> Self {
        Self { visible: true, ratio: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateDecision {
    Ignore,
    Fire(Crossing),
    /// Fire, then stop observing the target.
    FireAndDetach(Crossing),
}

#[derive(Debug)]
pub struct VisibilityGate {
    config: ObserverConfig,
    visible: bool,
    fired: bool,
}

impl VisibilityGate {
    pub fn new(config: ObserverConfig) -> Self {
        Self { config, visible: false, fired: false }
    }

    /// Feeds one intersection report and decides whether the subscriber
    /// should hear about it. Only changes of the visible flag are reported.
    pub fn report(&mut self, is_intersecting: bool, ratio: f64) -> GateDecision {
        if self.config.once && self.fired {
            return GateDecision::Ignore;
        }

        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let visible = is_intersecting && ratio >= self.config.threshold;
        if visible == self.visible {
            return GateDecision::Ignore;
        }
        self.visible = visible;

        let crossing = Crossing { visible, ratio };
        if !visible {
            return GateDecision::Fire(crossing);
        }

        self.fired = true;
        if self.config.once {
            GateDecision::FireAndDetach(crossing)
        } else {
            GateDecision::Fire(crossing)
        }
    }
}

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        target: &Element,
        config: ObserverConfig,
        on_crossing: Callback<Crossing>,
    ) -> Result<Self, SiteError> {
        let mut gate = VisibilityGate::new(config);

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                match gate.report(entry.is_intersecting(), entry.intersection_ratio()) {
                    GateDecision::Ignore => {}
                    GateDecision::Fire(crossing) => on_crossing.emit(crossing),
                    GateDecision::FireAndDetach(crossing) => {
                        observer.disconnect();
                        on_crossing.emit(crossing);
                        break;
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(config.threshold));
        init.root_margin(&config.root_margin());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|_| SiteError::EnvironmentUnsupported("IntersectionObserver"))?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `node` while the component is mounted. `deps` restarts the
/// observation when it changes (the lazy image passes its source URL).
///
/// Does nothing if the node isn't rendered. If the browser can't observe,
/// the callback gets [`Crossing::assumed_visible`] straight away.
#[hook]
pub fn use_visibility<D>(node: NodeRef, config: ObserverConfig, deps: D, on_crossing: Callback<Crossing>)
where
    D: PartialEq + 'static,
{
    use_effect_with_deps(
        move |_| {
            let observer = node.cast::<Element>().and_then(|element| {
                match VisibilityObserver::observe(&element, config, on_crossing.clone()) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        log::warn!("{err}, treating target as visible");
                        on_crossing.emit(Crossing::assumed_visible());
                        None
                    }
                }
            });
            move || drop(observer)
        },
        (config, deps),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossing(visible: bool, ratio: f64) -> Crossing {
        Crossing { visible, ratio }
    }

    #[test]
    fn once_gate_fires_a_single_time() {
        let mut gate = VisibilityGate::new(ObserverConfig::counter());

        assert_eq!(gate.report(false, 0.0), GateDecision::Ignore);
        assert_eq!(gate.report(true, 0.5), GateDecision::FireAndDetach(crossing(true, 0.5)));
        assert!(gate.fired);

        assert_eq!(gate.report(false, 0.0), GateDecision::Ignore);
        assert_eq!(gate.report(true, 1.0), GateDecision::Ignore);
    }

    #[test]
    fn below_threshold_does_not_qualify() {
        let mut gate = VisibilityGate::new(ObserverConfig::counter());
        assert_eq!(gate.report(true, 0.19), GateDecision::Ignore);
        assert!(!gate.fired);
        assert_eq!(gate.report(true, 0.2), GateDecision::FireAndDetach(crossing(true, 0.2)));
    }

    #[test]
    fn repeating_gate_reports_enter_and_leave() {
        let config = ObserverConfig { threshold: 0.1, root_margin_px: 0, once: false };
        let mut gate = VisibilityGate::new(config);

        assert_eq!(gate.report(true, 0.3), GateDecision::Fire(crossing(true, 0.3)));
        assert_eq!(gate.report(true, 0.6), GateDecision::Ignore);
        assert_eq!(gate.report(false, 0.0), GateDecision::Fire(crossing(false, 0.0)));
        assert_eq!(gate.report(true, 0.4), GateDecision::Fire(crossing(true, 0.4)));
    }

    #[test]
    fn ratio_is_clamped() {
        let mut gate = VisibilityGate::new(ObserverConfig::lazy_media());
        assert_eq!(gate.report(true, 1.7), GateDecision::FireAndDetach(crossing(true, 1.0)));

        let mut gate = VisibilityGate::new(ObserverConfig::lazy_media());
        assert_eq!(gate.report(true, f64::NAN), GateDecision::Ignore);
    }

    #[test]
    fn presets() {
        assert_eq!(ObserverConfig::lazy_media().root_margin(), "50px");
        assert!(ObserverConfig::counter().once);
    }
}
