use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use super::registry::{SectionId, SectionRegistry, SharedRegistry};
use crate::error::SiteError;

/// Height of the fixed navbar; targets land just below it.
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Anything closer than this to the target counts as already there.
const SETTLED_PX: f64 = 1.0;

pub trait ScrollHost {
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

pub struct WindowHost {
    window: Window,
}

impl WindowHost {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollHost for WindowHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigationOutcome {
    Scrolled(f64),
    AlreadyThere,
}

pub struct SectionNavigator<'a, H> {
    registry: &'a SectionRegistry,
    host: H,
}

impl<'a, H: ScrollHost> SectionNavigator<'a, H> {
    pub fn new(registry: &'a SectionRegistry, host: H) -> Self {
        Self { registry, host }
    }

    /// Where the viewport has to go for `id`, or `None` if no such section
    /// is mounted.
    pub fn target_offset(&self, id: SectionId) -> Option<f64> {
        self.registry
            .bounds_of(id)
            .map(|bounds| (bounds.top - NAV_OFFSET_PX).max(0.0))
    }

    pub fn navigate(&self, target: &str) -> Result<NavigationOutcome, SiteError> {
        let top = SectionId::parse(target)
            .and_then(|id| self.target_offset(id))
            .ok_or_else(|| SiteError::MissingTarget(target.to_string()))?;

        if (self.host.scroll_y() - top).abs() < SETTLED_PX {
            return Ok(NavigationOutcome::AlreadyThere);
        }
        self.host.smooth_scroll_to(top);
        Ok(NavigationOutcome::Scrolled(top))
    }
}

/// Closes the mobile overlay, then navigates. The overlay closes even when
/// the target doesn't exist; a missing target is logged and dropped.
pub fn go_to_section<H: ScrollHost>(
    registry: &SharedRegistry,
    host: H,
    target: &str,
    close_overlay: impl FnOnce(),
) -> Option<NavigationOutcome> {
    close_overlay();
    match registry.with(|sections| SectionNavigator::new(sections, host).navigate(target)) {
        Ok(outcome) => {
            log::debug!("navigated to `{target}`: {outcome:?}");
            Some(outcome)
        }
        Err(err) => {
            log::debug!("navigation skipped: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::registry::tests::{stacked_page, FakeSection};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingHost {
        position: Cell<f64>,
        calls: RefCell<Vec<f64>>,
    }

    impl ScrollHost for &RecordingHost {
        fn scroll_y(&self) -> f64 {
            self.position.get()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.calls.borrow_mut().push(top);
            self.position.set(top);
        }
    }

    #[test]
    fn services_lands_80px_above_its_top() {
        let registry = stacked_page();
        let host = RecordingHost::default();
        let navigator = SectionNavigator::new(&registry, &host);

        let outcome = navigator.navigate("services").unwrap();
        assert_eq!(outcome, NavigationOutcome::Scrolled(1600.0 - 80.0));
        assert_eq!(*host.calls.borrow(), vec![1520.0]);
    }

    #[test]
    fn unknown_target_leaves_scroll_alone() {
        let registry = stacked_page();
        let host = RecordingHost::default();
        host.position.set(333.0);
        let navigator = SectionNavigator::new(&registry, &host);

        let err = navigator.navigate("foobar").unwrap_err();
        assert!(matches!(err, SiteError::MissingTarget(ref id) if id == "foobar"));
        assert!(host.calls.borrow().is_empty());
        assert_eq!(host.position.get(), 333.0);
    }

    #[test]
    fn known_but_unmounted_section_is_missing() {
        let registry = SectionRegistry::default();
        let host = RecordingHost::default();
        let navigator = SectionNavigator::new(&registry, &host);
        assert!(navigator.navigate("contact").is_err());
        assert!(host.calls.borrow().is_empty());
    }

    #[test]
    fn repeating_a_navigation_does_not_scroll_again() {
        let registry = stacked_page();
        let host = RecordingHost::default();
        let navigator = SectionNavigator::new(&registry, &host);

        navigator.navigate("projects").unwrap();
        assert_eq!(navigator.navigate("projects").unwrap(), NavigationOutcome::AlreadyThere);
        assert_eq!(navigator.navigate("projects").unwrap(), NavigationOutcome::AlreadyThere);
        assert_eq!(host.calls.borrow().len(), 1);
    }

    #[test]
    fn sections_near_the_top_clamp_to_zero() {
        let mut registry = SectionRegistry::default();
        registry.register(SectionId::Home, FakeSection::at(20.0, 600.0));
        let host = RecordingHost::default();
        host.position.set(400.0);
        let navigator = SectionNavigator::new(&registry, &host);

        assert_eq!(navigator.navigate("home").unwrap(), NavigationOutcome::Scrolled(0.0));
    }

    #[test]
    fn overlay_closes_whatever_the_outcome() {
        let registry = SharedRegistry::default();
        for id in SectionId::ALL {
            registry.register(id, FakeSection::at(1000.0, 500.0));
        }
        let host = RecordingHost::default();

        let open = Cell::new(true);
        let outcome = go_to_section(&registry, &host, "about", || open.set(false));
        assert_eq!(outcome, Some(NavigationOutcome::Scrolled(920.0)));
        assert!(!open.get());

        open.set(true);
        assert_eq!(go_to_section(&registry, &host, "foobar", || open.set(false)), None);
        assert!(!open.get());
        assert_eq!(host.calls.borrow().len(), 1);
    }
}
