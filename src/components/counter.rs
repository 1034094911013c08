use stylist::Style;
use yew::prelude::*;

use crate::content::Icon;
use crate::viewport::frame::{FrameControl, FrameLoop};
use crate::viewport::observer::{use_visibility, Crossing, ObserverConfig};

pub const COUNTER_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub value: u32,
    pub done: bool,
}

/// Count-up animation for one stat. Starts at most once per instance and
/// only ever moves upward.
#[derive(Debug)]
pub struct CounterState {
    current: u32,
    target: u32,
    started_at: Option<f64>,
    has_started: bool,
}

impl CounterState {
    pub fn new(target: u32) -> Self {
        Self { current: 0, target, started_at: None, has_started: false }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// `now` is a monotonic timestamp in milliseconds. Returns false if the
    /// animation already ran.
    pub fn start(&mut self, now: f64) -> bool {
        if self.has_started {
            return false;
        }
        self.has_started = true;
        self.started_at = Some(now);
        true
    }

    /// Jumps straight to the target, for hosts without a usable clock.
    pub fn finish(&mut self) {
        self.has_started = true;
        self.current = self.target;
    }

    pub fn sample(&mut self, now: f64) -> Sample {
        let Some(started_at) = self.started_at else {
            return Sample { value: self.current, done: self.current == self.target };
        };

        let progress = ((now - started_at).max(0.0) / COUNTER_DURATION_MS).min(1.0);
        let value = if progress >= 1.0 {
            self.target
        } else {
            (f64::from(self.target) * progress).floor() as u32
        };
        self.current = self.current.max(value);

        Sample { value: self.current, done: progress >= 1.0 }
    }
}

fn monotonic_now() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
}

const TILE_CSS: &str = r#"
    text-align: center;

    .counter-icon {
        background: #fffbeb;
        border-radius: 0.5rem;
        padding: 1rem;
        margin-bottom: 1rem;
        font-size: 2rem;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }

    &:hover .counter-icon {
        background: #d97706;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }

    .counter-value {
        font-size: 2.25rem;
        font-weight: 700;
        color: #d97706;
        font-variant-numeric: tabular-nums;
    }

    .counter-label {
        color: #374151;
        margin-top: 0.5rem;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub value: u32,
    pub label: AttrValue,
    pub icon: Icon,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let counter = use_mut_ref(|| CounterState::new(props.value));
    let display = use_state_eq(|| 0u32);
    let animation = use_mut_ref(|| None::<FrameLoop>);
    let tile_class = use_memo(
        |_| match Style::new(TILE_CSS) {
            Ok(style) => classes!(style.get_class_name().to_string()),
            Err(err) => {
                log::warn!("counter style rejected: {err}");
                classes!()
            }
        },
        (),
    );

    // stop the frame loop with the component
    {
        let animation = animation.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    animation.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_crossing = {
        let counter = counter.clone();
        let display = display.clone();
        let animation = animation.clone();
        Callback::from(move |crossing: Crossing| {
            if !crossing.visible {
                return;
            }
            log::debug!("counter visible at ratio {:.2}", crossing.ratio);

            let Some(now) = monotonic_now() else {
                let mut counter = counter.borrow_mut();
                counter.finish();
                display.set(counter.current());
                return;
            };
            if !counter.borrow_mut().start(now) {
                return;
            }

            let counter = counter.clone();
            let display = display.clone();
            let task = FrameLoop::start(move |_| {
                let now = monotonic_now().unwrap_or(f64::INFINITY);
                let sample = counter.borrow_mut().sample(now);
                display.set(sample.value);
                if sample.done {
                    FrameControl::Stop
                } else {
                    FrameControl::Continue
                }
            });
            *animation.borrow_mut() = Some(task);
        })
    };

    use_visibility(node.clone(), ObserverConfig::counter(), (), on_crossing);

    html! {
        <div ref={node} class={(*tile_class).clone()}>
            <div class="counter-icon">{ props.icon.glyph() }</div>
            <div class="counter-value">{ format!("{}{}", *display, props.suffix) }</div>
            <p class="counter-label">{ props.label.clone() }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_zero_until_started() {
        let mut counter = CounterState::new(1250);
        assert_eq!(counter.sample(10_000.0), Sample { value: 0, done: false });
        assert!(!counter.has_started);
    }

    #[test]
    fn intermediate_values_truncate() {
        let mut counter = CounterState::new(25);
        counter.start(1000.0);
        // 25 * 0.5 = 12.5
        assert_eq!(counter.sample(2000.0).value, 12);
        // 25 * 0.999 = 24.975
        assert_eq!(counter.sample(2998.0).value, 24);
    }

    #[test]
    fn final_frame_is_exactly_the_target() {
        for target in [1u32, 25, 45, 98, 1250, 999_999] {
            let mut counter = CounterState::new(target);
            counter.start(0.0);
            let sample = counter.sample(COUNTER_DURATION_MS);
            assert_eq!(sample, Sample { value: target, done: true });

            let late = counter.sample(COUNTER_DURATION_MS * 3.0);
            assert_eq!(late.value, target);
        }
    }

    #[test]
    fn never_decreases() {
        let mut counter = CounterState::new(98);
        counter.start(500.0);
        let mut last = 0;
        for now in [520.0, 900.0, 700.0, 1800.0, 1700.0, 2400.0, 600.0, 2500.0] {
            let value = counter.sample(now).value;
            assert!(value >= last, "{value} < {last} at {now}");
            last = value;
        }
        assert_eq!(last, 98);
    }

    #[test]
    fn second_trigger_does_not_restart() {
        let mut counter = CounterState::new(45);
        assert!(counter.start(0.0));
        counter.sample(COUNTER_DURATION_MS);

        assert!(!counter.start(5000.0));
        assert_eq!(counter.sample(5001.0), Sample { value: 45, done: true });
    }

    #[test]
    fn clock_before_start_counts_as_zero_elapsed() {
        let mut counter = CounterState::new(10);
        counter.start(1000.0);
        assert_eq!(counter.sample(900.0), Sample { value: 0, done: false });
    }

    #[test]
    fn finish_without_clock() {
        let mut counter = CounterState::new(1250);
        counter.finish();
        assert_eq!(counter.current(), 1250);
        assert!(!counter.start(0.0));
    }
}
