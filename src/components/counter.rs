//! Animated stat counters. Each card counts from zero to its target once
//! it scrolls into view, in at most [`config::COUNTER_STEPS`] ticks, then
//! stops for good.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Per-tick increment toward `target`.
pub fn counter_step(target: u32) -> u32 {
    (target + config::COUNTER_STEPS - 1) / config::COUNTER_STEPS
}

/// Value shown after one more tick, clamped at the target.
pub fn next_count(current: u32, target: u32) -> u32 {
    current.saturating_add(counter_step(target)).min(target)
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub label: String,
    pub target: u32,
    #[prop_or_default]
    pub suffix: String,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state(|| 0u32);
    let armed = use_state(|| false);
    let node = use_node_ref();

    {
        let node = node.clone();
        let armed = armed.clone();
        let shown = shown.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
                let window = web_sys::window().unwrap();
                let has_observer =
                    js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                        .unwrap_or(false);
                if !has_observer {
                    // No way to know when we scroll in, show the final value.
                    shown.set(target);
                    armed.set(true);
                    return cleanup;
                }

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let callback = {
                        let armed = armed.clone();
                        Closure::wrap(Box::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if entry.is_intersecting() {
                                        armed.set(true);
                                        // One-shot: never re-run on later scrolls.
                                        observer.unobserve(&entry.target());
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(config::COUNTER_VISIBLE_RATIO));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            cleanup = Box::new(move || {
                                observer.disconnect();
                                drop(callback);
                            });
                        }
                        Err(_) => {
                            // Construction failed: show the final value.
                            shown.set(target);
                            armed.set(true);
                        }
                    }
                }
                cleanup
            },
            (),
        );
    }

    {
        let shown_setter = shown.setter();
        let value = *shown;
        let target = props.target;
        let running = *armed && value < target;
        use_effect(move || {
            if running {
                let timeout = Timeout::new(config::COUNTER_TICK_MS, move || {
                    shown_setter.set(next_count(value, target));
                });
                timeout.forget();
            }

            || ()
        });
    }

    html! {
        <div class="stat-card" ref={node}>
            <div class="stat-value">
                { *shown }
                <span class="stat-suffix">{ props.suffix.clone() }</span>
            </div>
            <div class="stat-label">{ props.label.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_a_two_hundredth_rounded_up() {
        assert_eq!(counter_step(4800), 24);
        assert_eq!(counter_step(200), 1);
        assert_eq!(counter_step(201), 2);
        assert_eq!(counter_step(94), 1);
        assert_eq!(counter_step(1), 1);
    }

    #[test]
    fn test_count_lands_exactly_on_the_target() {
        let mut current = 0;
        let mut ticks = 0;
        while current < 94 {
            current = next_count(current, 94);
            ticks += 1;
            assert!(ticks <= 200, "runaway counter");
        }
        assert_eq!(current, 94);
        assert_eq!(ticks, 94);
    }

    #[test]
    fn test_large_targets_finish_in_two_hundred_ticks() {
        let mut current = 0;
        let mut ticks = 0;
        while current < 4800 {
            current = next_count(current, 4800);
            ticks += 1;
        }
        assert_eq!(current, 4800);
        assert_eq!(ticks, 200);
    }

    #[test]
    fn test_zero_target_is_done_immediately() {
        assert_eq!(next_count(0, 0), 0);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        assert_eq!(next_count(4790, 4800), 4800);
    }
}
