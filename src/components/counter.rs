//! Animated Stat Counter
//!
//! Counts the displayed number up from its previous value whenever the target
//! changes. Each counter owns at most one running interval; a retrigger drops
//! the previous one before starting over.

use gloo_timers::callback::Interval;
use leptos::*;

const TICK_MS: u32 = 20;
const TICKS: u32 = 30;

/// Stat value that animates toward its target on change.
#[component]
pub fn AnimatedCounter(
    #[prop(into)]
    value: Signal<f64>,
    #[prop(default = 0)]
    decimals: usize,
    #[prop(default = "")]
    suffix: &'static str,
) -> impl IntoView {
    let (shown, set_shown) = create_signal(0.0_f64);
    let interval: StoredValue<Option<Interval>> = store_value(None);

    create_effect(move |_| {
        let target = value.get();
        let from = shown.get_untracked();

        // Cancel any animation still running for this counter.
        interval.update_value(|handle| {
            handle.take();
        });

        if (target - from).abs() < f64::EPSILON {
            return;
        }

        let mut tick = 0u32;
        let handle = Interval::new(TICK_MS, move || {
            tick += 1;
            if tick >= TICKS {
                set_shown.set(target);
                interval.update_value(|handle| {
                    handle.take();
                });
            } else {
                let t = tick as f64 / TICKS as f64;
                // Ease-out cubic.
                let eased = 1.0 - (1.0 - t).powi(3);
                set_shown.set(from + (target - from) * eased);
            }
        });
        interval.set_value(Some(handle));
    });

    on_cleanup(move || {
        interval.update_value(|handle| {
            handle.take();
        });
    });

    view! {
        <span class="font-bold tabular-nums">
            {move || format!("{:.*}{}", decimals, shown.get(), suffix)}
        </span>
    }
}
