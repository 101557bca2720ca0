use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::Timeout;

/// Progress bar that reveals its target value after a delay.
///
/// Displays `initial` immediately; a one-shot timeout then moves the bar to
/// the current target. Re-arming on a target change or unmounting the
/// component drops the pending timeout, so a stale update can never fire.
/// On the server only the initial value is rendered.
#[component]
pub fn ProgressBar(
    /// Value displayed before the delay elapses (0-100)
    #[prop(default = 0)]
    initial: u32,
    /// Value the bar transitions to after the delay (0-100)
    #[prop(into)]
    target: Signal<u32>,
    /// Delay in milliseconds before the target is shown
    #[prop(default = 0)]
    delay_ms: u32,
    /// Additional CSS classes on the track
    #[prop(default = "w-full")]
    class: &'static str,
) -> impl IntoView {
    let displayed = RwSignal::new(initial.min(100));

    #[cfg(not(feature = "ssr"))]
    {
        let pending = StoredValue::new_local(None::<Timeout>);

        Effect::new(move |_| {
            let value = target.get().min(100);
            // Dropping a scheduled Timeout cancels it before re-arming
            pending.update_value(|slot| {
                slot.take();
            });
            let timeout = Timeout::new(delay_ms, move || displayed.set(value));
            pending.set_value(Some(timeout));
        });

        on_cleanup(move || {
            pending.update_value(|slot| {
                slot.take();
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (target, delay_ms);
    }

    view! {
        <div
            class=format!("progress-track {}", class)
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || displayed.get().to_string()
        >
            <div
                class="progress-fill"
                style=move || format!("width: {}%", displayed.get())
            ></div>
        </div>
    }
}
