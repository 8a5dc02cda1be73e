//! Clinical Field Input
//!
//! Paired slider + numeric input for one clinical field, kept in sync both
//! ways. The raw text the user typed is the source of truth (validation sees
//! exactly what is in the box); the slider tracks the parsed, clamped value.

use leptos::*;

use crate::fields::FieldSpec;

/// One form row: label, slider, numeric input and unit-suffixed value label.
#[component]
pub fn FieldInput(
    spec: &'static FieldSpec,
    /// Raw text of the numeric input, owned by the form.
    text: RwSignal<String>,
) -> impl IntoView {
    // Slider position: parsed text clamped into range, default when unparseable.
    let slider_value = move || {
        text.get()
            .trim()
            .parse::<f64>()
            .map(|v| spec.clamp(v))
            .unwrap_or(spec.default)
    };

    let value_label = move || {
        text.get()
            .trim()
            .parse::<f64>()
            .map(|v| spec.display_with_unit(spec.clamp(v)))
            .unwrap_or_else(|_| "—".to_string())
    };

    let on_slider = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        if let Ok(v) = raw.parse::<f64>() {
            text.set(spec.format_value(spec.clamp(v)));
        }
    };

    let on_input = move |ev: web_sys::Event| {
        text.set(event_target_value(&ev));
    };

    // Normalize on blur: clamp into range and reformat at step precision.
    let on_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        if let Ok(v) = raw.trim().parse::<f64>() {
            text.set(spec.format_value(spec.clamp(v)));
        }
    };

    view! {
        <div class="space-y-1">
            <div class="flex items-center justify-between">
                <label class="text-sm font-medium text-gray-300">
                    {spec.label}
                    {spec.required.then(|| view! {
                        <span class="text-red-400 ml-1">"*"</span>
                    })}
                </label>
                <span class="text-sm text-gray-400">{value_label}</span>
            </div>

            <div class="flex items-center space-x-3">
                <input
                    type="range"
                    min=spec.min
                    max=spec.max
                    step=spec.step
                    prop:value=move || slider_value().to_string()
                    on:input=on_slider
                    class="flex-1 accent-primary-600"
                />
                <input
                    type="number"
                    min=spec.min
                    max=spec.max
                    step=spec.step
                    prop:value=move || text.get()
                    on:input=on_input
                    on:change=on_change
                    class="w-24 bg-gray-700 border border-gray-600 rounded-lg px-2 py-1 \
                           text-sm text-white focus:outline-none focus:border-primary-500"
                />
            </div>
        </div>
    }
}
