//! Prediction Page
//!
//! The risk assessment form: eight clinical inputs, submission to the
//! prediction endpoint, and the result panel with badge, confidence meter,
//! advice list and the share/download/sample/reset actions.

use leptos::*;
use std::collections::HashMap;

use crate::api;
use crate::components::files::download_text;
use crate::components::{FieldInput, LoadingOverlay};
use crate::fields::{FieldSpec, FIELDS};
use crate::model::PredictionResult;
use crate::report::{build_report, share_summary};
use crate::state::global::GlobalState;
use crate::validation::{validate, Validation};

/// Prediction form page component
#[component]
pub fn Predict() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // One raw-text signal per field, initialized to the field default.
    let texts: Vec<(&'static FieldSpec, RwSignal<String>)> = FIELDS
        .iter()
        .map(|f| (f, create_rw_signal(f.format_value(f.default))))
        .collect();
    let fields = store_value(texts);

    let result: RwSignal<Option<PredictionResult>> = create_rw_signal(None);
    let (submitting, set_submitting) = create_signal(false);
    // Confidence bar widths, animated from zero after each result.
    let meter: RwSignal<(f64, f64)> = create_rw_signal((0.0, 0.0));

    let collect_raw = move || -> HashMap<String, String> {
        fields.with_value(|texts| {
            texts
                .iter()
                .map(|(f, text)| (f.name.to_string(), text.get_untracked()))
                .collect()
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let raw = collect_raw();
        match validate(&raw) {
            Validation::Invalid(reasons) => {
                state.show_warning(&reasons.join(" "));
                return;
            }
            Validation::Valid => {}
        }

        // Parse the validated inputs; blank optional fields fall back to the
        // field default so the backend always sees the full feature set.
        let features: HashMap<String, f64> = fields.with_value(|texts| {
            texts
                .iter()
                .map(|(f, text)| {
                    let value = text
                        .get_untracked()
                        .trim()
                        .parse::<f64>()
                        .unwrap_or(f.default);
                    (f.name.to_string(), value)
                })
                .collect()
        });

        set_submitting.set(true);

        spawn_local(async move {
            match api::predict(&features).await {
                Ok(prediction) => {
                    let confidence = prediction.confidence;
                    result.set(Some(prediction));

                    // Start the meter from zero so the CSS transition runs.
                    meter.set((0.0, 0.0));
                    gloo_timers::callback::Timeout::new(50, move || {
                        meter.set((confidence.diabetic, confidence.non_diabetic));
                    })
                    .forget();

                    state.show_success("Prediction complete.");
                }
                Err(e) => {
                    state.show_error(&e.message());
                }
            }
            set_submitting.set(false);
        });
    };

    let on_sample = move |_| {
        spawn_local(async move {
            match api::fetch_samples().await {
                Ok(samples) => match samples.first() {
                    Some(sample) => {
                        fields.with_value(|texts| {
                            for (f, text) in texts {
                                if let Some(v) = sample.values.get(f.name) {
                                    text.set(f.format_value(f.clamp(*v)));
                                }
                            }
                        });
                        let note = sample
                            .description
                            .clone()
                            .unwrap_or_else(|| "Sample data loaded.".to_string());
                        state.show_info(&note);
                    }
                    None => state.show_warning("No sample data available."),
                },
                Err(e) => state.show_error(&e.message()),
            }
        });
    };

    let on_reset = move |_| {
        fields.with_value(|texts| {
            for (f, text) in texts {
                text.set(f.format_value(f.default));
            }
        });
        result.set(None);
        meter.set((0.0, 0.0));
        state.show_info("Form reset.");
    };

    let on_download = move |_| match result.get_untracked() {
        Some(prediction) => {
            let report = build_report(&prediction, chrono::Local::now());
            match download_text("diabetes_risk_report.txt", &report) {
                Ok(()) => state.show_success("Report downloaded."),
                Err(_) => state.show_error("Could not generate the report file."),
            }
        }
        None => state.show_warning("Run a prediction first."),
    };

    let on_share = move |_| {
        let Some(prediction) = result.get_untracked() else {
            state.show_warning("Run a prediction first.");
            return;
        };
        let summary = share_summary(&prediction);
        share_or_copy(state, summary);
    };

    view! {
        <div class="grid lg:grid-cols-2 gap-8">
            // Input form
            <section class="bg-gray-800 rounded-xl p-6">
                <h1 class="text-2xl font-bold mb-1">"Risk Assessment"</h1>
                <p class="text-gray-400 text-sm mb-6">
                    "Enter the clinical measurements to estimate diabetes risk."
                </p>

                <LoadingOverlay loading=submitting>
                    <form on:submit=on_submit class="space-y-4">
                        {fields.with_value(|texts| {
                            texts
                                .iter()
                                .map(|&(f, text)| view! { <FieldInput spec=f text=text /> })
                                .collect_view()
                        })}

                        <div class="flex items-center space-x-3 pt-2">
                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 \
                                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold \
                                       transition-colors"
                            >
                                {move || if submitting.get() { "Analyzing..." } else { "Predict Risk" }}
                            </button>
                            <button
                                type="button"
                                on:click=on_sample
                                class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm \
                                       transition-colors"
                            >
                                "Sample"
                            </button>
                            <button
                                type="button"
                                on:click=on_reset
                                class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm \
                                       transition-colors"
                            >
                                "Reset"
                            </button>
                        </div>
                    </form>
                </LoadingOverlay>
            </section>

            // Result panel
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Assessment Result"</h2>

                {move || match result.get() {
                    None => view! {
                        <div class="flex flex-col items-center justify-center py-16 text-center">
                            <span class="text-5xl mb-4">"🔬"</span>
                            <p class="text-gray-400">
                                "Fill in the form and run a prediction to see the assessment here."
                            </p>
                        </div>
                    }.into_view(),
                    Some(prediction) => {
                        let risk = prediction.risk_level;
                        view! {
                            <div class="space-y-6">
                                // Risk badge
                                <div class="flex items-center justify-between">
                                    <span class="text-lg font-semibold">
                                        {prediction.prediction_label.clone()}
                                    </span>
                                    <span class=format!(
                                        "px-3 py-1 rounded-full text-sm font-medium text-white {}",
                                        risk.badge_class()
                                    )>
                                        {risk.label()}
                                    </span>
                                </div>

                                // Confidence meter
                                <div class="space-y-3">
                                    <ConfidenceBar
                                        label="Diabetic"
                                        color="#F44336"
                                        percent=Signal::derive(move || meter.get().0)
                                    />
                                    <ConfidenceBar
                                        label="Non-diabetic"
                                        color="#4CAF50"
                                        percent=Signal::derive(move || meter.get().1)
                                    />
                                </div>

                                // Health advice
                                <div>
                                    <h3 class="text-sm font-semibold text-gray-300 mb-2">
                                        "Health Advice"
                                    </h3>
                                    <ul class="space-y-1">
                                        {prediction.health_advice.iter().map(|advice| view! {
                                            <li class="text-sm text-gray-400 flex items-start">
                                                <span class="text-primary-400 mr-2">"•"</span>
                                                {advice.clone()}
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                </div>

                                // Actions
                                <div class="flex items-center space-x-3 pt-2">
                                    <button
                                        type="button"
                                        on:click=on_share
                                        class="flex-1 px-4 py-2 bg-gray-700 hover:bg-gray-600 \
                                               rounded-lg text-sm transition-colors"
                                    >
                                        "Share"
                                    </button>
                                    <button
                                        type="button"
                                        on:click=on_download
                                        class="flex-1 px-4 py-2 bg-gray-700 hover:bg-gray-600 \
                                               rounded-lg text-sm transition-colors"
                                    >
                                        "Download Report"
                                    </button>
                                </div>
                            </div>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// One horizontal confidence bar with a CSS-transitioned width.
#[component]
fn ConfidenceBar(
    label: &'static str,
    color: &'static str,
    #[prop(into)]
    percent: Signal<f64>,
) -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center justify-between text-sm mb-1">
                <span class="text-gray-300">{label}</span>
                <span class="text-gray-400">
                    {move || format!("{:.1}%", percent.get())}
                </span>
            </div>
            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full rounded-full transition-all duration-700 ease-out"
                    style=move || format!(
                        "width: {:.1}%; background-color: {}",
                        percent.get().clamp(0.0, 100.0),
                        color
                    )
                />
            </div>
        </div>
    }
}

/// Share via the Web Share API when available, else copy to the clipboard.
fn share_or_copy(state: GlobalState, summary: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    let has_share = js_sys::Reflect::has(navigator.as_ref(), &"share".into()).unwrap_or(false);
    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title("Diabetes Risk Assessment");
        data.set_text(&summary);
        let promise = navigator.share_with_data(&data);
        spawn_local(async move {
            if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                state.show_success("Result shared.");
            }
        });
    } else {
        let promise = navigator.clipboard().write_text(&summary);
        spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => state.show_info("Result copied to clipboard."),
                Err(_) => state.show_error("Could not copy the result."),
            }
        });
    }
}
