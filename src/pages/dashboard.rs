//! Dashboard Page
//!
//! Analytics view: overview stat cards, five charts fed from the chart
//! registry, the recent-prediction feed, exports and manual controls. The
//! snapshot refreshes every 30 seconds while the page is mounted.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::components::charts::ChartCanvas;
use crate::components::files::download_text;
use crate::components::AnimatedCounter;
use crate::export;
use crate::model::{DashboardSnapshot, TimelineEvent, FEATURE_IMPORTANCE};
use crate::registry::{ChartKind, ChartRegistry};
use crate::state::global::GlobalState;
use crate::timefmt;

/// Poll period for the analytics snapshot.
const REFRESH_MS: u32 = 30_000;

/// How many feed entries to ask for when the snapshot carries none.
const FEED_LIMIT: usize = 10;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let snapshot = create_rw_signal(DashboardSnapshot::placeholder());
    let registry = create_rw_signal(ChartRegistry::new());
    let feed: RwSignal<Vec<TimelineEvent>> = create_rw_signal(Vec::new());
    let (refreshing, set_refreshing) = create_signal(false);
    let (range_label, set_range_label) = create_signal("Last 24 hours".to_string());

    // Seed the charts so the page renders before the first response lands.
    registry.update(|reg| apply_snapshot(reg, &snapshot.get_untracked()));

    let refresh = move || {
        spawn_local(async move {
            set_refreshing.set(true);
            state.loading.set(true);

            // No sequencing across cycles: whichever response lands last wins.
            match api::fetch_dashboard().await {
                Ok(snap) => {
                    registry.update(|reg| apply_snapshot(reg, &snap));

                    // The snapshot timeline is chronological; the fallback
                    // endpoint already serves newest first.
                    if snap.predictions_timeline.is_empty() {
                        match api::fetch_recent_predictions(FEED_LIMIT).await {
                            Ok(events) => feed.set(events),
                            Err(_) => feed.set(Vec::new()),
                        }
                    } else {
                        feed.set(snap.feed_newest_first());
                    }

                    snapshot.set(snap);
                    state.show_success("Dashboard updated.");
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Dashboard fetch failed: {}", e.message()).into(),
                    );
                    state.show_error(&e.message());
                    let fallback = DashboardSnapshot::placeholder();
                    registry.update(|reg| apply_snapshot(reg, &fallback));
                    snapshot.set(fallback);
                    feed.set(Vec::new());
                }
            }

            set_refreshing.set(false);
            state.loading.set(false);
        });
    };

    // Initial fetch plus the 30 s poll; the interval dies with the page.
    refresh();
    let poll: StoredValue<Option<Interval>> = store_value(None);
    poll.set_value(Some(Interval::new(REFRESH_MS, refresh)));
    on_cleanup(move || {
        poll.update_value(|handle| {
            handle.take();
        });
    });

    let on_refresh_click = move |_| {
        refresh();
    };

    let on_range_change = move |ev: web_sys::Event| {
        let label = match event_target_value(&ev).as_str() {
            "7d" => "Last 7 days",
            "30d" => "Last 30 days",
            _ => "Last 24 hours",
        };
        set_range_label.set(label.to_string());
        state.show_info(&format!("Showing {}", label.to_lowercase()));
        refresh();
    };

    let on_export_json = move |_| {
        match export::to_pretty_json(&snapshot.get_untracked()) {
            Ok(json) => match download_text("dashboard_export.json", &json) {
                Ok(()) => state.show_success("Dashboard exported as JSON."),
                Err(_) => state.show_error("Could not generate the export file."),
            },
            Err(_) => state.show_error("Could not serialize the dashboard."),
        }
    };

    let on_export_csv = move |_| {
        let csv = export::to_csv(&snapshot.get_untracked());
        match download_text("dashboard_export.csv", &csv) {
            Ok(()) => state.show_success("Dashboard exported as CSV."),
            Err(_) => state.show_error("Could not generate the export file."),
        }
    };

    let on_export_other = move |_| {
        state.show_info("PDF and Excel export are not available in the browser.");
    };

    view! {
        <div class="space-y-8">
            // Page header with controls
            <div class="flex items-center justify-between flex-wrap gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Analytics Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Prediction activity and model health"</p>
                </div>

                <div class="flex items-center space-x-3">
                    <select
                        on:change=on_range_change
                        class="bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-sm \
                               text-white focus:outline-none"
                    >
                        <option value="24h">"Last 24 hours"</option>
                        <option value="7d">"Last 7 days"</option>
                        <option value="30d">"Last 30 days"</option>
                    </select>

                    <button
                        type="button"
                        on:click=on_refresh_click
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm \
                               transition-colors"
                    >
                        <span class=move || if refreshing.get() { "inline-block animate-spin" } else { "inline-block" }>
                            "⟳"
                        </span>
                        " Refresh"
                    </button>
                </div>
            </div>

            // Overview stat cards
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Total Predictions"
                    value=Signal::derive(move || snapshot.get().overview.total_predictions as f64)
                    decimals=0
                    suffix=""
                />
                <StatCard
                    label="Recent Predictions"
                    value=Signal::derive(move || snapshot.get().overview.recent_predictions as f64)
                    decimals=0
                    suffix=""
                />
                <StatCard
                    label="Model Accuracy"
                    value=Signal::derive(move || snapshot.get().overview.model_accuracy)
                    decimals=1
                    suffix="%"
                />
                <StatCard
                    label="Avg Response Time"
                    value=Signal::derive(move || snapshot.get().overview.avg_response_time)
                    decimals=2
                    suffix="s"
                />
            </section>

            // Charts
            <section class="grid md:grid-cols-2 gap-6">
                <ChartPanel title="Risk Distribution">
                    <ChartCanvas registry=registry name="risk" />
                </ChartPanel>
                <ChartPanel title="Feature Importance">
                    <ChartCanvas registry=registry name="importance" />
                </ChartPanel>
                <ChartPanel title="Hourly Prediction Trend">
                    <ChartCanvas registry=registry name="hourly" />
                </ChartPanel>
                <ChartPanel title="Model Performance">
                    <ChartCanvas registry=registry name="performance" />
                </ChartPanel>
                <ChartPanel title="Age Distribution">
                    <ChartCanvas registry=registry name="age" />
                </ChartPanel>

                // Export panel
                <div class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Export"</h2>
                    <p class="text-sm text-gray-400 mb-4">
                        {move || format!("Snapshot range: {}", range_label.get())}
                    </p>
                    <div class="grid grid-cols-2 gap-3">
                        <ExportButton label="JSON" on_click=on_export_json />
                        <ExportButton label="CSV" on_click=on_export_csv />
                        <ExportButton label="PDF" on_click=on_export_other />
                        <ExportButton label="Excel" on_click=on_export_other />
                    </div>
                </div>
            </section>

            // Recent predictions feed
            <PredictionFeed feed=feed />
        </div>
    }
}

/// Push one snapshot into every registered chart.
fn apply_snapshot(registry: &mut ChartRegistry, snapshot: &DashboardSnapshot) {
    let dist = snapshot.risk_distribution;
    registry.update(
        "risk",
        ChartKind::Doughnut,
        vec!["Low".to_string(), "Medium".to_string(), "High".to_string()],
        vec![dist.low as f64, dist.medium as f64, dist.high as f64],
    );

    registry.update(
        "importance",
        ChartKind::Bar,
        FEATURE_IMPORTANCE.iter().map(|(n, _)| n.to_string()).collect(),
        FEATURE_IMPORTANCE.iter().map(|(_, w)| *w).collect(),
    );

    registry.update(
        "hourly",
        ChartKind::Line,
        snapshot.hourly_trend.labels.clone(),
        snapshot.hourly_trend.data.iter().map(|&v| v as f64).collect(),
    );

    let perf = snapshot.performance_metrics;
    registry.update(
        "performance",
        ChartKind::Radar,
        vec![
            "Precision".to_string(),
            "Recall".to_string(),
            "F1".to_string(),
            "AUC".to_string(),
        ],
        vec![perf.precision, perf.recall, perf.f1_score, perf.auc_score],
    );

    let ages = snapshot.feature_distribution.age_series();
    registry.update(
        "age",
        ChartKind::Bar,
        ages.iter().map(|(k, _)| k.clone()).collect(),
        ages.iter().map(|(_, v)| *v as f64).collect(),
    );
}

/// One overview stat card with an animated value.
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<f64>,
    decimals: usize,
    suffix: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4">
            <p class="text-sm text-gray-400 mb-1">{label}</p>
            <p class="text-2xl">
                <AnimatedCounter value=value decimals=decimals suffix=suffix />
            </p>
        </div>
    }
}

/// Titled chart container.
#[component]
fn ChartPanel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-lg font-semibold mb-4">{title}</h2>
            {children()}
        </div>
    }
}

#[component]
fn ExportButton(
    label: &'static str,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
        >
            {label}
        </button>
    }
}

/// Recent predictions, newest first, with relative timestamps.
#[component]
fn PredictionFeed(feed: RwSignal<Vec<TimelineEvent>>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Predictions"</h2>

            <div class="space-y-2">
                {move || {
                    let events = feed.get();
                    if events.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No predictions yet"</p>
                        }.into_view()
                    } else {
                        events.into_iter().enumerate().map(|(idx, event)| {
                            let time = timefmt::relative_label(&event.timestamp);
                            let summary = event.summary();

                            view! {
                                <div
                                    class="flex items-center justify-between py-2 border-b \
                                           border-gray-700 last:border-0 animate-slide-in"
                                    style=format!("animation-delay: {}ms", idx * 60)
                                >
                                    <div class="flex items-center space-x-3">
                                        <span class="text-gray-500 text-sm w-6 text-right">
                                            {format!("{}.", idx + 1)}
                                        </span>
                                        <span>{summary}</span>
                                        <span class="text-gray-400 text-sm">{time}</span>
                                    </div>
                                    <span class=format!(
                                        "px-2 py-0.5 rounded-full text-xs font-medium text-white {}",
                                        event.risk_level.badge_class()
                                    )>
                                        {event.risk_level.label()}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
