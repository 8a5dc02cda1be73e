//! Chart Components
//!
//! Canvas-drawn analytics charts. Each `ChartCanvas` is bound to one named
//! entry in the chart registry and redraws when that entry's generation
//! changes; the canvas element itself is created once and reused.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::registry::{ChartData, ChartKind, ChartRegistry};

const BG_COLOR: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "rgba(156, 163, 175, 0.15)";
const TEXT_COLOR: &str = "rgba(209, 213, 219, 0.9)";

/// Doughnut segment colors, risk order low → high.
const RISK_COLORS: [&str; 3] = ["#4CAF50", "#FF9800", "#F44336"];

/// Series colors for bar charts.
const BAR_COLORS: [&str; 6] = [
    "#FF9800", "#4CAF50", "#2196F3", "#9C27B0", "#F44336", "#00BCD4",
];

/// Canvas bound to one registry entry.
#[component]
pub fn ChartCanvas(
    registry: RwSignal<ChartRegistry>,
    name: &'static str,
    #[prop(default = 400)]
    width: u32,
    #[prop(default = 260)]
    height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let chart = registry.with(|reg| reg.get(name).cloned());
        if let (Some(canvas), Some(chart)) = (canvas_ref.get(), chart) {
            draw(&canvas, &chart);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=width
            height=height
            class="w-full rounded-lg"
        />
    }
}

fn context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Dispatch on chart kind.
pub fn draw(canvas: &HtmlCanvasElement, chart: &ChartData) {
    match chart.kind {
        ChartKind::Doughnut => draw_doughnut(canvas, &chart.labels, &chart.values),
        ChartKind::Bar => draw_bar(canvas, &chart.labels, &chart.values),
        ChartKind::Line => draw_line(canvas, &chart.labels, &chart.values),
        ChartKind::Radar => draw_radar(canvas, &chart.labels, &chart.values),
    }
}

fn clear(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_fill_style_str(BG_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);
}

/// Doughnut with per-segment percent labels; used for the risk split.
pub fn draw_doughnut(canvas: &HtmlCanvasElement, labels: &[String], values: &[f64]) {
    let Some(ctx) = context(canvas) else { return };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear(&ctx, w, h);

    let cx = w / 2.0;
    let cy = h / 2.0;
    let outer = (w.min(h) / 2.0) - 20.0;
    let inner = outer * 0.55;

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("13px system-ui, sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No predictions yet", cx, cy);
        return;
    }

    let mut start = -std::f64::consts::PI / 2.0;
    for (i, &value) in values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let sweep = (value / total) * std::f64::consts::PI * 2.0;
        let end = start + sweep;

        ctx.set_fill_style_str(RISK_COLORS[i % RISK_COLORS.len()]);
        ctx.begin_path();
        ctx.arc(cx, cy, outer, start, end).ok();
        ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true).ok();
        ctx.close_path();
        ctx.fill();

        // Percent label at the segment midpoint.
        let mid = (start + end) / 2.0;
        let lr = (outer + inner) / 2.0;
        let pct = (value / total) * 100.0;
        if pct >= 5.0 {
            ctx.set_fill_style_str("#ffffff");
            ctx.set_font("bold 12px system-ui, sans-serif");
            ctx.set_text_align("center");
            let _ = ctx.fill_text(
                &format!("{:.0}%", pct),
                cx + lr * mid.cos(),
                cy + lr * mid.sin() + 4.0,
            );
        }

        start = end;
    }

    // Legend along the bottom.
    ctx.set_font("11px system-ui, sans-serif");
    ctx.set_text_align("left");
    let mut lx = 10.0;
    for (i, label) in labels.iter().enumerate() {
        ctx.set_fill_style_str(RISK_COLORS[i % RISK_COLORS.len()]);
        ctx.fill_rect(lx, h - 14.0, 10.0, 10.0);
        ctx.set_fill_style_str(TEXT_COLOR);
        let _ = ctx.fill_text(label, lx + 14.0, h - 5.0);
        lx += 14.0 + (label.len() as f64 * 7.0) + 10.0;
    }
}

/// Vertical bar chart with labels along the x-axis.
pub fn draw_bar(canvas: &HtmlCanvasElement, labels: &[String], values: &[f64]) {
    let Some(ctx) = context(canvas) else { return };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear(&ctx, w, h);

    if labels.is_empty() || values.is_empty() {
        return;
    }

    let n = labels.len().min(values.len());
    let max_val = values.iter().cloned().fold(0.001f64, f64::max);
    let slot = w / (n as f64);
    let bar_width = slot * 0.65;
    let gap = slot * 0.175;

    ctx.set_font("11px system-ui, sans-serif");

    for i in 0..n {
        let x = (i as f64) * slot + gap;
        let norm = (values[i] / max_val).clamp(0.0, 1.0);
        let bar_h = norm * (h - 40.0);
        let y = h - 22.0 - bar_h;

        ctx.set_fill_style_str(BAR_COLORS[i % BAR_COLORS.len()]);
        ctx.fill_rect(x, y, bar_width, bar_h);

        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_text_align("center");
        let _ = ctx.fill_text(&labels[i], x + bar_width / 2.0, h - 6.0);
    }
}

/// Line chart with horizontal grid; used for the hourly trend.
pub fn draw_line(canvas: &HtmlCanvasElement, labels: &[String], values: &[f64]) {
    let Some(ctx) = context(canvas) else { return };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear(&ctx, w, h);

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(0.5);
    for i in 1..5 {
        let y = (h - 20.0) * (i as f64) / 5.0;
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
    }

    if values.is_empty() {
        return;
    }

    let max_val = values.iter().cloned().fold(0.001f64, f64::max);
    let step_x = w / (values.len().max(2) as f64 - 1.0);

    ctx.set_stroke_style_str("#FF9800");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &val) in values.iter().enumerate() {
        let x = (i as f64) * step_x;
        let y = (h - 20.0) * (1.0 - (val / max_val).clamp(0.0, 1.0)) + 4.0;
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Sparse x labels, every sixth tick.
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font("10px system-ui, sans-serif");
    ctx.set_text_align("center");
    for (i, label) in labels.iter().enumerate() {
        if i % 6 == 0 {
            let _ = ctx.fill_text(label, (i as f64) * step_x, h - 6.0);
        }
    }
}

/// Radar chart over [0, 1] axes; used for the model performance metrics.
pub fn draw_radar(canvas: &HtmlCanvasElement, labels: &[String], values: &[f64]) {
    let Some(ctx) = context(canvas) else { return };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    clear(&ctx, w, h);

    let n = labels.len().min(values.len());
    if n < 3 {
        return;
    }

    let cx = w / 2.0;
    let cy = h / 2.0;
    let radius = (w.min(h) / 2.0) - 36.0;
    let angle_step = std::f64::consts::PI * 2.0 / (n as f64);
    let angle_of = |i: usize| (i as f64) * angle_step - std::f64::consts::PI / 2.0;

    // Concentric grid rings.
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for ring in 1..=4 {
        let r = radius * (ring as f64) / 4.0;
        ctx.begin_path();
        for i in 0..=n {
            let a = angle_of(i % n);
            let x = cx + r * a.cos();
            let y = cy + r * a.sin();
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }

    // Spokes and axis labels.
    ctx.set_font("11px system-ui, sans-serif");
    ctx.set_text_align("center");
    for i in 0..n {
        let a = angle_of(i);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(cx + radius * a.cos(), cy + radius * a.sin());
        ctx.stroke();

        ctx.set_fill_style_str(TEXT_COLOR);
        let _ = ctx.fill_text(
            &labels[i],
            cx + (radius + 18.0) * a.cos(),
            cy + (radius + 18.0) * a.sin() + 4.0,
        );
    }

    // Value polygon.
    ctx.set_stroke_style_str("#2196F3");
    ctx.set_fill_style_str("rgba(33, 150, 243, 0.25)");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for i in 0..=n {
        let idx = i % n;
        let a = angle_of(idx);
        let r = radius * values[idx].clamp(0.0, 1.0);
        let x = cx + r * a.cos();
        let y = cy + r * a.sin();
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.fill();
    ctx.stroke();
}
