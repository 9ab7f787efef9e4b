//! Chart Component
//!
//! Live power chart over the latest telemetry samples, drawn on an HTML5
//! Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::feed::TelemetrySample;
use crate::state::global::GlobalState;

const LINE_COLOR: &str = "#FF9800"; // Orange (primary)

/// Telemetry chart component
#[component]
pub fn TelemetryChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new sample lands
    create_effect(move |_| {
        let windows = state.windows.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &windows.samples);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Draw the sample window on canvas
fn draw_chart(canvas: &HtmlCanvasElement, samples: &[TelemetrySample]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if samples.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("Waiting for telemetry...", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    // Y range across the window, with padding
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for sample in samples {
        y_min = y_min.min(sample.value);
        y_max = y_max.max(sample.value);
    }

    let y_range = y_max - y_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    y_min -= y_padding;
    y_max += y_padding;

    // Samples are index-scaled on x: the window is small and evenly spread
    let x_at = |i: usize| {
        if samples.len() < 2 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (samples.len() - 1) as f64) * chart_width
        }
    };
    let y_at = |value: f64| margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Power line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, sample) in samples.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(sample.value);

        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }

    ctx.stroke();

    // Sample dots
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, sample) in samples.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(sample.value), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis labels: local time of each sample
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, sample) in samples.iter().enumerate() {
        let _ = ctx.fill_text(&sample.display_time, x_at(i) - 24.0, height - 10.0);
    }
}
