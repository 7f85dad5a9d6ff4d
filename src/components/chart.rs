//! Chart Component
//!
//! Pie chart of category totals using HTML5 Canvas.

use leptos::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::CategoryTotal;
use crate::state::global::GlobalState;

/// Color for the first slice
const PRIMARY_COLOR: &str = "#4F46E5";
/// Color for the second slice
const SECONDARY_COLOR: &str = "#10B981";

/// Palette cycled through for slices beyond the first two. Colors repeat
/// once the category count exceeds ten.
const ADDITIONAL_COLORS: [&str; 8] = [
    "#F59E0B", // Amber
    "#EC4899", // Pink
    "#8B5CF6", // Purple
    "#06B6D4", // Cyan
    "#EF4444", // Red
    "#84CC16", // Lime
    "#3B82F6", // Blue
    "#F97316", // Orange
];

/// Gap between the pie and the canvas edge, in canvas pixels.
const CHART_MARGIN: f64 = 10.0;

/// One wedge of the pie. Angles are measured in radians from 12 o'clock,
/// increasing clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Clone)]
struct TooltipState {
    x: i32,
    y: i32,
    text: String,
}

/// Pie chart of per-category spending with legend and hover tooltip
#[component]
pub fn ExpenseChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (tooltip, set_tooltip) = create_signal(None::<TooltipState>);

    // Redraw whenever the category totals change. The canvas is cleared
    // and repainted in full within this one effect, so there is never a
    // second live rendering to destroy.
    create_effect(move |_| {
        let categories = state.categories.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &compute_slices(&categories));
        }
    });

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let slices = compute_slices(&state.categories.get());
        if slices.is_empty() {
            set_tooltip.set(None);
            return;
        }

        // Map CSS pixel coordinates onto the canvas pixel grid
        let rect = canvas.get_bounding_client_rect();
        let scale_x = if rect.width() > 0.0 {
            canvas.width() as f64 / rect.width()
        } else {
            1.0
        };
        let scale_y = if rect.height() > 0.0 {
            canvas.height() as f64 / rect.height()
        } else {
            1.0
        };
        let x = ev.offset_x() as f64 * scale_x;
        let y = ev.offset_y() as f64 * scale_y;

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let radius = width.min(height) / 2.0 - CHART_MARGIN;
        let total: f64 = slices.iter().map(|s| s.value).sum();

        match hit_test(&slices, x - width / 2.0, y - height / 2.0, radius) {
            Some(idx) => {
                let slice = &slices[idx];
                set_tooltip.set(Some(TooltipState {
                    x: ev.offset_x(),
                    y: ev.offset_y(),
                    text: slice_tooltip(&slice.label, slice.value, total),
                }));
            }
            None => set_tooltip.set(None),
        }
    };

    view! {
        <div class="flex items-center gap-6">
            <div class="relative">
                <canvas
                    node_ref=canvas_ref
                    width="360"
                    height="360"
                    class="max-w-full"
                    on:mousemove=on_mousemove
                    on:mouseleave=move |_| set_tooltip.set(None)
                />

                {move || {
                    tooltip.get().map(|t| view! {
                        <div
                            class="absolute pointer-events-none bg-gray-800 text-white text-xs
                                   rounded px-2 py-1 whitespace-nowrap shadow"
                            style=format!("left: {}px; top: {}px;", t.x + 12, t.y + 12)
                        >
                            {t.text}
                        </div>
                    })
                }}
            </div>

            <ChartLegend />
        </div>
    }
}

/// Legend showing one swatch per category
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex flex-col justify-center gap-2">
            {move || {
                let categories = state.categories.get();
                let colors = slice_colors(categories.len());
                categories.into_iter()
                    .zip(colors)
                    .map(|(cat, color)| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">{cat.category}</span>
                        </div>
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Colors for `count` slices: the two fixed colors, then a cyclic walk
/// through the additional palette.
pub fn slice_colors(count: usize) -> Vec<&'static str> {
    let mut colors = vec![PRIMARY_COLOR, SECONDARY_COLOR];
    for i in 0..count.saturating_sub(2) {
        colors.push(ADDITIONAL_COLORS[i % ADDITIONAL_COLORS.len()]);
    }
    colors.truncate(count);
    colors
}

/// Turn category totals into pie slices proportional to each total.
///
/// Returns no slices when there is nothing to draw (no categories, or a
/// non-positive grand total).
pub fn compute_slices(categories: &[CategoryTotal]) -> Vec<PieSlice> {
    let total: f64 = categories.iter().map(|c| c.total).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let colors = slice_colors(categories.len());
    let mut angle = 0.0;

    categories
        .iter()
        .zip(colors)
        .map(|(cat, color)| {
            let start_angle = angle;
            angle += cat.total / total * TAU;
            PieSlice {
                label: cat.category.clone(),
                value: cat.total,
                color,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Tooltip text for a slice: label, formatted value, and share of the
/// currently displayed total rounded to the nearest integer percent.
pub fn slice_tooltip(label: &str, value: f64, total: f64) -> String {
    let pct = if total > 0.0 {
        (value / total * 100.0).round() as i64
    } else {
        0
    };
    format!("{}: ${:.2} ({}%)", label, value, pct)
}

/// Find the slice containing the point `(dx, dy)` relative to the pie
/// center, if any.
pub fn hit_test(slices: &[PieSlice], dx: f64, dy: f64, radius: f64) -> Option<usize> {
    if dx.hypot(dy) > radius {
        return None;
    }

    // Screen-space atan2 grows clockwise (y points down); shift so zero
    // sits at 12 o'clock to match the slice angles.
    let mut angle = dy.atan2(dx) + FRAC_PI_2;
    if angle < 0.0 {
        angle += TAU;
    }

    slices
        .iter()
        .position(|s| s.start_angle <= angle && angle < s.end_angle)
}

/// Draw the pie on canvas
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[PieSlice]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.is_empty() {
        ctx.set_fill_style_str("#6b7280"); // gray-500
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No expenses yet", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - CHART_MARGIN;

    for slice in slices {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        // Canvas angles start at 3 o'clock; slice angles at 12 o'clock
        let _ = ctx.arc(
            cx,
            cy,
            radius,
            slice.start_angle - FRAC_PI_2,
            slice.end_angle - FRAC_PI_2,
        );
        ctx.close_path();
        ctx.set_fill_style_str(slice.color);
        ctx.fill();
        ctx.set_stroke_style_str("#ffffff");
        ctx.set_line_width(1.0);
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(pairs: &[(&str, f64)]) -> Vec<CategoryTotal> {
        pairs
            .iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total: *total,
            })
            .collect()
    }

    #[test]
    fn two_categories_get_exactly_primary_and_secondary() {
        assert_eq!(slice_colors(2), vec!["#4F46E5", "#10B981"]);
    }

    #[test]
    fn extra_categories_walk_the_palette_cyclically() {
        let colors = slice_colors(11);
        assert_eq!(colors.len(), 11);
        assert_eq!(colors[0], "#4F46E5");
        assert_eq!(colors[1], "#10B981");
        for i in 2..11 {
            assert_eq!(colors[i], ADDITIONAL_COLORS[(i - 2) % 8]);
        }
        // Palette wraps after eight additional colors
        assert_eq!(colors[10], colors[2]);
    }

    #[test]
    fn slices_are_proportional_and_cover_the_circle() {
        let slices = compute_slices(&categories(&[("Food", 60.0), ("Transport", 40.0)]));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].color, "#4F46E5");
        assert_eq!(slices[1].color, "#10B981");

        assert!((slices[0].start_angle - 0.0).abs() < 1e-9);
        assert!((slices[0].end_angle - 0.6 * TAU).abs() < 1e-9);
        assert!((slices[1].start_angle - 0.6 * TAU).abs() < 1e-9);
        assert!((slices[1].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn no_slices_without_positive_totals() {
        assert!(compute_slices(&[]).is_empty());
        assert!(compute_slices(&categories(&[("Food", 0.0), ("Transport", 0.0)])).is_empty());
    }

    #[test]
    fn tooltip_shows_rounded_percentage_of_displayed_total() {
        assert_eq!(slice_tooltip("Food", 60.0, 100.0), "Food: $60.00 (60%)");
        assert_eq!(
            slice_tooltip("Transport", 40.0, 100.0),
            "Transport: $40.00 (40%)"
        );
        // 1/3 rounds to the nearest integer percent
        assert_eq!(slice_tooltip("Misc", 1.0, 3.0), "Misc: $1.00 (33%)");
    }

    #[test]
    fn hit_test_maps_points_to_slices() {
        let slices = compute_slices(&categories(&[("Food", 60.0), ("Transport", 40.0)]));
        let radius = 100.0;

        // Straight right of center is a quarter turn clockwise from the
        // top, inside the 60% slice
        assert_eq!(hit_test(&slices, 50.0, 0.0, radius), Some(0));
        // Straight left is three quarter turns, inside the second slice
        assert_eq!(hit_test(&slices, -50.0, 0.0, radius), Some(1));
        // Outside the pie
        assert_eq!(hit_test(&slices, 150.0, 0.0, radius), None);
    }
}
