use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::theme::Theme;
use crate::view::{ChartKind, ChartSpec};

// ---------------------------------------------------------------------------
// Position trend (middle column)
// ---------------------------------------------------------------------------

/// Line + markers of the champion's position by round, each point labelled.
pub fn position_trend(ui: &mut Ui, chart: &ChartSpec, theme: &Theme) {
    debug_assert_eq!(chart.kind, ChartKind::LineMarkers);
    ui.label(RichText::new(&chart.title).strong());

    Plot::new("position_trend")
        .height(230.0)
        .x_axis_label("Round")
        .y_axis_label("Position")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let series: Vec<[f64; 2]> = chart.points.iter().map(|p| [p.x, p.y]).collect();
            plot_ui.line(
                Line::new(PlotPoints::from(series.clone()))
                    .color(theme.series)
                    .width(1.5),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(series))
                    .color(theme.series)
                    .radius(3.0),
            );
            for p in &chart.points {
                plot_ui.text(
                    Text::new(PlotPoint::new(p.x, p.y), RichText::new(&p.text).small())
                        .anchor(Align2::CENTER_BOTTOM)
                        .color(theme.text),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Round snapshot (right column)
// ---------------------------------------------------------------------------

/// Horizontal bars of cumulative points after the selected round, lowest
/// first, team names on the vertical axis.
pub fn round_snapshot(ui: &mut Ui, chart: &ChartSpec, theme: &Theme) {
    debug_assert_eq!(chart.kind, ChartKind::HorizontalBar);
    ui.label(RichText::new(&chart.title).strong());

    let teams: Vec<String> = chart
        .points
        .iter()
        .map(|p| p.category.clone().unwrap_or_default())
        .collect();

    let bars: Vec<Bar> = chart
        .points
        .iter()
        .map(|p| {
            Bar::new(p.y, p.x)
                .width(0.65)
                .fill(theme.series)
                .name(p.category.as_deref().unwrap_or_default())
        })
        .collect();

    Plot::new("round_snapshot")
        .height(430.0)
        .show_grid([true, false])
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .y_axis_formatter(move |mark: GridMark, _range| team_tick(&teams, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().color(theme.series));
            for p in &chart.points {
                plot_ui.text(
                    Text::new(PlotPoint::new(p.x, p.y), RichText::new(&p.text).small())
                        .anchor(Align2::LEFT_CENTER)
                        .color(theme.text),
                );
            }
        });
}

/// Team name for an integer tick on the category axis, blank elsewhere.
fn team_tick(teams: &[String], value: f64) -> String {
    if value < 0.0 || value.fract().abs() > f64::EPSILON {
        return String::new();
    }
    teams.get(value as usize).cloned().unwrap_or_default()
}
