use eframe::egui;

use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LigaDashboardApp {
    pub state: AppState,
    pub theme: Theme,
}

impl LigaDashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self { state, theme }
    }
}

impl eframe::App for LigaDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu, title, logo ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Selector row: season and round sliders ----
        egui::TopBottomPanel::top("selectors").show(ctx, |ui| {
            panels::selector_row(ui, &mut self.state);
        });

        // ---- Central panel: three columns of tables, cards and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = &self.state.view;
            let theme = &self.theme;
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.columns(3, |cols| {
                        panels::standings_column(&mut cols[0], view, theme);
                        panels::leaders_column(&mut cols[1], view);
                        plot::position_trend(&mut cols[1], &view.position_trend, theme);
                        panels::fixtures_column(&mut cols[2], view);
                        plot::round_snapshot(&mut cols[2], &view.round_snapshot, theme);
                    });
                });
        });
    }
}
