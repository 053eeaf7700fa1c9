use std::path::Path;

use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;
use crate::theme::Theme;
use crate::view::{Superlative, ViewModel, FIXTURE_COLUMNS, STANDINGS_COLUMNS};

const DASHBOARD_TITLE: &str = "MYTH BUSTERS - PRE-ASSESSMENT DASHBOARD";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu, the dashboard title and the league logo.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(ui.ctx(), state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!(
            "{} seasons loaded from {}, {} teams this season",
            state.seasons.len(),
            state.config.data_dir.display(),
            state.dataset.team_count(state.season_order)
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(RichText::new(DASHBOARD_TITLE).strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            let logo = egui::Image::from_bytes(
                state.logo_uri(),
                egui::load::Bytes::Shared(state.dataset.logo.clone()),
            );
            ui.add(logo.max_height(70.0).corner_radius(4.0));
        });
    });
}

// ---------------------------------------------------------------------------
// Selector row
// ---------------------------------------------------------------------------

/// Season and round sliders. The season slider moves over the discrete
/// set of loaded seasons; the round slider over the selected season's rounds.
pub fn selector_row(ui: &mut Ui, state: &mut AppState) {
    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        ui.label(RichText::new(&state.view.season_title).strong());
        if state.seasons.is_empty() {
            ui.label("No seasons loaded.");
        } else {
            let mut index = state.season_index();
            let last = state.seasons.len() - 1;
            let label = state.seasons[index].1.clone();
            let slider = egui::Slider::new(&mut index, 0..=last)
                .show_value(false)
                .text(label);
            if ui.add(slider).changed() {
                let order = state.seasons[index].0;
                state.select_season(order);
            }
        }

        let ui = &mut cols[1];
        ui.label(RichText::new(&state.view.round_title).strong());
        match state.round_range() {
            Some((min, max)) => {
                let mut round = state.round;
                let slider = egui::Slider::new(&mut round, min..=max)
                    .step_by(1.0)
                    .text("round");
                if ui.add(slider).changed() {
                    state.select_round(round);
                }
            }
            None => {
                ui.label("No rounds recorded for this season.");
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// Left column: final table and the three superlative cards.
pub fn standings_column(ui: &mut Ui, view: &ViewModel, theme: &Theme) {
    ui.label(RichText::new(&view.standings_title).strong());
    let rows: Vec<Vec<String>> = view.standings.iter().map(|r| r.cells().to_vec()).collect();
    ui.push_id("standings_table", |ui: &mut Ui| {
        data_table(ui, &STANDINGS_COLUMNS, &rows);
    });
    ui.add_space(12.0);

    ui.horizontal(|ui: &mut Ui| {
        superlative_card(ui, "Best Attacking Team", view.best_attack.as_ref(), theme);
        superlative_card(ui, "Best Defending Team", view.best_defence.as_ref(), theme);
        superlative_card(ui, "Most Undisciplined Team", view.most_undisciplined.as_ref(), theme);
    });
}

/// Middle column: top scorers, assists and discipline.
pub fn leaders_column(ui: &mut Ui, view: &ViewModel) {
    leader_list(ui, "Top Scorers", &view.top_scorers);
    leader_list(ui, "Top Assists", &view.top_assists);
    leader_list(ui, "Discipline", &view.top_discipline);
    ui.add_space(12.0);
}

/// Right column: fixtures of the selected round.
pub fn fixtures_column(ui: &mut Ui, view: &ViewModel) {
    ui.label(RichText::new(&view.fixtures_title).strong());
    let rows: Vec<Vec<String>> = view.fixtures.iter().map(|r| r.cells().to_vec()).collect();
    ui.push_id("fixtures_table", |ui: &mut Ui| {
        data_table(ui, &FIXTURE_COLUMNS, &rows);
    });
    ui.add_space(12.0);
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

fn data_table(ui: &mut Ui, columns: &[&str], rows: &[Vec<String>]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::centered_and_justified(egui::Direction::LeftToRight))
        .columns(Column::auto().at_least(28.0), columns.len())
        .header(20.0, |mut header| {
            for name in columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(*name);
                });
            }
        })
        .body(|mut body| {
            for cells in rows {
                body.row(18.0, |mut row| {
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(RichText::new(cell).small());
                        });
                    }
                });
            }
        });
}

fn superlative_card(ui: &mut Ui, caption: &str, card: Option<&Superlative>, theme: &Theme) {
    egui::Frame::group(ui.style())
        .fill(theme.raised)
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(caption).small());
                ui.separator();
                match card {
                    Some(card) => {
                        ui.heading(RichText::new(&card.team).strong());
                        ui.label(&card.detail);
                    }
                    None => {
                        ui.label("–");
                    }
                }
            });
        });
}

fn leader_list(ui: &mut Ui, caption: &str, entries: &[String]) {
    ui.with_layout(Layout::top_down(Align::Max), |ui: &mut Ui| {
        ui.label(RichText::new(caption).strong());
        ui.separator();
        for (i, entry) in entries.iter().enumerate() {
            // leader gets the biggest line, like a podium
            let text = match i {
                0 => RichText::new(entry).size(18.0).strong(),
                1 => RichText::new(entry).size(15.0),
                _ => RichText::new(entry),
            };
            ui.label(text);
        }
        if entries.is_empty() {
            ui.label("No data for this season.");
        }
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(ctx: &egui::Context, state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open league data folder")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(path) = folder {
        reload_folder(ctx, state, &path);
    }
}

/// Swap in the dataset at `path`, dropping the previous logo from egui's
/// caches. Failures only set the status line.
fn reload_folder(ctx: &egui::Context, state: &mut AppState, path: &Path) {
    let previous_logo = state.logo_uri();
    match state.open_folder(path) {
        Ok(()) => {
            ctx.forget_image(&previous_logo);
            log::info!(
                "Loaded {} seasons from {}",
                state.seasons.len(),
                path.display()
            );
        }
        Err(e) => {
            log::error!("Failed to load folder: {e:#}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::fixtures;
    use egui::load::{Bytes, BytesPoll};

    fn served_logo(ctx: &egui::Context, state: &AppState) -> Vec<u8> {
        let uri = state.logo_uri();
        ctx.include_bytes(uri.clone(), Bytes::Shared(state.dataset.logo.clone()));
        let Ok(BytesPoll::Ready { bytes, .. }) = ctx.try_load_bytes(&uri) else {
            panic!("logo bytes for {uri} not ready");
        };
        bytes.to_vec()
    }

    #[test]
    fn reloaded_folder_serves_its_own_logo() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(DashboardConfig::default(), fixtures::dataset());
        assert_eq!(served_logo(&ctx, &state), fixtures::LOGO_BYTES);

        let dir = tempfile::tempdir().unwrap();
        fixtures::write_dir(dir.path());
        std::fs::write(dir.path().join("liga-nos-png.png"), b"second-logo").unwrap();
        reload_folder(&ctx, &mut state, dir.path());

        assert!(state.status_message.is_none());
        assert_eq!(served_logo(&ctx, &state), b"second-logo");
    }

    #[test]
    fn failed_reload_keeps_the_logo_and_reports() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(DashboardConfig::default(), fixtures::dataset());
        let before = state.logo_uri();

        let empty = tempfile::tempdir().unwrap();
        reload_folder(&ctx, &mut state, empty.path());

        assert_eq!(state.logo_uri(), before);
        assert!(state.status_message.as_deref().is_some_and(|m| m.starts_with("Error: ")));
        assert_eq!(served_logo(&ctx, &state), fixtures::LOGO_BYTES);
    }
}
