use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – session overview
// ---------------------------------------------------------------------------

/// Render the session panel: excluded winners and past draws.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    let session = state.workflow.session();

    ui.heading("Session");
    ui.label(
        RichText::new(format!("Results: {}", session.log().path().display()))
            .small()
            .weak(),
    );
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let exclusions = session.exclusions();
            ui.strong(format!("Winners so far ({})", exclusions.len()));
            if exclusions.is_empty() {
                ui.label(RichText::new("No draws yet.").weak());
            }
            for name in exclusions.iter() {
                ui.label(name);
            }
            ui.separator();

            ui.strong("Draws");
            for record in session.history().iter().rev() {
                let header = format!(
                    "#{}  {}  ({})",
                    record.number,
                    record.at.format("%H:%M:%S"),
                    record.column
                );
                egui::CollapsingHeader::new(header)
                    .id_salt(("draw", record.number))
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        ui.label(format!("File: {}", record.source));
                        if record.excluded_previous {
                            ui.label(RichText::new("Previous winners excluded").weak());
                        }
                        for (i, w) in record.winners.iter().enumerate() {
                            ui.label(format!("{}. {w}", i + 1));
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                state.open_file();
                ui.close_menu();
            }
            let can_redraw = state.workflow.loaded().is_some();
            if ui
                .add_enabled(can_redraw, egui::Button::new("Draw again"))
                .clicked()
            {
                state.draw_again();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(loaded) = state.workflow.loaded() {
            ui.label(format!(
                "{}: {} rows, {} name column(s)",
                loaded.display_name(),
                loaded.table.len(),
                loaded.name_columns.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
