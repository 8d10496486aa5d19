use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const WINNER_COLOR: Color32 = Color32::from_rgb(34, 197, 94);

// ---------------------------------------------------------------------------
// Central panel – latest winners and the loaded table
// ---------------------------------------------------------------------------

/// Render the latest draw above a preview of the loaded CSV.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(loaded) = state.workflow.loaded() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to start a draw  (File → Open CSV…)");
        });
        return;
    };
    let session = state.workflow.session();

    if let Some(last) = session.history().last() {
        ui.heading(format!("Draw #{} – {}", last.number, last.column));
        ui.horizontal_wrapped(|ui: &mut Ui| {
            for w in &last.winners {
                ui.label(RichText::new(w).size(18.0).strong().color(WINNER_COLOR));
            }
        });
        ui.separator();
    }

    let table = &loaded.table;
    let column = state.workflow.column();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), table.headers.len())
        .header(22.0, |mut header| {
            for h in &table.headers {
                header.col(|ui: &mut Ui| {
                    if loaded.name_columns.contains(h) {
                        ui.strong(h);
                    } else {
                        ui.label(RichText::new(h).weak());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, table.len(), |mut row| {
                let cells = &table.rows[row.index()];
                for (h, cell) in table.headers.iter().zip(cells) {
                    row.col(|ui: &mut Ui| match cell {
                        Some(v) => {
                            let won = column == Some(h.as_str()) && session.exclusions().contains(v);
                            let text = RichText::new(v);
                            ui.label(if won { text.color(WINNER_COLOR).strong() } else { text });
                        }
                        None => {
                            ui.label(RichText::new("NA").weak());
                        }
                    });
                }
            });
        });
}
