use std::path::PathBuf;

use eframe::egui::{self, Align2, Context, Ui};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use rusty_raffle::prompt::{Notice, NoticeLevel, Prompt, Response};
use rusty_raffle::select::COLUMN_PLACEHOLDER;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pending prompt
// ---------------------------------------------------------------------------

/// Show whatever the draw flow is waiting for.
///
/// File, yes/no and message prompts use native blocking dialogs; the column
/// and count prompts are egui windows that stay up across frames.
pub fn pending(ctx: &Context, state: &mut AppState) {
    let Some(prompt) = state.workflow.prompt() else {
        return;
    };

    match prompt {
        Prompt::OpenFile => {
            let file = pick_csv();
            state.respond(file.map(Response::File));
        }
        Prompt::Column { choices } => column_window(ctx, state, &choices),
        Prompt::Exclusion => {
            let yes = confirm(
                "Exclude previous winners",
                "Do you want to exclude the winners of previous draws?",
            );
            state.respond(Some(Response::Confirm(yes)));
        }
        Prompt::Count { max } => count_window(ctx, state, max),
        Prompt::Notice(notice) => {
            message_box(&notice);
            state.respond(Some(Response::Acknowledged));
        }
        Prompt::DrawAgain => {
            let yes = confirm("Draw again", "Do you want to draw again from this file?");
            state.respond(Some(Response::Confirm(yes)));
        }
    }

    // The next prompt has to show up without waiting for input.
    ctx.request_repaint();
}

fn modal<'a>(title: &str) -> egui::Window<'a> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}

// ---------------------------------------------------------------------------
// egui dialogs
// ---------------------------------------------------------------------------

/// Column picker. Closing it ends the program.
fn column_window(ctx: &Context, state: &mut AppState, choices: &[String]) {
    let mut open = true;
    let mut submitted = false;

    modal("Select column").open(&mut open).show(ctx, |ui: &mut Ui| {
        ui.label("Select the column that contains the names:");
        ui.add_space(6.0);

        let selected = state
            .column_choice
            .as_deref()
            .unwrap_or(COLUMN_PLACEHOLDER)
            .to_string();
        egui::ComboBox::from_id_salt("column_choice")
            .selected_text(selected)
            .show_ui(ui, |ui: &mut Ui| {
                for col in choices {
                    ui.selectable_value(&mut state.column_choice, Some(col.clone()), col.as_str());
                }
            });

        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            submitted = true;
        }
    });

    if !open {
        state.respond(None);
    } else if submitted {
        state.submit_column();
    }
}

/// Draw size entry. Cancelling aborts the draw.
fn count_window(ctx: &Context, state: &mut AppState, max: usize) {
    let mut open = true;
    let mut submitted = false;
    let mut cancelled = false;

    modal("Count").open(&mut open).show(ctx, |ui: &mut Ui| {
        ui.label(format!("How many names do you want to draw? (max {max})"));
        let edit = ui.text_edit_singleline(&mut state.count_input);
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }
        ui.add_space(8.0);
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("OK").clicked() {
                submitted = true;
            }
            if ui.button("Cancel").clicked() {
                cancelled = true;
            }
        });
    });

    if !open || cancelled {
        state.cancel_count();
    } else if submitted {
        state.submit_count();
    }
}

// ---------------------------------------------------------------------------
// Native dialogs
// ---------------------------------------------------------------------------

fn pick_csv() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select a CSV file")
        .add_filter("CSV files", &["csv"])
        .pick_file()
}

fn confirm(title: &str, question: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(question)
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(answer, MessageDialogResult::Yes)
}

fn message_box(notice: &Notice) {
    let level = match notice.level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Error => MessageLevel::Error,
    };
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(notice.title.as_str())
        .set_description(notice.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Shown before the window exists, when the results directory can't be made.
pub fn startup_error(message: &str) {
    message_box(&Notice::error("Cannot start", message));
}
