use eframe::egui;

use rusty_raffle::workflow::Workflow;

use crate::state::AppState;
use crate::ui::{dialogs, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RaffleApp {
    pub state: AppState,
}

impl RaffleApp {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            state: AppState::new(workflow),
        }
    }
}

impl eframe::App for RaffleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: session winners ----
        egui::SidePanel::left("session_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: latest draw and table preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::central_panel(ui, &self.state);
        });

        // ---- Whatever the draw flow is waiting for ----
        dialogs::pending(ctx, &mut self.state);

        if self.state.workflow.is_exit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
