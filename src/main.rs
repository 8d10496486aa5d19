mod app;
mod state;
mod ui;

use app::RaffleApp;
use eframe::egui;
use rusty_raffle::config::RaffleConfig;
use rusty_raffle::session::Session;
use rusty_raffle::workflow::Workflow;

fn main() -> eframe::Result {
    env_logger::init();

    let session = match Session::start(&RaffleConfig::default()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to start session: {e:#}");
            ui::dialogs::startup_error(&format!("{e:#}"));
            return Ok(());
        }
    };
    log::info!("Session results go to {}", session.log().path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Raffle",
        options,
        Box::new(|_cc| Ok(Box::new(RaffleApp::new(Workflow::new(session))))),
    )
}
