//! Terminal frontend: the same draw flow as the desktop app, asked line by
//! line on stdin.

use std::io;

use anyhow::Result;
use rusty_raffle::config::RaffleConfig;
use rusty_raffle::prompt::ConsolePrompter;
use rusty_raffle::session::Session;
use rusty_raffle::workflow::Workflow;

fn main() -> Result<()> {
    env_logger::init();

    let session = Session::start(&RaffleConfig::default())?;
    println!("Results for this session: {}", session.log().path().display());

    let stdin = io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), io::stdout());
    let mut workflow = Workflow::new(session);
    workflow.run(&mut prompter)?;

    let draws = workflow.session().history().len();
    log::info!("Session ended after {draws} draw(s)");
    Ok(())
}
