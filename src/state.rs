use rusty_raffle::prompt::Response;
use rusty_raffle::workflow::Workflow;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Draw flow and session (exclusions, history, results file).
    pub workflow: Workflow,

    /// Column picked in the column dialog; `None` while the placeholder shows.
    pub column_choice: Option<String>,

    /// Text typed into the count dialog.
    pub count_input: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            column_choice: None,
            count_input: String::new(),
            status_message: None,
        }
    }

    /// Forward an answer to the workflow.
    pub fn respond(&mut self, response: Option<Response>) {
        match self.workflow.respond(response) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                log::error!("Dialog answer rejected: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Submit the column dialog, resetting it to the placeholder.
    pub fn submit_column(&mut self) {
        let choice = self.column_choice.take();
        self.respond(Some(Response::Column(choice)));
    }

    /// Submit the count dialog, clearing its text.
    pub fn submit_count(&mut self) {
        let input = std::mem::take(&mut self.count_input);
        self.respond(Some(Response::Text(input)));
    }

    /// Cancel the count dialog.
    pub fn cancel_count(&mut self) {
        self.count_input.clear();
        self.respond(None);
    }

    /// File → Open CSV…
    pub fn open_file(&mut self) {
        self.workflow.restart();
    }

    /// File → Draw again
    pub fn draw_again(&mut self) {
        self.column_choice = None;
        self.workflow.draw_again();
    }
}
