use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::data::classify::name_columns;
use crate::data::loader::load_csv;
use crate::data::model::NameTable;
use crate::draw::{CandidatePool, DrawError};
use crate::prompt::{Notice, Prompt, Prompter, Response};
use crate::select::{parse_count, validate_column};
use crate::session::{DrawRecord, Session};

/// A response that does not fit the pending prompt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("unexpected response {response:?} while {stage}")]
    UnexpectedResponse {
        stage: &'static str,
        response: Response,
    },
    #[error("no prompt is pending")]
    NotWaiting,
}

/// A CSV file that passed classification.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub table: NameTable,
    /// Columns that can hold names, in table order. Never empty.
    pub name_columns: Vec<String>,
}

impl LoadedFile {
    /// File name shown to the user and written to the log.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Stage {
    SelectFile,
    SelectColumn,
    AskExclusion,
    AskCount,
    Notify(Notice, Box<Stage>),
    AskAgain,
    Idle,
    Exit,
}

impl Stage {
    fn describe(&self) -> &'static str {
        match self {
            Stage::SelectFile => "selecting a file",
            Stage::SelectColumn => "selecting a column",
            Stage::AskExclusion => "asking about exclusion",
            Stage::AskCount => "asking for a count",
            Stage::Notify(..) => "showing a message",
            Stage::AskAgain => "asking to draw again",
            Stage::Idle => "idle",
            Stage::Exit => "exiting",
        }
    }
}

/// Settings for the draw being prepared.
#[derive(Debug, Clone, Default)]
struct Draft {
    column: Option<String>,
    pool: CandidatePool,
    exclude: bool,
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// The file → column → exclusion → count → draw sequence as a resumable
/// state machine.
///
/// Frontends read [`Workflow::prompt`], show it, and feed the answer to
/// [`Workflow::respond`]. Blocking frontends can hand a [`Prompter`] to
/// [`Workflow::run`] instead.
pub struct Workflow {
    session: Session,
    loaded: Option<LoadedFile>,
    draft: Draft,
    stage: Stage,
    rng: StdRng,
}

impl Workflow {
    /// Start at the file prompt with an OS-seeded generator.
    pub fn new(session: Session) -> Self {
        Self::with_rng(session, StdRng::from_os_rng())
    }

    pub fn with_rng(session: Session, rng: StdRng) -> Self {
        Workflow {
            session,
            loaded: None,
            draft: Draft::default(),
            stage: Stage::SelectFile,
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn loaded(&self) -> Option<&LoadedFile> {
        self.loaded.as_ref()
    }

    /// The column of the draw in progress, once chosen.
    pub fn column(&self) -> Option<&str> {
        self.draft.column.as_deref()
    }

    /// Whether the user closed the column picker.
    pub fn is_exit(&self) -> bool {
        self.stage == Stage::Exit
    }

    /// What the user has to answer next, if anything.
    pub fn prompt(&self) -> Option<Prompt> {
        match &self.stage {
            Stage::SelectFile => Some(Prompt::OpenFile),
            Stage::SelectColumn => Some(Prompt::Column {
                choices: self
                    .loaded
                    .as_ref()
                    .map(|l| l.name_columns.clone())
                    .unwrap_or_default(),
            }),
            Stage::AskExclusion => Some(Prompt::Exclusion),
            Stage::AskCount => Some(Prompt::Count {
                max: self.draft.pool.len(),
            }),
            Stage::Notify(notice, _) => Some(Prompt::Notice(notice.clone())),
            Stage::AskAgain => Some(Prompt::DrawAgain),
            Stage::Idle | Stage::Exit => None,
        }
    }

    /// Go back to the file prompt. Ignored once the program is exiting.
    pub fn restart(&mut self) {
        if self.stage != Stage::Exit {
            self.stage = Stage::SelectFile;
        }
    }

    /// Start another draw from the loaded file.
    pub fn draw_again(&mut self) {
        if self.stage != Stage::Exit && self.loaded.is_some() {
            self.stage = Stage::SelectColumn;
        }
    }

    /// Answer the pending prompt; `None` means the dialog was cancelled.
    ///
    /// A response of the wrong kind is rejected and the prompt stays pending.
    pub fn respond(&mut self, response: Option<Response>) -> Result<(), WorkflowError> {
        let stage = std::mem::replace(&mut self.stage, Stage::Idle);
        match self.advance(&stage, response) {
            Ok(next) => {
                self.stage = next;
                Ok(())
            }
            Err(e) => {
                self.stage = stage;
                Err(e)
            }
        }
    }

    /// Ask every pending prompt through `prompter` until nothing is left.
    pub fn run<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<(), WorkflowError> {
        while let Some(prompt) = self.prompt() {
            let response = prompter.request(&prompt);
            self.respond(response)?;
        }
        Ok(())
    }

    fn advance(&mut self, stage: &Stage, response: Option<Response>) -> Result<Stage, WorkflowError> {
        let next = match (stage, response) {
            (Stage::Idle | Stage::Exit, _) => return Err(WorkflowError::NotWaiting),
            (Stage::Notify(_, then), _) => (**then).clone(),

            (Stage::SelectFile, None) => {
                log::info!("No file selected");
                Stage::Idle
            }
            (Stage::SelectFile, Some(Response::File(path))) => self.open(&path),

            (Stage::SelectColumn, None) => {
                log::info!("Column picker closed, exiting");
                Stage::Exit
            }
            (Stage::SelectColumn, Some(Response::Column(choice))) => {
                self.choose_column(choice.as_deref())
            }

            (Stage::AskExclusion, None) => {
                self.draft.exclude = false;
                Stage::AskCount
            }
            (Stage::AskExclusion, Some(Response::Confirm(exclude))) => {
                self.draft.exclude = exclude;
                Stage::AskCount
            }

            (Stage::AskCount, None) => {
                log::info!("Draw cancelled");
                Stage::Idle
            }
            (Stage::AskCount, Some(Response::Text(input))) => self.submit_count(&input),

            (Stage::AskAgain, None | Some(Response::Confirm(false))) => Stage::Idle,
            (Stage::AskAgain, Some(Response::Confirm(true))) => Stage::SelectColumn,

            (stage, Some(response)) => {
                return Err(WorkflowError::UnexpectedResponse {
                    stage: stage.describe(),
                    response,
                });
            }
        };
        Ok(next)
    }

    fn open(&mut self, path: &Path) -> Stage {
        let table = match load_csv(path) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.loaded = None;
                return notify(
                    Notice::error("Could not read file", format!("{e:#}")),
                    Stage::Idle,
                );
            }
        };

        let columns = name_columns(&table);
        log::info!(
            "Loaded {} rows from {}, name columns {:?}",
            table.len(),
            path.display(),
            columns
        );
        if columns.is_empty() {
            self.loaded = None;
            return notify(
                Notice::error(
                    "No name columns",
                    "The file has no column with text values to draw from.",
                ),
                Stage::Idle,
            );
        }

        self.loaded = Some(LoadedFile {
            path: path.to_path_buf(),
            table,
            name_columns: columns,
        });
        Stage::SelectColumn
    }

    fn choose_column(&mut self, choice: Option<&str>) -> Stage {
        let Some(loaded) = self.loaded.as_ref() else {
            return Stage::Idle;
        };
        let column = match validate_column(choice, &loaded.name_columns) {
            Ok(column) => column.to_string(),
            Err(e) => {
                log::warn!("Rejected column choice {choice:?}");
                return notify(Notice::error("Invalid column", e.to_string()), Stage::SelectColumn);
            }
        };
        self.draft = Draft {
            pool: CandidatePool::from_column(&loaded.table, &column).unwrap_or_default(),
            column: Some(column),
            exclude: false,
        };
        Stage::AskExclusion
    }

    fn submit_count(&mut self, input: &str) -> Stage {
        let count = match parse_count(input, self.draft.pool.len()) {
            Ok(count) => count,
            Err(e) => {
                log::warn!("Rejected count {input:?}: {e}");
                return notify(Notice::error("Invalid count", e.to_string()), Stage::AskCount);
            }
        };
        let (Some(loaded), Some(column)) = (self.loaded.as_ref(), self.draft.column.as_deref())
        else {
            return Stage::Idle;
        };

        let source = loaded.display_name();
        let record = match self.session.draw(
            &source,
            column,
            &self.draft.pool,
            count,
            self.draft.exclude,
            &mut self.rng,
        ) {
            Ok(record) => record.clone(),
            Err(e) => {
                log::warn!("Draw rejected: {e}");
                let message = match e {
                    DrawError::Shortfall { available, .. } => format!(
                        "Only {available} names are left after excluding previous winners. \
                         Enter a smaller number."
                    ),
                    other => other.to_string(),
                };
                return notify(Notice::error("Not enough names", message), Stage::AskCount);
            }
        };

        let mut message = results_text(&record);
        if let Err(e) = self.session.log().append(&record) {
            log::error!("Failed to save draw #{}: {e:#}", record.number);
            message.push_str(&format!("\n\nThe results could not be saved: {e:#}"));
        }
        notify(Notice::info("Winners", message), Stage::AskAgain)
    }
}

fn notify(notice: Notice, then: Stage) -> Stage {
    Stage::Notify(notice, Box::new(then))
}

fn results_text(record: &DrawRecord) -> String {
    record
        .winners
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{}. {w}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
