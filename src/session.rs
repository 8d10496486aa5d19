use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rand::Rng;

use crate::config::RaffleConfig;
use crate::draw::{self, CandidatePool, DrawError, ExclusionSet};

// ---------------------------------------------------------------------------
// Draw record
// ---------------------------------------------------------------------------

/// One completed draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    /// 1-based position within the session.
    pub number: usize,
    pub at: DateTime<Local>,
    /// File name of the CSV the names came from.
    pub source: String,
    pub column: String,
    pub requested: usize,
    pub excluded_previous: bool,
    /// Winners in the order they were drawn.
    pub winners: Vec<String>,
}

impl DrawRecord {
    /// Text block appended to the session file.
    pub fn to_log_entry(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[{}] draw #{}", self.at.format("%Y-%m-%d %H:%M:%S"), self.number);
        let _ = writeln!(out, "file: {}", self.source);
        let _ = writeln!(out, "column: {}", self.column);
        let _ = writeln!(out, "requested: {}", self.requested);
        let _ = writeln!(
            out,
            "excluded previous winners: {}",
            if self.excluded_previous { "yes" } else { "no" }
        );
        out.push_str("winners:\n");
        for (i, w) in self.winners.iter().enumerate() {
            let _ = writeln!(out, "  {}. {w}", i + 1);
        }
        out.push('\n');
        out
    }
}

// ---------------------------------------------------------------------------
// Session log file
// ---------------------------------------------------------------------------

/// Append-only results file, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Create the results directory if needed and fix the file name.
    pub fn create(config: &RaffleConfig, started: DateTime<Local>) -> Result<Self> {
        fs::create_dir_all(&config.results_dir).with_context(|| {
            format!("creating results directory {}", config.results_dir.display())
        })?;
        Ok(SessionLog {
            path: config.session_path(&started),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one draw. Existing content is never touched.
    pub fn append(&self, record: &DrawRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        file.write_all(record.to_log_entry().as_bytes())
            .with_context(|| format!("writing to {}", self.path.display()))?;
        log::info!("Draw #{} written to {}", record.number, self.path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Everything that lives for one run of the program: the winners so far,
/// the draw history and the results file.
#[derive(Debug, Clone)]
pub struct Session {
    exclusions: ExclusionSet,
    history: Vec<DrawRecord>,
    log: SessionLog,
}

impl Session {
    /// Start a session now, creating the results directory.
    pub fn start(config: &RaffleConfig) -> Result<Self> {
        Ok(Self::with_log(SessionLog::create(config, Local::now())?))
    }

    pub fn with_log(log: SessionLog) -> Self {
        Session {
            exclusions: ExclusionSet::default(),
            history: Vec::new(),
            log,
        }
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Run a draw against this session's exclusions and remember it.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        source: &str,
        column: &str,
        pool: &CandidatePool,
        count: usize,
        exclude: bool,
        rng: &mut R,
    ) -> Result<&DrawRecord, DrawError> {
        let winners = draw::draw(pool, count, &mut self.exclusions, exclude, rng)?;
        log::info!("Drew {winners:?} from column '{column}' of {source}");
        self.history.push(DrawRecord {
            number: self.history.len() + 1,
            at: Local::now(),
            source: source.to_string(),
            column: column.to_string(),
            requested: count,
            excluded_previous: exclude,
            winners,
        });
        Ok(&self.history[self.history.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn config(dir: &Path) -> RaffleConfig {
        RaffleConfig {
            results_dir: dir.join("resultados"),
            ..RaffleConfig::default()
        }
    }

    fn record(number: usize, winners: &[&str]) -> DrawRecord {
        DrawRecord {
            number,
            at: Local
                .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
                .single()
                .expect("valid local time"),
            source: "names.csv".into(),
            column: "Name".into(),
            requested: winners.len(),
            excluded_previous: false,
            winners: winners.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn log_entry_format_is_stable() {
        let text = record(1, &["Ana", "Caro"]).to_log_entry();
        assert_eq!(
            text,
            "[2024-05-01 10:00:00] draw #1\n\
             file: names.csv\n\
             column: Name\n\
             requested: 2\n\
             excluded previous winners: no\n\
             winners:\n  1. Ana\n  2. Caro\n\n"
        );
    }

    #[test]
    fn create_makes_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = config(dir.path());
        let log = SessionLog::create(&cfg, Local::now()).expect("create");
        assert!(cfg.results_dir.is_dir());
        assert!(log.path().starts_with(&cfg.results_dir));
        assert!(!log.path().exists());
    }

    #[test]
    fn create_fails_when_directory_cannot_be_made() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").expect("write file");
        let cfg = RaffleConfig {
            results_dir: blocker.join("resultados"),
            ..RaffleConfig::default()
        };

        let err = SessionLog::create(&cfg, Local::now()).expect_err("parent is a file");
        assert!(format!("{err:#}").contains("creating results directory"));
        assert!(Session::start(&cfg).is_err());
    }

    #[test]
    fn append_keeps_earlier_content() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log = SessionLog::create(&config(dir.path()), Local::now()).expect("create");
        fs::write(log.path(), "existing\n").expect("seed file");

        log.append(&record(1, &["Ana"])).expect("first");
        log.append(&record(2, &["Beto"])).expect("second");

        let text = fs::read_to_string(log.path()).expect("read");
        assert!(text.starts_with("existing\n"));
        let first = text.find("draw #1").expect("first entry");
        let second = text.find("draw #2").expect("second entry");
        assert!(first < second);
    }

    #[test]
    fn session_draw_tracks_history_and_exclusions() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = Session::start(&config(dir.path())).expect("start");
        let pool = CandidatePool::new(["Ana", "Beto", "Caro", "Dana"]);
        let mut rng = StdRng::seed_from_u64(9);

        let winners = session
            .draw("names.csv", "Name", &pool, 2, false, &mut rng)
            .expect("draw")
            .winners
            .clone();
        assert!(winners.iter().all(|w| session.exclusions().contains(w)));

        let err = session
            .draw("names.csv", "Name", &pool, 3, true, &mut rng)
            .expect_err("only two left");
        assert_eq!(
            err,
            DrawError::Shortfall {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].number, 1);
    }
}
