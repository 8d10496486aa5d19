use std::path::PathBuf;

use chrono::{DateTime, Local};

/// Timestamp layout used in session file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Where draw results are written.
#[derive(Debug, Clone, PartialEq)]
pub struct RaffleConfig {
    /// Directory holding one results file per run.
    pub results_dir: PathBuf,
    /// File name prefix, followed by `_<start timestamp>.txt`.
    pub file_prefix: String,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("resultados"),
            file_prefix: "sorteo".to_string(),
        }
    }
}

impl RaffleConfig {
    /// Results file path for a run started at `started`.
    pub fn session_path(&self, started: &DateTime<Local>) -> PathBuf {
        self.results_dir.join(format!(
            "{}_{}.txt",
            self.file_prefix,
            started.format(FILE_TIMESTAMP_FORMAT)
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn session_path_uses_start_time() {
        let started = Local
            .with_ymd_and_hms(2024, 5, 1, 9, 3, 7)
            .single()
            .expect("valid local time");
        let path = RaffleConfig::default().session_path(&started);
        assert_eq!(path, PathBuf::from("resultados/sorteo_2024-05-01_09-03-07.txt"));
    }
}
