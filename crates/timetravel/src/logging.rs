//! File logging for the driver
//!
//! Everything goes to `timetravel.log` in the data directory so the prompt
//! on stdout stays clean. The file is cut back to its newest lines at
//! startup once it passes [`ROTATE_AT_BYTES`].

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "timetravel.log";

/// Size at which the log is trimmed on the next startup
pub const ROTATE_AT_BYTES: usize = 2 * 1024 * 1024;
/// Newest bytes retained by a trim
pub const RETAIN_BYTES: usize = 512 * 1024;

const TRIM_MARKER: &[u8] = b"--- log rotated ---\n";

/// Cut `log_path` down to its newest whole lines once it is larger than
/// `ROTATE_AT_BYTES`. Returns whether anything was removed.
pub(crate) fn trim_log(log_path: &Path) -> io::Result<bool> {
    let contents = match fs::read(log_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if contents.len() <= ROTATE_AT_BYTES {
        return Ok(false);
    }

    let tail = &contents[contents.len() - RETAIN_BYTES..];
    let first_full_line = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |newline| newline + 1);

    let mut trimmed = Vec::with_capacity(TRIM_MARKER.len() + tail.len());
    trimmed.extend_from_slice(TRIM_MARKER);
    trimmed.extend_from_slice(&tail[first_full_line..]);
    fs::write(log_path, trimmed)?;

    Ok(true)
}

/// Append-mode log file shared by every event the subscriber writes
#[derive(Clone)]
struct SharedLogFile(Arc<Mutex<File>>);

impl Write for SharedLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Send `tracing` output to `{data_dir}/timetravel.log`.
///
/// `RUST_LOG` wins over `level`. Without it the driver logs at `level` and
/// the engine only reports warnings such as missing housing schedule years.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let trimmed = trim_log(&log_path).unwrap_or_else(|e| {
        eprintln!("Warning: could not trim {}: {e}", log_path.display());
        false
    });

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("timetravel={level},timetravel_core=warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(SharedLogFile(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), trimmed, "logging to file");
    Ok(())
}
