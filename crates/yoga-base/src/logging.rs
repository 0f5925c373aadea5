use {
    log::{LevelFilter, Log, Metadata, Record},
    std::{
        fs::{self, File, OpenOptions},
        io::Write,
        path::{Path, PathBuf},
        sync::Mutex,
        time::{SystemTime, UNIX_EPOCH},
    },
};

/// Where log lines go and how verbose they are.
#[derive(Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// Maximum level that reaches the backend.
    pub level: LevelFilter,
    /// Directory for day-named log files. `None` logs to stdout.
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

/// Debug in debug builds, Info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Writes every record to stdout.
pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", format_line(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Appends records to `<dir>/YYYY-MM-DD.log`, switching files when the UTC day changes.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

fn open_day_file(dir: &Path, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", date)))
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)?;
        Ok(Self {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let today = format_today();
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(file) => {
                    state.file = file;
                    state.current_date = today;
                }
                // keep writing to the previous day's file
                Err(error) => eprintln!("failed to roll log file over to {}: {}", today, error),
            }
        }

        let line = format_line(record);
        if let Err(error) = writeln!(state.file, "{}", line) {
            eprintln!("failed to write to log file: {}", error);
            eprintln!("{}", line);
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

/// `timestamp [LEVEL] [thread:id] file:line - message`
pub fn format_line(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current UTC time as YYYY-MM-DDTHH:MM:SS.
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Current UTC date as YYYY-MM-DD.
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Days since the Unix epoch to (year, month, day).
/// Howard Hinnant's algorithm: http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Install the process-wide logger described by `config`.
///
/// Only the first call in a process installs a logger; later calls are ignored.
/// Fails when the log directory cannot be created or opened.
pub fn init_logger(config: &LogConfig) -> std::io::Result<()> {
    let installed = match &config.dir {
        None => {
            static LOGGER: StdoutLogger = StdoutLogger;
            log::set_logger(&LOGGER).is_ok()
        }
        // leaked once; set_logger needs a 'static reference
        Some(dir) => log::set_logger(Box::leak(Box::new(FileLogger::new(dir)?))).is_ok(),
    };
    if installed {
        log::set_max_level(config.level);
    }
    Ok(())
}
