/// Appenders backing a document-configured sink
use crate::error::ConfigurationError;
use crate::sink::document::{AppenderSpec, ConsoleTarget};
use crate::sink::LogSeverity;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use syslog::{Facility, Formatter3164, LoggerBackend};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A single destination. Errors are plain strings; the sink attaches the
/// appender name when it turns them into `SinkEmitError`.
pub(crate) trait Appender: Send + Sync {
    fn name(&self) -> String;

    fn append(&self, severity: LogSeverity, message: &str) -> Result<(), String>;

    fn flush(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Renders a line from a pattern with `{d}`, `{l}` and `{m}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pattern: String,
}

impl Layout {
    pub(crate) fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    pub(crate) fn render(&self, severity: LogSeverity, message: &str) -> String {
        let mut out = String::with_capacity(self.pattern.len() + message.len());
        let mut rest = self.pattern.as_str();

        while let Some(start) = rest.find('{') {
            let (head, tail) = rest.split_at(start);
            out.push_str(head);

            if let Some(after) = tail.strip_prefix("{d}") {
                out.push_str(&Local::now().format(TIMESTAMP_FORMAT).to_string());
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{l}") {
                out.push_str(&severity.to_string());
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{m}") {
                out.push_str(message);
                rest = after;
            } else {
                out.push('{');
                rest = tail.strip_prefix('{').unwrap_or_default();
            }
        }

        out.push_str(rest);
        out
    }
}

pub(crate) fn build_appender(
    spec: &AppenderSpec,
    layout: &Layout,
) -> Result<Box<dyn Appender>, ConfigurationError> {
    match spec {
        AppenderSpec::Console { target } => Ok(Box::new(ConsoleAppender {
            target: *target,
            layout: layout.clone(),
        })),
        AppenderSpec::File { path, append } => {
            let appender = FileAppender::open(path, *append, layout.clone()).map_err(|reason| {
                ConfigurationError::AppenderInit {
                    appender: format!("file:{}", path.display()),
                    reason,
                }
            })?;
            Ok(Box::new(appender))
        }
        AppenderSpec::Syslog { facility, remote } => {
            let init_err = |reason| ConfigurationError::AppenderInit {
                appender: "syslog".to_string(),
                reason,
            };
            let facility = parse_facility(facility).map_err(init_err)?;
            let appender = SyslogAppender::connect(facility, remote.as_deref()).map_err(init_err)?;
            Ok(Box::new(appender))
        }
    }
}

pub(crate) struct ConsoleAppender {
    target: ConsoleTarget,
    layout: Layout,
}

impl Appender for ConsoleAppender {
    fn name(&self) -> String {
        match self.target {
            ConsoleTarget::Stdout => "console:stdout".to_string(),
            ConsoleTarget::Stderr => "console:stderr".to_string(),
        }
    }

    fn append(&self, severity: LogSeverity, message: &str) -> Result<(), String> {
        let line = self.layout.render(severity, message);
        let result = match self.target {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{line}"),
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
        };
        result.map_err(|e| format!("Failed to write to console: {e}"))
    }

    fn flush(&self) -> Result<(), String> {
        let result = match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush(),
            ConsoleTarget::Stderr => std::io::stderr().flush(),
        };
        result.map_err(|e| format!("Failed to flush console: {e}"))
    }
}

pub(crate) struct FileAppender {
    log_file: Mutex<File>,
    path: PathBuf,
    layout: Layout,
}

impl FileAppender {
    pub(crate) fn open(path: &Path, append: bool, layout: Layout) -> Result<Self, String> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options
            .open(path)
            .map_err(|e| format!("Failed to open log file: {e}"))?;

        Ok(Self {
            log_file: Mutex::new(file),
            path: path.to_path_buf(),
            layout,
        })
    }
}

impl Appender for FileAppender {
    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn append(&self, severity: LogSeverity, message: &str) -> Result<(), String> {
        let formatted = format!("{}\n", self.layout.render(severity, message));

        let mut file = self
            .log_file
            .lock()
            .map_err(|e| format!("Failed to lock file: {e}"))?;

        file.write_all(formatted.as_bytes())
            .map_err(|e| format!("Failed to write to log file: {e}"))?;

        file.flush()
            .map_err(|e| format!("Failed to flush log file: {e}"))?;

        Ok(())
    }

    fn flush(&self) -> Result<(), String> {
        let mut file = self
            .log_file
            .lock()
            .map_err(|e| format!("Failed to lock file: {e}"))?;

        file.flush()
            .map_err(|e| format!("Failed to flush log file: {e}"))
    }
}

/// Syslog carries its own timestamp and priority, so only the message is sent.
pub(crate) struct SyslogAppender {
    logger: Mutex<syslog::Logger<LoggerBackend, Formatter3164>>,
}

impl SyslogAppender {
    pub(crate) fn connect(facility: Facility, remote: Option<&str>) -> Result<Self, String> {
        let formatter = Formatter3164 {
            facility,
            hostname: None,
            process: "flowfile-logger".to_string(),
            pid: std::process::id(),
        };

        let logger = if let Some(addr) = remote {
            syslog::udp(formatter, "0.0.0.0:0", addr)
                .map_err(|e| format!("Failed to create remote syslog logger: {e}"))?
        } else {
            syslog::unix(formatter)
                .map_err(|e| format!("Failed to create local syslog logger: {e}"))?
        };

        Ok(Self {
            logger: Mutex::new(logger),
        })
    }
}

impl Appender for SyslogAppender {
    fn name(&self) -> String {
        "syslog".to_string()
    }

    fn append(&self, severity: LogSeverity, message: &str) -> Result<(), String> {
        let mut logger = self
            .logger
            .lock()
            .map_err(|e| format!("Failed to lock logger: {e}"))?;

        match severity {
            LogSeverity::Info => logger
                .info(message)
                .map_err(|e| format!("Failed to log info: {e}")),
            LogSeverity::Error => logger
                .err(message)
                .map_err(|e| format!("Failed to log error: {e}")),
        }
    }
}

pub(crate) fn parse_facility(s: &str) -> Result<Facility, String> {
    match s.to_lowercase().as_str() {
        "kern" => Ok(Facility::LOG_KERN),
        "user" => Ok(Facility::LOG_USER),
        "mail" => Ok(Facility::LOG_MAIL),
        "daemon" => Ok(Facility::LOG_DAEMON),
        "auth" => Ok(Facility::LOG_AUTH),
        "syslog" => Ok(Facility::LOG_SYSLOG),
        "lpr" => Ok(Facility::LOG_LPR),
        "news" => Ok(Facility::LOG_NEWS),
        "uucp" => Ok(Facility::LOG_UUCP),
        "cron" => Ok(Facility::LOG_CRON),
        "authpriv" => Ok(Facility::LOG_AUTHPRIV),
        "ftp" => Ok(Facility::LOG_FTP),
        "local0" => Ok(Facility::LOG_LOCAL0),
        "local1" => Ok(Facility::LOG_LOCAL1),
        "local2" => Ok(Facility::LOG_LOCAL2),
        "local3" => Ok(Facility::LOG_LOCAL3),
        "local4" => Ok(Facility::LOG_LOCAL4),
        "local5" => Ok(Facility::LOG_LOCAL5),
        "local6" => Ok(Facility::LOG_LOCAL6),
        "local7" => Ok(Facility::LOG_LOCAL7),
        _ => Err(format!("Unknown syslog facility: {s}")),
    }
}
