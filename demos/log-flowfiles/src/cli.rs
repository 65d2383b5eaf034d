#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(arg_required_else_help = true)]
pub struct Args {
    /// Files to log; each one becomes a flowfile
    #[clap(value_name = "FILE", required = true)]
    pub files: Vec<std::path::PathBuf>,

    /// Path to the JSON log configuration document (can also be set via FLOWFILE_LOG_CONFIG env var)
    #[clap(long, env = "FLOWFILE_LOG_CONFIG")]
    pub log_config: Option<std::path::PathBuf>,

    /// Severity used for every line: info or error
    #[clap(long = "type", default_value = "error")]
    pub severity: String,

    /// Prefix printed in brackets before each line
    #[clap(long)]
    pub prefix: Option<String>,

    /// flowfile-content, flowfile-attribute or flowfile-content+flowfile-attribute
    #[clap(long, default_value = "flowfile-content")]
    pub source: String,

    /// Comma-separated attribute names to log with flowfile-content
    #[clap(long)]
    pub attributes: Option<String>,

    /// Extra attribute added to every flowfile, as key=value
    #[clap(short = 'a', long = "attribute", value_parser = parse_attribute)]
    pub extra_attributes: Vec<(String, String)>,

    /// Enable verbose informational messages.
    #[clap(long)]
    pub verbose: bool,
}

fn parse_attribute(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

/// Used when no log configuration document is given.
pub const DEFAULT_LOG_CONFIG: &str = r#"{"appenders":[{"type":"console","target":"stdout"}]}"#;
