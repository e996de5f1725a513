use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::field::mapping::ComponentMapping;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "smart-field",
    version,
    about = "Render schema-described form fields to HTML"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: smart-field.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append render trace events (JSON lines) to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one field descriptor to HTML
    Render {
        /// Field descriptor file (YAML, or JSON with a .json extension)
        #[arg(long)]
        field: String,

        /// Custom layout tree file replacing the default layout
        #[arg(long)]
        layout: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the effective component mapping as YAML
    Mapping,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `smart-field.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub components: ComponentMapping,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

pub const DEFAULT_CONFIG_PATH: &str = "smart-field.yaml";

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content),
        Err(_) => AppConfig::default(),
    }
}

pub fn parse_config(content: &str) -> AppConfig {
    serde_yaml::from_str(content).unwrap_or_default()
}

/// Trace path: CLI flag wins over the config file.
pub fn resolve_trace_path<'a>(cli: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli.or(config.trace.path.as_deref())
}
