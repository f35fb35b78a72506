//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for casewalk
#[derive(Parser, Debug)]
#[command(name = "casewalk")]
#[command(version, about = "Interactive case-study learning modules in the terminal")]
#[command(long_about = r#"
Casewalk runs a markdown-driven case-study learning module: narrative
content with inline questions, a guided step-by-step walk or free
section jumping, a response tracker, and a JSON export of answers.

Content layout (under --content-dir, default ./content):
  items.json                       question catalog
  parts/part_0.md .. part_d.md     narrative parts
  appendices/appendix_1.md ..      optional appendices

Configuration files are loaded from (in priority order):
1. CASEWALK_* environment variables
2. --config <path>     Explicit config file
3. ./casewalk.toml     Project-level config
4. ~/.config/casewalk/config.toml   Global config

Example:
  casewalk
  casewalk --section "Part A"
  casewalk --export responses.json
"#)]
pub struct Cli {
    /// Render a single section and exit (e.g. "Part A", "appendix 2")
    #[arg(short, long, value_name = "SECTION")]
    pub section: Option<String>,

    /// Content directory holding catalog and markdown
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Catalog file path (defaults to <content-dir>/items.json)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Start in jump mode instead of guided mode
    #[arg(long)]
    pub jump: bool,

    /// Include appendix steps in the guided walk
    #[arg(long)]
    pub appendices: bool,

    /// Export responses to PATH and exit ("-" for stdout)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
