//! Demo binary: an interactive item strip in the terminal.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use whirl::config::loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides,
};
use whirl::model::AppError;

/// Interactive strip viewer driven by the whirl position controller.
#[derive(Parser, Debug)]
#[command(name = "whirl")]
#[command(version)]
#[command(about = "Terminal demo for the whirl strip position controller")]
pub struct Args {
    /// Path to a JSON strip definition (reads stdin if piped)
    pub file: Option<PathBuf>,

    /// Generate a placeholder strip with this many items
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Items shown per view
    #[arg(short, long)]
    pub items: Option<usize>,

    /// Loop the strip seamlessly through clones
    #[arg(long = "loop")]
    pub looping: bool,

    /// Center the current item in the view
    #[arg(long)]
    pub center: bool,

    /// Rewind to the start instead of looping
    #[arg(long)]
    pub rewind: bool,

    /// Right-to-left direction
    #[arg(long)]
    pub rtl: bool,

    /// Gap between items in pixels
    #[arg(long)]
    pub margin: Option<f64>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults -> config file -> env vars -> CLI args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);

        let cli = CliOverrides {
            items: args.items,
            looping: args.looping.then_some(true),
            center: args.center.then_some(true),
            rewind: args.rewind.then_some(true),
            rtl: args.rtl.then_some(true),
            margin: args.margin,
        };
        apply_cli_overrides(with_env, cli)
    };

    whirl::logging::init(&config.log_file_path)?;

    info!(options = ?config.options, "configuration resolved");

    let items = whirl::source::load_strip(args.file.clone(), args.count)?;

    whirl::view::run_with_strip(config.options, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_exits_cleanly() {
        let err = Args::try_parse_from(["whirl", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_exits_cleanly() {
        let err = Args::try_parse_from(["whirl", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn defaults_leave_overrides_unset() {
        let args = Args::parse_from(["whirl"]);
        assert!(args.file.is_none());
        assert!(args.count.is_none());
        assert!(args.items.is_none());
        assert!(!args.looping);
        assert!(!args.rtl);
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "whirl", "--count", "8", "--loop", "--center", "--items", "5", "--margin", "12.5",
        ]);
        assert_eq!(args.count, Some(8));
        assert!(args.looping);
        assert!(args.center);
        assert_eq!(args.items, Some(5));
        assert_eq!(args.margin, Some(12.5));
    }
}
