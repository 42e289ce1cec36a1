use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use topodiff_view::ColorMode;

#[derive(Parser)]
#[command(
    name = "topodiff",
    about = "Structural diff of multi-layer network topologies",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to color text output (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Spaces per nesting level (overrides the config file)
    #[arg(long, global = true)]
    pub indent: Option<usize>,

    /// View configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff two topology documents
    Diff(DiffArgs),
    /// Render a saved diff result
    Show(ShowArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Left-hand (old) topology document
    pub lhs: PathBuf,
    /// Right-hand (new) topology document
    pub rhs: PathBuf,
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
    /// Print per-classification counts after the result
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Annotated document written by `topodiff diff --format json`
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["topodiff", "diff", "a.json", "b.json"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.lhs, PathBuf::from("a.json"));
            assert_eq!(args.rhs, PathBuf::from("b.json"));
            assert!(matches!(args.format, OutputFormat::Text));
            assert!(!args.summary);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_json_summary() {
        let cli = Cli::try_parse_from([
            "topodiff", "diff", "a.json", "b.json", "--format", "json", "--summary",
        ])
        .unwrap();
        if let Command::Diff(args) = cli.command {
            assert!(matches!(args.format, OutputFormat::Json));
            assert!(args.summary);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_requires_two_paths() {
        assert!(Cli::try_parse_from(["topodiff", "diff", "a.json"]).is_err());
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["topodiff", "show", "result.json"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("result.json"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "topodiff", "show", "r.json", "--verbose", "--color", "never", "--indent", "4",
            "--config", "view.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, Some(ColorChoice::Never));
        assert_eq!(cli.indent, Some(4));
        assert_eq!(cli.config, Some(PathBuf::from("view.toml")));
    }

    #[test]
    fn parse_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["topodiff", "--color", "rainbow", "show", "r.json"]).is_err());
    }

    #[test]
    fn color_choice_maps_to_mode() {
        assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
        assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    }
}
