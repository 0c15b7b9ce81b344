//! Command-line interface for javadoc-gaps.

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analysis;
use crate::config::{self, Config};
use crate::detect::{self, Runner};
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Report public Java methods with missing or one-line Javadoc.
///
/// Scans a source tree, skips private members, trivial getters/setters and
/// methods inherited from a known supertype, and writes a report listing
/// every remaining method whose Javadoc is absent or a single line.
#[derive(Parser)]
#[command(name = "javadoc-gaps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a source tree and write the gap report
    #[command(visible_alias = "check")]
    Scan(ScanArgs),
    /// Create a starter configuration file
    Init(InitArgs),
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Path to scan (directory or single .java file)
    pub path: PathBuf,

    /// Report file (default: javadoc_report.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format: text or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Glob pattern of paths to skip (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Maximum acceptable number of findings (exit non-zero if exceeded)
    #[arg(long)]
    pub max_findings: Option<usize>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "javadoc-gaps.yaml")]
    pub output: PathBuf,
}

/// Starter configuration written by `init`.
const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Load the config named on the command line, or a discovered one, or defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config::discover(),
    };

    match path {
        Some(p) => {
            debug!(config = %p.display(), "loading config");
            Config::parse_file(&p)
                .map_err(|e| anyhow::anyhow!("parsing config {}: {}", p.display(), e))
        }
        None => Ok(Config::default()),
    }
}

/// Apply command-line overrides on top of the file config.
fn merge_args(mut config: Config, args: &ScanArgs) -> Config {
    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }
    if let Some(format) = &args.format {
        config.format = Some(format.clone());
    }
    if let Some(max) = args.max_findings {
        config.max_findings = Some(max);
    }
    config.excluded_paths.extend(args.exclude.iter().cloned());
    config
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    let config = match load_config(args.config.as_deref()) {
        Ok(c) => merge_args(c, args),
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_ERROR);
    }

    let parser = match analysis::get_parser("java") {
        Some(p) => p,
        None => anyhow::bail!("no parser available for java"),
    };
    let excluded = config.excluded_globset()?;

    // Collect files to scan
    let files = match detect::discover_files(&args.path, parser.as_ref(), &excluded) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    info!(files = files.len(), root = %args.path.display(), "discovered source files");

    if files.is_empty() {
        eprintln!("Warning: no files to scan");
    }

    // Run detection
    let result = Runner::new(parser.as_ref()).run(&files);

    // Output results
    let output = config.output_path();
    let path_str = args.path.to_string_lossy().to_string();
    report::write_report(&output, config.get_format(), &path_str, &result)?;
    report::print_summary(&output, &result);

    // Return appropriate exit code
    match config.max_findings {
        Some(max) if result.total() > max => {
            eprintln!(
                "Error: {} findings exceed the maximum of {}",
                result.total(),
                max
            );
            Ok(EXIT_FAILED)
        }
        _ => Ok(EXIT_SUCCESS),
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize for your project", args.output.display());
    println!("  2. Run: javadoc-gaps scan src/main/java --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scan_args(path: &Path) -> ScanArgs {
        ScanArgs {
            path: path.to_path_buf(),
            output: None,
            config: None,
            format: None,
            exclude: vec![],
            max_findings: None,
        }
    }

    #[test]
    fn test_cli_parses_scan() {
        let cli = Cli::try_parse_from([
            "javadoc-gaps",
            "-vv",
            "check",
            "src",
            "--exclude",
            "**/gen/**",
            "-e",
            "legacy/**",
            "--max-findings",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.path, PathBuf::from("src"));
                assert_eq!(args.exclude.len(), 2);
                assert_eq!(args.max_findings, Some(3));
            }
            Commands::Init(_) => panic!("expected scan"),
        }
    }

    #[test]
    fn test_merge_args_overrides_config() {
        let config = Config {
            excluded_paths: vec!["a/**".to_string()],
            output: Some(PathBuf::from("from-file.txt")),
            format: Some("text".to_string()),
            max_findings: Some(10),
        };
        let mut args = scan_args(Path::new("src"));
        args.output = Some(PathBuf::from("from-cli.txt"));
        args.format = Some("json".to_string());
        args.exclude = vec!["b/**".to_string()];

        let merged = merge_args(config, &args);
        assert_eq!(merged.output_path(), PathBuf::from("from-cli.txt"));
        assert_eq!(merged.get_format(), "json");
        assert_eq!(merged.max_findings, Some(10));
        assert_eq!(merged.excluded_paths, vec!["a/**", "b/**"]);
    }

    #[test]
    fn test_run_scan_threshold() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        std::fs::create_dir(&src).unwrap();
        std::fs::write(
            src.join("Gap.java"),
            "public class Gap {\n    public void undocumented() {}\n}\n",
        )
        .unwrap();
        let config_path = temp.path().join("empty.yaml");
        std::fs::write(&config_path, "{}\n").unwrap();

        let mut args = scan_args(&src);
        args.config = Some(config_path);
        args.output = Some(temp.path().join("report.txt"));
        args.max_findings = Some(0);

        assert_eq!(run_scan(&args).unwrap(), EXIT_FAILED);
        let text = std::fs::read_to_string(temp.path().join("report.txt")).unwrap();
        assert!(text.contains("Missing Javadoc: "));

        args.max_findings = Some(1);
        assert_eq!(run_scan(&args).unwrap(), EXIT_SUCCESS);
    }

    #[test]
    fn test_run_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("empty.yaml");
        std::fs::write(&config_path, "{}\n").unwrap();

        let mut args = scan_args(&temp.path().join("absent"));
        args.config = Some(config_path);
        args.output = Some(temp.path().join("report.txt"));

        assert_eq!(run_scan(&args).unwrap(), EXIT_ERROR);
        assert!(!temp.path().join("report.txt").exists());
    }

    #[test]
    fn test_run_init_writes_template_once() {
        let temp = TempDir::new().unwrap();
        let args = InitArgs {
            output: temp.path().join("conf").join("javadoc-gaps.yaml"),
        };

        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
        let written = Config::parse_file(&args.output).unwrap();
        assert!(config::validate(&written).is_ok());

        assert_eq!(run_init(&args).unwrap(), EXIT_ERROR);
    }
}
