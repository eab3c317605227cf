//! Fix command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{collect_files, FileFilter};
use crate::output::{
    JsonFormatter, OutputFormat, ReportFormatter, RunHeader, TextFormatter,
};
use crate::processing::{process_files, Mode, Summary};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the fix command
#[derive(Debug, Args)]
pub struct FixArgs {
    /// Files, directories or glob patterns to scan
    #[arg(short, long = "path", value_name = "PATH/PATTERN", num_args = 1..)]
    pub paths: Vec<String>,

    /// Skip files whose path contains this substring
    #[arg(short = 'x', long, value_name = "SUBSTRING", num_args = 1..)]
    pub exclude: Vec<String>,

    /// File extensions to process (without the dot)
    #[arg(short, long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Vec<String>,

    /// Show the changes without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Like --dry-run, but fail if any file needs changes
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (default: ./jaspace.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = number of CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output and per-line diffs
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line arguments merged over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Paths and patterns to scan
    pub paths: Vec<String>,
    /// Exclusion substrings
    pub exclude: Vec<String>,
    /// Accepted extensions
    pub extensions: Vec<String>,
    /// Apply, dry run or check
    pub mode: Mode,
    /// Report format
    pub format: OutputFormat,
    /// Print per-line diffs
    pub show_diff: bool,
    /// Print skipped files
    pub show_skipped: bool,
    /// Worker threads, already resolved from 0 = auto
    pub threads: usize,
}

fn prefer(cli: &[String], config: Vec<String>) -> Vec<String> {
    if cli.is_empty() {
        config
    } else {
        cli.to_vec()
    }
}

impl FixArgs {
    /// Execute the fix command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting comment spacing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.resolve(config);
        log::debug!("Settings: {:?}", settings);

        let filter = FileFilter::new(&settings.extensions, &settings.exclude);
        let files = collect_files(&settings.paths, &filter)?;

        let mut formatter: Box<dyn ReportFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout(
                settings.show_diff,
                settings.show_skipped,
            )),
            OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
        };

        formatter.begin(&RunHeader {
            mode: settings.mode,
            paths: settings.paths.clone(),
            exclude: settings.exclude.clone(),
            file_count: files.len(),
        })?;

        let mut progress =
            ProgressReporter::new(self.quiet || settings.format == OutputFormat::Json);
        progress.init_files(files.len() as u64);
        let outcomes = process_files(&files, settings.mode, settings.threads, &progress)?;
        progress.finish();

        for outcome in &outcomes {
            formatter.file(outcome)?;
        }
        let summary = Summary::from_outcomes(&outcomes);
        formatter.finish(&summary)?;

        log::info!(
            "Scanned {} files, {} changed",
            summary.files_scanned,
            summary.files_changed
        );

        if summary.files_failed > 0 {
            return Err(CliError::WriteFailed(summary.files_failed).into());
        }
        if settings.mode == Mode::Check && summary.files_changed > 0 {
            return Err(CliError::ChangesPending(summary.files_changed).into());
        }

        Ok(())
    }

    /// Merge arguments over a loaded config
    pub fn resolve(&self, config: CliConfig) -> RunSettings {
        let mode = if self.check {
            Mode::Check
        } else if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Apply
        };

        let show_diff = !self.quiet
            && (!mode.writes() || self.verbose > 0 || config.output.show_diff);

        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };

        RunSettings {
            paths: prefer(&self.paths, config.discovery.paths),
            exclude: prefer(&self.exclude, config.discovery.exclude),
            extensions: prefer(&self.extensions, config.discovery.extensions),
            mode,
            format: self.format.unwrap_or(config.output.format),
            show_diff,
            show_skipped: !self.quiet && self.verbose > 0,
            threads,
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiscoveryConfig, OutputConfig, PerformanceConfig};

    fn args() -> FixArgs {
        FixArgs {
            paths: Vec::new(),
            exclude: Vec::new(),
            extensions: Vec::new(),
            dry_run: false,
            check: false,
            format: None,
            config: None,
            threads: None,
            quiet: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_come_from_config() {
        let settings = args().resolve(CliConfig::default());
        assert_eq!(settings.paths, vec!["."]);
        assert_eq!(settings.exclude, vec!["externals"]);
        assert_eq!(settings.extensions, vec!["cpp", "h"]);
        assert_eq!(settings.mode, Mode::Apply);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.show_diff);
        assert!(!settings.show_skipped);
        assert!(settings.threads >= 1);
    }

    #[test]
    fn test_arguments_override_config() {
        let mut fix = args();
        fix.paths = vec!["src".to_string()];
        fix.extensions = vec!["cc".to_string()];
        fix.format = Some(OutputFormat::Json);
        fix.threads = Some(2);

        let config = CliConfig {
            discovery: DiscoveryConfig {
                paths: vec!["engine".to_string()],
                exclude: vec!["third_party".to_string()],
                extensions: vec!["hpp".to_string()],
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_diff: false,
            },
            performance: PerformanceConfig { worker_threads: 8 },
        };

        let settings = fix.resolve(config);
        assert_eq!(settings.paths, vec!["src"]);
        assert_eq!(settings.exclude, vec!["third_party"]);
        assert_eq!(settings.extensions, vec!["cc"]);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.threads, 2);
    }

    #[test]
    fn test_modes_and_diff_visibility() {
        let mut fix = args();
        fix.dry_run = true;
        let settings = fix.resolve(CliConfig::default());
        assert_eq!(settings.mode, Mode::DryRun);
        assert!(settings.show_diff);

        let mut fix = args();
        fix.check = true;
        fix.quiet = true;
        let settings = fix.resolve(CliConfig::default());
        assert_eq!(settings.mode, Mode::Check);
        assert!(!settings.show_diff);

        let mut fix = args();
        fix.verbose = 1;
        let settings = fix.resolve(CliConfig::default());
        assert_eq!(settings.mode, Mode::Apply);
        assert!(settings.show_diff);
        assert!(settings.show_skipped);
    }

    #[test]
    fn test_config_show_diff_in_apply_mode() {
        let mut config = CliConfig::default();
        config.output.show_diff = true;
        assert!(args().resolve(config).show_diff);
    }

    fn run_on(dir: &std::path::Path, check: bool) -> Result<()> {
        let mut fix = args();
        fix.paths = vec![dir.to_string_lossy().to_string()];
        fix.check = check;
        fix.quiet = true;
        fix.threads = Some(1);
        fix.execute()
    }

    #[test]
    fn test_execute_fails_on_write_error() {
        use std::fs;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("locked.cpp");
        fs::write(&path, "int x; // のfar\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            // Running as root, permissions are not enforced
            return;
        }

        let err = run_on(temp_dir.path(), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::WriteFailed(1))
        ));
        assert_eq!(err.to_string(), "Failed to write 1 file(s)");
    }

    #[test]
    fn test_execute_check_reports_pending_changes() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.cpp"), "int x; // のfar\n").unwrap();

        let err = run_on(temp_dir.path(), true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ChangesPending(1))
        ));
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("a.cpp")).unwrap(),
            "int x; // のfar\n"
        );
    }

    #[test]
    fn test_fix_args_debug() {
        let debug_str = format!("{:?}", args());
        assert!(debug_str.contains("FixArgs"));
        assert!(debug_str.contains("dry_run"));
    }
}
