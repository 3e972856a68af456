//! CLI entry point for heft

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use heft::{Mode, ScanConfig, print_json, print_summary, run};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    use std::io::IsTerminal;

    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

/// Scan strategy selection
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ModeArg {
    /// Depth-first scan on a single thread
    Sequential,
    /// Fan out over files and subdirectories on a worker pool
    Parallel,
    /// Run both strategies back-to-back and compare elapsed times
    #[default]
    Both,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => Mode::Sequential,
            ModeArg::Parallel => Mode::Parallel,
            ModeArg::Both => Mode::Both,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "heft")]
#[command(about = "Weighs a directory tree: total size, file and folder counts, image share")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Which scan strategy to run
    #[arg(short = 'm', long = "mode", value_name = "MODE", default_value = "both")]
    mode: ModeArg,

    /// Number of worker threads for the parallel scan (0 = auto-detect)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        eprintln!(
            "heft: cannot access '{}': No such directory",
            args.path.display()
        );
        process::exit(1);
    }

    let config = ScanConfig {
        worker_threads: args.jobs,
        ignore_patterns: args.ignore.clone(),
    };

    let runs = match run(&root, args.mode.into(), &config) {
        Ok(runs) => runs,
        Err(e) => {
            eprintln!("heft: cannot scan '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&runs)
    } else {
        print_summary(&runs, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("heft: error writing output: {}", e);
        process::exit(1);
    }
}
