//! Human-readable scan summary

use std::io::{self, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::{Strategy, TimedScan};

/// Print one summary block per scan to stdout with optional color.
///
/// When both strategies ran, a closing line compares their elapsed times.
pub fn print_summary(runs: &[TimedScan], use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    let mut accent = ColorSpec::new();
    accent.set_fg(Some(Color::Cyan));

    for run in runs {
        let title = match run.strategy {
            Strategy::Sequential => "Sequential scan",
            Strategy::Parallel => "Parallel scan",
        };
        stdout.set_color(&bold)?;
        writeln!(stdout, "{}", title)?;
        stdout.reset()?;
        writeln!(stdout, "───────────────")?;

        let r = run.report;
        write!(stdout, "Total size:  ")?;
        stdout.set_color(&accent)?;
        write!(stdout, "{:>10}", format_size(r.total_bytes))?;
        stdout.reset()?;
        writeln!(stdout, "  ({} bytes)", format_number(r.total_bytes))?;

        writeln!(stdout, "Files:       {:>10}", format_number(r.file_count))?;
        writeln!(stdout, "Folders:     {:>10}", format_number(r.folder_count))?;
        writeln!(
            stdout,
            "Images:      {:>10}  ({})",
            format_number(r.image_count),
            format_size(r.image_bytes)
        )?;
        if r.skipped > 0 {
            writeln!(
                stdout,
                "Skipped:     {:>10}  (unreadable entries)",
                format_number(r.skipped)
            )?;
        }
        writeln!(stdout, "Elapsed:     {:>10}", format_elapsed(run.elapsed))?;
        writeln!(stdout)?;
    }

    if let Some(line) = comparison_line(runs) {
        stdout.set_color(&bold)?;
        writeln!(stdout, "{}", line)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Compare elapsed times when both strategies are present.
fn comparison_line(runs: &[TimedScan]) -> Option<String> {
    let parallel = runs.iter().find(|r| r.strategy == Strategy::Parallel)?;
    let sequential = runs.iter().find(|r| r.strategy == Strategy::Sequential)?;

    let par = parallel.elapsed.as_secs_f64();
    let seq = sequential.elapsed.as_secs_f64();
    if par <= 0.0 || seq <= 0.0 {
        return None;
    }

    Some(if par <= seq {
        format!("Parallel was {:.1}x faster than sequential", seq / par)
    } else {
        format!("Sequential was {:.1}x faster than parallel", par / seq)
    })
}

/// Render a duration without sub-millisecond noise.
fn format_elapsed(elapsed: Duration) -> String {
    let rounded = if elapsed.as_secs() > 0 {
        Duration::from_millis(elapsed.as_millis() as u64)
    } else {
        Duration::from_micros(elapsed.as_micros() as u64)
    };
    humantime::format_duration(rounded).to_string()
}

/// Format a byte count in human units.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a number with thousand separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, *c);
    }

    result
}
