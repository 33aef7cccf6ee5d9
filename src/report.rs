//! Human-readable output: one line per sample and a final summary table.
//!
//! The `format_*` functions build the text; the `print_*` wrappers write it
//! to stdout.

use crate::config::BenchConfig;
use crate::runner::{Kernel, Sample, Summary};

const RULE_WIDTH: usize = 72;

pub fn format_header(config: &BenchConfig) -> String {
    format!(
        "=== Tiled Matrix Multiplication Benchmark ===\n\
         {}×{} u64, {} trial(s), tile power {} (tiles 1..={})\n",
        config.size,
        config.size,
        config.trials,
        config.max_power,
        config.max_tile()
    )
}

/// `Running matmul_naive        (1)  time: 0.123456s`
pub fn format_sample(sample: &Sample) -> String {
    let label = match sample.kernel {
        Kernel::Tiled(tile) => format!("  | {} tile {:>4}", sample.kernel.name(), tile),
        kernel => format!("Running {}", kernel.name()),
    };
    let mut line = format!(
        "{:<30} ({})  time: {:.6}s",
        label,
        sample.trial,
        sample.elapsed.as_secs_f64()
    );
    if let Some(mismatch) = &sample.mismatch {
        line.push_str(&format!("  ERROR: {}", mismatch));
    }
    line
}

pub fn format_summary(summary: &Summary) -> String {
    let baseline = summary.naive;
    let row = |kind: String, name: &str, avg: f64| {
        let speedup = if avg > 0.0 { baseline / avg } else { 0.0 };
        format!("{:<14} {:<22} {:>16.6} {:>9.2}×", kind, name, avg, speedup)
    };

    let mut lines = vec![
        String::new(),
        "=".repeat(RULE_WIDTH),
        format!(
            "SUMMARY ({} trial(s), {}×{})",
            summary.trials, summary.size, summary.size
        ),
        "=".repeat(RULE_WIDTH),
        format!(
            "{:<14} {:<22} {:>16} {:>10}",
            "Kind", "Kernel", "Avg time (s)", "Speedup"
        ),
        "-".repeat(RULE_WIDTH),
        row("[NORMAL]".into(), Kernel::Naive.name(), summary.naive),
        row("[TRANSPOSE]".into(), Kernel::Horizontal.name(), summary.horizontal),
    ];
    for &(tile, avg) in &summary.tiled {
        lines.push(row(format!("[TILING ({})]", tile), Kernel::Tiled(tile).name(), avg));
    }
    lines.push("=".repeat(RULE_WIDTH));

    if let Some((tile, avg)) = summary.best_tile() {
        lines.push(format!("Fastest tile size: {} ({:.6}s)", tile, avg));
    }
    lines.push(if summary.mismatches == 0 {
        "All results matched the naive baseline.".to_string()
    } else {
        format!(
            "{} result(s) did NOT match the naive baseline.",
            summary.mismatches
        )
    });

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn print_header(config: &BenchConfig) {
    println!("{}", format_header(config));
}

pub fn print_sample(sample: &Sample) {
    println!("{}", format_sample(sample));
}

pub fn print_summary(summary: &Summary) {
    print!("{}", format_summary(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::Mismatch;
    use std::time::Duration;

    fn summary(mismatches: usize) -> Summary {
        Summary {
            trials: 2,
            size: 8,
            naive: 2.0,
            horizontal: 1.0,
            tiled: vec![(1, 0.8), (2, 0.5)],
            mismatches,
        }
    }

    #[test]
    fn test_header() {
        let header = format_header(&BenchConfig::new(3, 4));
        assert!(header.contains("1024×1024"));
        assert!(header.contains("3 trial(s)"));
        assert!(header.contains("tiles 1..=16"));
    }

    #[test]
    fn test_sample_line() {
        let sample = Sample {
            trial: 2,
            kernel: Kernel::Tiled(8),
            elapsed: Duration::from_millis(250),
            mismatch: None,
        };
        let line = format_sample(&sample);
        assert!(line.contains("matmul_tiled tile    8"));
        assert!(line.contains("(2)"));
        assert!(line.contains("0.250000s"));
        assert!(!line.contains("ERROR"));
    }

    #[test]
    fn test_sample_line_with_mismatch() {
        let sample = Sample {
            trial: 1,
            kernel: Kernel::Horizontal,
            elapsed: Duration::from_secs(1),
            mismatch: Some(Mismatch::Value {
                row: 0,
                col: 0,
                expected: 1,
                actual: 2,
            }),
        };
        let line = format_sample(&sample);
        assert!(line.starts_with("Running matmul_horizontal"));
        assert!(line.contains("ERROR: mismatch at (0, 0)"));
    }

    #[test]
    fn test_summary_table() {
        let text = format_summary(&summary(0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(RULE_WIDTH));
        assert!(lines[2].starts_with("SUMMARY (2 trial(s), 8×8)"));
        assert!(lines[6].starts_with("[NORMAL]"));
        assert!(lines[8].starts_with("[TILING (1)]"));
        assert!(text.ends_with("baseline.\n"));
        assert!(text.contains("[NORMAL]"));
        assert!(text.contains("[TRANSPOSE]"));
        assert!(text.contains("[TILING (1)]"));
        assert!(text.contains("[TILING (2)]"));
        assert!(text.contains("2.000000"));
        assert!(text.contains("4.00×"));
        assert!(text.contains("Fastest tile size: 2"));
        assert!(text.contains("All results matched"));

        assert!(format_summary(&summary(3)).contains("3 result(s) did NOT match"));
    }
}
