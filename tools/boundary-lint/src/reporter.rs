use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde_json::json;

use crate::checks::CheckResult;

pub fn print_header() {
    println!(
        "{}",
        "\n=== Import Boundaries & Naming ===\n".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_result(result: &CheckResult) {
    if result.passed {
        print!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            "clean".if_supports_color(Stdout, |s| s.green()),
        );
        println!();
    } else {
        print!(
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            result.name,
            format!("{} violation(s)", result.violations.len())
                .if_supports_color(Stdout, |s| s.red()),
        );
        println!();
        println!();
        for v in &result.violations {
            let line = format!("{}:{}:{} {}  [{}]", v.file, v.line, v.column, v.message, v.rule);
            println!("  {}", line.if_supports_color(Stdout, |s| s.dimmed()));
        }
        println!();
    }
}

pub fn print_summary(results: &[CheckResult]) -> bool {
    let failed: Vec<&CheckResult> = results.iter().filter(|r| !r.passed).collect();
    let total_violations: usize = results.iter().map(|r| r.violations.len()).sum();

    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    if failed.is_empty() {
        println!(
            "{}",
            format!("\nAll {}/{} checks passed.\n", results.len(), results.len())
                .if_supports_color(Stdout, |s| s.green()),
        );
        true
    } else {
        println!(
            "{}",
            format!(
                "\n{}/{} check(s) failed with {} total violation(s).\n",
                failed.len(),
                results.len(),
                total_violations,
            )
            .if_supports_color(Stdout, |s| s.red()),
        );
        false
    }
}

/// Machine-readable form of a whole run.
pub fn compose_json(results: &[CheckResult]) -> serde_json::Value {
    let failed = results.iter().filter(|r| !r.passed).count();
    let total_violations: usize = results.iter().map(|r| r.violations.len()).sum();
    json!({
        "results": results,
        "summary": {
            "checks": results.len(),
            "failed": failed,
            "violations": total_violations,
            "passed": failed == 0,
        }
    })
}

/// Print the run as JSON. Returns true if every check passed.
pub fn print_json(results: &[CheckResult]) -> bool {
    let value = compose_json(results);
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error: could not serialize results: {e}"),
    }
    results.iter().all(|r| r.passed)
}
