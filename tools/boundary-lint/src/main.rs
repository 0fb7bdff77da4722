use std::path::PathBuf;
use std::process;

use boundary_lint::checks::{self, CheckResult};
use boundary_lint::config::LinterConfig;
use boundary_lint::reporter;
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "boundary-lint",
    version,
    about = "Enforce pages import boundaries and kebab-case names under src/"
)]
struct Cli {
    /// Project root containing src/ (default: current directory)
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// Only run the named rule (repeatable)
    #[arg(long = "rule", value_name = "RULE")]
    rules: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.root_dir {
        Some(dir) => LinterConfig::from_root(&dir),
        None => match LinterConfig::discover() {
            Some(c) => c,
            None => {
                eprintln!("Error: Could not determine the current directory. Use --root-dir.");
                process::exit(1);
            }
        },
    };

    if !config.src_dir().is_dir() {
        eprintln!(
            "Error: Source directory not found: {}",
            config.src_dir().display()
        );
        process::exit(1);
    }

    for rule in &cli.rules {
        if !checks::ALL_CHECKS.iter().any(|(id, _)| id == rule) {
            let known: Vec<&str> = checks::ALL_CHECKS.iter().map(|(id, _)| *id).collect();
            eprintln!("Error: Unknown rule '{}'. Known rules: {}", rule, known.join(", "));
            process::exit(1);
        }
    }

    let human = cli.format == OutputFormat::Human;
    if human {
        reporter::print_header();
    }

    let debug_timing = std::env::var("BOUNDARY_LINT_TIMING").is_ok();
    let mut results: Vec<CheckResult> = Vec::new();
    for (id, check_fn) in checks::ALL_CHECKS {
        if !cli.rules.is_empty() && !cli.rules.iter().any(|r| r == id) {
            continue;
        }
        let start = std::time::Instant::now();
        let result = check_fn(&config);
        if debug_timing {
            eprintln!("  [{:>6.0?}] {}", start.elapsed(), result.name);
        }
        if human {
            reporter::print_result(&result);
        }
        results.push(result);
    }

    let all_passed = if human {
        reporter::print_summary(&results)
    } else {
        reporter::print_json(&results)
    };

    process::exit(if all_passed { 0 } else { 1 });
}
