pub mod checks;
pub mod config;
pub mod imports;
pub mod reporter;
pub mod resolver;
pub mod walker;

use checks::CheckResult;
use config::LinterConfig;

pub fn run_all_checks(config: &LinterConfig) -> Vec<CheckResult> {
    let mut results = Vec::new();
    for (_, check_fn) in checks::ALL_CHECKS {
        let result = check_fn(config);
        results.push(result);
    }
    results
}
