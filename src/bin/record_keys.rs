use colored::Colorize;
use record_keys::{Scenario, ScenarioConfig, ScenarioReport, ScenarioResult};
use std::process;

const SCENARIO: &str = include_str!("scenario.toml");

fn print_report(scenario: &Scenario, report: &ScenarioReport) {
    println!(
        "{}",
        format!("=== Record hashes ({}) ===", scenario.config().hasher.name())
            .bold()
            .cyan()
    );
    for line in report.hash_lines() {
        println!("{}", line);
    }

    println!("\n{}", "=== Map entries ===".bold().cyan());
    for line in report.entry_lines() {
        println!("{}", line);
    }

    println!("\n{}", "✓ Equal records share a hash and a map entry".green());
}

fn run() -> ScenarioResult<()> {
    let config = ScenarioConfig::from_toml_str(SCENARIO)?;
    colored::control::set_override(config.color);

    let scenario = Scenario::new(config);
    let report = scenario.run()?;
    print_report(&scenario, &report);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "error:".bold().red(), err);
        process::exit(1);
    }
}
