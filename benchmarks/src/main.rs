use clap::Parser;
use colored::Colorize;

use idiobench_benchmarks::suites;

/// Run idiom-comparison benchmark suites and print their reports to stdout.
#[derive(Parser)]
#[command(name = "idiobench")]
struct Cli {
    /// Names of the suites to run. Runs every registered suite when empty.
    suites: Vec<String>,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run_selected(&cli.suites) {
        eprintln!("{}: {}", "ERROR".red().bold(), format!("{err:#}").red());
        std::process::exit(1);
    }
}

fn run_selected(names: &[String]) -> anyhow::Result<()> {
    let registry = suites::all();
    let selected: Vec<&suites::Registration> = if names.is_empty() {
        registry.iter().collect()
    } else {
        names
            .iter()
            .map(|name| {
                registry
                    .iter()
                    .find(|r| r.name == name.as_str())
                    .ok_or_else(|| {
                        let known = registry
                            .iter()
                            .map(|r| r.name)
                            .collect::<Vec<_>>()
                            .join(", ");
                        anyhow::anyhow!("unknown benchmark `{name}` (available: {known})")
                    })
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    for registration in selected {
        log::debug!("running suite `{}`", registration.name);
        let suite = (registration.build)()?;
        let results = idiobench::run(&suite)?;
        for line in idiobench::report::render(suite.title(), &results) {
            println!("{line}");
        }
    }
    Ok(())
}
