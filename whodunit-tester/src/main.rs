mod backend;
mod reports;
mod scenarios;
mod session;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use backend::{FakeGenerationService, GenerationBackend, LiveService};
use reports::ScenarioResult;
use scenarios::Scenario;

#[derive(Debug, Parser)]
#[command(name = "whodunit-tester", version)]
#[command(about = "Scripted client journeys for Whodunit, against a fake or live generation service")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Origin of a running generation service; the built-in fake is used when absent
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios)?;
    let seeds = parse_seeds(&args.seeds)?;

    let mut results = Vec::new();
    for &seed in &seeds {
        let backend: Box<dyn GenerationBackend> = match &args.base_url {
            Some(url) => Box::new(LiveService::new(url)),
            None => Box::new(FakeGenerationService::new(seed)),
        };
        for &scenario in &scenarios {
            let result = run_one(backend.as_ref(), scenario, seed).await;
            if args.verbose {
                print_progress(&result);
            }
            results.push(result);
        }
    }

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

async fn run_one(backend: &dyn GenerationBackend, scenario: Scenario, seed: u64) -> ScenarioResult {
    let started_at = Utc::now();
    let clock = Instant::now();
    let outcome = scenario.run(backend, seed).await;
    if let Err(err) = &outcome {
        log::error!("{} seed {seed} failed: {err:#}", scenario.key());
    }
    ScenarioResult {
        scenario_name: scenario.key().to_string(),
        seed,
        backend: backend.label().to_string(),
        passed: outcome.is_ok(),
        failure: outcome.err().map(|err| format!("{err:#}")),
        duration_ms: clock.elapsed().as_millis(),
        started_at,
    }
}

fn print_progress(result: &ScenarioResult) {
    if result.passed {
        println!(
            "✅ [{} seed {}] {} - {:?}",
            result.backend.green(),
            result.seed,
            result.scenario_name,
            result.duration()
        );
    } else {
        eprintln!(
            "❌ [{} seed {}] {} - {:?}: {}",
            result.backend.red(),
            result.seed,
            result.scenario_name,
            result.duration(),
            result.failure.as_deref().unwrap_or_default()
        );
    }
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for scenario in Scenario::ALL {
        writeln!(
            output_target.writer(),
            "  {:12} - {}",
            scenario.key(),
            scenario.description()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🔎 Whodunit Automated Tester".bright_cyan().bold());
    println!("{}", "============================".cyan());
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn expand_scenarios(scenarios_arg: &str) -> Result<Vec<Scenario>> {
    let keys = split_csv(scenarios_arg);
    if keys.iter().any(|k| k == "all") {
        return Ok(Scenario::ALL.to_vec());
    }
    let mut scenarios = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(scenario) = Scenario::from_key(&key) else {
            bail!("unknown scenario `{key}` (try --list-scenarios)");
        };
        if !scenarios.contains(&scenario) {
            scenarios.push(scenario);
        }
    }
    Ok(scenarios)
}

fn parse_seeds(seeds_arg: &str) -> Result<Vec<u64>> {
    split_csv(seeds_arg)
        .iter()
        .map(|s| s.parse().with_context(|| format!("invalid seed `{s}`")))
        .collect()
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Whodunit Scenario Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(
                &mut output_target,
                "🏁 Total time: {:?}",
                start_time.elapsed()
            )?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
