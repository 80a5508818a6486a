use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{value_parser, Arg, ArgAction, Command};
use mirage_dataset::{build_dataset, verify_dataset};
use mirage_model::{DemoContext, DEFAULT_SEED};
use mirage_repo::{ApiRequest, NetworkClient};
use mirage_scenario::{resolve_scenario, Scenario, SimulatedClient};
use mirage_store::{DemoData, ScenarioStore};
use std::sync::Arc;

fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .default_value("20260207")
        .value_parser(value_parser!(u64))
        .help("Seed for dataset synthesis")
}

fn now_arg() -> Arg {
    Arg::new("now")
        .long("now")
        .help("Reference instant, RFC 3339 (defaults to the fixed anchor)")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("mirage")
        .version(mirage_core::VERSION)
        .about("Deterministic demo-dataset engine and scenario simulation")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dump")
                .about("Build the dataset and print it as JSON")
                .arg(seed_arg())
                .arg(now_arg())
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the JSON"),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Build the dataset and run its integrity checks")
                .arg(seed_arg())
                .arg(now_arg()),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve the active scenario from a query string")
                .arg(
                    Arg::new("query")
                        .long("query")
                        .required(true)
                        .help("Query string, e.g. '?scenario=slow'"),
                )
                .arg(
                    Arg::new("default")
                        .long("default")
                        .default_value("off")
                        .help("Configured default scenario"),
                ),
        )
        .subcommand(
            Command::new("request")
                .about("Drive one request through the simulated transport")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .required(true)
                        .help("Request path, e.g. /api/users"),
                )
                .arg(
                    Arg::new("scenario")
                        .long("scenario")
                        .default_value("success")
                        .help("Scenario to simulate (success|error|slow)"),
                )
                .arg(seed_arg()),
        );

    match cli.get_matches().subcommand() {
        Some(("dump", args)) => {
            let scenario = build_dataset(&context_from(args)?);
            let json = if args.get_flag("pretty") {
                serde_json::to_string_pretty(&scenario)?
            } else {
                serde_json::to_string(&scenario)?
            };
            println!("{json}");
        }
        Some(("verify", args)) => {
            let context = context_from(args)?;
            let scenario = build_dataset(&context);
            let violations = verify_dataset(&scenario, context.now);
            if violations.is_empty() {
                println!(
                    "ok: {} users, {} records, {} nodes, {} edges",
                    scenario.users.len(),
                    scenario.records.len(),
                    scenario.graph_data.nodes.len(),
                    scenario.graph_data.edges.len()
                );
            } else {
                for violation in &violations {
                    eprintln!("violation: {violation}");
                }
                anyhow::bail!("{} integrity violations", violations.len());
            }
        }
        Some(("resolve", args)) => {
            let query = args.get_one::<String>("query").map(String::as_str).unwrap_or("");
            let default = args
                .get_one::<String>("default")
                .map(String::as_str)
                .unwrap_or("off");
            println!("{}", resolve_scenario(query, default));
        }
        Some(("request", args)) => {
            let path = args.get_one::<String>("path").map(String::as_str).unwrap_or("/");
            let scenario: Scenario = args
                .get_one::<String>("scenario")
                .map(String::as_str)
                .unwrap_or("success")
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid scenario"))?;
            let seed = *args.get_one::<u64>("seed").unwrap_or(&DEFAULT_SEED);

            let context = DemoContext::new(seed, DemoContext::default_reference_time());
            let data = DemoData::new(Arc::new(ScenarioStore::new(context)));
            let client = SimulatedClient::new(data, scenario);

            match client.send(ApiRequest::get(path)).await {
                Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                Err(err) => {
                    eprintln!("request failed: {err}");
                    std::process::exit(1);
                }
            }
        }
        _ => unreachable!("subcommand required"),
    }

    Ok(())
}

fn context_from(args: &clap::ArgMatches) -> anyhow::Result<DemoContext> {
    let seed = *args.get_one::<u64>("seed").unwrap_or(&DEFAULT_SEED);
    let now = match args.get_one::<String>("now") {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .context("parsing --now as RFC 3339")?
            .with_timezone(&Utc),
        None => DemoContext::default_reference_time(),
    };
    Ok(DemoContext::new(seed, now))
}
