use evacuation_flow::building::{self, EdgeSpec, ENTRANCE, EXIT};
use evacuation_flow::{run_scenarios, ArgumentError, Error, EvacuationConfig, Scenario};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
usage: evacuation-flow [--alpha <f64>] [--speed <f64>] [--scale <u32>]
                       [--edges <path.json>] [--close <FROM>:<TO>]... [--json]

  --alpha   stairs penalty in time units (default 6.0)
  --speed   walking speed in length units per time unit (default 1.2)
  --scale   fixed-point factor for integer costs (default 10)
  --edges   JSON array of {from, to, capacity, length, kind} records
  --close   close the edge FROM -> TO in the disruption scenario (repeatable,
            default A:B)
  --json    print reports as JSON";

#[derive(Debug, Default)]
struct Options {
    config: EvacuationConfig,
    edges: Option<PathBuf>,
    closed: Vec<(String, String)>,
    json: bool,
    help: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ArgumentError> {
    let value = value.ok_or_else(|| ArgumentError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ArgumentError::InvalidValue { flag: flag.to_string(), value })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, ArgumentError> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--alpha" => options.config.alpha_stairs = parse_value(&arg, args.next())?,
            "--speed" => options.config.speed = parse_value(&arg, args.next())?,
            "--scale" => options.config.cost_scale = parse_value(&arg, args.next())?,
            "--edges" => options.edges = Some(parse_value(&arg, args.next())?),
            "--close" => {
                let value: String = parse_value(&arg, args.next())?;
                let edge = value.split_once(':').filter(|(from, to)| !from.is_empty() && !to.is_empty()).map(|(from, to)| (from.to_string(), to.to_string()));
                match edge {
                    Some(edge) => options.closed.push(edge),
                    None => return Err(ArgumentError::InvalidValue { flag: arg, value }),
                }
            }
            "--json" => options.json = true,
            "-h" | "--help" => options.help = true,
            _ => return Err(ArgumentError::Unknown(arg)),
        }
    }
    options.config.validate()?;
    Ok(options)
}

fn run(options: &Options) -> Result<(), Error> {
    let specs: Vec<EdgeSpec> = match &options.edges {
        Some(path) => building::load_edges(path)?,
        None => building::default_edges(),
    };
    debug!("building graph from {} edge records with {:?}", specs.len(), options.config);
    let graph = building::build_graph(&specs, &options.config)?;

    let closure = if options.closed.is_empty() {
        Scenario::closing("scenario: A -> B closed", &[("A", "B")])
    } else {
        let name = options.closed.iter().map(|(from, to)| format!("{from} -> {to}")).collect::<Vec<_>>().join(", ");
        Scenario { name: format!("scenario: {name} closed"), closed: options.closed.clone() }
    };

    let reports = run_scenarios(&graph, &[Scenario::baseline(), closure], ENTRANCE, EXIT)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let text: Vec<String> = reports.iter().map(ToString::to_string).collect();
        print!("{}", text.join("\n"));
    }
    Ok(())
}

/// 2 for problems with the invocation itself, 1 for everything the solvers reject.
fn exit_status(error: &Error) -> u8 {
    match error {
        Error::Argument(_) => 2,
        Error::Validation(_) | Error::InfeasibleFlow(_) | Error::Serialization(_) => 1,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e {
                Error::Argument(_) => eprintln!("error: {e}\n\n{USAGE}"),
                _ => eprintln!("error: {e}"),
            }
            ExitCode::from(exit_status(&e))
        }
    }
}
