//! Command-line interface for rbp
//! This binary parses bandplan documents and exposes the frequency codec and view-state helpers.
//!
//! Usage:
//!   rbp parse `<path>` [--format `<format>`]  - Parse a bandplan and print it
//!   rbp encode `<hz>`                        - Encode a frequency in Hz
//!   rbp decode `<text>`                      - Decode an encoded frequency to Hz
//!   rbp view `<query>`                       - Show the view state of a chart link
//!   rbp list-formats                         - List all available output formats
//!
//! Every subcommand accepts `--config <file>`, layered over the built-in defaults and an
//! optional `rbp.toml` in the working directory. Set `RBP_LOG=debug` to see parser events.

use clap::{Arg, ArgMatches, Command};
use rbp::bandplan::config::{Loader, RbpConfig};
use rbp::bandplan::formats::FormatRegistry;
use rbp::bandplan::propagation::wavelength;
use rbp::bandplan::view_state::{ViewState, VELOCITY_FACTOR};
use rbp::bandplan::{frequency, Bandplan};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("rbp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing radio bandplans and converting frequencies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a bandplan document and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the bandplan file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'treeviz'); defaults to output.format"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a frequency given in Hz")
                .arg(
                    Arg::new("hz")
                        .help("Frequency in Hz")
                        .required(true)
                        .allow_negative_numbers(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode an encoded frequency (e.g. '144.050 MHz') to Hz")
                .arg(
                    Arg::new("text")
                        .help("Encoded frequency")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("Show the view state carried by a chart link query")
                .arg(
                    Arg::new("query")
                        .help("Query string, e.g. '?start=144.000M&end=146.000M&vf=66'")
                        .default_value("")
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let config = load_config(&matches);

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            handle_parse_command(path, &config.output.format);
        }
        Some(("encode", encode_matches)) => {
            let hz = encode_matches.get_one::<String>("hz").unwrap();
            handle_encode_command(hz);
        }
        Some(("decode", decode_matches)) => {
            let text = decode_matches.get_one::<String>("text").unwrap();
            handle_decode_command(text);
        }
        Some(("view", view_matches)) => {
            let query = view_matches.get_one::<String>("query").unwrap();
            handle_view_command(query, &config);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RBP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then `rbp.toml`, `--config`, `RBP_*` variables and finally command-line flags.
fn load_config(matches: &ArgMatches) -> RbpConfig {
    let mut loader = Loader::new().with_local_file();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_environment();

    let format = match matches.subcommand() {
        Some(("parse", parse_matches)) => parse_matches.get_one::<String>("format"),
        _ => None,
    };
    let loaded = match format {
        Some(format) => loader.set_override("output.format", format.as_str()),
        None => Ok(loader),
    }
    .and_then(Loader::build);

    loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let plan = Bandplan::parse(&source);
    let output = FormatRegistry::with_defaults()
        .serialize(&plan, format)
        .unwrap_or_else(|e| {
            eprintln!("Format error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the encode command
fn handle_encode_command(hz: &str) {
    let freq: f64 = hz.trim().parse().unwrap_or_else(|_| {
        eprintln!("Error: '{}' is not a number of Hz", hz);
        std::process::exit(1);
    });
    println!("{}", frequency::encode(freq));
}

/// Handle the decode command
fn handle_decode_command(text: &str) {
    match frequency::decode(text) {
        Ok(freq) => println!("{}", freq),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the view command
fn handle_view_command(query: &str, config: &RbpConfig) {
    let state = ViewState::parse(query);
    let [start, end] = state.frequencies().unwrap_or_else(|| {
        config.view.domain().unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        })
    });
    let velocity_factor = if state.get(VELOCITY_FACTOR).is_some() {
        state.velocity_factor()
    } else {
        config.view.velocity_factor
    };

    println!(
        "start: {} ({} Hz, {} m)",
        frequency::encode(start),
        start,
        wavelength(start, velocity_factor)
    );
    println!(
        "end: {} ({} Hz, {} m)",
        frequency::encode(end),
        end,
        wavelength(end, velocity_factor)
    );
    println!("vf: {}", velocity_factor);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for (name, description) in registry.descriptions() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
