//! Command-line interface for flashml
//!
//! Usage:
//!   flashml compile `<path>` [-o `<out.html>`] [--report]  - Compile to `<base>.html` and `<base>.json`
//!   flashml check `<path>`                                - Lex, parse and validate only
//!   flashml inspect `<path>` [-f `<format>`]              - Print tokens or a registry format
//!   flashml list-formats                                - List the formats `inspect` accepts
//!
//! Every subcommand accepts `-c/--config <file>`, layered over `flashml.toml` in the working
//! directory and the built-in defaults. Logging goes to stderr (or `logging.file`), filtered by
//! `RUST_LOG` or else `logging.filter`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use flashml::flashml::config::{FlashmlConfig, Loader, PROJECT_CONFIG_FILE};
use flashml::flashml::error::CompileError;
use flashml::flashml::formats::FormatRegistry;
use flashml::flashml::pipeline::{compile_file, FsSink};
use std::fs::OpenOptions;
use std::path::Path;
use std::process;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const TOKEN_FORMAT: &str = "token-json";

fn main() {
    let matches = Command::new("flashml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile FlashML documents to HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over flashml.toml and the defaults")
                .global(true),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a document to HTML and the intermediate JSON record")
                .arg(
                    Arg::new("path")
                        .help("Path to the FlashML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("HTML output path; the JSON record is written next to it"),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .help("Print the compile report as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a document without writing anything")
                .arg(
                    Arg::new("path")
                        .help("Path to the FlashML file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the tokens or a serialization of the parsed document")
                .arg(
                    Arg::new("path")
                        .help("Path to the FlashML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)")
                        .default_value("ast-treeviz"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List the formats accepted by inspect"))
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        process::exit(2);
    });
    init_logging(&config);

    let ok = match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let path = compile_matches.get_one::<String>("path").unwrap();
            let output = compile_matches.get_one::<String>("output");
            let report = compile_matches.get_flag("report");
            handle_compile_command(&config, path, output.map(String::as_str), report)
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(&config, path)
        }
        Some(("inspect", inspect_matches)) => {
            let path = inspect_matches.get_one::<String>("path").unwrap();
            let format = inspect_matches.get_one::<String>("format").unwrap();
            handle_inspect_command(&config, path, format)
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&config);
            true
        }
        _ => unreachable!(),
    };

    if !ok {
        process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<FlashmlConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build()
}

fn init_logging(config: &FlashmlConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    let log_file = config.logging.file.as_ref().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Cannot open log file {}: {}", path.display(), e))
            .ok()
    });

    match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_target(false)
            .with_ansi(false)
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .init(),
        None => tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn read_source(path: &str) -> Option<String> {
    std::fs::read_to_string(path)
        .map_err(|e| eprintln!("Error reading {}: {}", path, e))
        .ok()
}

/// Handle the compile command
fn handle_compile_command(
    config: &FlashmlConfig,
    path: &str,
    output: Option<&str>,
    print_report: bool,
) -> bool {
    let compiler = config.compiler();
    let report = compile_file(
        Path::new(path),
        output.map(Path::new),
        &compiler,
        &mut FsSink,
    );

    if print_report {
        println!("{}", report.to_json());
    } else {
        for written in report.html.iter().chain(report.intermediate.iter()) {
            println!("wrote {}", written.display());
        }
        for error in &report.errors {
            eprintln!("{} error: {}", error.category, error.message);
        }
    }
    report.is_success()
}

/// Handle the check command
fn handle_check_command(config: &FlashmlConfig, path: &str) -> bool {
    let Some(source) = read_source(path) else {
        return false;
    };

    match config.compiler().check(&source) {
        Ok(diagnostics) if diagnostics.is_empty() => {
            println!("{}: ok", path);
            true
        }
        Ok(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("{}: {}", path, diagnostic);
            }
            false
        }
        Err(err) => {
            report_compile_error(path, &err);
            false
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(config: &FlashmlConfig, path: &str, format: &str) -> bool {
    let Some(source) = read_source(path) else {
        return false;
    };
    let compiler = config.compiler();

    if format == TOKEN_FORMAT {
        return match compiler.tokenize(&source) {
            Ok(tokens) => match serde_json::to_string_pretty(&tokens) {
                Ok(json) => {
                    println!("{}", json);
                    true
                }
                Err(e) => {
                    eprintln!("Serialization error: {}", e);
                    false
                }
            },
            Err(err) => {
                report_compile_error(path, &err);
                false
            }
        };
    }

    let document = match compiler.parse(&source) {
        Ok(document) => document,
        Err(err) => {
            report_compile_error(path, &err);
            return false;
        }
    };

    let registry = FormatRegistry::with_options(
        config.html_options(),
        config.intermediate_options(),
    );
    match registry.serialize(&document, format) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            true
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            false
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &FlashmlConfig) {
    let registry = FormatRegistry::with_options(
        config.html_options(),
        config.intermediate_options(),
    );
    println!("Available formats:\n");
    println!("  {}", TOKEN_FORMAT);
    println!("    Scanner tokens as JSON");
    for (name, description) in registry.describe() {
        println!("  {}", name);
        println!("    {}", description);
    }
}

fn report_compile_error(path: &str, err: &CompileError) {
    for message in err.messages() {
        eprintln!("{}: {}", path, message);
    }
}
