//! Command-line interface for codesplit
//! Splits a combined HTML document into markup, style and behavior artifacts,
//! composes previews and writes the artifacts to disk.
//!
//! Usage:
//!   codesplit split `<path|->` [--format `<format>`]      - Print the separated artifacts
//!   codesplit preview `<path|->` [--output `<file>`]      - Compose the preview document
//!   codesplit blocks `<path|->`                           - List the matched style/script blocks
//!   codesplit export `<path|->` [--dir `<dir>`]           - Write index.html, index.css, index.js
//!   codesplit sample                                      - Print the built-in sample document
//!   codesplit list-formats                                - List available output formats

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use codesplit::split::export::Exporter;
use codesplit::split::formats::FormatRegistry;
use codesplit::split::samples;
use codesplit::{compose, extract_blocks, ArtifactSet, Notice, Workspace};
use codesplit_config::{ConfigError, Loader, SplitConfig, LOCAL_CONFIG_FILE};
use std::io::Read;
use std::path::Path;
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn build_cli() -> Command {
    let input_arg = || {
        Arg::new("path")
            .help("Path to the HTML document, or '-' to read stdin")
            .required(true)
            .index(1)
    };

    Command::new("codesplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Separate combined HTML into markup, style and behavior")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered over the defaults")
                .global(true),
        )
        .subcommand(
            Command::new("split")
                .about("Print the separated artifacts")
                .arg(input_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)"),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Compose the preview document from the separated artifacts")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the preview to this file instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("blocks")
                .about("List the style and inline script blocks found in the document")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Write every non-empty artifact to disk")
                .arg(input_arg())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .short('d')
                        .help("Directory to write into"),
                )
                .arg(
                    Arg::new("stagger-ms")
                        .long("stagger-ms")
                        .help("Delay between consecutive writes, in milliseconds")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .help("Also write the composed preview document")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("sample").about("Print the built-in sample document"))
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() {
    let matches = build_cli().get_matches();
    // global flags are propagated into the subcommand's matches
    let verbose = matches
        .subcommand()
        .map(|(_, sub)| sub.get_count("verbose"))
        .unwrap_or(0);
    init_tracing(verbose);

    match matches.subcommand() {
        Some(("split", sub)) => handle_split_command(sub),
        Some(("preview", sub)) => handle_preview_command(sub),
        Some(("blocks", sub)) => handle_blocks_command(sub),
        Some(("export", sub)) => handle_export_command(sub),
        Some(("sample", _)) => print!("{}", samples::ANIMATED_CARD),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("clap requires a subcommand"),
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over the verbosity flag
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Layer ./codesplit.toml, then --config, then the command's flag overrides
fn load_config<F>(sub: &ArgMatches, overrides: F) -> SplitConfig
where
    F: FnOnce(Loader) -> Result<Loader, ConfigError>,
{
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = sub.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    overrides(loader)
        .and_then(Loader::build)
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        })
}

fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(1);
    })
}

/// Read and extract the input, exiting with the error notice on blank input
fn extract_input(path: &str) -> ArtifactSet {
    let mut workspace = Workspace::with_input(read_input(path));
    match workspace.extract() {
        Ok(notice) => tracing::info!("{}", notice),
        Err(err) => {
            eprintln!("{}", Notice::from(&err));
            process::exit(1);
        }
    }
    workspace.artifacts().cloned().unwrap_or_default()
}

/// Handle the split command
fn handle_split_command(sub: &ArgMatches) {
    let config = load_config(sub, |loader| match sub.get_one::<String>("format") {
        Some(format) => loader.set_override("output.format", format.as_str()),
        None => Ok(loader),
    });
    let path = sub.get_one::<String>("path").map(String::as_str).unwrap_or("-");
    let artifacts = extract_input(path);

    let registry = FormatRegistry::default();
    let formatted = registry
        .serialize(&artifacts, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            process::exit(1);
        });
    print!("{}", formatted);
}

/// Handle the preview command
fn handle_preview_command(sub: &ArgMatches) {
    let path = sub.get_one::<String>("path").map(String::as_str).unwrap_or("-");
    let preview = compose(&extract_input(path));

    let Some(output) = sub.get_one::<String>("output") else {
        print!("{}", preview);
        return;
    };

    let output = Path::new(output);
    let directory = output.parent().unwrap_or_else(|| Path::new(""));
    let file_name = output
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_else(|| {
            eprintln!("Invalid output path: {}", output.display());
            process::exit(1);
        });
    match Exporter::new(directory).write_preview(&preview, file_name) {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Handle the blocks command
fn handle_blocks_command(sub: &ArgMatches) {
    let path = sub.get_one::<String>("path").map(String::as_str).unwrap_or("-");
    let source = read_input(path);
    if codesplit::split::extraction::trim_text(&source).is_empty() {
        eprintln!("{}", Notice::from(&codesplit::SplitError::EmptyInput));
        process::exit(1);
    }

    let extraction = extract_blocks(&source);
    let blocks = extraction.blocks();
    if blocks.is_empty() {
        println!("No style or script blocks found");
        return;
    }
    for block in blocks {
        let (start, end) = block.line_span(&source);
        println!(
            "{:<4} lines {}-{} ({} bytes)",
            block.kind.artifact().label(),
            start,
            end,
            block.inner.len()
        );
    }
}

/// Handle the export command
fn handle_export_command(sub: &ArgMatches) {
    let config = load_config(sub, |mut loader| {
        if let Some(dir) = sub.get_one::<String>("dir") {
            loader = loader.set_override("export.directory", dir.as_str())?;
        }
        if let Some(ms) = sub.get_one::<u64>("stagger-ms") {
            loader = loader.set_override("export.stagger_ms", i64::try_from(*ms).unwrap_or(i64::MAX))?;
        }
        Ok(loader)
    });
    let path = sub.get_one::<String>("path").map(String::as_str).unwrap_or("-");
    let artifacts = extract_input(path);

    let exporter =
        Exporter::new(&config.export.directory).with_file_stem(&config.export.file_stem);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Failed to start runtime: {}", e);
            process::exit(1);
        });

    println!("{}", Notice::downloading_all());
    let outcomes = runtime.block_on(exporter.export_all(&artifacts, config.export.stagger()));

    let mut failed = false;
    for outcome in outcomes {
        match outcome.result {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("{}", e);
                failed = true;
            }
        }
    }

    if sub.get_flag("preview") {
        match exporter.write_preview(&compose(&artifacts), &config.export.preview_file) {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => {
                eprintln!("{}", e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
