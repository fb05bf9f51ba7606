//! Standalone binary for the codesplit interactive viewer.
//! Usage:
//!   codesplitv <path>
//!   codesplitv --sample

mod viewer;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use codesplit::split::export::Exporter;
use codesplit::Workspace;
use codesplit_config::{Loader, SplitConfig, LOCAL_CONFIG_FILE};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use viewer::app::{App, ExportSettings};
use viewer::clipboard::SystemClipboard;
use viewer::model::{Model, Source};

fn main() {
    let matches = Command::new("codesplitv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for separated HTML, CSS and JavaScript")
        .arg(
            Arg::new("path")
                .help("Path to the HTML document to open")
                .required_unless_present("sample")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Open the built-in sample document")
                .action(ArgAction::SetTrue)
                .conflicts_with("path"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered over the defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write diagnostics to this file")
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    if let Some(path) = matches.get_one::<String>("log-file") {
        if let Err(err) = init_file_logging(path) {
            eprintln!("Error: could not open log file {}: {}", path, err);
            std::process::exit(1);
        }
    }

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// The terminal belongs to the UI, so diagnostics only go to a file
fn init_file_logging(path: &str) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<SplitConfig, Box<dyn std::error::Error>> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;

    let (workspace, source, notice) = match matches.get_one::<String>("path") {
        Some(path) => {
            let path = PathBuf::from(path);
            let content = std::fs::read_to_string(&path)?;
            let mut workspace = Workspace::with_input(content);
            let notice = workspace.process();
            (workspace, Source::File(path), notice)
        }
        None => {
            let mut workspace = Workspace::new();
            let notice = workspace.load_sample();
            (workspace, Source::Sample, notice)
        }
    };
    tracing::info!(source = %source.display_name(), "opened");

    let mut model = Model::new(workspace, source, config.viewer.notice_duration());
    model.show(notice);

    let export = ExportSettings {
        exporter: Exporter::new(&config.export.directory).with_file_stem(&config.export.file_stem),
        preview_file: config.export.preview_file.clone(),
        stagger: config.export.stagger(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let app = App::new(
        model,
        Box::new(SystemClipboard),
        export,
        runtime.handle().clone(),
    );

    viewer::viewer::run_viewer(app, config.viewer.tick())?;
    Ok(())
}
