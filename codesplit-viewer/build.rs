use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("codesplitv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for separated HTML, CSS and JavaScript")
        .arg(
            Arg::new("path")
                .help("Path to the HTML document to open")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Open the built-in sample document")
                .action(ArgAction::SetTrue),
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
        );

    generate_to(Bash, &mut cmd, "codesplitv", &outdir)?;
    generate_to(Zsh, &mut cmd, "codesplitv", &outdir)?;
    generate_to(Fish, &mut cmd, "codesplitv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
