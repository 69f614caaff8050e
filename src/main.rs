//! # docker2run
//! Reconstructs the `docker run` invocation for an existing container from
//! the JSON printed by `docker inspect`. Input comes from named files, from a
//! scan of the current directory, or from a pipe.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use docker2run::input;
use docker2run::inspect;
use docker2run::scan;
use docker2run::translate::{translate, OutputStyle};

/// Commandline surface. With file arguments each file is translated in turn;
/// without arguments the tool reads a piped `docker inspect` on stdin, or
/// prints usage when attached to a terminal.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Opts {
    /// Emit a multi-line command joined with shell line continuations
    #[clap(long)]
    multiline: bool,
    /// Translate every .json file in the current directory
    #[clap(long, conflicts_with = "files")]
    scan: bool,
    /// Write diagnostics to this file instead of stderr
    #[clap(short, long)]
    log: Option<PathBuf>,
    /// docker inspect JSON files
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    if let Err(e) = docker2run::logger::init(opts.log) {
        eprintln!("log init failed: {:?}", e);
    }

    let style = if opts.multiline {
        OutputStyle::Multiline
    } else {
        OutputStyle::SingleLine
    };

    if opts.scan {
        return scan_working_dir(style);
    }

    if !opts.files.is_empty() {
        return translate_files(&opts.files, style);
    }

    if atty::is(atty::Stream::Stdin) {
        println!("Usage: docker2run [--multiline] [--scan] <inspect.json>...");
        println!("       docker inspect <container> | docker2run");
        return Ok(());
    }

    translate_stdin(style)
}

/// Explicit-file mode. Any failure aborts the whole run; with more than one
/// file each result carries a `File:` label and outputs are blank-line
/// separated.
fn translate_files(files: &[PathBuf], style: OutputStyle) -> Result<()> {
    let labeled = files.len() > 1;

    for (i, path) in files.iter().enumerate() {
        let text = input::read_file(path)?;
        let doc = inspect::parse(&text)?;
        let command = translate(&doc, style)?;

        if labeled {
            println!("File: {}", input::base_name(path));
            println!("{}", command);
            if i + 1 < files.len() {
                println!();
            }
        } else {
            println!("{}", command);
        }
    }

    Ok(())
}

/// Directory-scan mode. A failing file is reported inline and the scan moves
/// on to the next one.
fn scan_working_dir(style: OutputStyle) -> Result<()> {
    for entry in scan::scan(".", style)? {
        match entry.result {
            Ok(command) => {
                println!("{}", entry.name);
                println!("{}", command);
                println!();
            }
            Err(e) => {
                log::warn!("skipping {}: {}", entry.name, e);
                eprintln!("{}: {}", entry.name, e);
            }
        }
    }

    Ok(())
}

fn translate_stdin(style: OutputStyle) -> Result<()> {
    let text = input::read_stdin()?;
    let doc = inspect::parse(&text)?;
    println!("{}", translate(&doc, style)?);
    Ok(())
}
