use std::error::Error;
use std::io::Read;
use std::sync::mpsc;
use std::thread;

use log::LevelFilter;
use log4rs::{
    Config,
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};
use reportout::cli::OutputArgs;
use reportout::event::wait_for_exit;
use reportout::{Event, WriterFactory};
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  reportout [-o <format>[=<file>]] ... [-f <file>] [-v] < document.json");
    eprintln!();
    eprintln!("Output tokens:");
    eprintln!("  <format>           Write to --file, or stdout when no file is given");
    eprintln!("  <format>=<file>    Write to <file> (created or truncated up front)");
    eprintln!("  a,b                Several tokens in one flag");
}

/// Log to stderr; stdout is a report destination.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let output_ref = reader.add::<OutputArgs>(tag::both('o', "output"));
    let file_ref = reader.add::<String>(tag::both('f', "file"));
    let verbose_ref = reader.add::<bool>(tag::both('v', "verbose"));

    let args = reader.parse()?;

    setup_logging(matches!(verbose_ref.get(&args), Some(Ok(true))))?;

    let mut output = match output_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("OutputArgs parsing is infallible"),
        None => OutputArgs::default(),
    };
    if let Some(Ok(file)) = file_ref.get(&args) {
        output = output.with_file(file);
    }

    // Report files are created before the document exists.
    let mut writers =
        WriterFactory::default().make_writers::<serde_json::Value>(&output.writer_options())?;

    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || -> Result<(), String> {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| format!("read stdin: {e}"))?;
        let document: serde_json::Value =
            serde_json::from_str(&input).map_err(|e| format!("parse document: {e}"))?;

        let event = Event::exit_with(move || {
            let written = writers.write(&document);
            let closed = writers.close();
            written?;
            closed?;
            Ok(())
        });
        tx.send(event).map_err(|e| e.to_string())
    });

    wait_for_exit(&rx)?;

    match worker.join() {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err("document worker panicked".into()),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("reportout error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
