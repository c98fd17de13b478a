use eyre::Result;
use metro_card_lib::execute;
use std::{env, fs::File, io, path::Path, process::exit};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let file_name = match (args.next(), args.next()) {
        (Some(file_name), None) => file_name,
        _ => {
            return Err(eyre::eyre!(
                "Input file not supplied. Please provide the input file path as the sole argument.\nUsage: metro-card <input_file>"
            ))
        }
    };
    if !Path::new(&file_name).exists() {
        return Err(eyre::eyre!("Input file does not exist: {file_name}"));
    }

    debug!(file = %file_name, "processing input");
    let file = File::open(&file_name)?;
    let stdout = io::stdout();
    execute(file, stdout.lock())?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        exit(1);
    }
}
