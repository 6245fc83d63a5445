use std::{fs, path::PathBuf, process::exit};

use clap::Parser;
use libassembler::Assembler;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Assembly source file.
    source_path: PathBuf,

    /// Hex output file. Defaults to stdout.
    #[arg(short, long)]
    output_path: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = match fs::read_to_string(&args.source_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read assembly source: {}", e);
            exit(1);
        }
    };

    let hex = match Assembler::new(&source).assemble_text() {
        Ok(hex) => hex,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    match args.output_path {
        Some(output_path) => {
            if let Err(e) = fs::write(&output_path, hex) {
                eprintln!("Failed to write hex output: {}", e);
                exit(1);
            }
        }
        None => print!("{}", hex),
    }
}
