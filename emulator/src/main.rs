use std::{fs, path::PathBuf, process::exit};

use clap::Parser;
use libemulator::Emulator;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Program to run, one 16-bit hex word per line.
    hex_path: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let hex = match fs::read_to_string(&args.hex_path) {
        Ok(hex) => hex,
        Err(e) => {
            eprintln!("Failed to read hex file: {}", e);
            exit(1);
        }
    };

    let mut emulator = Emulator::new();
    if let Err(e) = emulator.load_hex_text(&hex) {
        eprintln!("Failed to load program: {}", e);
        exit(1);
    }

    let result = emulator.execute_to_halt();

    // Dump the register file even after a fault, but exit nonzero for it.
    for (index, value) in emulator.reg_file.iter().enumerate() {
        println!("R{}: 0x{:04X}", index, value);
    }

    if let Err(e) = result {
        eprintln!("{}", e);
        exit(1);
    }
}
