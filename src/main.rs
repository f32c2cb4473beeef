//! Chordcalc - chord notation pitch-class calculator
//!
//! Prints a pitch-class histogram for a song written in chord notation.
//!
//! # Usage
//!
//! ```bash
//! chordcalc songs/blues.txt --out-dir out
//! chordcalc songs/ --check
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use chordcalc::{
    calculate,
    error::Result,
    files::{read_song, song_name, song_paths, write_table},
    notation,
    table::DEFAULT_CELL_WIDTH,
    TableConfig,
};
use log::info;

const SEPARATOR: &str = "--------------------------------";

/// Chord notation pitch-class calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Song file, or a directory of song files with --check
    #[arg(value_name = "SONG")]
    path: PathBuf,

    /// Only validate the song(s) against the grammar
    #[arg(short, long)]
    check: bool,

    /// Also write the table to <OUT_DIR>/<song>_notes.txt
    #[arg(short, long, value_name = "OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Width of each pitch-class column
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    cell_width: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let outcome = if args.check {
        check(&args.path)
    } else {
        run(&args)
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Render one song, printing the table and optionally saving it.
fn run(args: &Args) -> Result<bool> {
    let song = read_song(&args.path)?;

    let config = TableConfig::new().with_cell_width(args.cell_width);
    let table = calculate(&song, &config)?;
    println!("{}", table);

    if let Some(out_dir) = &args.out_dir {
        let written = write_table(out_dir, &args.path, &table)?;
        info!("table written to {}", written.display());
    }
    Ok(true)
}

/// Validate every song under `path`, reporting each one.
fn check(path: &Path) -> Result<bool> {
    let mut all_valid = true;
    println!("{}", SEPARATOR);
    for song_path in song_paths(path)? {
        println!("Parsing song: {}", song_name(&song_path));
        match notation::parse_file(&song_path) {
            Ok(_) => println!("Song valid."),
            Err(e) => {
                all_valid = false;
                println!("Song invalid: {}", e);
            }
        }
        println!("{}", SEPARATOR);
    }
    Ok(all_valid)
}
