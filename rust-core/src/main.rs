//! Fingerprint a WAV file and print its hashes
//!
//! The pipeline always runs with the default configuration, so hashes from
//! different runs and machines stay comparable.
//!
//! ```bash
//! audio-fingerprint song.wav
//! RUST_LOG=debug audio-fingerprint song.wav --hex
//! ```

use std::path::PathBuf;

use clap::Parser;

use audio_fingerprint::io::read_wav_file;
use audio_fingerprint::Fingerprinter;

#[derive(Parser, Debug)]
#[command(name = "audio-fingerprint")]
#[command(about = "Generate content-derived fingerprint hashes for a 16-bit PCM WAV file")]
#[command(version)]
struct Cli {
    /// Path to the WAV file
    file: PathBuf,

    /// Print hashes as hexadecimal
    #[arg(long)]
    hex: bool,
}

fn format_hash(hash: u32, hex: bool) -> String {
    if hex {
        format!("{:08x}", hash)
    } else {
        hash.to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let fingerprinter = Fingerprinter::default();
    log::debug!("Using {:?}", fingerprinter.config());

    let (samples, sample_rate) = read_wav_file(&cli.file)?;
    log::info!(
        "Loaded {} samples at {} Hz from {}",
        samples.len(),
        sample_rate,
        cli.file.display()
    );

    let hashes = fingerprinter.fingerprint(&samples, sample_rate)?;
    log::info!("Generated {} hashes", hashes.len());

    for hash in hashes {
        println!("{}", format_hash(hash, cli.hex));
    }

    Ok(())
}
