#![deny(missing_docs)]
//! A command-line interface for the Base32 codec.

use base32_core::{Alphabet, Base32, config};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, error, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod streams;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encode a file to stdout\nbase32-cli encode ./my_file.bin\n\n# Encode stdin without padding\necho -n hello | base32-cli encode --no-padding\n\n# Decode to a file\nbase32-cli decode ./my_file.b32 --output ./my_file.bin\n\n# Decode with a custom alphabet, rejecting sloppy padding\nbase32-cli decode ./my_file.b32 --alphabet-file ./alphabet.json --strict\n\n# Print a preset as JSON to start a custom alphabet from\nbase32-cli alphabet show --alphabet crockford > alphabet.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file or stdin to Base32
    Encode {
        /// Path to the input file. Reads stdin if omitted or '-'.
        #[arg()]
        input: Option<PathBuf>,

        /// Path to the output file. Writes stdout if omitted or '-'.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        alphabet: AlphabetArgs,
    },
    /// Decode Base32 from a file or stdin
    Decode {
        /// Path to the encoded input. Reads stdin if omitted or '-'.
        #[arg()]
        input: Option<PathBuf>,

        /// Path to the output file. Writes stdout if omitted or '-'.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        alphabet: AlphabetArgs,

        /// Reject misplaced or miscounted padding and non-zero trailing bits.
        #[arg(long)]
        strict: bool,
    },
    /// Inspect and validate alphabets
    Alphabet {
        #[command(subcommand)]
        command: AlphabetCommands,
    },
}

#[derive(Subcommand)]
enum AlphabetCommands {
    /// Print the selected alphabet as JSON
    Show {
        #[command(flatten)]
        alphabet: AlphabetArgs,
    },
    /// Check that a JSON alphabet file describes a valid alphabet
    Validate {
        /// Path to the alphabet file
        #[arg()]
        path: PathBuf,
    },
}

#[derive(Args)]
struct AlphabetArgs {
    /// Built-in alphabet to use.
    #[arg(long, value_enum, default_value_t = Preset::Rfc4648)]
    alphabet: Preset,

    /// JSON file describing a custom alphabet. Overrides --alphabet.
    #[arg(long, value_name = "ALPHABET_FILE", conflicts_with = "alphabet")]
    alphabet_file: Option<PathBuf>,

    /// Do not pad short final groups (and do not expect padding when decoding).
    #[arg(long)]
    no_padding: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// RFC 4648 section 6, padded with '='
    #[value(name = "rfc4648")]
    Rfc4648,
    /// RFC 4648 section 7 "extended hex", padded with '='
    #[value(name = "rfc4648-hex")]
    Rfc4648Hex,
    /// Crockford's Base32, unpadded
    #[value(name = "crockford")]
    Crockford,
    /// z-base-32, unpadded
    #[value(name = "zbase32")]
    Zbase32,
}

impl Preset {
    fn alphabet(self) -> Arc<Alphabet> {
        match self {
            Self::Rfc4648 => Alphabet::rfc4648(),
            Self::Rfc4648Hex => Alphabet::rfc4648_hex(),
            Self::Crockford => Alphabet::crockford(),
            Self::Zbase32 => Alphabet::zbase32(),
        }
    }
}

impl AlphabetArgs {
    fn resolve(&self) -> base32_core::Result<Arc<Alphabet>> {
        let alphabet = match &self.alphabet_file {
            Some(path) => {
                info!("Loading alphabet from '{}'", path.display());
                Arc::new(config::load_alphabet(path)?)
            }
            None => self.alphabet.alphabet(),
        };
        if self.no_padding && alphabet.is_padded() {
            return Ok(Arc::new(alphabet.with_padding(None)?));
        }
        Ok(alphabet)
    }

    fn codec(&self) -> base32_core::Result<Base32> {
        self.resolve().map(Base32::with_shared)
    }
}

fn encode(input: Option<&Path>, output: Option<&Path>, codec: &Base32) -> base32_core::Result<()> {
    let reader = streams::open_input(input)?;
    let mut out = streams::open_output(output)?;
    let consumed = codec.encode_stream(reader, &mut out.writer)?;
    if out.is_stdout {
        writeln!(out.writer)?;
        out.writer.flush()?;
    }
    info!("Encoded {consumed} bytes.");
    Ok(())
}

fn decode(
    input: Option<&Path>,
    output: Option<&Path>,
    codec: &Base32,
    strict: bool,
) -> base32_core::Result<()> {
    let encoded = streams::read_encoded(streams::open_input(input)?)?;
    let decoded = if strict {
        codec.decode_strict(&encoded)?
    } else {
        codec.decode(&encoded)?
    };
    let mut out = streams::open_output(output)?;
    out.writer.write_all(&decoded)?;
    out.writer.flush()?;
    info!(
        "Decoded {} symbols into {} bytes.",
        encoded.chars().count(),
        decoded.len()
    );
    Ok(())
}

fn show(alphabet: &Alphabet) -> base32_core::Result<()> {
    let json = serde_json::to_string_pretty(&alphabet.to_config())?;
    println!("{json}");
    Ok(())
}

fn validate(path: &Path) -> base32_core::Result<()> {
    let alphabet = config::load_alphabet(path)?;
    match alphabet.padding() {
        Some(pad) => println!("Alphabet '{}' is valid (padding '{pad}').", path.display()),
        None => println!("Alphabet '{}' is valid (no padding).", path.display()),
    }
    Ok(())
}

fn run(cli: &Cli) -> base32_core::Result<()> {
    match &cli.command {
        Commands::Encode {
            input,
            output,
            alphabet,
        } => {
            let codec = alphabet.codec()?;
            debug!("Encoding with alphabet {:?}", codec.alphabet().to_config());
            encode(input.as_deref(), output.as_deref(), &codec)
        }
        Commands::Decode {
            input,
            output,
            alphabet,
            strict,
        } => {
            let codec = alphabet.codec()?;
            debug!("Decoding with alphabet {:?}", codec.alphabet().to_config());
            decode(input.as_deref(), output.as_deref(), &codec, *strict)
        }
        Commands::Alphabet { command } => match command {
            AlphabetCommands::Show { alphabet } => {
                let alphabet = alphabet.resolve()?;
                show(&alphabet)
            }
            AlphabetCommands::Validate { path } => validate(path),
        },
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
