use bytecast::cli::{
    create_sample, decode_file, decode_input, encode_file, encode_input, inspect_codepoint,
    inspect_random, inspect_text, random_bytes_output, random_text_output, run_demo,
    select_charset, verify_sample, DecodeOptions, DemoOptions, EncodeOptions, SampleOptions,
    VerifyOptions,
};
use bytecast::codec::Format;
use bytecast::codepoint::DEFAULT_WINDOW;
use bytecast::digest::DigestAlgorithm;
use bytecast::sample::{default_sample_path, DEFAULT_SAMPLE_DIR};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Version info from build.rs
const VERSION: &str = env!("BYTECAST_VERSION");
const BUILD: &str = env!("BYTECAST_BUILD");
const PROFILE: &str = env!("BYTECAST_PROFILE");
const GIT_HASH: &str = env!("BYTECAST_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "bytecast")]
#[command(author, about = "Reversible hex/base64 encodings with digest-checked round-trips", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every conversion once and verify a sample file round-trip
    Demo {
        /// Directory for the sample file
        #[arg(long, default_value = DEFAULT_SAMPLE_DIR)]
        dir: PathBuf,

        /// Secure random bytes to round-trip
        #[arg(long, default_value = "200")]
        bytes: usize,

        /// Length of the sample text
        #[arg(long, default_value = "200")]
        length: usize,

        /// Seed for the sample text (time-based when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Digest algorithm
        #[arg(long, default_value = "sha256", value_parser = parse_hash)]
        hash: DigestAlgorithm,
    },

    /// Encode text or a file
    #[command(alias = "e")]
    Encode {
        /// Output format
        #[arg(long, short, default_value = "hex", value_parser = parse_format)]
        format: Format,

        /// Encode the contents of this file
        #[arg(long, short, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Text to encode
        #[arg(required_unless_present = "input")]
        text: Option<String>,
    },

    /// Decode a hex or base64 string
    #[command(alias = "d")]
    Decode {
        /// Input format
        #[arg(long, short, default_value = "hex", value_parser = parse_format)]
        format: Format,

        /// Decode the contents of this file
        #[arg(long, short, conflicts_with = "encoded")]
        input: Option<PathBuf>,

        /// Write decoded bytes to this file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Encoded string
        #[arg(required_unless_present = "input")]
        encoded: Option<String>,
    },

    /// Generate random data
    #[command(subcommand)]
    Random(RandomCommands),

    /// Write a file of random printable text
    Sample {
        /// Output file
        #[arg(long)]
        path: Option<PathBuf>,

        /// Number of characters
        #[arg(long, default_value = "200")]
        length: usize,

        /// Generator seed (time-based when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Characters to draw from
        #[arg(long)]
        charset: Option<String>,

        /// Draw from letters and digits only
        #[arg(long, conflicts_with = "charset")]
        alphanumeric: bool,
    },

    /// Round-trip a file and compare digests
    Verify {
        /// File to verify
        file: PathBuf,

        #[arg(long, short, default_value = "hex", value_parser = parse_format)]
        format: Format,

        /// Digest algorithm
        #[arg(long, default_value = "sha256", value_parser = parse_hash)]
        hash: DigestAlgorithm,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the encodings of characters
    #[command(alias = "i")]
    Inspect {
        /// Hex code point such as 01e7 or U+01E7
        #[arg(long, short, conflicts_with_all = ["text", "random"])]
        codepoint: Option<String>,

        /// Inspect a window of consecutive code points from a random start
        #[arg(long, short, conflicts_with = "text")]
        random: bool,

        /// Code points in the random window
        #[arg(long, default_value_t = DEFAULT_WINDOW, requires = "random")]
        window: u32,

        /// Seed for the random start (time-based when omitted)
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Characters to inspect
        #[arg(required_unless_present_any = ["codepoint", "random"])]
        text: Option<String>,
    },
}

#[derive(Subcommand)]
enum RandomCommands {
    /// Cryptographically secure random bytes
    Bytes {
        count: usize,

        #[arg(long, short, default_value = "hex", value_parser = parse_format)]
        format: Format,
    },

    /// Non-cryptographic random printable text
    Text {
        length: usize,

        #[arg(long)]
        seed: Option<u64>,

        /// Characters to draw from
        #[arg(long)]
        charset: Option<String>,

        /// Draw from letters and digits only
        #[arg(long, conflicts_with = "charset")]
        alphanumeric: bool,
    },
}

fn parse_format(s: &str) -> Result<Format, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_hash(s: &str) -> Result<DigestAlgorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {}", e);
    }
}

fn run(command: Commands) -> bytecast::Result<Vec<u8>> {
    match command {
        Commands::Demo {
            dir,
            bytes,
            length,
            seed,
            hash,
        } => {
            let options = DemoOptions {
                dir,
                random_bytes: bytes,
                text_length: length,
                seed,
                algorithm: hash,
                ..Default::default()
            };
            run_demo(&options).map(String::into_bytes)
        }

        Commands::Encode {
            format,
            input,
            text,
        } => {
            let options = EncodeOptions { format };
            let encoded = match input {
                Some(path) => encode_file(&path, &options)?,
                None => encode_input(text.unwrap_or_default().as_bytes(), &options),
            };
            Ok(format!("{}\n", encoded).into_bytes())
        }

        Commands::Decode {
            format,
            input,
            output,
            encoded,
        } => {
            let options = DecodeOptions { format, output };
            let mut decoded = match input {
                Some(path) => decode_file(&path, &options)?,
                None => decode_input(&encoded.unwrap_or_default(), &options)?,
            };
            decoded.push(b'\n');
            Ok(decoded)
        }

        Commands::Random(RandomCommands::Bytes { count, format }) => {
            random_bytes_output(count, format).map(|out| format!("{}\n", out).into_bytes())
        }

        Commands::Random(RandomCommands::Text {
            length,
            seed,
            charset,
            alphanumeric,
        }) => {
            let charset = select_charset(charset.as_deref(), alphanumeric)?;
            random_text_output(length, seed, &charset).map(|out| format!("{}\n", out).into_bytes())
        }

        Commands::Sample {
            path,
            length,
            seed,
            charset,
            alphanumeric,
        } => {
            let options = SampleOptions {
                path: path.unwrap_or_else(default_sample_path),
                length,
                seed,
                charset: select_charset(charset.as_deref(), alphanumeric)?,
            };
            create_sample(&options).map(String::into_bytes)
        }

        Commands::Verify {
            file,
            format,
            hash,
            json,
        } => {
            let options = VerifyOptions {
                format,
                algorithm: hash,
                json,
            };
            verify_sample(&file, &options).map(String::into_bytes)
        }

        Commands::Inspect {
            codepoint,
            random,
            window,
            seed,
            text,
        } => {
            let output = match codepoint {
                Some(codepoint) => inspect_codepoint(&codepoint)?,
                None if random => inspect_random(window, seed)?,
                None => inspect_text(&text.unwrap_or_default()),
            };
            Ok(output.into_bytes())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("bytecast {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    match run(command) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(&output).and_then(|_| stdout.flush()) {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
