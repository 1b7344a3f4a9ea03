//! Command-line interface for civento-json

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
use civento_json::conversion::{FileConverter, Progress};
#[cfg(feature = "cli")]
use civento_json::exports::ExportConfig;
#[cfg(feature = "cli")]
use civento_json::limits::Limits;
#[cfg(feature = "cli")]
use civento_json::schema::{ExtractorConfig, Verbosity};

#[cfg(feature = "cli")]
const EXAMPLES: &str = "\
Examples:
    1) Create a json-datamodel file from a single input
    > civento2json path/to/civentofile.xml

    2) Create a json-datamodel file from a single input with additional information
    > civento2json -v 2 path/to/civentofile.xml

    3) Create a json-datamodel file for each of two inputs
    > civento2json path/to/civentofile1.xml path/to/civentofile2.xml

    4) Create a json-datamodel file for all xml-files in given directory
    > civento2json path/to/*.xml
";

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "civento2json")]
#[command(
    author,
    version,
    about = "Create a JSON file with an overview of the data model from a civento XML process export file",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Path of the XML file(s) to convert
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Verbosity level: 0 - very short, 1 - short, 2 - long
    #[arg(
        short,
        long = "verbose",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=2)
    )]
    verbose: u8,

    /// Output filename; can be used only for a single file input
    #[arg(short, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Pretty print the output
    #[arg(long)]
    pretty: bool,

    /// Size and nesting limits applied to each input
    #[arg(long, value_enum, default_value_t = LimitProfile::Default)]
    limits: LimitProfile,
}

/// Named `Limits` profiles selectable on the command line
#[cfg(feature = "cli")]
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LimitProfile {
    /// 100 MB, 1000 levels
    Default,
    /// 10 MB, 100 levels
    Strict,
    /// 1 GB, 10000 levels
    Permissive,
}

#[cfg(feature = "cli")]
impl From<LimitProfile> for Limits {
    fn from(profile: LimitProfile) -> Self {
        match profile {
            LimitProfile::Default => Limits::default(),
            LimitProfile::Strict => Limits::strict(),
            LimitProfile::Permissive => Limits::permissive(),
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let verbosity = match Verbosity::try_from(cli.verbose) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let converter = FileConverter::new(
        ExtractorConfig::new().with_verbosity(verbosity),
        ExportConfig::new().with_pretty(cli.pretty),
    )
    .with_limits(cli.limits.into());

    let outcomes = converter.convert_batch(&cli.files, cli.output.as_deref(), |event| match event {
        Progress::Started(input) => println!("Processing file {}", input.display()),
        Progress::Finished(outcome) => match &outcome.result {
            Ok(json_path) => println!("Success: file created {}", json_path.display()),
            Err(e) => eprintln!("Error: {}", e),
        },
    });

    match outcomes {
        Ok(outcomes) if outcomes.iter().all(|o| o.is_success()) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_per_file() {
                ExitCode::FAILURE
            } else {
                ExitCode::from(2)
            }
        }
    }
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
