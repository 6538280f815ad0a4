use clap::{ArgAction, Parser};
use graythresh::Algorithm;
use graythresh_cli::{BatchConfig, run_batch};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graythresh")]
#[command(version, about = "Apply grayscale binarization and filters to a directory of PNG files", long_about = None)]
struct Cli {
    /// Directory containing input PNG files
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Output root; results go to <DIR>/<method>/<file>
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Method to apply (repeatable, default: all). One of: bernsen, niblack,
    /// adaptive, otsu-histogram, otsu, logarithmic, linear-contrast, median,
    /// minimum, maximum, laplacian
    #[arg(short, long = "method", value_name = "NAME")]
    methods: Vec<Algorithm>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let algorithms = if cli.methods.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.methods
    };
    let config = BatchConfig {
        input_dir: cli.input,
        output_dir: cli.output,
        algorithms,
    };

    match run_batch(&config) {
        Ok(report) => {
            println!(
                "processed {} file(s), wrote {} image(s), {} failure(s)",
                report.files,
                report.written,
                report.failures.len()
            );
            for failure in &report.failures {
                let method = failure.algorithm.map_or("decode", |a| a.name());
                eprintln!("  {} [{}]: {}", failure.path.display(), method, failure.message);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
