// heapviz - step-by-step heap sort in the terminal

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use heapviz::animation::SystemClock;
use heapviz::config::AppConfig;
use heapviz::logging::{self, LogOptions, LogTarget};
use heapviz::pipeline::{self, mount};
use heapviz::Result;

#[derive(Parser)]
#[command(name = "heapviz")]
#[command(about = "Animated heap sort over a random sequence", long_about = None)]
struct Cli {
    /// Number of values to sort
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Smallest value the generator may produce
    #[arg(long)]
    min: Option<u32>,

    /// Largest value the generator may produce
    #[arg(long)]
    max: Option<u32>,

    /// Pause between steps, in milliseconds
    #[arg(short, long)]
    speed: Option<u64>,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sort once and print a trace instead of taking over the terminal
    #[arg(long)]
    headless: bool,

    /// Let Esc end a run early
    #[arg(long)]
    allow_cancel: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `heapviz=debug` (defaults to RUST_LOG, then `warn`)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(min) = self.min {
            config.min = min;
        }
        if let Some(max) = self.max {
            config.max = max;
        }
        if let Some(speed) = self.speed {
            config.speed_ms = speed;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.allow_cancel {
            config.allow_cancel = true;
        }
        config.validate()?;
        Ok(config)
    }

    fn log_options(&self) -> LogOptions {
        LogOptions {
            level: self.log_level.clone(),
            file: self.log_file.clone(),
            fallback: if self.headless {
                LogTarget::Stderr
            } else {
                LogTarget::Discard
            },
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.app_config()?;
    logging::init(&cli.log_options())?;

    if cli.headless {
        let stdout = std::io::stdout();
        pipeline::run_headless(&config, stdout.lock(), &mut SystemClock)?;
        return Ok(());
    }

    let mut handle = mount::mount(&config)?;
    let result = mount::run(&mut handle);
    handle.unmount()?;
    result
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("heapviz: {err}");
            ExitCode::FAILURE
        }
    }
}
