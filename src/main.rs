use clap::{Parser, Subcommand, ValueEnum};
use drumtab::{
    parse_score, render_score_with, CellLabel, Config, DrumTabError, Frame, Instrument, Score,
    ViewMode, Viewer,
};
use log::LevelFilter;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{env, fs, io, process, thread};

/// Compile drum tab notation into timed hits.
///
/// Logging is controlled with RUST_LOG; see docs for the env_logger crate.
/// If RUST_LOG is not set, the log level defaults to Info.
/// Set RUST_LOG=drumtab=trace to see every beat-group as it is parsed.
#[derive(Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the score grid
    Score {
        /// Drum tab file, or - for standard input
        file: PathBuf,
        /// Show abbreviations (B, PA, ...) instead of tokens in the grid
        #[arg(long)]
        abbreviations: bool,
    },
    /// Dump the tempo and every hit
    Events {
        /// Drum tab file, or - for standard input
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Parse and report errors, if any
    Check {
        /// Drum tab file, or - for standard input
        file: PathBuf,
    },
    /// Play the score back in the terminal
    Play {
        /// Drum tab file, or - for standard input
        file: PathBuf,
        /// YAML playback configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides start-view from the configuration
        #[arg(long, value_enum)]
        view: Option<ViewArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Command-line spelling of `ViewMode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    Graphic,
    Score,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Graphic => ViewMode::Graphic,
            ViewArg::Score => ViewMode::Score,
        }
    }
}

fn read_source(path: &Path) -> Result<String, DrumTabError> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn load_score(path: &Path) -> Result<Score, DrumTabError> {
    let source = read_source(path)?;
    let score = parse_score(&source)?;
    log::info!(
        "{}: {} hits at {}",
        path.display(),
        score.events.len(),
        score.tempo
    );
    Ok(score)
}

fn describe(active: &BTreeSet<Instrument>) -> String {
    if active.is_empty() {
        return "-".to_string();
    }
    active
        .iter()
        .map(|i| format!("[{}] {}", i.abbreviation(), i.display_name()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn play(score: Score, config: &Config) {
    let viewer = Viewer::from_config(score, config);
    let interval = config.frame_interval();
    let start = Instant::now();
    let mut shown: Option<BTreeSet<Instrument>> = None;

    loop {
        let elapsed = start.elapsed().as_secs_f64();
        match viewer.frame(elapsed) {
            Frame::Score(lines) => {
                for line in lines {
                    println!("{}", line);
                }
                return;
            }
            Frame::Graphic { active, tempo } => {
                if shown.as_ref() != Some(&active) {
                    println!("{:>8.2}s  BPM: {:<3}  {}", elapsed, tempo.bpm(), describe(&active));
                    shown = Some(active);
                }
            }
        }
        if viewer.playback().is_finished(elapsed) {
            log::debug!("playback finished after {:.2}s", elapsed);
            return;
        }
        thread::sleep(interval);
    }
}

fn run() -> Result<(), DrumTabError> {
    let cli = Cli::parse();
    let mut log_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        log_builder.filter_level(LevelFilter::Info);
    }
    log_builder.init();

    match cli.command {
        Commands::Score {
            file,
            abbreviations,
        } => {
            let score = load_score(&file)?;
            let label = if abbreviations {
                CellLabel::Abbreviation
            } else {
                CellLabel::Token
            };
            for line in render_score_with(&score.events, &Instrument::ALL, label) {
                println!("{}", line);
            }
        }
        Commands::Events { file, format } => {
            let score = load_score(&file)?;
            let text = match format {
                Format::Json => serde_json::to_string_pretty(&score)
                    .map_err(|e| DrumTabError::Output(e.to_string()))?,
                Format::Yaml => serde_yaml::to_string(&score)
                    .map_err(|e| DrumTabError::Output(e.to_string()))?,
            };
            println!("{}", text.trim_end());
        }
        Commands::Check { file } => {
            load_score(&file)?;
            println!("{}: ok", file.display());
        }
        Commands::Play { file, config, view } => {
            let mut config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            if let Some(view) = view {
                config.start_view = view.into();
            }
            let score = load_score(&file)?;
            play(score, &config);
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
