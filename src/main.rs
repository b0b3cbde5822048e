use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use figdata::{replay, DigitizerConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// extract numeric data from images of published plots
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// open a figure and digitize it interactively
    Gui {
        /// figure image (PNG, GIF, JPG); a file dialog asks when omitted
        figure: Option<PathBuf>,

        /// output data file
        #[clap(short, long, default_value = "plot.data")]
        output: PathBuf,

        /// YAML config file
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// decimal digits written per value
        #[clap(short, long)]
        precision: Option<usize>,
    },
    /// run a session from a click script without opening a window
    Replay {
        /// click script: one `x y` or `outside` per line
        #[clap(long)]
        clicks: PathBuf,

        /// x-axis tick values, e.g. 0,1
        #[clap(long, allow_hyphen_values = true)]
        x_range: String,

        /// y-axis tick values, e.g. 0,1
        #[clap(long, allow_hyphen_values = true)]
        y_range: String,

        /// output data file
        #[clap(short, long, default_value = "plot.data")]
        output: PathBuf,

        /// decimal digits written per value
        #[clap(short, long, default_value_t = figdata::DEFAULT_PRECISION)]
        precision: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Gui {
            figure,
            output,
            config,
            precision,
        } => {
            let mut cfg = match config {
                Some(path) => DigitizerConfig::load_yaml(path)?,
                None => DigitizerConfig::default(),
            };
            if let Some(p) = precision {
                cfg.precision = p;
            }
            let figure = match figure {
                Some(f) => f,
                None => match rfd::FileDialog::new()
                    .add_filter("Images", &["png", "gif", "jpg", "jpeg"])
                    .pick_file()
                {
                    Some(f) => f,
                    None => {
                        info!("no figure selected");
                        return Ok(());
                    }
                },
            };
            figdata::run_digitizer(figure, output, cfg)?;
        }
        Command::Replay {
            clicks,
            x_range,
            y_range,
            output,
            precision,
        } => {
            let events = replay::load_script(&clicks)?;
            let mut session = Session::new(output).with_precision(precision);
            replay::run(&mut session, &x_range, &y_range, &events)?;
        }
    }
    Ok(())
}
