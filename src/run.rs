use crate::cli::command::recolor::recolor_dir;
use crate::core::color::Color;
use crate::error::app_err::AppErr;
use clap::{Parser, error::ErrorKind};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tint",
    version,
    about = "Batch silhouette recolorer",
    long_about = "tint repaints every image in a directory with a single RGB color, deriving per-pixel transparency from the original luminance: white turns transparent, black turns opaque.",
    override_usage = "tint [INPUT_DIR] [OUTPUT_DIR] [-c COLOR]"
)]
struct Cli {
    /// Directory with source images (png/jpg/jpeg/bmp/tiff/webp)
    #[arg(value_name = "INPUT_DIR", default_value = "input")]
    input_dir: PathBuf,

    /// Directory for recolored images (created if missing)
    #[arg(value_name = "OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Fill color: "R,G,B" or "#RRGGBB"
    #[arg(short = 'c', long = "color", default_value = "0,0,0")]
    color: Color,
}

// ======================= Entry point ========================

pub fn run() -> Result<(), AppErr> {
    // Help/Version → print and return Ok(())
    // Other parse errors → print and exit with code 2
    let Some(cli) = (match Cli::try_parse() {
        Ok(cli) => Some(cli),
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print(); // graceful 0
                    None
                }
                _ => {
                    let _ = e.print();
                    std::process::exit(e.exit_code()); // usually 2
                }
            }
        }
    }) else {
        return Ok(());
    };

    recolor_dir(cli.input_dir, cli.output_dir, cli.color)
}
