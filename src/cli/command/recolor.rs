use crate::batch::options::BatchOptions;
use crate::batch::process::process_all;
use crate::core::color::Color;
use crate::error::app_err::AppErr;
use std::path::PathBuf;

pub fn recolor_dir(input_dir: PathBuf, output_dir: PathBuf, color: Color) -> Result<(), AppErr> {
    let opts = BatchOptions { input_dir, output_dir, color };
    println!("Recoloring {} → {} with color {}", opts.input_dir.display(), opts.output_dir.display(), opts.color);
    let report = process_all(&opts)?;
    print!("{report}");
    Ok(())
}
