use crate::core::color::Color;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Must exist; a missing input directory aborts the whole batch.
    pub input_dir: PathBuf,
    /// Created (recursively) if absent.
    pub output_dir: PathBuf,
    /// Fill color for every output pixel.
    pub color: Color,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            color: Color::default(), // black
        }
    }
}
