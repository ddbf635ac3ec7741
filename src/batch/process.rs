use crate::batch::eligible::is_eligible;
use crate::batch::options::BatchOptions;
use crate::batch::report::{BatchReport, FileReport};
use crate::core::color::Color;
use crate::core::decode::decode_rgba;
use crate::core::export::export_image;
use crate::core::recolor::recolor;
use crate::error::app_err::{AppErr, AppResult};
use std::fs;
use std::path::Path;

/// One sequential pass over `input_dir` (non-recursive): each eligible
/// file is decoded, recolored and written to `output_dir` under the
/// same name. Per-file errors land in the report and the loop goes on;
/// only enumeration-level failures are fatal. Inputs are never touched.
pub fn process_all(opts: &BatchOptions) -> AppResult<BatchReport> {
    if !opts.input_dir.is_dir() {
        return Err(AppErr::new("input-dir-missing")
            .with_arg("path", opts.input_dir.display().to_string()));
    }
    fs::create_dir_all(&opts.output_dir).map_err(|e| {
        AppErr::from(e)
            .ctx("output-dir-create")
            .with_arg("path", opts.output_dir.display().to_string())
    })?;

    let mut report = BatchReport::default();
    for entry in fs::read_dir(&opts.input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_eligible(&path) {
            continue;
        }

        let out_path = opts.output_dir.join(entry.file_name());
        let outcome = recolor_file(&path, &out_path, opts.color).map(|_| out_path);
        report.entries.push(FileReport {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            outcome,
        });
    }
    Ok(report)
}

/// Один файл: read → decode → recolor → export. Ровно одна попытка.
fn recolor_file(input: &Path, out_path: &Path, color: Color) -> AppResult<()> {
    let data = fs::read(input)?;
    let src = decode_rgba(&data)?;
    let img = recolor(&src, color);
    export_image(&img, out_path)
}
