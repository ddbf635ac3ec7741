use crate::error::app_err::AppErr;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Записать изображение в `out_path`; формат выбирается по расширению.
/// Кодируем сперва в память: неудачный encode не оставляет файла,
/// неудачный write подчищает за собой.
pub fn export_image(img: &RgbaImage, out_path: &Path) -> Result<(), AppErr> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let format = ImageFormat::from_path(out_path).map_err(|e| {
        AppErr::new("unsupported-format")
            .with_arg("path", out_path.display().to_string())
            .push_std(e)
    })?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format)
        .map_err(|e| {
            AppErr::new("encode-failed")
                .with_arg("path", out_path.display().to_string())
                .push_std(e)
        })?;

    if let Err(e) = fs::write(out_path, buf.get_ref()) {
        let _ = fs::remove_file(out_path);
        return Err(AppErr::new("encode-failed")
            .with_arg("path", out_path.display().to_string())
            .push_std(e));
    }
    Ok(())
}
