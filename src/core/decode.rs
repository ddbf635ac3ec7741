use crate::error::app_err::AppErr;
use image::{GenericImageView, ImageError, RgbaImage};

/// Декодируем произвольный растровый файл и нормализуем в RGBA8.
/// Источники без альфы получают A=255.
pub fn decode_rgba(buf: &[u8]) -> Result<RgbaImage, AppErr> {
    let dyn_img = image::load_from_memory(buf).map_err(|e| {
        let key = match &e {
            ImageError::Unsupported(_) => "unsupported-format",
            _ => "decode-failed",
        };
        AppErr::new(key).push_std(e)
    })?;

    let (w, h) = dyn_img.dimensions();
    if w == 0 || h == 0 {
        return Err(AppErr::new("image-empty")
            .with_arg("width", w)
            .with_arg("height", h));
    }

    Ok(dyn_img.to_rgba8())
}
