use std::path::Path;

/// Fixed input-format set; matched case-insensitively against the
/// file extension. Everything else is skipped without a report entry.
pub const ELIGIBLE_EXTS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tiff", "webp"];

pub fn is_eligible(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    ELIGIBLE_EXTS
        .iter()
        .any(|e| ext.eq_ignore_ascii_case(e))
}
