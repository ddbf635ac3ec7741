pub mod color;
pub mod decode;
pub mod export;
pub mod luma;
pub mod recolor;
