pub mod app_err;
pub mod args;
pub mod tree;
