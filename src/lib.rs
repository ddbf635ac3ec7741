pub mod batch;
pub mod core;
pub mod error;

#[cfg(feature = "cli")]
mod cli;
#[cfg(feature = "cli")]
pub mod run;
