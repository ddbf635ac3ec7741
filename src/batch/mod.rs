pub mod eligible;
pub mod options;
pub mod process;
pub mod report;
