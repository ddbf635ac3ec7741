use crate::error::app_err::{AppErr, Cause};
use std::fmt;

/// Renders an error with its cause chain as an indented tree.
pub struct TreeFmt<'a> {
    pub root: &'a AppErr,
}

impl<'a> fmt::Display for TreeFmt<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_line(f: &mut fmt::Formatter<'_>, err: &AppErr, indent: usize) -> fmt::Result {
            for _ in 0..indent {
                f.write_str("  ")?;
            }
            writeln!(f, "{err}")?;
            for c in &err.causes {
                match c {
                    Cause::App(a) => write_line(f, a, indent + 1)?,
                    Cause::Std(e) => {
                        for _ in 0..(indent + 1) {
                            f.write_str("  ")?;
                        }
                        writeln!(f, "{e}")?;
                    }
                }
            }
            Ok(())
        }

        write_line(f, self.root, 0)
    }
}
