use tint_rs::error::tree::TreeFmt;
use tint_rs::run::run;

fn main() {
    if let Err(e) = run() {
        eprint!("💥 Failed to run:\n{}", TreeFmt { root: &e });
        std::process::exit(1);
    }
}
