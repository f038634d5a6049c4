//! Generates a random set of curves, prints a point and derivative for
//! each, then the sorted circle radii and their sum.
//!
//! Log level defaults to WARN, INFO for this crate; override with `RUST_LOG`.

use curves::demo::{self, DemoParams};
use curves::CurvesError;

fn main() -> Result<(), CurvesError> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curves=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let report = demo::run(&DemoParams::default())?;
    println!("{report}");
    Ok(())
}
