//! Generate every chart into a directory.
//!
//! ```text
//! cargo run --example generate-charts -- [config.toml] [out-dir]
//! ```

use metallo_pdf::charts::{self, ChartKind};
use metallo_pdf::{ChartError, Config};

fn main() -> Result<(), ChartError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let out = args.next().unwrap_or_else(|| "downloads".to_string());

    for kind in ChartKind::ALL {
        charts::write_to_dir(kind.chart(), &config, &out)?;
    }
    Ok(())
}
