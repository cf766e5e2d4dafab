mod analyzer;
mod app;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod store;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::{Timezone, set_parse_debug};

fn main() {
    let cli = Cli::parse();
    let (config, config_source) = Config::load();
    let cli = cli.with_config(&config);
    set_parse_debug(cli.debug);
    if cli.debug && let Some(path) = &config_source {
        eprintln!("Loaded config from {}", path.display());
    }

    let timezone = match Timezone::parse(cli.timezone.as_deref()) {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = app::run(&cli, &config, timezone) {
        eprintln!("{e}");
        std::process::exit(2);
    }
}
