mod app;
mod batch;
mod cli;
mod config;
mod output;

use clap::Parser;

use cli::Cli;
use config::Config;
use datefmt::utils::set_debug;

fn main() {
    let cli = Cli::parse();
    set_debug(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    match app::run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
