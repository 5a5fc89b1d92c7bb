use clap::Parser;

use snaplink::cli::{self, Cli};
use snaplink::config::AppConfig;
use snaplink::system::logging::init_logging;

fn main() {
    let config = AppConfig::from_env();
    let _guard = init_logging(&config);

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli.command, &config) {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}
