use clap::Parser;

use book_shelf::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    book_shelf::interface::menu::run(&config)
}
