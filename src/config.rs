use std::path::PathBuf;

use clap::Parser;

/// 起動設定。保存先はここから明示的にStoreへ渡す。
#[derive(Debug, Clone, Parser)]
#[command(name = "book-shelf", version, about = "Personal library catalog")]
pub struct Config {
    /// Path to the library JSON file
    #[arg(value_name = "LIBRARY", default_value = "library.json")]
    pub library: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// env_loggerの既定フィルタ
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
