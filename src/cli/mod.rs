use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version, about = "Runs the arraylist contact demo", long_about = None)]
pub struct Cli {
    /// Initial capacity of the list
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    pub capacity: u64,

    /// Names to look up once the list is built
    #[arg(short, long = "search", value_name = "NAME", default_values_t = [
        "you".to_string(),
        "nonexistent_name".to_string(),
    ])]
    pub searches: Vec<String>,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level for the `-v` count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
