use clap::Parser;

/// Confab — an interactive chat session against the Together API.
#[derive(Parser, Debug)]
#[command(name = "confab", version, about)]
pub struct Args {
    /// Model identifier to use for completions.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Sampling temperature.
    #[arg(short = 't', long)]
    pub temperature: Option<f64>,

    /// File whose contents seed the system message.
    #[arg(long)]
    pub system_file: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
