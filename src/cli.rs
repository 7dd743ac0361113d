use clap::Parser;

/// Generate a static HTML index page for a Debian-style package repository
#[derive(Parser, Debug)]
#[command(name = "aptly-webindex")]
#[command(version)]
#[command(
    about = "Generate a static HTML index page for a Debian-style package repository",
    long_about = None
)]
pub struct Args {
    /// Path to the repository root containing dists/ and pool/
    /// (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Page title override
    #[arg(short, long)]
    pub title: Option<String>,

    /// Explicit config file path (default: webindex.toml in the repository root)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
