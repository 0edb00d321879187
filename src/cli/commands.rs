//! CLI commands and argument parsing

use clap::{Parser, ValueEnum};

/// Query the USAJOBS REST API
#[derive(Parser, Debug)]
#[command(name = "usajobs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Endpoint to call
    pub action: Action,

    /// Endpoint parameters as a JSON object keyed by field name
    #[arg(short, long, value_name = "JSON")]
    pub data: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub prettify: bool,

    /// Follow pagination and print every page
    #[arg(long)]
    pub all_pages: bool,

    /// Stop after this many pages (implies --all-pages)
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Email address associated with the API key [default: $USAJOBS_AUTH_USER]
    #[arg(short = 'A', long = "user-agent", value_name = "EMAIL")]
    pub auth_user: Option<String>,

    /// API key for the Job Search API [default: $USAJOBS_AUTH_KEY]
    #[arg(long, value_name = "KEY")]
    pub auth_key: Option<String>,

    /// Skip TLS certificate validation
    #[arg(long)]
    pub no_ssl_verify: bool,

    /// API root URL [default: $USAJOBS_BASE_URL or https://data.usajobs.gov]
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether pagination should be followed
    pub fn paginate(&self) -> bool {
        self.all_pages || self.max_pages.is_some()
    }
}

/// USAJOBS endpoints reachable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Current job announcements
    Search,
    /// Historic job announcements
    #[value(name = "historicjoa")]
    HistoricJoa,
    /// Full text of historic job announcements
    #[value(name = "announcementtext")]
    AnnouncementText,
}
