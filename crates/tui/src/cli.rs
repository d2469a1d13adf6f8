use clap::{value_parser, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "taskdeck",
    version,
    about = "A keyboard-first dashboard for your team's projects, tasks, and activity.",
    after_help = "Examples:\n  taskdeck                                        Launch against $TASKDECK_API_URL\n  taskdeck --api-url http://localhost:4000/graphql\n  taskdeck --page-size 25 --log taskdeck_core=debug"
)]
pub struct Cli {
    /// Override the GraphQL endpoint (defaults to $TASKDECK_API_URL)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Bearer token sent with every request (defaults to $TASKDECK_API_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Rows requested per page
    #[arg(long = "page-size", value_name = "ROWS", default_value_t = 10, value_parser = value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Tracing filter directive written to stderr (e.g. "info", "taskdeck_core=debug")
    #[arg(long = "log", value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,
}
