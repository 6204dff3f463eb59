// repokit-github: synchronise a GitHub repository's metadata with the
// settings declared in the project's repokit.yml.

use clap::Parser;
use repokit_github::cli::{Cli, report_error};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.execute().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    }
}
