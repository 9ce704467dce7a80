//! vinlookup - decode VINs and list their open recalls.

use std::process::ExitCode;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vinlookup_client::cli::{parse_args, USAGE};
use vinlookup_client::infrastructure::config::LookupConfig;
use vinlookup_client::page::{PageState, UiState};
use vinlookup_client::App;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries the rendered page.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vinlookup_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = parse_args(std::env::args().skip(1)).context("parsing arguments")?;
    if options.help {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let config = LookupConfig::from_env().context("loading configuration")?;
    tracing::info!(
        decode_url = %config.decode_url,
        recall_url = %config.recall_url,
        "Starting vinlookup"
    );

    let app = App::new(&config);
    let mut page = PageState::new();
    let mut all_shown = true;

    let inputs = if options.vins.is_empty() {
        read_stdin_lines().await.context("reading VINs from stdin")?
    } else {
        options.vins
    };

    for input in inputs {
        // Errors are already on the page and in the log.
        let _ = app.submit(&input, &mut page).await;
        all_shown &= page.ui_state() == UiState::ResultsShown;
        print!("{}", options.format.render(&page));
        println!();
    }

    Ok(if all_shown {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn read_stdin_lines() -> std::io::Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut inputs = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if !line.is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
