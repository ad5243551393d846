//! `StatementLedger` - command-line dashboard for financial PDF attachments.

mod render;
mod settings;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings::Settings;
use statementledger_client::BackendClient;
use statementledger_core::preview::DEFAULT_FAILURE_MESSAGE;
use statementledger_core::{
    Document, DocumentSource, DocumentView, MemoryStore, PreviewController, PreviewStatus,
    Resolution, UserIdentity, categorize, filter_documents, summarize,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Backend base URL (overrides the settings file)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Mailbox address to list documents for (overrides the settings file)
    #[arg(long, global = true)]
    user_email: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List documents grouped by category, with the credit card summary
    List {
        /// Case-insensitive search over subjects and filenames
        #[arg(short, long, default_value = "")]
        query: String,

        /// Which view to show: dashboard, bank, credit or all
        #[arg(short, long, default_value = "dashboard")]
        view: DocumentView,
    },

    /// Fetch a preview, prompting for the PDF password when needed
    Preview {
        /// Source message identifier
        message_id: String,

        /// Attachment filename
        filename: String,

        /// Where to write the decrypted PDF (defaults to the filename)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the download link for an attachment
    DownloadUrl {
        /// Source message identifier
        message_id: String,

        /// Attachment filename
        filename: String,
    },

    /// Print the effective settings
    Config {
        /// Write the effective settings back to the settings file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "statementledger=info,statementledger_core=info,statementledger_client=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let settings = settings::load_settings()
        .await?
        .with_overrides(args.backend_url, args.user_email);

    match args.command {
        Command::List { query, view } => list(&settings, &query, view).await,
        Command::Preview {
            message_id,
            filename,
            out,
        } => preview(&settings, message_id, filename, out).await,
        Command::DownloadUrl {
            message_id,
            filename,
        } => {
            let client = backend(&settings)?;
            println!(
                "{}",
                client.download_url(&user(&settings)?, &message_id, &filename)
            );
            Ok(())
        }
        Command::Config { save } => config(&settings, save).await,
    }
}

fn user(settings: &Settings) -> anyhow::Result<UserIdentity> {
    settings
        .user_email
        .as_deref()
        .map(UserIdentity::new)
        .context("no user email configured; pass --user-email or add it to the settings file")
}

fn backend(settings: &Settings) -> anyhow::Result<BackendClient> {
    let client =
        BackendClient::new(&settings.backend_url)?.with_timeout(settings.request_timeout())?;
    Ok(client)
}

async fn list(settings: &Settings, query: &str, view: DocumentView) -> anyhow::Result<()> {
    let user = user(settings)?;
    let documents = load_documents(&backend(settings)?, &user).await?;
    let filtered = filter_documents(&documents, query);
    info!(
        total = documents.len(),
        shown = filtered.len(),
        "Loaded documents"
    );

    println!("{} / {}\n", user.username(), view.display_name());

    if matches!(view, DocumentView::Dashboard | DocumentView::Credit) {
        let groups = categorize(filtered.iter().copied());
        println!(
            "{}",
            render::summary(&summarize(groups.credit_cards.iter().copied()))
        );
    }

    for section in view.sections(&filtered) {
        println!("{}", render::section(&section));
    }
    Ok(())
}

async fn load_documents<S: DocumentSource>(
    source: &S,
    user: &UserIdentity,
) -> anyhow::Result<Vec<Document>> {
    source
        .list_documents(user)
        .await
        .with_context(|| format!("listing documents for {user}"))
}

async fn preview(
    settings: &Settings,
    message_id: String,
    filename: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut controller =
        PreviewController::new(backend(settings)?, user(settings)?, MemoryStore::default());
    if let Some(limit) = settings.preview_timeout() {
        controller = controller.with_timeout(limit);
    }

    let out = out.unwrap_or_else(|| PathBuf::from(&filename));
    let mut resolution = controller
        .open(Document::new(message_id, filename, String::new()))
        .await;
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match resolution {
            Resolution::Applied(PreviewStatus::Ready) => break,
            Resolution::Applied(PreviewStatus::AwaitingPassword) => {
                let hint = controller
                    .inspect(|s| s.error_message().map(ToString::to_string))
                    .await;
                if let Some(hint) = hint {
                    eprintln!("{hint}");
                }
                eprint!("PDF password (empty to cancel): ");
                std::io::stderr().flush()?;

                let password = stdin.next_line().await?.unwrap_or_default();
                let password = password.trim();
                if password.is_empty() {
                    controller.close().await;
                    bail!("preview cancelled");
                }
                resolution = controller
                    .submit_password(password)
                    .await
                    .context("preview is no longer awaiting a password")?;
            }
            Resolution::Applied(_) => {
                let message = controller
                    .inspect(|s| {
                        s.error_message()
                            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                            .to_string()
                    })
                    .await;
                bail!(message);
            }
            Resolution::Stale => bail!("preview was superseded"),
        }
    }

    let bytes = controller
        .inspect(|s| s.content().map(|content| content.bytes().clone()))
        .await
        .context("preview finished without content")?;
    tokio::fs::write(&out, &bytes)
        .await
        .with_context(|| format!("writing {}", out.display()))?;
    controller.close().await;

    info!(path = %out.display(), len = bytes.len(), "Preview written");
    println!("{}", out.display());
    Ok(())
}

async fn config(settings: &Settings, save: bool) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    if save {
        let path = settings::save_settings(settings).await?;
        eprintln!("Saved to {}", path.display());
    }
    Ok(())
}
