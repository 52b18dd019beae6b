//! intake server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens
//! the SQLite store and mail client for whichever capabilities are
//! configured, and serves the contact endpoint over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use intake_core::email::OrgProfile;
use intake_http::{AppState, MailConfig, Notifier, ServerConfig};
use intake_mailer_http::{HttpMailer, MailerConfig};
use intake_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Intake contact-form server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("INTAKE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Resolve the persistence capability.
  let store = match &server_cfg.store_path {
    Some(path) => {
      let path = expand_tilde(path);
      let store = SqliteStore::open(&path)
        .await
        .with_context(|| format!("failed to open store at {path:?}"))?;
      Some(Arc::new(store))
    }
    None => {
      tracing::warn!(
        "store_path not configured; submissions will not be persisted"
      );
      None
    }
  };

  // Resolve the notification capability.
  let notifier = build_notifier(server_cfg.mail.as_ref())?;

  let state = AppState { store, notifier };

  let app = intake_http::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Build the notifier when the `[mail]` section carries both addresses;
/// anything less leaves notification off.
fn build_notifier(
  mail: Option<&MailConfig>,
) -> anyhow::Result<Option<Arc<Notifier<HttpMailer>>>> {
  let Some(mail) = mail else {
    tracing::warn!("mail not configured; admin notifications are disabled");
    return Ok(None);
  };
  let (Some(sender), Some(admin)) = (mail.sender.clone(), mail.admin.clone())
  else {
    tracing::warn!(
      "mail sender or admin address missing; admin notifications are disabled"
    );
    return Ok(None);
  };

  let mailer = HttpMailer::new(MailerConfig {
    api_url:   mail.api_url.clone(),
    api_token: mail.api_token.clone(),
  })
  .context("failed to build mail client")?;

  Ok(Some(Arc::new(Notifier {
    mailer,
    sender,
    admin,
    org: OrgProfile {
      name:    mail.org_name.clone(),
      website: mail.org_website.clone(),
    },
  })))
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
