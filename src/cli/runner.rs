//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::repl::Repl;
use crate::config::{ExplorerConfig, TOKEN_ENV_VAR};
use crate::decode::EnvelopeDecoder;
use crate::error::{Error, Result};
use crate::export::Exporter;
use crate::http::HttpClient;
use crate::pagination::Paginator;
use crate::record::encode;
use crate::session::{Command, Outcome, Session};
use crate::transport::{demo_records, HttpTransport, InMemoryTransport, Transport};
use crate::types::{check_page_size, ExportFormat};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let paginator = self.paginator(&config)?;

        match self.cli.command.as_ref().unwrap_or(&Commands::Explore) {
            Commands::Explore => self.explore(paginator, &config).await,
            Commands::Page { offset, limit } => {
                let limit = check_page_size(limit.unwrap_or(config.page_size))?;
                self.page(&paginator, *offset, limit).await
            }
            Commands::Get { id } => self.get(&paginator, id).await,
            Commands::Dump { format, output } => {
                self.dump(paginator, &config, *format, output.as_deref())
                    .await
            }
        }
    }

    /// Resolve configuration: file, then inline JSON, then flag overrides
    pub fn load_config(&self) -> Result<ExplorerConfig> {
        let mut config = match (&self.cli.config, &self.cli.config_json) {
            (Some(_), Some(_)) => {
                return Err(Error::config(
                    "Use either --config or --config-json, not both",
                ))
            }
            (Some(path), None) => ExplorerConfig::load(path)?,
            (None, Some(json)) => ExplorerConfig::from_json_str(json)?,
            (None, None) => ExplorerConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        config.validate()?;
        Ok(config)
    }

    /// Build the paginator over either the live API or generated records
    fn paginator(&self, config: &ExplorerConfig) -> Result<Paginator> {
        let decoder = Arc::new(EnvelopeDecoder::with_config(config.envelope()));

        let transport: Arc<dyn Transport> = if let Some(count) = self.cli.offline_demo {
            info!(records = count, "Serving generated records from memory");
            Arc::new(InMemoryTransport::new(demo_records(count)).with_envelope(config.envelope()))
        } else {
            let token = self
                .cli
                .token
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    Error::missing_field(format!(
                        "token (set {TOKEN_ENV_VAR} or pass --token; use --offline-demo to run without one)"
                    ))
                })?;
            let client = HttpClient::with_auth(config.http_client(), config.auth(token))?;
            Arc::new(HttpTransport::new(client, &config.collection_path))
        };

        Ok(Paginator::new(transport, decoder))
    }

    async fn explore(&self, paginator: Paginator, config: &ExplorerConfig) -> Result<()> {
        let session = Session::new(paginator, config.session())?;
        let mut repl = Repl::new(session)?;
        repl.run().await
    }

    /// Print one page with its pagination metadata
    async fn page(&self, paginator: &Paginator, offset: u64, limit: u32) -> Result<()> {
        let page = paginator.fetch_page(offset, limit).await?;
        let records: Vec<Value> = page.items().iter().map(encode).collect();
        let output = json!({
            "offset": page.offset(),
            "limit": page.limit(),
            "more": page.has_more(),
            "total": page.total(),
            "records": records,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    async fn get(&self, paginator: &Paginator, id: &str) -> Result<()> {
        let record = paginator.fetch_one(id).await?;
        println!("{}", serde_json::to_string_pretty(&encode(&record))?);
        Ok(())
    }

    /// Load the whole collection, then write it out
    ///
    /// Ctrl+C stops the load between pages; whatever was loaded is still
    /// written, with a warning that the file is partial.
    async fn dump(
        &self,
        paginator: Paginator,
        config: &ExplorerConfig,
        format: ExportFormat,
        output: Option<&Path>,
    ) -> Result<()> {
        let mut session = Session::new(paginator, config.session())?;

        let token = session.cancel_token();
        let watcher = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
        let loaded = session.execute(Command::LoadAll).await;
        watcher.abort();

        if let Outcome::Loaded(summary) = loaded? {
            if summary.cancelled {
                warn!(records = summary.records, "Load interrupted; export is partial");
            }
        }

        let records = session.corpus()?;
        let exporter = Exporter::new(config.exporter());
        let summary = match output {
            Some(path) => exporter.export_to(path, &records, format)?,
            None => exporter.export(&records, format)?,
        };
        println!(
            "Exported {} records to {}",
            summary.count,
            summary.path.display()
        );
        Ok(())
    }
}
