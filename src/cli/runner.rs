//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputArgs, SourceArgs};
use crate::config::SourceConfig;
use crate::content_type::{is_text_like, MediaType};
use crate::error::{Error, Result, ResultExt};
use crate::fetch::PaginatedFetcher;
use crate::http::HttpClient;
use crate::types::{JsonValue, User};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

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
        match &self.cli.command {
            Commands::Fetch { source, output } => {
                let config = self.load_source(source, None)?;
                let body = self.fetch::<JsonValue>(&config).await?;
                Self::write_output(&body, output)
            }
            Commands::Users {
                course,
                source,
                output,
            } => {
                let config = self.load_source(source, *course)?;
                if config.url.is_none()
                    && config.resource_path.is_none()
                    && config.course_code.is_none()
                {
                    return Err(Error::missing_field("course"));
                }
                let body = self.fetch::<User>(&config).await?;
                Self::write_output(&body, output)
            }
            Commands::ContentType { value } => Self::content_type(value),
        }
    }

    /// Build the source config: file first, then CLI overrides, then env token
    fn load_source(&self, args: &SourceArgs, course: Option<u64>) -> Result<SourceConfig> {
        let mut config = match &self.cli.config {
            Some(path) => SourceConfig::from_file(path)?,
            None => SourceConfig::default(),
        };

        if let Some(url) = &args.url {
            config.url = Some(url.clone());
        }
        if let Some(base_url) = &args.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(path) = &args.path {
            config.resource_path = Some(path.clone());
        }
        if course.is_some() {
            config.course_code = course;
        }
        if let Some(token) = &args.token {
            config.token = Some(token.clone());
        }
        for raw in &args.headers {
            let (name, value) = parse_header_arg(raw)?;
            config.headers.insert(name, value);
        }
        if let Some(mode) = args.next_url {
            config.next_url = mode;
        }
        if args.max_pages.is_some() {
            config.max_pages = args.max_pages;
        }
        if args.timeout.is_some() {
            config.timeout_secs = args.timeout;
        }
        if let Some(agent) = &args.user_agent {
            config.user_agent = Some(agent.clone());
        }

        Ok(config.with_env_token())
    }

    /// Run one fetch chain for `config`, honouring its deadline
    async fn fetch<T>(&self, config: &SourceConfig) -> Result<Bytes>
    where
        T: DeserializeOwned + Serialize,
    {
        let template = config.request_template()?;
        let client = HttpClient::with_config(config.http_config())?;
        let fetcher = PaginatedFetcher::new(client)
            .with_paginator(config.paginator())
            .with_options(config.fetch_options());

        info!(
            "Fetching {} (auth: {})",
            template.url(),
            config.auth().scheme()
        );
        let start = Instant::now();

        let body = match config.timeout() {
            Some(deadline) => tokio::time::timeout(deadline, fetcher.fetch_all::<T>(template))
                .await
                .map_err(|_| Error::Timeout {
                    timeout_ms: deadline.as_millis() as u64,
                })??,
            None => fetcher.fetch_all::<T>(template).await?,
        };

        debug!("Fetch finished in {:?}", start.elapsed());
        Ok(body)
    }

    /// Write the merged array to stdout or a file
    fn write_output(body: &[u8], args: &OutputArgs) -> Result<()> {
        let rendered = if args.pretty {
            let value: JsonValue = serde_json::from_slice(body)?;
            let mut pretty = serde_json::to_vec_pretty(&value)?;
            pretty.push(b'\n');
            pretty
        } else {
            let mut raw = body.to_vec();
            raw.push(b'\n');
            raw
        };

        match &args.output {
            Some(path) => {
                fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {} bytes to {}", rendered.len(), path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&rendered)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Report whether a Content-Type value is accepted
    fn content_type(value: &str) -> Result<()> {
        match MediaType::parse(value) {
            Some(media_type) => debug!(
                "Parsed media type {} (charset: {:?})",
                media_type.essence(),
                media_type.charset()
            ),
            None => debug!("Unparseable media type {value:?}"),
        }

        if is_text_like(value) {
            println!("accepted: {value}");
            Ok(())
        } else {
            Err(Error::content_type(value))
        }
    }
}

/// Split a `NAME:VALUE` header argument
pub(crate) fn parse_header_arg(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::invalid_header(raw, "expected NAME:VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_header(raw, "empty header name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
