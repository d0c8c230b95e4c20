//! `enrich-receipt`: print request in, enriched receipt JSON out.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::config::{LOCALE_ENV, ReceiptConfig, TIMEZONE_ENV};
use crate::request::PrintRequest;

#[derive(Debug, Parser)]
#[command(name = "enrich-receipt")]
#[command(about = "Enrich a point-of-sale print request for a delivery receipt", long_about = None)]
#[command(version)]
pub struct Args {
    /// Print request JSON (`{ "order", "base", "partners" }`). Reads stdin when omitted.
    pub request: Option<PathBuf>,

    /// Fail instead of printing a receipt with blank fields.
    #[arg(long)]
    pub strict: bool,

    /// Date locale: es-CO, en-US or iso.
    #[arg(long, env = LOCALE_ENV)]
    pub locale: Option<String>,

    /// IANA timezone the order date is shown in.
    #[arg(long, env = TIMEZONE_ENV)]
    pub timezone: Option<String>,
}

impl Args {
    pub fn config(&self) -> anyhow::Result<ReceiptConfig> {
        ReceiptConfig::from_overrides(self.locale.as_deref(), self.timezone.as_deref())
            .context("invalid receipt configuration")
    }
}

fn read_request(path: Option<&Path>, mut stdin: impl Read) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            Ok(buf)
        }
    }
}

/// Enrich one request and write the receipt to `out`.
///
/// Field errors are logged and leave the field blank, unless `--strict`, where
/// the first one fails the run and nothing is written.
pub fn run(args: &Args, stdin: impl Read, mut out: impl Write) -> anyhow::Result<()> {
    let config = args.config()?;
    tracing::info!(locale = %config.locale(), timezone = %config.timezone(), "receipt config loaded");

    let raw = read_request(args.request.as_deref(), stdin)?;
    let request = PrintRequest::from_json(&raw).context("invalid print request")?;

    let enrichment = request.enrich(config);
    for err in &enrichment.field_errors {
        tracing::warn!(error = %err, "receipt field left blank");
    }

    let receipt = if args.strict {
        enrichment.into_result()?
    } else {
        enrichment.receipt
    };

    serde_json::to_writer_pretty(&mut out, &receipt).context("failed to write receipt")?;
    writeln!(out)?;
    Ok(())
}
