use anyhow::Context;
use serde::Serialize;
use udpcraft_protocol::{build_fixture, render_report, Fixture, FixtureParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `message:` / `payload length:` / `javadump:` report.
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonReport {
    pub message_hex: String,
    pub signature_hex: String,
    pub payload_len: usize,
    pub javadump: String,
}

impl JsonReport {
    pub fn from_fixture(fixture: &Fixture) -> Self {
        let report = render_report(fixture);
        Self {
            message_hex: hex::encode(&report.message),
            signature_hex: hex::encode(fixture.signature()),
            payload_len: report.payload_len,
            javadump: report.javadump,
        }
    }
}

pub fn reference_params(named: bool) -> FixtureParams<'static> {
    if named {
        FixtureParams::reference_named()
    } else {
        FixtureParams::reference()
    }
}

pub fn render(params: &FixtureParams<'_>, format: OutputFormat) -> anyhow::Result<String> {
    let fixture = build_fixture(params).context("build reference fixture")?;
    match format {
        OutputFormat::Text => Ok(render_report(&fixture).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonReport::from_fixture(&fixture))
            .context("serialize json report"),
    }
}
