//! CLI entrypoint for lzdw
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lzdw_application::{
    GenerateArchitectureUseCase, GenerateInput, RenderDiagramUseCase, TextExtractor,
};
use lzdw_infrastructure::{ConfigLoader, DocxTextExtractor, FileConfig, OpenAiCompatGateway};
use lzdw_presentation::{AppState, Cli, Command, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        if let Ok(config) = ConfigLoader::load(cli.config.as_ref()) {
            println!("\nEffective configuration:\n{}", ConfigLoader::to_display_toml(&config));
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let api_key = config.inference.api_key.clone().unwrap_or_default();
    if api_key.is_empty() {
        warn!("No inference API key configured; set LZDW_INFERENCE__API_KEY");
    }

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiCompatGateway::new(
        &config.inference.endpoint,
        &config.inference.model,
        api_key,
    )?);

    match cli.command {
        Some(Command::Serve { host, port }) => serve(config, host, port, gateway).await,
        Some(Command::Generate {
            input,
            notes,
            out_dir,
        }) => generate(gateway, &input, notes, &out_dir).await,
        None => bail!("A subcommand is required. Try `lzdw serve` or `lzdw generate <file>`."),
    }
}

async fn serve(
    config: FileConfig,
    host: Option<IpAddr>,
    port: Option<u16>,
    gateway: Arc<OpenAiCompatGateway>,
) -> Result<()> {
    let host = match host {
        Some(ip) => ip,
        None => config
            .server
            .host
            .parse()
            .with_context(|| format!("invalid server.host '{}'", config.server.host))?,
    };
    let addr = SocketAddr::new(host, port.unwrap_or(config.server.port));

    let state = AppState::new(gateway, Arc::new(DocxTextExtractor::new()));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn generate(
    gateway: Arc<OpenAiCompatGateway>,
    input: &Path,
    notes: Option<String>,
    out_dir: &Path,
) -> Result<()> {
    let questionnaire = read_questionnaire(input)?;

    let mut generate_input = GenerateInput::new(questionnaire);
    if let Some(notes) = notes {
        generate_input = generate_input.with_extra_notes(notes);
    }

    let use_case = GenerateArchitectureUseCase::new(gateway);
    let architecture = use_case.execute(generate_input).await?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let render = RenderDiagramUseCase::new();
    let artifact = render.execute(&architecture);
    let drawio_path = out_dir.join(&artifact.file_name);
    std::fs::write(&drawio_path, &artifact.xml)
        .with_context(|| format!("failed to write {}", drawio_path.display()))?;

    let json_path = out_dir.join(render.architecture_file_name(&architecture));
    std::fs::write(&json_path, serde_json::to_string_pretty(&architecture)?)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    println!("Client:  {}", architecture.client_name);
    println!("Diagram: {}", drawio_path.display());
    println!("JSON:    {}", json_path.display());
    Ok(())
}

/// Read a questionnaire from disk: DOCX files go through the extractor,
/// anything else is treated as plain text.
fn read_questionnaire(input: &Path) -> Result<String> {
    let is_docx = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));

    if is_docx {
        let bytes = std::fs::read(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let extracted = DocxTextExtractor::new()
            .extract(&bytes)
            .with_context(|| format!("failed to extract text from {}", input.display()))?;
        for warning in &extracted.warnings {
            warn!("{warning}");
        }
        Ok(extracted.text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))
    }
}
