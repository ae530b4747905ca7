use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use design_engine::CodeTarget;
use figma_context_engine::{
    ComponentListing, FigmaConfig, GenerateRequest, NodeRequest, run_enumerate, run_generate,
    run_inspect, telemetry,
};
use tracing::{Level, debug};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "figma-codegen")]
#[command(about = "Inspect Figma nodes and generate HTML or React code from them")]
#[command(version)]
struct Cli {
    /// Log pipeline activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the classified style record of a node as JSON
    Inspect {
        /// Figma file key or file URL
        #[arg(long)]
        file_key: String,
        /// Exact, case-sensitive node name
        #[arg(long)]
        node_name: String,
    },

    /// Generate code for a node
    Generate {
        #[arg(long)]
        file_key: String,
        #[arg(long)]
        node_name: String,
        /// html or react
        #[arg(long, default_value = "html")]
        target: CodeTarget,
        /// Wrap HTML output in a standalone page
        #[arg(long)]
        document: bool,
        /// Write the code here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List COMPONENT, FRAME and RECTANGLE nodes of a file
    List {
        #[arg(long)]
        file_key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose)?;

    let cfg = FigmaConfig::from_env().context("reading Figma configuration")?;
    debug!(?cfg, "configuration loaded");

    match cli.command {
        Command::Inspect {
            file_key,
            node_name,
        } => cmd_inspect(&cfg, NodeRequest::new(file_key, node_name)).await,
        Command::Generate {
            file_key,
            node_name,
            target,
            document,
            out,
        } => {
            let req = GenerateRequest {
                node: NodeRequest::new(file_key, node_name),
                target,
                document,
            };
            cmd_generate(&cfg, req, out).await
        }
        Command::List { file_key } => cmd_list(&cfg, &file_key).await,
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("warn", level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init()
        .context("installing tracing subscriber")
}

async fn cmd_inspect(cfg: &FigmaConfig, req: NodeRequest) -> Result<()> {
    let report = run_inspect(cfg, &req)
        .await
        .with_context(|| format!("inspecting `{}`", req.node_name))?;

    eprintln!(
        "{} {} ({}) in {}",
        "Found".green().bold(),
        report.node_name,
        report.style.component_type,
        report.file_name
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn cmd_generate(cfg: &FigmaConfig, req: GenerateRequest, out: Option<PathBuf>) -> Result<()> {
    let generated = run_generate(cfg, &req)
        .await
        .with_context(|| format!("generating {} for `{}`", req.target, req.node.node_name))?;

    match out {
        Some(path) => {
            fs::write(&path, &generated.code)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "{} {} ({}) -> {}",
                "Generated".green().bold(),
                generated.component_name.as_deref().unwrap_or(&req.node.node_name),
                generated.target,
                path.display()
            );
        }
        None => println!("{}", generated.code),
    }
    Ok(())
}

async fn cmd_list(cfg: &FigmaConfig, file_key: &str) -> Result<()> {
    let listing = run_enumerate(cfg, file_key)
        .await
        .with_context(|| format!("listing components of `{file_key}`"))?;

    print!("{}", render_listing(&listing));
    Ok(())
}

fn render_listing(listing: &ComponentListing) -> String {
    let mut out = format!(
        "{} {} component(s) in {}\n",
        "Listed".green().bold(),
        listing.count,
        listing.file_name.bold()
    );
    for c in &listing.components {
        let size = match (c.width, c.height) {
            (Some(w), Some(h)) => format!("{w}x{h}"),
            _ => "-".to_string(),
        };
        out.push_str(&format!(
            "  {:<12} {:<10} {:>10}  {}\n",
            c.id.dimmed(),
            c.kind.as_str().cyan(),
            size,
            c.name
        ));
    }
    out
}
