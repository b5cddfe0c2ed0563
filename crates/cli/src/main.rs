use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use dsatur::coloring::{color_graph, Mode};
use dsatur::gen::{draw_gnp, GnpCfg, ReplayToken};
use dsatur::normalize::normalize_edges;

mod dimacs;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Graph-coloring runner and instance tooling")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Color a DIMACS graph and write the result as JSON
    Color {
        #[arg(long)]
        input: PathBuf,
        /// Mode selector: "greedy" or "bnb"
        #[arg(long, default_value = "bnb")]
        mode: String,
        /// In bnb mode, stop once the greedy bound has improved by this many
        /// colors instead of searching to the proven optimum
        #[arg(long)]
        improve: Option<usize>,
        /// Wall-clock budget in seconds, shared across both bnb phases
        #[arg(long)]
        timeout: Option<u64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw a random G(n, p) instance and write it as DIMACS
    Gen {
        #[arg(long)]
        vertices: usize,
        #[arg(long, default_value_t = 0.5)]
        edge_prob: f64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Color {
            input,
            mode,
            improve,
            timeout,
            out,
        } => run_color(&input, &mode, improve, timeout, &out, cmd.tag),
        Action::Gen {
            vertices,
            edge_prob,
            seed,
            out,
        } => run_gen(vertices, edge_prob, seed, &out),
        Action::Report => report(cmd.tag),
    }
}

/// One coloring run, as written to `--out`.
#[derive(Serialize)]
struct RunRecord {
    mode: String,
    input: String,
    tag: Option<String>,
    wall_ms: u64,
    /// `None` when the budget expired before any complete coloring.
    color_count: Option<usize>,
    /// (original label, color) pairs; empty when no coloring was found.
    coloring: Vec<(u64, usize)>,
}

fn run_color(
    input: &Path,
    mode: &str,
    improve: Option<usize>,
    timeout: Option<u64>,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    // Reject an unknown selector before any file or search work.
    let mut parsed: Mode = mode.parse()?;
    if let Mode::ExactWithBound { improve: by } = &mut parsed {
        *by = improve;
    }

    let text =
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let labeled = dimacs::parse(&text)?;
    let (edges, labels) = normalize_edges(&labeled);
    tracing::info!(
        input = %input.display(),
        mode,
        vertices = labels.len(),
        edges = edges.len(),
        "color"
    );

    let started = Instant::now();
    let result = color_graph(&edges, parsed, timeout.map(Duration::from_secs));
    let wall_ms = started.elapsed().as_millis() as u64;

    match &result {
        Some(coloring) => tracing::info!(colors = coloring.color_count, wall_ms, "done"),
        None => tracing::warn!(wall_ms, "budget expired before any complete coloring"),
    }

    let record = RunRecord {
        mode: mode.to_string(),
        input: input.display().to_string(),
        tag: tag.clone(),
        wall_ms,
        color_count: result.as_ref().map(|c| c.color_count),
        coloring: result
            .map(|c| labels.iter().copied().zip(c.assignment).collect())
            .unwrap_or_default(),
    };

    write_artifact(out, &serde_json::to_vec_pretty(&record)?)?;
    provenance::write_sidecar(
        out,
        serde_json::json!({
            "input": input.to_string_lossy(),
            "mode": mode,
            "improve": improve,
            "timeout_s": timeout,
            "tag": tag,
        }),
    )?;
    Ok(())
}

fn run_gen(vertices: usize, edge_prob: f64, seed: u64, out: &Path) -> Result<()> {
    let cfg = GnpCfg {
        vertices,
        edge_prob,
    };
    let edges = draw_gnp(cfg, ReplayToken { seed, index: 0 });
    tracing::info!(vertices, edge_prob, seed, edges = edges.len(), "gen");

    write_artifact(out, dimacs::render(vertices, &edges).as_bytes())?;
    provenance::write_sidecar(
        out,
        serde_json::json!({
            "vertices": vertices,
            "edge_prob": edge_prob,
            "seed": seed,
        }),
    )?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "crate_version": dsatur::VERSION,
        "tag": tag,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn write_artifact(out: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}
