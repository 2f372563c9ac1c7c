// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process;
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;
use stage_orderer::config::consts::DEFAULT_LOG_FILTER;
use stage_orderer::config::{load_and_validate_config, Config, SourceConfig, StageConfig};
use stage_orderer::engine::OrdererFactory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Ordered pipeline, as printed with `--json`
#[derive(Debug, Serialize)]
struct OrderReport {
    pipeline: String,
    orderer: &'static str,
    sources: Vec<String>,
    processors: Vec<String>,
    removed_dependencies: Vec<RemovedReport>,
}

#[derive(Debug, Serialize)]
struct RemovedReport {
    from: String,
    to: String,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let json = args.iter().skip(1).any(|arg| arg == "--json");
    let files: Vec<&String> = args.iter().skip(1).filter(|arg| *arg != "--json").collect();

    if files.len() != 1 {
        eprintln!("Usage: {} <pipeline.yaml> [--json]", args[0]);
        eprintln!("Example: {} configs/annotation-pipeline.yaml", args[0]);
        process::exit(1);
    }

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(files[0], json) {
        eprintln!("❌ Failed to order {}: {:#}", files[0], e);
        process::exit(1);
    }
}

fn run(pipeline: &str, json: bool) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let config = load_and_validate_config(pipeline)
        .with_context(|| format!("loading pipeline '{}'", pipeline))?;
    let report = order_pipeline(pipeline, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("📋 Pipeline: {}", report.pipeline);
    println!("🔧 Orderer: {}", report.orderer);

    println!("\n📥 Sources:");
    if report.sources.is_empty() {
        println!("   none");
    }
    for (i, source) in report.sources.iter().enumerate() {
        println!("  {}. {}", i + 1, source);
    }

    println!("\n🔄 Processors:");
    for (i, processor) in report.processors.iter().enumerate() {
        println!("  {}. {}", i + 1, processor);
    }

    if !report.removed_dependencies.is_empty() {
        println!("\n⚠️  Dependencies dropped to break cycles:");
        for removed in &report.removed_dependencies {
            println!("   • {} → {}", removed.from, removed.to);
        }
    }

    println!("\n⏱️  Total Time (including config load): {:?}", start_time.elapsed());
    Ok(())
}

fn order_pipeline(pipeline: &str, config: Config) -> OrderReport {
    let orderer = OrdererFactory::from_options::<StageConfig, SourceConfig>(&config.orderer);
    let plan = orderer.plan(&config.processors);

    let removed_dependencies = plan
        .removed
        .iter()
        .map(|r| RemovedReport {
            from: config.processors[r.from].name.clone(),
            to: config.processors[r.to].name.clone(),
        })
        .collect();
    let processors = plan
        .apply(config.processors)
        .into_iter()
        .map(|p| p.name)
        .collect();
    let sources = orderer
        .order_sources(config.sources)
        .into_iter()
        .map(|s| s.name)
        .collect();

    OrderReport {
        pipeline: pipeline.to_string(),
        orderer: orderer.name(),
        sources,
        processors,
        removed_dependencies,
    }
}
