//! CLI entry point for the annograph loader.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use annograph_mutate::MutationBatch;

use annograph_load::config::load_graph_config;
use annograph_load::runner::run_batch;
use annograph_load::{batch_from_file, GraphClient, LoadReport};

#[derive(Parser)]
#[command(name = "annograph")]
#[command(about = "Load entity-annotation documents into the knowledge graph")]
struct Cli {
    /// Config file prefix (default: annograph).
    #[arg(short, long, default_value = "annograph")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate mutations and print them to stdout without executing anything.
    Print {
        /// Annotation JSON file.
        file: PathBuf,
    },
    /// Generate mutations and execute them phase-by-phase against the endpoint.
    Load {
        /// Annotation JSON file.
        file: PathBuf,

        /// GraphQL endpoint URL (overrides config).
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so `print` output on stdout stays pipeable.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Print { file } => {
            let batch = generate_from_file(&file)?;
            print_batch(&batch);
        }
        Command::Load { file, endpoint } => {
            let batch = generate_from_file(&file)?;

            let mut graph_config = load_graph_config(&cli.config);
            if let Some(endpoint) = endpoint {
                graph_config.endpoint = endpoint;
            }

            let client = GraphClient::new(&graph_config)?;
            tracing::info!(
                endpoint = %client.endpoint(),
                document = %batch.document_id,
                entry_mutations = batch.entry_mutations.len(),
                typed_mutations = batch.typed_mutations.len(),
                "Starting load"
            );

            let report = run_batch(&client, &batch).await;
            print_report(&report);

            if report.has_failures() {
                anyhow::bail!("{} mutations failed", report.total_failed());
            }
        }
    }

    Ok(())
}

fn generate_from_file(path: &Path) -> anyhow::Result<MutationBatch> {
    batch_from_file(path)
        .with_context(|| format!("Failed to generate mutations from {}", path.display()))
}

fn print_batch(batch: &MutationBatch) {
    println!("Document: {} ({})", batch.document_id, batch.document_path);
    println!(
        "Entities: {} ({} unique entry texts), relationships: {}",
        batch.summary.total_entities,
        batch.summary.unique_entry_texts,
        batch.summary.total_relationships
    );
    for (category, count) in &batch.summary.entity_counts {
        println!("  {category}: {count}");
    }

    println!("\n== Entry-node mutations ({}) ==", batch.entry_mutations.len());
    for m in &batch.entry_mutations {
        println!("\n# {}", m.description);
        println!("{}", m.mutation);
    }

    println!("\n== Typed-node mutations ({}) ==", batch.typed_mutations.len());
    for m in &batch.typed_mutations {
        println!("\n# {}", m.description);
        println!("{}", m.mutation);
    }

    println!("\n== Relationship mutations ==");
    println!("(relationship translation not yet supported; nothing to emit)");
}

fn print_report(report: &LoadReport) {
    println!(
        "Entry nodes:    {} succeeded, {} failed",
        report.entry.succeeded, report.entry.failed
    );
    println!(
        "Typed nodes:    {} succeeded, {} failed",
        report.typed.succeeded, report.typed.failed
    );
    println!(
        "Relationships:  {} succeeded, {} failed (translation not yet supported)",
        report.relationship.succeeded, report.relationship.failed
    );
}
