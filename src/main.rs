use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use depview::core::{
    GraphAssembler, ProjectSource, RawExclusion, ReportConfig, TraversalConfig,
};
use depview::render::{DotRenderer, ReportGenerator};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "depview",
    version = "0.1.0",
    author = "depview developers",
    about = "Dependency overview graph reports for resolved build dependency trees"
)]
struct Cli {
    /// Resolved dependency tree file, or a directory of *.deps.json module trees
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Report output directory
    #[arg(short, long, value_name = "DIR", default_value = "target/site")]
    output: PathBuf,

    /// Comma-separated group prefixes to include (the root project's group is always kept)
    #[arg(long, value_name = "GROUPS", default_value = "")]
    includes: String,

    /// JSON file with exclusion rules
    #[arg(long, value_name = "FILE")]
    exclusions: Option<PathBuf>,

    /// Maximum transitive depth to pursue; negative means unbounded
    #[arg(long, value_name = "N", default_value_t = -1, allow_negative_numbers = true)]
    max_depth: i32,

    /// Only traverse dependencies with these scopes
    #[arg(long, value_name = "SCOPES", value_delimiter = ',')]
    scopes: Vec<String>,

    /// Scopes hidden from edge labels
    #[arg(long, value_name = "SCOPES", value_delimiter = ',', default_value = "compile")]
    suppressed_scopes: Vec<String>,

    /// Show artifact versions in vertex labels
    #[arg(long)]
    show_version: bool,

    /// Use full coordinates as vertex labels
    #[arg(long)]
    full_label: bool,

    /// Rendered graph width in pixels
    #[arg(long, value_name = "PX", default_value_t = 1200)]
    width: u32,

    /// Rendered graph height in pixels
    #[arg(long, value_name = "PX", default_value_t = 1200)]
    height: u32,

    /// Report name (page and image file stem)
    #[arg(long, value_name = "NAME", default_value = "overview")]
    report_name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let start_time = Instant::now();

    let exclusions: Vec<RawExclusion> = match &cli.exclusions {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read exclusions {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("malformed exclusions {}", path.display()))?
        }
        None => Vec::new(),
    };

    let traversal = TraversalConfig::new(&cli.includes, cli.max_depth, &cli.scopes, &exclusions)?;
    let report = ReportConfig {
        report_name: cli.report_name,
        width: cli.width,
        height: cli.height,
        show_version: cli.show_version,
        full_label: cli.full_label,
        suppressed_scopes: cli.suppressed_scopes,
    };

    println!("Loading dependency trees from {}", cli.input.display());
    let source = ProjectSource::new();
    let projects = source.load(&cli.input)?;
    println!("Found {} project tree(s)", projects.len());

    println!("Assembling dependency graph");
    let graph = GraphAssembler::new(traversal).assemble(&projects)?;
    println!(
        "Graph: {} artifacts, {} dependency edges",
        graph.node_count(),
        graph.edge_count()
    );

    let renderer = DotRenderer::new();
    let generator = ReportGenerator::new(&report);
    let page = generator.generate(&graph, &projects[0].name, &renderer, &cli.output)?;
    println!("Report at: {}", page.display());

    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
