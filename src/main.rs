use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use depcheck::export::{self, ExportFormat};
use depcheck::graph::build_graph;
use depcheck::logger::init_logger;
use depcheck::parser::{self, PackageList};

#[derive(Parser)]
#[command(name = "depcheck")]
#[command(version)]
#[command(about = "Builds package import graphs from go list metadata", long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the import graph and render it
    Graph {
        /// Read `go list -json` output from a file (defaults to stdin)
        #[arg(short, long, conflicts_with = "go_list")]
        input: Option<PathBuf>,

        /// Run `go list -json` in this directory instead of reading input
        #[arg(long, value_name = "DIR")]
        go_list: Option<PathBuf>,

        /// Package patterns passed to `go list` (defaults to ./...)
        #[arg(short, long, requires = "go_list")]
        pattern: Vec<String>,

        /// Import paths that must exist in the graph
        #[arg(short, long, env = "DEPCHECK_ROOTS", value_delimiter = ',')]
        root: Vec<String>,

        /// Import paths to leave out of the graph
        #[arg(short, long, env = "DEPCHECK_EXCLUDES", value_delimiter = ',')]
        exclude: Vec<String>,

        /// Output format: dot, json, csv, markdown
        #[arg(short, long, env = "DEPCHECK_FORMAT", default_value = "dot")]
        format: ExportFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

fn load_packages(
    input: Option<&PathBuf>,
    go_list: Option<&PathBuf>,
    patterns: &[String],
) -> Result<PackageList> {
    let pkgs = match (input, go_list) {
        (_, Some(dir)) => parser::collect(dir, patterns)
            .with_context(|| format!("collecting packages in {}", dir.display()))?,
        (Some(path), None) => parser::parse_file(path)
            .with_context(|| format!("reading packages from {}", path.display()))?,
        (None, None) => {
            parser::parse_reader(io::stdin().lock()).context("reading packages from stdin")?
        }
    };
    parser::validate(&pkgs)?;
    info!(packages = pkgs.len(), "loaded package list");
    Ok(pkgs)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    match &cli.command {
        Some(Commands::Graph {
            input,
            go_list,
            pattern,
            root,
            exclude,
            format,
            output,
        }) => {
            let pkgs = load_packages(input.as_ref(), go_list.as_ref(), pattern)?;

            let roots: Vec<&str> = root.iter().map(String::as_str).collect();
            let excludes: Vec<&str> = exclude.iter().map(String::as_str).collect();
            let graph = build_graph(&pkgs, &roots, &excludes)?;

            match output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    export::export(*format, &graph, &mut writer)?;
                    writer.flush()?;
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    export::export(*format, &graph, &mut stdout)?;
                }
            }
        }
        Some(Commands::Version) => {
            println!("depcheck v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("depcheck - package import graph builder");
            println!("Run 'go list -json ./... | depcheck graph' to render a graph");
            println!("Run 'depcheck --help' for more information");
        }
    }

    Ok(())
}
