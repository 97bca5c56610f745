//! CLI module for typegraph.
//!
//! Commands:
//! - hierarchy: type hierarchy graph
//! - deps: module dependency graph
//! - stats: vertex and edge counts

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{OutputFormat, TypegraphConfig, CONFIG_FILE_NAME};
use crate::dot::{DotStyle, DotWriter};
use crate::graph::{
    compile_patterns, dependencies, filter_out_all, hierarchy, Entity, Graph, Strategy,
};
use crate::manifest::Manifest;

#[derive(Parser, Debug)]
#[command(name = "typegraph")]
#[command(about = "Type hierarchy and module dependency graphs as Graphviz DOT")]
pub struct Cli {
    /// Manifest describing modules and types (.json, .yaml, .toml)
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Config file (default: typegraph.toml next to the manifest)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Drop vertices whose names match this regex (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Draw types with members as UML records
    #[arg(long)]
    pub uml: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Types and their ancestors (everything if no type or module is given)
    Hierarchy {
        /// Fully-qualified type name (repeatable)
        #[arg(short = 't', long = "type")]
        types: Vec<String>,

        /// Include every type declared in this module (repeatable)
        #[arg(long = "module")]
        modules: Vec<String>,
    },

    /// Modules and their imports (everything if no module is given)
    Deps {
        /// Fully-qualified module name (repeatable)
        #[arg(long = "module")]
        modules: Vec<String>,

        /// Record direct imports only
        #[arg(long)]
        direct: bool,

        /// Order rows by number of importers
        #[arg(long)]
        ranked: bool,
    },

    /// Show graph statistics
    Stats,
}

/// Settings after merging config file and flags.
struct Settings {
    writer: DotWriter,
    format: OutputFormat,
    ranked: bool,
    exclude: Vec<String>,
}

impl Settings {
    fn resolve(cli: &Cli, config: TypegraphConfig) -> Self {
        let style = if cli.uml {
            DotStyle::Uml
        } else {
            config.output.style
        };
        let mut exclude = config.filter.exclude;
        exclude.extend(cli.exclude.iter().cloned());
        Self {
            writer: DotWriter::new(style),
            format: cli.format.unwrap_or(config.output.format),
            ranked: config.output.ranked,
            exclude,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let manifest = Manifest::load(&cli.manifest)
        .with_context(|| format!("loading manifest {}", cli.manifest.display()))?;
    info!(
        modules = manifest.module_count(),
        types = manifest.type_count(),
        "manifest loaded"
    );

    let config = match &cli.config {
        Some(path) => TypegraphConfig::try_load(path)?,
        None => TypegraphConfig::load(&default_config_path(&cli.manifest)),
    };
    let settings = Settings::resolve(&cli, config);
    let patterns = compile_patterns(&settings.exclude)?;

    let mut out = open_output(cli.output.as_deref())?;

    match &cli.command {
        Commands::Hierarchy { types, modules } => {
            let mut graph = Graph::new();
            for name in types {
                let Some(ty) = manifest.find_type(name) else {
                    bail!("unknown type `{name}`");
                };
                hierarchy::add_class_with_ancestors(&mut graph, ty);
            }
            for name in modules {
                let Some(module) = manifest.find_module(name) else {
                    bail!("unknown module `{name}`");
                };
                hierarchy::add_module_types(&mut graph, module);
            }
            if types.is_empty() && modules.is_empty() {
                hierarchy::add_everything(&mut graph, &manifest);
            }
            let graph = filter_out_all(graph, &patterns);
            emit(&settings, &graph, false, &mut out)?;
        }

        Commands::Deps {
            modules,
            direct,
            ranked,
        } => {
            let strategy = if *direct {
                Strategy::Direct
            } else {
                Strategy::Transitive
            };
            let mut graph = Graph::new();
            for name in modules {
                let Some(module) = manifest.find_module(name) else {
                    bail!("unknown module `{name}`");
                };
                dependencies::add_module_with_dependencies(&mut graph, module, strategy);
            }
            if modules.is_empty() {
                dependencies::add_everything(&mut graph, &manifest);
            }
            let graph = filter_out_all(graph, &patterns);
            emit(&settings, &graph, *ranked || settings.ranked, &mut out)?;
        }

        Commands::Stats => {
            let mut types = Graph::new();
            hierarchy::add_everything(&mut types, &manifest);
            let types = filter_out_all(types, &patterns);

            let mut modules = Graph::new();
            dependencies::add_everything(&mut modules, &manifest);
            let modules = filter_out_all(modules, &patterns);

            writeln!(out, "Types:   {}", types.stats())?;
            writeln!(out, "Modules: {}", modules.stats())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn emit<V: Entity>(
    settings: &Settings,
    graph: &Graph<V>,
    ranked: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match settings.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &graph.snapshot())?;
            writeln!(out)?;
        }
        OutputFormat::Dot if ranked => settings.writer.write_ranked_dot(graph, out)?,
        OutputFormat::Dot => settings.writer.write_dot(graph, out)?,
    }
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph written"
    );
    Ok(())
}

fn default_config_path(manifest: &Path) -> PathBuf {
    manifest
        .parent()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
