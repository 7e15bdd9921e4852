use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use doclink::config::{load_config, save_config};
use doclink::linker::{resolve_project_root, DocLinker};
use doclink::registry::SymbolStore;
use doclink::typespec::{display_list, TypeParser};

/// Inspect how documentation annotations are parsed and linked.
#[derive(Parser)]
#[command(name = "doclink", about = "Inspect type specifiers and see-also references")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default doclink.toml
    Init {
        /// Project path (default: current directory)
        path: Option<String>,
    },
    /// Parse type specifiers and print their trees
    Types {
        /// Type specifiers, e.g. "Array<String>"
        specs: Vec<String>,
        /// Project path, for grammar settings
        #[arg(short, long)]
        path: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Classify and resolve a see-also reference
    Resolve {
        /// Raw see-tag body, e.g. "Foo::Bar#baz the baz method"
        body: String,
        /// Enclosing namespace of the documented entity
        #[arg(short, long, default_value = "")]
        namespace: String,
        /// Project path
        #[arg(short, long)]
        path: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> doclink::errors::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let project_path = resolve_project_root(path);
            let config = load_config(&project_path)?;
            save_config(&project_path, &config)?;
            println!("Wrote doclink.toml in {}", project_path.display());
        }
        Commands::Types { specs, path, json } => {
            let project_path = resolve_project_root(path);
            let config = load_config(&project_path)?;
            let parser = TypeParser::with_options(config.grammar_options());
            for spec in &specs {
                let nodes = parser.parse(spec)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&nodes)?);
                } else {
                    println!("{} => {}", spec, display_list(&nodes));
                }
            }
        }
        Commands::Resolve {
            body,
            namespace,
            path,
        } => {
            let project_path = resolve_project_root(path);
            let config = load_config(&project_path)?;
            let symbols_file = config.symbols_file(&project_path);
            let linker = if symbols_file.exists() {
                DocLinker::open(&project_path)?
            } else {
                warn!(
                    path = %symbols_file.display(),
                    "no symbol table found; nothing will resolve"
                );
                DocLinker::new(config, Arc::new(SymbolStore::default()))
            };
            let tag = linker.resolve_see(&body, &namespace);
            println!("{}", serde_json::to_string_pretty(&tag)?);
        }
    }
    Ok(())
}
