//! mixtable CLI - build and inspect containers from the command line

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mixtable::cli::{Args, SubCommand};
use mixtable::{
    format_lookup, format_output, format_values, parse_items, parse_lookup, Container, OutputFormat,
};

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let directive = if args.verbose { "debug" } else { args.log_level.as_str() };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Human };

    match args.command {
        SubCommand::Build { items, get } => {
            let container = parse_items(&items[..])?;
            tracing::debug!(
                values = container.len(),
                fields = container.field_count(),
                "built container"
            );
            show(&container, get.as_deref(), &format)
        }

        SubCommand::Load { file, get } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let container: Container = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            tracing::debug!(
                path = %file.display(),
                values = container.len(),
                fields = container.field_count(),
                "loaded container"
            );
            show(&container, get.as_deref(), &format)
        }

        SubCommand::Sort { items } => {
            let container = parse_items(&items[..])?;
            println!("{}", format_values(&container.sorted(), &format));
            Ok(())
        }
    }
}

fn show(container: &Container, get: Option<&str>, format: &OutputFormat) -> anyhow::Result<()> {
    match get {
        Some(lookup) => {
            let lookup = parse_lookup(lookup)?;
            println!("{}", format_lookup(container.get(lookup), format));
        }
        None => println!("{}", format_output(container, format)),
    }
    Ok(())
}
