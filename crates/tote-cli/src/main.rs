use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tote_core::{ElementKind, Greeter, GreeterConfig, GreeterRegistry, TemplateGreeter};

#[derive(Debug, Parser)]
#[command(name = "tote", version, about = "Fill typed boxes and greet people")]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log filter, e.g. `debug` or `tote_core=debug`
    #[arg(long, global = true, env = "TOTE_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add ITEMS to a box of the given element kind and report its size
    Fill {
        /// Element kind: int, uint, float, bool, str
        #[arg(long, short)]
        kind: ElementKind,

        /// Also print every element in insertion order
        #[arg(long)]
        show: bool,

        #[arg(allow_negative_numbers = true)]
        items: Vec<String>,
    },

    /// Greet NAME with a registered style or a prefix/suffix template
    Greet {
        /// Name to greet (may be empty)
        name: String,

        #[arg(long, env = "TOTE_GREETING_STYLE", default_value = GreeterRegistry::DEFAULT_STYLE)]
        style: String,

        #[arg(long)]
        prefix: Option<String>,

        #[arg(long)]
        suffix: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct FillReport<'a> {
    kind: &'a str,
    size: usize,
    items: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GreetReport<'a> {
    style: &'a str,
    greeting: String,
}

/// logs go to stderr so stdout stays machine-readable
fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}

fn greeter_registry() -> Result<GreeterRegistry> {
    let mut registry = GreeterRegistry::with_defaults();
    registry.register("formal", TemplateGreeter::new("Good day, ", "."))?;
    Ok(registry)
}

fn run_fill(kind: ElementKind, items: &[String], show: bool, json: bool) -> Result<()> {
    let mut boxed = kind.new_box();
    for (index, raw) in items.iter().enumerate() {
        boxed
            .add_raw(raw)
            .with_context(|| format!("item #{index} rejected by {kind} box"))?;
    }
    info!(kind = %kind, size = boxed.size(), "box filled");

    if json {
        let report = FillReport {
            kind: boxed.kind(),
            size: boxed.size(),
            items: boxed.render(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", boxed.size());
        if show {
            for item in boxed.render() {
                println!("{item}");
            }
        }
    }
    Ok(())
}

fn run_greet(
    name: &str,
    style: &str,
    prefix: Option<String>,
    suffix: Option<String>,
    json: bool,
) -> Result<()> {
    let (style, greeting) = if prefix.is_some() || suffix.is_some() {
        let defaults = GreeterConfig::default();
        let config = GreeterConfig {
            prefix: prefix.unwrap_or(defaults.prefix),
            suffix: suffix.unwrap_or(defaults.suffix),
        };
        debug!(?config, "template greeter");
        ("template", config.build().greet(name))
    } else {
        let registry = greeter_registry()?;
        let greeter = registry.get(style).ok_or_else(|| {
            anyhow!(
                "unknown greeting style '{style}' (available: {})",
                registry.names().join(", ")
            )
        })?;
        (style, greeter.greet(name))
    };

    if json {
        let report = GreetReport { style, greeting };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{greeting}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    debug!(?args, "starting");

    match args.command {
        Command::Fill { kind, show, items } => run_fill(kind, &items, show, args.json),
        Command::Greet {
            name,
            style,
            prefix,
            suffix,
        } => run_greet(&name, &style, prefix, suffix, args.json),
    }
}
