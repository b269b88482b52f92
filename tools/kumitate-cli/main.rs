use clap::{Parser, ValueEnum};
use kumitate::catalog;
use kumitate::prelude::*;
use std::convert::Infallible;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Stands in for the network: answers every request with the request body
/// placed under the operation's primary output member.
struct DryRunTransport {
    primary_output: Option<Path>,
}

impl Transport for DryRunTransport {
    type Error = Infallible;

    fn send(&self, request: &Request) -> std::result::Result<serde_json::Value, Infallible> {
        let mut response = request.body.clone();
        if let Some(path) = &self.primary_output {
            for segment in path.segments().iter().rev() {
                let mut wrapper = serde_json::Map::new();
                wrapper.insert(segment.clone(), response);
                response = serde_json::Value::Object(wrapper);
            }
        }
        Ok(response)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyCli {
    Bound,
    NonEmpty,
}

/// Assemble a nested API request from a flat parameter file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the parameters JSON file (an object of parameter name to value)
    parameters_path: String,

    /// Path to a schema definition JSON file
    #[arg(short, long, conflicts_with = "operation")]
    schema: Option<String>,

    /// Name of a built-in operation, e.g. UpdateCampaign
    #[arg(short, long)]
    operation: Option<String>,

    /// Output selector: '*', '^ParameterName' or a response member path
    #[arg(long)]
    select: Option<String>,

    /// Return the full response
    #[arg(long)]
    full_response: bool,

    /// Treat bound empty strings, lists and maps as absent
    #[arg(long, value_enum, default_value = "bound")]
    policy: PolicyCli,

    /// Print the assembled request as a tree before invoking
    #[arg(long)]
    tree: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();
    let definition = load_definition(&cli);
    let policy = match cli.policy {
        PolicyCli::Bound => PresencePolicy::Bound,
        PolicyCli::NonEmpty => PresencePolicy::NonEmpty,
    };

    let schema = SchemaCompiler::builder(definition)
        .with_presence_policy(policy)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Schema compilation failed: {}", e)));
    let operation = Operation::new(schema);

    let raw = RawParameters::from_file(&cli.parameters_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load parameters from '{}': {}",
            cli.parameters_path, e
        ))
    });

    let projection = Projection::new(cli.select.as_deref(), cli.full_response)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    if cli.tree {
        let bag = Flattener::new(operation.schema())
            .flatten_raw(&raw)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        let nested = Unflattener::new(operation.schema())
            .unflatten(&bag)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        eprintln!(
            "{}",
            DisplayNested {
                result: &nested,
                root_name: operation.name(),
            }
        );
    }

    let transport = DryRunTransport {
        primary_output: operation.schema().primary_output().cloned(),
    };
    let output = operation
        .invoke_raw(&transport, &raw, &projection)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => exit_with_error(&format!("Failed to render output: {}", e)),
    }
    tracing::debug!(elapsed = ?total_start.elapsed(), "done");
}

fn load_definition(cli: &Cli) -> SchemaDefinition {
    match (&cli.schema, &cli.operation) {
        (Some(path), _) => SchemaDefinition::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        (None, Some(name)) => catalog::definition(name).unwrap_or_else(|| {
            exit_with_error(&format!(
                "Unknown operation '{}'. Built-in operations: {}",
                name,
                catalog::OPERATIONS.join(", ")
            ))
        }),
        (None, None) => exit_with_error("Either --schema or --operation is required."),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
