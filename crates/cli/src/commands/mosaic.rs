//! Mosaic definition lookup command.
//!
//! Resolves one or more mosaic slugs (`namespace:mosaic`, e.g.
//! `nem:xem`) against the NIS mosaic definition pages. Namespaces are
//! fetched at most once per invocation; mosaics NIS does not list fall
//! back to a synthetic definition with the default divisibility.

use clap::Parser;

use crate::client::{MosaicDefinition, NisClient};
use crate::connection::{NetworkOpts, NodeEndpoint};
use crate::utils::{create_spinner, print_success, CliResult, OutputFormat};

/// Arguments for the mosaic command
#[derive(Parser, Debug)]
pub struct MosaicArgs {
    /// Mosaic slugs to resolve (e.g. nem:xem dim:coin)
    #[arg(required = true, value_name = "SLUG")]
    pub slugs: Vec<String>,
}

/// Execute the mosaic command
pub async fn execute(
    args: MosaicArgs,
    net: &NetworkOpts,
    output_format: OutputFormat,
    quiet: bool,
) -> CliResult<()> {
    let endpoint = NodeEndpoint::resolve(net);
    let mut client = NisClient::new(endpoint)?;

    let mut definitions: Vec<MosaicDefinition> = Vec::with_capacity(args.slugs.len());
    for slug in &args.slugs {
        let spinner = create_spinner(&format!("resolving {}", slug), output_format, quiet);
        let definition = client.mosaic_definition(slug).await;
        spinner.finish_and_clear();
        definitions.push(definition?);
    }

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
        OutputFormat::Text => {
            println!(
                "{:<20} {:<16} {:<6} {}",
                "NAMESPACE", "MOSAIC", "DIV", "DESCRIPTION"
            );
            println!("{}", "-".repeat(72));

            for definition in &definitions {
                println!(
                    "{:<20} {:<16} {:<6} {}",
                    definition.id.namespace_id,
                    definition.id.name,
                    definition.divisibility(),
                    definition.description.as_deref().unwrap_or("(not listed)")
                );
            }

            if !quiet {
                print_success(&format!("{} definition(s) resolved", definitions.len()));
            }
        }
    }

    Ok(())
}
