//! Raw NIS API request command.
//!
//! This module implements the `api` subcommand: one GET or POST request
//! per invocation against the resolved NIS endpoint, with the parsed
//! JSON response pretty-printed to stdout. The prepared request can be
//! dumped before sending with `--verbose`.

use clap::{CommandFactory, Parser};

use crate::client::{NisClient, RequestPlan};
use crate::connection::{NetworkOpts, NodeEndpoint};
use crate::utils::{
    create_spinner, print_info, print_warning, verbose_enabled, CliResult, OutputFormat,
};

/// Arguments for the api command
#[derive(Parser, Debug)]
#[command(after_long_help = "\
Examples:
  nem-cli api --url /chain/height
  nem-cli api --url /chain/height --network mainnet
  nem-cli api --url /chain/height --node bigalice2.nem.ninja
  nem-cli api --url \"/account/get?address=TDWZ55R5VIHSH5WWK6CEGAIP7D35XVFZ3RU2S5UQ\"
  nem-cli api --url /block/at/public --post --json '{\"height\": 1149971}'
  nem-cli api --url /heartbeat --node alice7.nem.ninja")]
pub struct ApiArgs {
    /// NIS endpoint path for the request (e.g. /chain/height)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Send a POST request instead of GET
    #[arg(short = 'P', long)]
    pub post: bool,

    /// JSON request body (application/json)
    #[arg(short, long, value_name = "BODY")]
    pub json: Option<String>,

    /// Form-encoded request body (application/x-www-form-urlencoded)
    #[arg(short, long, value_name = "QUERY")]
    pub params: Option<String>,
}

/// Execute the api command
pub async fn execute(
    args: ApiArgs,
    net: &NetworkOpts,
    output_format: OutputFormat,
    quiet: bool,
) -> CliResult<()> {
    // No URL means nothing to send; show the command help instead.
    let Some(plan) = RequestPlan::build(
        args.url.as_deref(),
        args.post,
        args.json.as_deref(),
        args.params.as_deref(),
    ) else {
        print_api_help();
        return Ok(());
    };

    // An address in the query string may select a different network
    // than the default one, unless the node was given explicitly.
    let endpoint = NodeEndpoint::resolve_for_url(net, &plan.path);
    let client = NisClient::new(endpoint)?;

    if verbose_enabled() {
        print_info(&format!("connecting to {}", client.endpoint().base_url()));
        eprintln!();
        eprintln!("  Request:");
        eprintln!("  --------");
        eprintln!("{}", plan.dump(client.endpoint()));
    }

    let spinner = create_spinner(
        &format!("{} {}", plan.method.as_str(), plan.path),
        output_format,
        quiet,
    );
    let result = client.send(&plan).await;
    spinner.finish_and_clear();

    render_response(&result?, output_format)
}

/// Print the response body.
///
/// Text output pretty-prints the parsed JSON; JSON output passes the
/// raw body through for scripting. A body that is not valid JSON is
/// printed raw with a warning.
pub fn render_response(body: &str, output_format: OutputFormat) -> CliResult<()> {
    if verbose_enabled() {
        eprintln!();
        eprintln!("  Response:");
        eprintln!("  ---------");
        eprintln!("RAW: '{}'", body.trim_end());
        eprintln!();
    }

    match output_format {
        OutputFormat::Json => {
            println!("{}", body.trim_end());
        }
        OutputFormat::Text => match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            Err(_) => {
                print_warning("response body is not valid JSON");
                println!("{}", body.trim_end());
            }
        },
    }

    Ok(())
}

/// Print the long help for the api subcommand
fn print_api_help() {
    let mut cmd = crate::commands::Cli::command();
    if let Some(sub) = cmd.find_subcommand_mut("api") {
        println!("{}", sub.render_long_help());
    }
}
