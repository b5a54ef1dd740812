//! Tests for utils.rs shared utilities

use nem_cli::utils::{create_spinner, OutputFormat};

#[test]
fn test_spinner_is_hidden_when_quiet() {
    let spinner = create_spinner("GET /chain/height", OutputFormat::Text, true);
    assert!(spinner.is_hidden());
}

#[test]
fn test_spinner_is_hidden_for_json_output() {
    let spinner = create_spinner("GET /chain/height", OutputFormat::Json, false);
    assert!(spinner.is_hidden());
}

#[test]
fn test_output_format_default() {
    assert!(matches!(OutputFormat::default(), OutputFormat::Text));
}
