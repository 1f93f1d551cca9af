use clap::{Parser, ValueEnum};
use fuel_tx_buffers::preview;
use fuel_tx_decoder::{decode_with, DecodedTransaction, DecoderConfig, Layout, SAMPLE_SCRIPT_TX};
use serde_json::json;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

#[derive(Parser)]
#[command(name = "fuel-tx-decode")]
#[command(version)]
#[command(about = "Decodes a hex-encoded Fuel transaction", long_about = None)]
struct Cli {
    /// Transaction hex, optionally 0x-prefixed. Decodes a sample script
    /// transaction when omitted.
    transaction_hex: Option<String>,

    #[arg(long, value_enum, default_value_t = Layout::Canonical)]
    layout: Layout,

    /// Fail on fields cut short by the end of input instead of clamping them.
    #[arg(long)]
    strict: bool,

    /// Keep integers above 2^53 - 1 instead of clamping them.
    #[arg(long)]
    full_width_integers: bool,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print JSON on a single line.
    #[arg(long)]
    compact_json: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let mut config = DecoderConfig::new()
        .with_layout(cli.layout)
        .with_strict(cli.strict);
    if cli.full_width_integers {
        config = config.with_uint_ceiling(u64::MAX);
    }
    let hash = cli.transaction_hex.as_deref().unwrap_or(SAMPLE_SCRIPT_TX);

    match decode_with(hash, &config) {
        Ok(decoded) => match cli.format {
            Format::Table => {
                print_table(&decoded);
                ExitCode::SUCCESS
            }
            Format::Json => match serde_json::to_value(&decoded) {
                Ok(value) => {
                    print_json(&value, cli.compact_json);
                    ExitCode::SUCCESS
                }
                Err(err) => fail(&err.to_string(), cli.compact_json),
            },
        },
        Err(err) => fail(&err.to_string(), cli.compact_json),
    }
}

fn fail(message: &str, compact: bool) -> ExitCode {
    print_json(&json!({ "error": message }), compact);
    ExitCode::FAILURE
}

fn print_json(value: &serde_json::Value, compact: bool) {
    let text = if compact {
        value.to_string()
    } else {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    };
    println!("{text}");
}

fn print_table(decoded: &DecodedTransaction) {
    let summary = decoded.transaction.summary();
    println!(
        "{} transaction, {} bytes, {} inputs, {} outputs, {} witnesses{}",
        summary.type_name,
        decoded.byte_len(),
        summary.inputs_count,
        summary.outputs_count,
        summary.witnesses_count,
        if decoded.truncated { " (truncated)" } else { "" },
    );
    for field in &decoded.fields {
        let indent = "  ".repeat(field.level);
        if field.is_group_header {
            println!("{:>13} {indent}[{}]", "", field.name);
            continue;
        }
        let bytes = hex::decode(&field.hex).unwrap_or_default();
        println!(
            "{:>6}..{:<5} {indent}{}: {} ({})",
            field.start,
            field.end,
            field.name,
            field.value,
            preview(&bytes, 16)
        );
    }
}
