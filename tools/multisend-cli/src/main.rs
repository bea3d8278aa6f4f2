use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use eoa_multisend::{
    abi::{selector_of, IBatchCallAndSponsor, BATCH_CALLER_ADDRESS, EOA_MULTISEND_ADDRESS},
    decode_batch_execute, decode_multi_send, encode_batch_execute, encode_multi, unwrap_packed_calls,
    utils::{checksum, parse_data},
    MetaTransaction,
};
use serde::Serialize;
use serde_json::json;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod calls;
mod output;

use calls::{address_arg, parse_calls, CallOutput};
use output::write_json_atomic;

/// Build and inspect calldata that batches several calls into one EIP-7702 transaction.
///
/// Nothing is signed or sent: `encode` prints the payload an EOA would send to itself after
/// delegating to the batching contract, `decode` reads such a payload back.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a JSON list of calls into delegate calldata.
    Encode(EncodeArgs),
    /// Decode batch calldata back into its calls.
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// JSON file with `[{ "to", "value", "data" }]` entries (`-` reads stdin).
    #[arg(long, default_value = "-")]
    input: PathBuf,

    /// Which delegate contract the calldata targets.
    #[arg(long, value_enum, default_value_t = Strategy::Multisend)]
    strategy: Strategy,

    /// Authority EOA; the transaction is sent to this account once delegated.
    #[arg(long, env = "MULTISEND_FROM", value_parser = address_arg)]
    from: Option<Address>,

    /// Override the delegate contract address for the chosen strategy.
    #[arg(long, env = "MULTISEND_DELEGATE", value_parser = address_arg)]
    delegate: Option<Address>,

    /// Also write the payload JSON to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Hex calldata (`0x...`).
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    call_data: Option<String>,

    /// File containing hex calldata (`-` reads stdin).
    #[arg(long)]
    input: Option<PathBuf>,
}

/// Batching strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Strategy {
    /// Packed blob through `execute(bytes)` on the EOA multisend delegate.
    Multisend,
    /// ABI array through `execute(Call[])` on `BatchCallAndSponsor`.
    Batch,
}

impl Strategy {
    fn default_delegate(self) -> Address {
        match self {
            Self::Multisend => EOA_MULTISEND_ADDRESS,
            Self::Batch => BATCH_CALLER_ADDRESS,
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode(args) => encode(args),
        Command::Decode(args) => decode(args),
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy())
        .init();
}

fn encode(args: EncodeArgs) -> Result<()> {
    let json = read_input(&args.input)?;
    let txs = parse_calls(&json)
        .with_context(|| format!("failed parsing calls from {}", args.input.display()))?;

    let data = match args.strategy {
        Strategy::Multisend => encode_multi(&txs),
        Strategy::Batch => encode_batch_execute(&txs)?,
    };
    let delegate = args.delegate.unwrap_or_else(|| args.strategy.default_delegate());

    let created_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let payload = json!({
        "strategy": args.strategy,
        "delegate": checksum(&delegate),
        "to": args.from.as_ref().map(checksum),
        "data": data.to_string(),
        "calls": txs.len(),
        "created_at": created_at,
    });

    info!(
        strategy = ?args.strategy,
        calls = txs.len(),
        bytes = data.len(),
        delegate = %delegate,
        "encoded batch"
    );

    if let Some(out) = &args.out {
        write_json_atomic(out, &payload)?;
        info!(path = %out.display(), "wrote payload");
    }

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn decode(args: DecodeArgs) -> Result<()> {
    let raw = match (&args.call_data, &args.input) {
        (Some(hex), _) => hex.clone(),
        (None, Some(path)) => read_input(path)?,
        (None, None) => return Err(anyhow!("missing calldata: provide --call-data or --input")),
    };
    let call_data = parse_data(&raw)?;

    let txs = decode_call_data(&call_data)?;
    info!(calls = txs.len(), selector = %selector_of(&call_data)?, "decoded batch");

    let out: Vec<CallOutput> = txs.iter().map(CallOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Dispatch on the selector: structured batch, or a packed blob behind either entrypoint.
fn decode_call_data(call_data: &[u8]) -> Result<Vec<MetaTransaction>> {
    if selector_of(call_data)?.0 == IBatchCallAndSponsor::executeCall::SELECTOR {
        return Ok(decode_batch_execute(call_data)?);
    }
    let blob = unwrap_packed_calls(call_data)?;
    Ok(decode_multi_send(&blob)?)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed reading stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed reading {}", path.display()))
}
