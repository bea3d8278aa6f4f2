//! JSON shapes for calls read from and written to the command line.

use alloy_primitives::Address;
use eoa_multisend::{
    errors::EncodeError,
    utils::{checksum, parse_address, parse_data, parse_value},
    MetaTransaction,
};
use serde::{Deserialize, Serialize};

/// A call as supplied by the operator: `{ "to", "value", "data" }`.
///
/// `value` is a decimal or `0x` hex string so amounts above 2^53 survive JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallInput {
    pub to: String,
    pub value: String,
    #[serde(default)]
    pub data: String,
}

impl CallInput {
    /// Always builds a plain `Call`; delegatecalls cannot be requested from the CLI.
    pub fn to_meta_tx(&self) -> Result<MetaTransaction, EncodeError> {
        Ok(MetaTransaction::call(
            parse_address(&self.to)?,
            parse_value(&self.value)?,
            parse_data(&self.data)?,
        ))
    }
}

/// Parse a JSON array of calls, keeping their order.
pub fn parse_calls(json: &str) -> anyhow::Result<Vec<MetaTransaction>> {
    let inputs: Vec<CallInput> = serde_json::from_str(json)?;
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            input.to_meta_tx().map_err(|e| anyhow::anyhow!("call {index}: {e}"))
        })
        .collect()
}

/// A decoded call, presented with a checksummed address and hex value/data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallOutput {
    pub operation: u8,
    pub to: String,
    pub value: String,
    pub data: String,
}

impl From<&MetaTransaction> for CallOutput {
    fn from(tx: &MetaTransaction) -> Self {
        Self {
            operation: tx.operation.as_u8(),
            to: checksum(&tx.to),
            value: format!("{:#x}", tx.value),
            data: tx.data.to_string(),
        }
    }
}

/// clap value parser for address flags.
pub fn address_arg(s: &str) -> Result<Address, EncodeError> {
    parse_address(s)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, bytes, Address, Bytes, U256};
    use eoa_multisend::Operation;

    use super::*;

    const CALLS: &str = r#"[
        { "to": "0x0000000000000000000000000000000000000000", "value": "0x9184e72a000", "data": "0x" },
        { "to": "0x1111111111111111111111111111111111111111", "value": "20000000000000" }
    ]"#;

    #[test]
    fn test_parse_calls() {
        let txs = parse_calls(CALLS).unwrap();
        assert_eq!(
            txs,
            vec![
                MetaTransaction::call(Address::ZERO, U256::from(10_000_000_000_000u64), Bytes::new()),
                MetaTransaction::call(
                    address!("1111111111111111111111111111111111111111"),
                    U256::from(20_000_000_000_000u64),
                    Bytes::new(),
                ),
            ]
        );
        assert!(txs.iter().all(|tx| tx.operation == Operation::Call));
    }

    #[test]
    fn test_parse_calls_reports_index() {
        let json = r#"[
            { "to": "0x0000000000000000000000000000000000000000", "value": "1" },
            { "to": "0x1111", "value": "1" }
        ]"#;
        let err = parse_calls(json).unwrap_err().to_string();
        assert!(err.starts_with("call 1:"), "{err}");
    }

    #[test]
    fn test_parse_calls_rejects_oversized_value() {
        let json = format!(
            r#"[{{ "to": "0x0000000000000000000000000000000000000000", "value": "0x1{}" }}]"#,
            "0".repeat(64)
        );
        let err = parse_calls(&json).unwrap_err().to_string();
        assert!(err.contains("value out of range"), "{err}");
    }

    #[test]
    fn test_call_output() {
        let tx = MetaTransaction::call(
            address!("da51ebfbb740d2183e91faf762666b169a1a9a62"),
            U256::from(10_000_000_000_000u64),
            bytes!("a9059cbb"),
        );
        let out = CallOutput::from(&tx);
        assert_eq!(out.operation, 0);
        assert_eq!(out.to, "0xDa51eBfBb740D2183e91FAf762666B169A1A9a62");
        assert_eq!(out.value, "0x9184e72a000");
        assert_eq!(out.data, "0xa9059cbb");
    }
}
