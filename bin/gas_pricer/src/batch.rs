use std::path::Path;

use anyhow::Context as _;
use bundler_types::UserOperation;

/// Parses a batch of user operations from its JSON representation (an array of operations).
pub(crate) fn parse_batch(raw: &str) -> anyhow::Result<Vec<UserOperation>> {
    serde_json::from_str(raw).context("batch must be a JSON array of user operations")
}

pub(crate) async fn read_batch(path: &Path) -> anyhow::Result<Vec<UserOperation>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed reading batch from `{}`", path.display()))?;
    let batch = parse_batch(&raw).with_context(|| format!("invalid batch in `{}`", path.display()))?;
    tracing::info!("Read batch of {} operations from `{}`", batch.len(), path.display());
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_batch() {
        let raw = r#"[
            {
                "sender": "0x0000000000000000000000000000000000000001",
                "nonce": "0x0",
                "initCode": "0x",
                "callData": "0x",
                "callGasLimit": "0x5208",
                "verificationGasLimit": "0x186a0",
                "preVerificationGas": "0xc350",
                "maxFeePerGas": "0x3b9aca00",
                "maxPriorityFeePerGas": "0x5f5e100",
                "paymasterAndData": "0x",
                "signature": "0x"
            }
        ]"#;
        let batch = parse_batch(raw).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].max_fee_per_gas, 1_000_000_000_u64.into());
        assert_eq!(batch[0].max_priority_fee_per_gas, 100_000_000_u64.into());
    }

    #[test]
    fn empty_batch_is_valid() {
        assert!(parse_batch("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_batch_is_rejected() {
        let err = parse_batch(r#"{"sender": "0x"}"#).unwrap_err();
        assert!(err.to_string().contains("JSON array"), "{err}");
    }
}
