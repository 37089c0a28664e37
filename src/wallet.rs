//! Wallet address normalization and display helpers.
//!
//! Wallet adapters are sloppy about shape: an address may arrive as the
//! usual string, or as a raw 32-byte key serialized into a `{"0": 18,
//! "1": 52, ...}` index map, sometimes nested under a `data` field. All
//! inbound wallets funnel through [`normalize`] before reaching the
//! upstream so accounts stay keyed by one canonical form.

use serde_json::Value;

/// Upper bound on the byte-index scan. Addresses are 32-byte keys.
const MAX_ADDRESS_BYTES: usize = 32;

/// Collapse any supported wallet representation into a single string.
///
/// Strings pass through untouched, which makes the function idempotent.
/// Byte-index objects become `0x`-prefixed lowercase hex. Null becomes the
/// empty string (absent, as far as callers are concerned). Anything else is
/// coerced to its JSON string form.
#[must_use]
pub fn normalize(value: &Value) -> String {
    if let Some(address) = value.as_str() {
        return address.to_string();
    }
    if let Some(bytes) = indexed_bytes(value) {
        return to_hex(&bytes);
    }
    match value {
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Shorten an address for display: `0x1234...cdef`.
///
/// Addresses short enough to show whole are returned as-is, as is anything
/// that cannot be split on character boundaries.
#[must_use]
pub fn truncate(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    match (address.get(..6), address.get(address.len() - 4..)) {
        (Some(head), Some(tail)) => format!("{head}...{tail}"),
        _ => address.to_string(),
    }
}

/// Try to read `value` (or `value.data`) as a `"0"`-indexed byte map.
///
/// The scan walks keys `"0"`, `"1"`, ... in order and stops at the first
/// missing index or non-byte value; whatever was collected up to that point
/// is the address. An object with nothing at `"0"` is not a byte map.
fn indexed_bytes(value: &Value) -> Option<Vec<u8>> {
    let object = value.as_object()?;
    let map = object
        .get("data")
        .and_then(Value::as_object)
        .unwrap_or(object);

    let mut bytes = Vec::new();
    for index in 0..MAX_ADDRESS_BYTES {
        let Some(byte) = map.get(index.to_string().as_str()).and_then(Value::as_u64) else {
            break;
        };
        if byte > u64::from(u8::MAX) {
            break;
        }
        bytes.push(byte as u8);
    }
    (!bytes.is_empty()).then_some(bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    let body: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
    format!("0x{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn byte_map(bytes: &[u8]) -> Value {
        let mut map = serde_json::Map::new();
        for (index, byte) in bytes.iter().enumerate() {
            map.insert(index.to_string(), json!(byte));
        }
        Value::Object(map)
    }

    #[test]
    fn test_string_passes_through_unchanged() {
        assert_eq!(normalize(&json!("0xAbCd1234")), "0xAbCd1234");
    }

    #[test]
    fn test_full_byte_map_becomes_hex() {
        let bytes: Vec<u8> = (0..32).collect();
        let normalized = normalize(&byte_map(&bytes));

        assert_eq!(
            normalized,
            "0x000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
        );
        assert_eq!(normalized.len(), 66);
    }

    #[test]
    fn test_byte_map_nested_under_data() {
        let wrapped = json!({ "data": byte_map(&[18, 52]) });
        assert_eq!(normalize(&wrapped), "0x1234");
    }

    #[test]
    fn test_byte_scan_stops_at_first_gap() {
        let value = json!({ "0": 255, "1": 0, "3": 7 });
        assert_eq!(normalize(&value), "0xff00");
    }

    #[test]
    fn test_byte_scan_stops_at_non_byte_value() {
        let value = json!({ "0": 171, "1": 999, "2": 1 });
        assert_eq!(normalize(&value), "0xab");
    }

    #[test]
    fn test_object_without_index_zero_coerces_to_json() {
        let value = json!({ "address": "0xabc" });
        assert_eq!(normalize(&value), r#"{"address":"0xabc"}"#);
    }

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(normalize(&json!(42)), "42");
        assert_eq!(normalize(&json!(true)), "true");
        assert_eq!(normalize(&Value::Null), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(&byte_map(&[18, 52, 86]));
        let twice = normalize(&Value::String(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_truncate_long_address() {
        let address = "0x000102030405060708090a0b0c0d0e0f";
        assert_eq!(truncate(address), "0x0001...0e0f");
    }

    #[test]
    fn test_truncate_keeps_short_addresses_whole() {
        assert_eq!(truncate("0xab"), "0xab");
        assert_eq!(truncate("0123456789"), "0123456789");
        assert_eq!(truncate("0123456789a"), "012345...789a");
    }
}
