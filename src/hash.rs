//! Hash primitives for reverse resolution
//!
//! Keccak-256 and ENS namehash, matching the on-chain registry conventions
//! used by ENS, Basenames, and the Cyber public resolver.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Hash two 32-byte words packed back to back
///
/// Equivalent to `keccak256(abi.encodePacked(left, right))` for two `bytes32`.
pub fn keccak256_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 64];
    data[0..32].copy_from_slice(left);
    data[32..64].copy_from_slice(right);
    keccak256(&data)
}

/// Compute the ENS namehash of a dotted name
///
/// ```text
/// namehash("")        = 0x00..00
/// namehash(label.rest) = keccak256(namehash(rest) ++ labelhash(label))
/// ```
///
/// The name is hashed as given; callers are expected to pass an already
/// normalized name.
pub fn namehash(name: &str) -> [u8; 32] {
    let mut node = [0u8; 32];
    if name.is_empty() {
        return node;
    }

    for label in name.rsplit('.') {
        node = keccak256_pair(&node, &labelhash(label));
    }
    node
}

/// Hash a single label
///
/// A label written as `[<64 hex chars>]` is an encoded labelhash and is
/// decoded instead of hashed.
pub fn labelhash(label: &str) -> [u8; 32] {
    if let Some(encoded) = decode_encoded_labelhash(label) {
        return encoded;
    }
    keccak256(label.as_bytes())
}

fn decode_encoded_labelhash(label: &str) -> Option<[u8; 32]> {
    let inner = label.strip_prefix('[')?.strip_suffix(']')?;
    if inner.len() != 64 {
        return None;
    }
    let bytes = hex::decode(inner).ok()?;
    let mut result = [0u8; 32];
    result.copy_from_slice(&bytes);
    Some(result)
}

/// DNS wire-format encoding of a dotted name
///
/// Each label is written as a length byte followed by its bytes, and the
/// name ends with a zero byte. Labels longer than 255 bytes are replaced by
/// their encoded labelhash `[<hex>]` so the length fits in one byte.
pub fn dns_encode(name: &str) -> Vec<u8> {
    let mut packet = Vec::with_capacity(name.len() + 2);
    for label in name.split('.').filter(|label| !label.is_empty()) {
        if label.len() > 255 {
            let encoded = format!("[{}]", hex::encode(keccak256(label.as_bytes())));
            packet.push(encoded.len() as u8);
            packet.extend_from_slice(encoded.as_bytes());
        } else {
            packet.push(label.len() as u8);
            packet.extend_from_slice(label.as_bytes());
        }
    }
    packet.push(0);
    packet
}

/// Convert bytes to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
