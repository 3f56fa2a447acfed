//! # Cart Codec
//!
//! The persisted form of a cart: a JSON array of line item records.
//!
//! ```json
//! [
//!   {"id": "summer-honey", "name": "Летний мед - 227г/8oz", "price": 650, "quantity": 2},
//!   {"id": "beeswax", "name": "100% пчелиный воск ...", "price": 250, "quantity": 1}
//! ]
//! ```

use hive_core::CartState;

use crate::error::{StorageError, StorageResult};
use crate::storage::KeyValueStorage;

/// Serializes a cart to its persisted form.
pub fn encode_cart(cart: &CartState) -> StorageResult<String> {
    Ok(serde_json::to_string(cart)?)
}

/// Parses a persisted cart. Anything that is not a valid cart is `Corrupt`.
pub fn decode_cart(key: &str, raw: &str) -> StorageResult<CartState> {
    serde_json::from_str(raw).map_err(|e| StorageError::corrupt(key, e))
}

/// Reads and decodes the slot under `key`.
///
/// ## Returns
/// * `Ok(Some(cart))` - slot held a valid cart
/// * `Ok(None)` - slot is empty
/// * `Err(Read | Corrupt)` - slot unreadable or malformed
pub fn load_cart<S: KeyValueStorage + ?Sized>(
    storage: &S,
    key: &str,
) -> StorageResult<Option<CartState>> {
    let raw = match storage.get(key)? {
        Some(raw) => raw,
        None => return Ok(None),
    };

    decode_cart(key, &raw).map(Some)
}

/// Encodes `cart` and writes it under `key`.
pub fn save_cart<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    key: &str,
    cart: &CartState,
) -> StorageResult<()> {
    let raw = encode_cart(cart)?;
    storage.set(key, &raw)
}
