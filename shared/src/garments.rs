//! Garment vocabulary
//!
//! The fixed set of clothing categories used for both site pricing
//! tables and ticket quantity input. Keys outside this list are
//! zero-priced by the calculator and ignored by the item count check.

/// All garment keys, in form display order.
pub const GARMENT_KEYS: &[&str] = &[
    "jacket",
    "trousers",
    "waistcoat",
    "shirt",
    "dress",
    "skirt",
    "coat",
    "high-vis coat",
    "high-vis vest",
    "tie",
    "top",
    "misc",
    "raincoat",
    "rain jacket",
    "jumpers",
    "aprons",
    "table covers",
];

/// Whether a key belongs to the fixed garment vocabulary.
pub fn is_garment_key(key: &str) -> bool {
    GARMENT_KEYS.contains(&key)
}
