//! Ticket Reference Generator
//!
//! Short, human-facing display codes. Deterministic for a fixed
//! (identity, timestamp) pair. Explicitly NOT unique: collisions
//! across submissions are accepted, the ref is a label on a printed
//! ticket, never a key.

/// Derive a 4-digit display code from the submitter identity and a
/// timestamp. The all-zero code is remapped so a printed ticket never
/// reads "0000".
pub fn generate_ref(identity: &str, timestamp_millis: i64) -> String {
    let char_sum: i64 = identity.chars().map(|c| c as i64).sum();
    let hash = char_sum.wrapping_add(timestamp_millis).rem_euclid(10_000);
    let code = format!("{hash:04}");
    if code == "0000" {
        "0001".to_string()
    } else {
        code
    }
}
