use serde::Serialize;

/// Serialized-size estimate used for memory accounting; not exact.
#[inline]
pub(crate) fn approximate_entry_size<T: Serialize>(data: &T) -> usize {
    let mut sz = 0usize;
    if let Ok(bytes) = serde_json::to_vec(data) {
        sz += bytes.len();
    }
    // Rough overhead estimate for entry metadata
    sz + 8 + 8 + 16 + 8 + 8
}
