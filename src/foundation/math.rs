/// SplitMix64 finalizer. Stable across platforms and releases.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic value in `[0, 1)` for a `(seed, index)` pair.
pub(crate) fn unit_hash(seed: u64, index: u64) -> f64 {
    let h = mix64(seed ^ mix64(index.wrapping_add(0x9E37_79B9_7F4A_7C15)));
    // Top 53 bits map exactly onto the f64 mantissa.
    (h >> 11) as f64 / (1u64 << 53) as f64
}

pub(crate) fn is_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Format a coordinate for text output: rounded to 2 decimals, no trailing zeros, no `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 {
        return "0".to_owned();
    }
    format!("{r}")
}
