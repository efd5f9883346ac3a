/// Clamp a raw leg-count input into storage range.
///
/// Negative values become zero; values beyond `u32::MAX` saturate. Everything
/// in between is kept exactly.
pub fn clamp_leg_count(raw: i64) -> u32 {
    if raw < 0 {
        return 0;
    }
    u32::try_from(raw).unwrap_or(u32::MAX)
}

/// One leg fewer, never below zero.
pub fn lose_one_leg(current: u32) -> u32 {
    current.saturating_sub(1)
}
