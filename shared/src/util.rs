/// 現在の UTC タイムスタンプ（ミリ秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the
/// id survives a round trip through exported JSON tooling):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at the scale
///     of one editing session)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// New saved-door id, `wd-` prefixed like the legacy exports.
pub fn saved_door_id() -> String {
    format!("wd-{}", snowflake_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_door_id_prefix() {
        let id = saved_door_id();
        assert!(id.starts_with("wd-"));
        assert!(id[3..].parse::<i64>().unwrap() > 0);
    }
}
