// Score -> spawn interval step curve.

/// `(minimum score, spawn interval ms)` pairs, highest threshold first.
pub static DIFFICULTY_STEPS: [(u32, f64); 4] = [(30, 1000.0), (20, 1500.0), (10, 2000.0), (0, 3000.0)];

/// Interval a fresh session starts with (score 0).
pub const INITIAL_SPAWN_INTERVAL_MS: f64 = 3000.0;

/// Milliseconds between spawns for the given score.
pub fn spawn_interval_for(score: u32) -> f64 {
    DIFFICULTY_STEPS
        .iter()
        .find(|&&(threshold, _)| score >= threshold)
        .map(|&(_, interval)| interval)
        .unwrap_or(INITIAL_SPAWN_INTERVAL_MS)
}
