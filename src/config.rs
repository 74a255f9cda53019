use std::{env, path::PathBuf};

// Runtime constants (not gameplay tuning).

pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.txt";
// 0 means run until the input source quits.
pub const DEFAULT_MAX_TICKS: u64 = 0;

/// Process-level settings read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub high_score_path: PathBuf,
    /// Seed for brick colours, hit counters and row spawns
    pub seed: u64,
    /// Brick breaker starting level
    pub start_level: u32,
    /// Stop after this many ticks (0 = unbounded)
    pub max_ticks: u64,
    /// Skip the 60 Hz sleep
    pub unthrottled: bool,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparseable values fall back to
    /// their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        Self {
            high_score_path: lookup("BRICK_HIGHSCORE_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGHSCORE_PATH)),
            seed: parsed("BRICK_SEED").unwrap_or_else(clock_seed),
            start_level: parsed("BRICK_START_LEVEL")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(1),
            max_ticks: parsed("BRICK_MAX_TICKS").unwrap_or(DEFAULT_MAX_TICKS),
            unthrottled: matches!(lookup("BRICK_UNTHROTTLED").as_deref(), Some("1" | "true")),
        }
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = RunConfig::from_lookup(lookup(&[("BRICK_SEED", "3")]));
        assert_eq!(cfg.high_score_path, PathBuf::from("highscore.txt"));
        assert_eq!(cfg.seed, 3);
        assert_eq!(cfg.start_level, 1);
        assert_eq!(cfg.max_ticks, 0);
        assert!(!cfg.unthrottled);
    }

    #[test]
    fn test_overrides() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("BRICK_HIGHSCORE_PATH", "/tmp/best.txt"),
            ("BRICK_SEED", "42"),
            ("BRICK_START_LEVEL", " 7 "),
            ("BRICK_MAX_TICKS", "600"),
            ("BRICK_UNTHROTTLED", "1"),
        ]));
        assert_eq!(cfg.high_score_path, PathBuf::from("/tmp/best.txt"));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.start_level, 7);
        assert_eq!(cfg.max_ticks, 600);
        assert!(cfg.unthrottled);
    }

    #[test]
    fn test_garbage_falls_back() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("BRICK_SEED", "9"),
            ("BRICK_START_LEVEL", "ten"),
            ("BRICK_MAX_TICKS", "-5"),
            ("BRICK_UNTHROTTLED", "yes please"),
        ]));
        assert_eq!(cfg.start_level, 1);
        assert_eq!(cfg.max_ticks, 0);
        assert!(!cfg.unthrottled);
    }
}
