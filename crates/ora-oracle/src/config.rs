//! Configuration for an oracle session.

use std::path::PathBuf;

/// Configuration for an oracle session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Initial chaos factor (1-9).
    pub initial_chaos: u32,
    /// History file loaded on start and rewritten after every roll.
    pub history_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_chaos: 5,
            history_path: None,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial chaos factor (clamped to 1-9).
    pub fn with_chaos(mut self, chaos: u32) -> Self {
        self.initial_chaos = chaos.clamp(1, 9);
        self
    }

    /// Persist the history to a file.
    pub fn with_history(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.initial_chaos, 5);
        assert!(cfg.history_path.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_chaos(8)
            .with_history("log.json");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.initial_chaos, 8);
        assert_eq!(cfg.history_path, Some(PathBuf::from("log.json")));
    }

    #[test]
    fn chaos_clamped() {
        let cfg = SessionConfig::default().with_chaos(0);
        assert_eq!(cfg.initial_chaos, 1);
        let cfg = SessionConfig::default().with_chaos(99);
        assert_eq!(cfg.initial_chaos, 9);
    }
}
