use std::time::Duration;

/// Default benchmark budget per trace.
pub const DEFAULT_BENCH_BUDGET: Duration = Duration::from_millis(150);

/// Settings shared by every trace generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceConfig {
    /// How long the silent benchmark run may repeat. `Duration::ZERO` skips
    /// benchmarking and reports zero times.
    pub bench_budget: Duration,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            bench_budget: DEFAULT_BENCH_BUDGET,
        }
    }
}

impl TraceConfig {
    /// A config that never benchmarks.
    pub const fn unbenchmarked() -> Self {
        Self {
            bench_budget: Duration::ZERO,
        }
    }

    /// Set the benchmark budget (builder).
    pub const fn with_budget(mut self, budget: Duration) -> Self {
        self.bench_budget = budget;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn trace_config_round_trip() {
        let cfg = TraceConfig::default().with_budget(Duration::from_millis(20));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TraceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
