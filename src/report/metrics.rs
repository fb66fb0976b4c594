// src/report/metrics.rs
// =============================================================================
// This module provides the performance metrics (FCP, LCP, CLS).
//
// IMPORTANT: the default implementation is SYNTHETIC. Real FCP/LCP/CLS can
// only come from browser instrumentation, which this tool does not do. The
// simulated provider draws plausible values from fixed ranges so the report
// and the suggestion thresholds can be exercised end to end.
//
// The provider sits behind a trait so a real measurement backend can be
// swapped in later without touching the scorer or the report assembly.
//
// Rust concepts:
// - Traits as the seam between "what we need" and "how it's obtained"
// - dyn Trait: The pipeline holds a &dyn PerformanceMetricsProvider
// - rand::Rng for bounded random generation
// =============================================================================

use rand::Rng;
use serde::Serialize;

/// Core-web-vitals style metrics for one page view.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// First Contentful Paint, milliseconds
    pub fcp_ms: u32,
    /// Largest Contentful Paint, milliseconds
    pub lcp_ms: u32,
    /// Cumulative Layout Shift, unitless
    pub cls: f64,
}

/// Source of performance metrics for a page view.
///
/// Contract: `measure` returns one self-consistent sample. It must not
/// panic and must not perform network I/O on its own - a real
/// implementation would be handed whatever it needs at construction time.
pub trait PerformanceMetricsProvider {
    fn measure(&self) -> PerformanceMetrics;
}

/// The synthetic default: bounded random values, NOT measurements.
///
/// FCP in 500..=1500 ms, LCP in 1000..=3000 ms, CLS in [0, 0.2) rounded to
/// two decimals - the same ranges the report has always shown.
#[derive(Debug, Default)]
pub struct SimulatedMetrics;

impl PerformanceMetricsProvider for SimulatedMetrics {
    fn measure(&self) -> PerformanceMetrics {
        let mut rng = rand::thread_rng();
        PerformanceMetrics {
            fcp_ms: rng.gen_range(500..=1500),
            lcp_ms: rng.gen_range(1000..=3000),
            cls: (rng.gen_range(0.0..0.2_f64) * 100.0).round() / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_values_stay_in_range() {
        let provider = SimulatedMetrics;
        for _ in 0..100 {
            let metrics = provider.measure();
            assert!((500..=1500).contains(&metrics.fcp_ms));
            assert!((1000..=3000).contains(&metrics.lcp_ms));
            assert!((0.0..=0.2).contains(&metrics.cls));
        }
    }

    #[test]
    fn test_cls_has_two_decimals() {
        let provider = SimulatedMetrics;
        let metrics = provider.measure();
        let scaled = metrics.cls * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
}
