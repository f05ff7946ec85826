//! Input latency tracking and profiling instrumentation.
//!
//! Every event handed to the canvas is timed against the frame budget so a
//! slow flood fill or a listener doing too much work shows up in the logs.
//!
//! Enable scope-level profiling with the `profiling` feature:
//! ```toml
//! [dependencies]
//! inkboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use inkboard::perf::profile_scope;
//!
//! fn flood_fill() {
//!     profile_scope!("flood_fill");
//!     // ... work ...
//! }
//! ```

use crate::constants::TARGET_FRAME_MS;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::{debug, warn};

// ============================================================================
// Constants
// ============================================================================

/// Events kept for rolling averages
const SAMPLE_COUNT: usize = 120;

/// An event is slow when it takes longer than this many frames
const SLOW_EVENT_FRAMES: f64 = 1.0;

/// Samples kept per operation
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Time a scope under `name`. Compiles to nothing without `profiling`.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

/// Time the enclosing function.
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!($crate::function_name!());
    };
}

#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}

pub use profile_function;
pub use profile_scope;

// ============================================================================
// Operation Statistics
// ============================================================================

/// Rolling timing statistics for one named operation.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    /// All-time maximum.
    pub fn max(&self) -> f64 {
        self.max_ms
    }

    /// Total invocations, including samples no longer retained.
    pub fn count(&self) -> u64 {
        self.count
    }
}

// ============================================================================
// Event Latency Monitor
// ============================================================================

/// Times input events from arrival to the end of their transition.
#[derive(Debug, Default)]
pub struct EventLatencyMonitor {
    latencies: VecDeque<f64>,
    event_start: Option<(&'static str, Instant)>,
    slow_events: u64,
    total_events: u64,
    operations: HashMap<&'static str, OperationStats>,
}

impl EventLatencyMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the arrival of an event of the given kind.
    pub fn begin_event(&mut self, kind: &'static str) {
        self.event_start = Some((kind, Instant::now()));
    }

    /// Close the event opened by `begin_event`. Returns its latency in ms.
    pub fn end_event(&mut self) -> Option<f64> {
        let (kind, start) = self.event_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        self.record_event(kind, ms);
        Some(ms)
    }

    /// Record an externally measured event latency.
    pub fn record_event(&mut self, kind: &'static str, ms: f64) {
        if self.latencies.len() >= SAMPLE_COUNT {
            self.latencies.pop_front();
        }
        self.latencies.push_back(ms);
        self.total_events += 1;
        self.record_operation(kind, ms);

        if ms > TARGET_FRAME_MS * SLOW_EVENT_FRAMES {
            self.slow_events += 1;
            warn!(
                event = kind,
                latency_ms = format!("{:.2}", ms),
                budget_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow input event"
            );
        }
    }

    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operations.entry(name).or_default().record(elapsed_ms);
    }

    pub fn average_latency(&self) -> f64 {
        if self.latencies.is_empty() {
            return 0.0;
        }
        self.latencies.iter().sum::<f64>() / self.latencies.len() as f64
    }

    pub fn max_latency(&self) -> f64 {
        self.latencies.iter().copied().fold(0.0, f64::max)
    }

    pub fn total_events(&self) -> u64 {
        self.total_events
    }

    /// Share of events that blew the frame budget, in percent.
    pub fn slow_event_percentage(&self) -> f64 {
        if self.total_events == 0 {
            return 0.0;
        }
        (self.slow_events as f64 / self.total_events as f64) * 100.0
    }

    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operations.get(name)
    }

    /// Log a summary when the average is over budget.
    pub fn log_summary_if_slow(&self) {
        let avg = self.average_latency();
        if avg <= TARGET_FRAME_MS {
            return;
        }
        warn!(
            avg_latency_ms = format!("{:.2}", avg),
            max_latency_ms = format!("{:.2}", self.max_latency()),
            slow_percentage = format!("{:.1}%", self.slow_event_percentage()),
            "Input latency above budget"
        );

        let mut ops: Vec<_> = self.operations.iter().collect();
        ops.sort_by(|a, b| {
            b.1.average()
                .partial_cmp(&a.1.average())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (name, stats) in ops.iter().take(5) {
            debug!(
                "  {}: avg={:.2}ms, p95={:.2}ms, max={:.2}ms, count={}",
                name,
                stats.average(),
                stats.p95(),
                stats.max(),
                stats.count()
            );
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs its lifetime on drop when it exceeds the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// 1ms threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Run `f` and return its result with the elapsed time in ms.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Run `f`, warning when it takes longer than `threshold_ms`.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}
