use std::sync::Mutex;
use sysinfo::{Pid, System};

#[derive(Debug)]
pub struct SampleError(pub String);

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for SampleError {}

/// Point-in-time resource usage of the current process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSnapshot {
    pub cpu_percent: f64,
    pub mem_rss_bytes: u64,
    pub num_threads: usize,
}

impl ResourceSnapshot {
    /// Resident memory in MiB, rounded to two decimals.
    #[must_use]
    pub fn mem_rss_mb(&self) -> f64 {
        let mb = self.mem_rss_bytes as f64 / (1024.0 * 1024.0);
        (mb * 100.0).round() / 100.0
    }
}

/// Collaborator interface over live process/OS state, injected into the
/// service so tests can substitute a fake.
pub trait ResourceSampler: Send + Sync {
    fn sample(&self) -> Result<ResourceSnapshot, SampleError>;
}

/// Production sampler reading the current process through `sysinfo`.
///
/// CPU percentage is relative to the previous sample; the first reading may
/// be zero. Snapshots are unsmoothed by design.
pub struct SystemSampler {
    pid: Pid,
    system: Mutex<System>,
}

impl SystemSampler {
    pub fn new() -> Result<Self, SampleError> {
        let pid = sysinfo::get_current_pid().map_err(|e| SampleError(e.to_string()))?;
        Ok(Self {
            pid,
            system: Mutex::new(System::new()),
        })
    }
}

impl ResourceSampler for SystemSampler {
    fn sample(&self) -> Result<ResourceSnapshot, SampleError> {
        let mut system = match self.system.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        system.refresh_processes();
        let process = system
            .process(self.pid)
            .ok_or_else(|| SampleError("current process not visible to sampler".to_string()))?;
        Ok(ResourceSnapshot {
            cpu_percent: f64::from(process.cpu_usage()),
            mem_rss_bytes: process.memory(),
            num_threads: process.tasks().map_or(1, |tasks| tasks.len()),
        })
    }
}

/// Deterministic sampler for tests: a fixed snapshot or a fixed failure.
pub struct FixedSampler {
    result: Result<ResourceSnapshot, String>,
}

impl FixedSampler {
    #[must_use]
    pub fn ok(snapshot: ResourceSnapshot) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }

    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
        }
    }
}

impl ResourceSampler for FixedSampler {
    fn sample(&self) -> Result<ResourceSnapshot, SampleError> {
        self.result
            .clone()
            .map_err(SampleError)
    }
}
