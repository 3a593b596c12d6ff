//! Write-gate and retention policies for backup rotation
//!
//! This module defines the two policy seams of the backup scheme as pure,
//! injectable values:
//!
//! - [`BackupTriggerPolicy`] decides, given the persisted update counter,
//!   whether the current write triggers a backup. The counter itself is
//!   persisted by the caller; the policy only computes the transition.
//! - [`RetentionPolicy`] bounds the number of retained snapshots and tells
//!   the admission path when an eviction is required.
//!
//! Both are injected into the backup pipeline so tests can substitute
//! always/never triggers and small capacities.

/// Outcome of evaluating the write gate for one logical write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateOutcome {
    /// The counter value to persist (always persisted, trigger or not)
    pub next_counter: u64,
    /// Whether this write triggers a backup
    pub triggers_backup: bool,
}

/// Policy trait deciding backup frequency from the update counter
///
/// Called exactly once per logical invoice-collection write (append-one and
/// replace-all alike). Implementations must be pure: same counter in, same
/// outcome out.
pub trait BackupTriggerPolicy: Send + Sync {
    /// Evaluate one write against the current persisted counter value
    ///
    /// # Arguments
    /// * `counter` - The persisted update counter (0 if absent or corrupt)
    ///
    /// # Returns
    /// The counter value to persist and whether a backup is triggered.
    fn on_write(&self, counter: u64) -> GateOutcome;
}

/// Trigger a backup on every Nth write (modular counter)
///
/// The counter advances `(c + 1) mod period` on every write and the gate
/// opens exactly when the incremented counter wraps to zero, i.e. on the
/// Nth, 2Nth, ... write since initialization.
///
/// # Example
/// ```
/// use invox_core::policy::{BackupTriggerPolicy, ModularTriggerPolicy};
///
/// let gate = ModularTriggerPolicy::default(); // period 5
/// assert!(!gate.on_write(0).triggers_backup);
/// assert!(gate.on_write(4).triggers_backup);
/// assert_eq!(gate.on_write(4).next_counter, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModularTriggerPolicy {
    period: u64,
}

impl ModularTriggerPolicy {
    /// Create a policy that triggers every `period` writes
    ///
    /// A period of 0 is nonsensical and is clamped to 1 (trigger on every
    /// write) rather than dividing by zero.
    pub fn new(period: u64) -> Self {
        Self {
            period: period.max(1),
        }
    }

    /// The configured period
    pub fn period(&self) -> u64 {
        self.period
    }
}

impl Default for ModularTriggerPolicy {
    /// Every 5th write, matching the persisted counter range [0,5)
    fn default() -> Self {
        Self::new(5)
    }
}

impl BackupTriggerPolicy for ModularTriggerPolicy {
    fn on_write(&self, counter: u64) -> GateOutcome {
        let next_counter = (counter + 1) % self.period;
        GateOutcome {
            next_counter,
            triggers_backup: next_counter == 0,
        }
    }
}

/// Triggers on every write (for tests exercising the admission path)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTriggerPolicy;

impl BackupTriggerPolicy for AlwaysTriggerPolicy {
    fn on_write(&self, counter: u64) -> GateOutcome {
        GateOutcome {
            next_counter: counter,
            triggers_backup: true,
        }
    }
}

/// Never triggers (for tests verifying the primary write path alone)
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTriggerPolicy;

impl BackupTriggerPolicy for NeverTriggerPolicy {
    fn on_write(&self, counter: u64) -> GateOutcome {
        GateOutcome {
            next_counter: counter,
            triggers_backup: false,
        }
    }
}

/// Capacity bound on retained snapshots
///
/// When the persisted BackupCount has reached capacity, the admission path
/// must evict the oldest snapshot before appending a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    capacity: u64,
}

impl RetentionPolicy {
    /// Create a policy retaining at most `capacity` snapshots
    pub fn new(capacity: u64) -> Self {
        Self { capacity }
    }

    /// The maximum number of retained snapshots
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Whether a store holding `count` snapshots requires eviction before
    /// admitting one more
    pub fn requires_eviction(&self, count: u64) -> bool {
        count >= self.capacity
    }
}

impl Default for RetentionPolicy {
    /// Retain at most 15 snapshots
    fn default() -> Self {
        Self::new(15)
    }
}
