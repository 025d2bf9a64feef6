//! Counting-permit charger pool.
//!
//! # Design
//!
//! The pool is a counting permit, not a queue: `try_acquire` never blocks,
//! and no ordering is promised across contending acquirers — two aircraft
//! depleting "simultaneously" may acquire in either order, and brief
//! starvation is acceptable over the simulation horizon.  Non-blocking
//! acquisition is what lets the aircraft state machine fall through to a
//! no-op wait within the same tick instead of stalling its thread, which
//! would conflate simulated time with wall-clock time.
//!
//! A single `AtomicU32` with a CAS decrement is sufficient for
//! linearizability; `release` publishes with `Release` ordering so a
//! subsequent successful acquire observes everything the releasing thread
//! wrote.

use std::sync::atomic::{AtomicU32, Ordering};

/// A fixed-capacity pool of chargers shared by the whole fleet.
///
/// Invariant: `available() ∈ [0, capacity()]` at every quiescent moment,
/// with `capacity - available` chargers held by aircraft in the Charging
/// state.
#[derive(Debug)]
pub struct ChargerPool {
    capacity: u32,
    available: AtomicU32,
}

impl ChargerPool {
    /// Create a pool with `capacity` chargers, all available.
    ///
    /// Capacity zero is representable (every acquire fails); rejecting it
    /// for a production run is the simulator's configuration check.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            available: AtomicU32::new(capacity),
        }
    }

    /// Atomically claim a charger if one is free.
    ///
    /// Returns `true` on success.  Never blocks; on failure the count is
    /// left unchanged and the caller is expected to spend its tick waiting.
    pub fn try_acquire(&self) -> bool {
        let mut current = self.available.load(Ordering::Relaxed);
        loop {
            if current == 0 {
                return false;
            }
            match self.available.compare_exchange_weak(
                current,
                current - 1,
                Ordering::Acquire,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(seen) => current = seen,
            }
        }
    }

    /// Return a previously acquired charger to the pool.
    ///
    /// # Panics
    ///
    /// Panics if the increment would exceed capacity: a release without a
    /// matching successful acquire is a programming error, not a
    /// recoverable condition.
    pub fn release(&self) {
        let prev = self.available.fetch_add(1, Ordering::Release);
        assert!(
            prev < self.capacity,
            "charger released without a matching acquire (capacity {})",
            self.capacity
        );
    }

    /// Total number of chargers.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Chargers currently free.
    #[inline]
    pub fn available(&self) -> u32 {
        self.available.load(Ordering::Acquire)
    }

    /// Chargers currently held by aircraft.
    #[inline]
    pub fn in_use(&self) -> u32 {
        self.capacity - self.available()
    }
}
