//! Global admission control for page fetches
//!
//! One controller is shared by every domain traversal in a run. A traversal
//! holds a token from just before its fetch until the politeness delay after
//! processing that page has elapsed, so the number of tokens in circulation
//! bounds how many pages are "in flight" across the whole run.

use crate::ScoutError;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Default)]
struct AdmissionCounters {
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    granted: AtomicU64,
}

/// Counting gate bounding concurrent fetches across all domains
///
/// Backed by a `tokio` semaphore: waiters suspend without spinning and are
/// woken in FIFO order as tokens come back.
#[derive(Debug, Clone)]
pub struct AdmissionController {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    counters: Arc<AdmissionCounters>,
}

impl AdmissionController {
    /// Creates a controller with `capacity` tokens
    ///
    /// A capacity of zero would block every acquire forever and is rejected
    /// before a controller is built. Capacities above what a semaphore can
    /// hold are capped at `Semaphore::MAX_PERMITS`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(Semaphore::MAX_PERMITS);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
            counters: Arc::new(AdmissionCounters::default()),
        }
    }

    /// Waits until a token is free and takes it
    ///
    /// # Returns
    ///
    /// * `Ok(AdmissionToken)` - The token; dropping or releasing it frees the slot
    /// * `Err(ScoutError::AdmissionClosed)` - The underlying semaphore was closed
    pub async fn acquire(&self) -> Result<AdmissionToken, ScoutError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| ScoutError::AdmissionClosed)?;

        let now = self.counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.counters
            .peak_in_flight
            .fetch_max(now, Ordering::SeqCst);
        self.counters.granted.fetch_add(1, Ordering::Relaxed);

        tracing::trace!("Admission token granted ({}/{} in flight)", now, self.capacity);

        Ok(AdmissionToken {
            _permit: permit,
            counters: Arc::clone(&self.counters),
        })
    }

    /// Total number of tokens
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of tokens currently free
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Number of tokens currently held
    pub fn in_flight(&self) -> usize {
        self.counters.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of tokens held at the same time so far
    pub fn peak_in_flight(&self) -> usize {
        self.counters.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Number of tokens handed out so far
    pub fn granted(&self) -> u64 {
        self.counters.granted.load(Ordering::Relaxed)
    }
}

/// One unit of fetch capacity
///
/// The slot returns to the controller when the token is released or dropped,
/// waking at most one waiter.
#[derive(Debug)]
pub struct AdmissionToken {
    _permit: OwnedSemaphorePermit,
    counters: Arc<AdmissionCounters>,
}

impl AdmissionToken {
    /// Returns the token to its controller
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for AdmissionToken {
    fn drop(&mut self) {
        self.counters.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
