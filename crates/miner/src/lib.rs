//! Mining Engine
//!
//! Client-side concurrent brute-force search for proof-of-work
//! candidates. The nonce space is partitioned across worker threads by
//! residue class: worker `i` of `n` tests nonces `i, i+n, i+2n, ...`,
//! which covers every non-negative nonce exactly once.
//!
//! Workers share two objects: a cancellation flag (written once, read by
//! all) and a single-slot result channel (written at most once, by the
//! winning worker). Cancellation is cooperative - each worker checks the
//! flag once per nonce attempt - so shutdown latency is one validator
//! evaluation, not instantaneous.

use coordinator::domain::services::{candidate_string, is_valid_solution};
use crossbeam_channel::bounded;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Mining engine configuration
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Worker thread count; 0 means the host's available parallelism
    pub workers: usize,
    /// How long to search before giving up
    pub deadline: Duration,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            deadline: Duration::from_secs(3600),
        }
    }
}

impl MinerConfig {
    /// Resolve the configured worker count, floor 1
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }
}

/// The nonces assigned to `worker` out of `workers`
///
/// Residue class modulo the worker count: disjoint across workers, and
/// the union over all workers is every non-negative integer.
pub fn nonce_stream(worker: usize, workers: usize) -> impl Iterator<Item = u64> {
    let step = workers as u64;
    let mut nonce = worker as u64;
    std::iter::from_fn(move || {
        let current = nonce;
        nonce = nonce.wrapping_add(step);
        Some(current)
    })
}

/// Search for a candidate `"<txid>:<clientId>:<nonce>"` whose digest
/// satisfies `difficulty`
///
/// Returns `None` when the deadline passes without a hit - a normal
/// negative result, not an error. On return the cancellation flag is
/// raised and workers are joined; each exits within one validator
/// evaluation of observing the flag.
pub fn mine(txid: i64, client_id: i64, difficulty: i64, config: &MinerConfig) -> Option<String> {
    let workers = config.effective_workers();
    let cancel = Arc::new(AtomicBool::new(false));
    let attempts = Arc::new(AtomicU64::new(0));
    // Single-slot: written at most once, by whichever worker wins
    let (sender, receiver) = bounded::<String>(1);

    let started = Instant::now();
    tracing::debug!(txid, client_id, difficulty, workers, "Mining started");

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        let cancel = Arc::clone(&cancel);
        let attempts = Arc::clone(&attempts);
        let sender = sender.clone();

        handles.push(thread::spawn(move || {
            let mut tested = 0u64;
            for nonce in nonce_stream(worker, workers) {
                if cancel.load(Ordering::Relaxed) {
                    break;
                }

                let candidate = candidate_string(txid, client_id, nonce);
                tested += 1;

                if is_valid_solution(&candidate, difficulty) {
                    // try_send: losing a race against another winner is fine
                    let _ = sender.try_send(candidate);
                    cancel.store(true, Ordering::Relaxed);
                    break;
                }
            }
            attempts.fetch_add(tested, Ordering::Relaxed);
        }));
    }
    drop(sender);

    let solution = receiver.recv_timeout(config.deadline).ok();

    // Raise the flag for the timeout path too, then join; workers stop
    // within one hash of seeing it
    cancel.store(true, Ordering::Relaxed);
    for handle in handles {
        let _ = handle.join();
    }

    let elapsed = started.elapsed();
    let total = attempts.load(Ordering::Relaxed);
    match &solution {
        Some(candidate) => {
            tracing::info!(
                txid,
                client_id,
                difficulty,
                candidate = %candidate,
                attempts = total,
                elapsed_ms = elapsed.as_millis() as u64,
                "Mining succeeded"
            );
        }
        None => {
            tracing::info!(
                txid,
                client_id,
                difficulty,
                attempts = total,
                elapsed_ms = elapsed.as_millis() as u64,
                "Mining deadline passed without a solution"
            );
        }
    }

    solution
}
