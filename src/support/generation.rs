use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Tags async requests so that only the response to the latest one is kept.
///
/// Superseded requests are not cancelled; their results are simply dropped
/// when they arrive.
#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    /// Starts a new request, invalidating every earlier one.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_request_is_current() {
        let generation = Generation::default();

        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = Generation::default();
        let handle = generation.clone();

        let first = handle.next();
        let _second = generation.next();

        assert!(!handle.is_current(first));
    }
}
