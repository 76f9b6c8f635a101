use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Loading flag for a lane. It stays up while at least one submission
/// holds a guard. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct Pulse {
    in_flight: Arc<AtomicUsize>,
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pulsing(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Raises the flag until the returned guard is released.
    pub fn start(&self) -> PulseGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        PulseGuard { pulse: self.clone(), released: false }
    }
}

/// Releases its share of the pulse exactly once, on `stop` or on drop.
#[derive(Debug)]
pub struct PulseGuard {
    pulse: Pulse,
    released: bool,
}

impl PulseGuard {
    /// Returns true when this was the last guard holding the pulse up.
    pub fn stop(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        self.pulse.in_flight.fetch_sub(1, Ordering::SeqCst) == 1
    }
}

impl Drop for PulseGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_clears_on_stop_and_on_drop() {
        let pulse = Pulse::new();
        assert!(!pulse.is_pulsing());

        let guard = pulse.start();
        assert!(pulse.clone().is_pulsing());
        assert!(guard.stop());
        assert!(!pulse.is_pulsing());

        {
            let _guard = pulse.start();
            assert!(pulse.is_pulsing());
        }
        assert!(!pulse.is_pulsing());
    }

    #[test]
    fn overlapping_guards_keep_pulse_up_until_last_release() {
        let pulse = Pulse::new();
        let first = pulse.start();
        let second = pulse.start();
        assert_eq!(pulse.in_flight(), 2);

        assert!(!first.stop());
        assert!(pulse.is_pulsing());
        drop(second);
        assert!(!pulse.is_pulsing());
        assert_eq!(pulse.in_flight(), 0);
    }
}
