#![no_main]

use std::collections::VecDeque;

use boundcache::ds::RecencyTracker;
use libfuzzer_sys::fuzz_target;

// Fuzz RecencyTracker against a VecDeque reference model.
fuzz_target!(|data: &[u8]| {
    let mut tracker: RecencyTracker<u8> = RecencyTracker::new();
    let mut model: VecDeque<u8> = VecDeque::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 4;
        let key = pair[1] % 32;

        match op {
            0 => {
                tracker.record_insert(key);
                model.retain(|&k| k != key);
                model.push_back(key);
            },
            1 => {
                let known = model.contains(&key);
                assert_eq!(tracker.record_access(&key), known);
                if known {
                    model.retain(|&k| k != key);
                    model.push_back(key);
                }
            },
            2 => {
                let known = model.contains(&key);
                assert_eq!(tracker.remove(&key), known);
                model.retain(|&k| k != key);
            },
            3 => {
                if key == 0 {
                    tracker.clear();
                    model.clear();
                }
            },
            _ => unreachable!(),
        }

        assert_eq!(tracker.len(), model.len());
        assert_eq!(tracker.oldest(), model.front());
        assert_eq!(tracker.newest(), model.back());
        #[cfg(debug_assertions)]
        tracker.debug_validate_invariants();
    }

    assert!(tracker.iter().eq(model.iter()));
});
