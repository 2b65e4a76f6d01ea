#![no_main]

use std::sync::{Arc, Mutex};

use boundcache::{Cache, CachePolicy};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary put/get/remove sequences for every bounded policy.
//
// First byte picks the policy and capacity; the rest are (op, key, value)
// triples. Checks capacity, eviction accounting and tracker consistency.
fuzz_target!(|data: &[u8]| {
    let Some((&header, ops)) = data.split_first() else {
        return;
    };
    let policy = CachePolicy::BOUNDED[usize::from(header) % CachePolicy::BOUNDED.len()];
    let capacity = usize::from(header >> 4) + 1;

    let discarded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&discarded);
    let mut cache: Cache<u8, u8> = match Cache::with_policy(policy, Some(capacity)) {
        Ok(cache) => cache.with_discard_listener(move |key| {
            if let Ok(mut log) = sink.lock() {
                log.push(*key);
            }
        }),
        Err(_) => return,
    };

    for triple in ops.chunks_exact(3) {
        let key = triple[1] % 24;
        let value = triple[2];
        match triple[0] % 6 {
            0 => {
                let was_live = cache.contains(&key);
                let before = discarded.lock().map(|log| log.len()).unwrap_or(0);
                let full = cache.is_full();
                cache.insert(key, value);
                let after = discarded.lock().map(|log| log.len()).unwrap_or(0);
                let expected = usize::from(!was_live && full);
                assert_eq!(after - before, expected);
                assert_eq!(cache.peek(&key), Some(&value));
            },
            1 => cache.put(None, Some(value)),
            2 => cache.put(Some(key), None),
            3 => {
                let live = cache.contains(&key);
                assert_eq!(cache.get(&key).is_some(), live);
            },
            4 => {
                cache.remove(&key);
                assert!(!cache.contains(&key));
            },
            5 => {
                let victim = cache.peek_victim().copied();
                assert_eq!(victim.is_some(), !cache.is_empty());
            },
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        assert!(cache.check_invariants().is_ok());
    }
});
