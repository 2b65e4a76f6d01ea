#![no_main]

use boundcache::ds::SlotArena;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on SlotArena
//
// Stale ids (removed, then possibly reused) must never alias a live value.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut all_ids = Vec::new();
    let mut live = 0usize;

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 5;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let id = arena.insert(value);
                all_ids.push(id);
                live += 1;
                assert_eq!(arena.get(id), Some(&value));
            },
            1 => {
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    if arena.remove(id).is_some() {
                        live -= 1;
                        assert!(!arena.contains(id));
                        assert_eq!(arena.get(id), None);
                    }
                }
            },
            2 => {
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                        assert_eq!(arena.get(id), Some(&value));
                    }
                }
            },
            3 => {
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    assert_eq!(arena.contains(id), arena.get(id).is_some());
                }
            },
            4 => {
                arena.clear();
                live = 0;
                assert!(arena.is_empty());
                assert!(all_ids.iter().all(|&id| !arena.contains(id)));
            },
            _ => unreachable!(),
        }

        assert_eq!(arena.len(), live);
    }
});
