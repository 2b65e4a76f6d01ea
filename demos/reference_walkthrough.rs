//! Walks every policy through the reference sequence and prints the cache
//! after each step.
//!
//! ```text
//! cargo run --example reference_walkthrough
//! RUST_LOG=boundcache=debug cargo run --example reference_walkthrough
//! ```

use boundcache::prelude::*;
use tracing_subscriber::EnvFilter;

fn walkthrough(policy: CachePolicy) -> Result<(), ConfigError> {
    let capacity = policy.is_bounded().then_some(DEFAULT_CAPACITY);
    let mut cache = CacheBuilder::new(capacity)
        .policy(policy)
        .try_build::<&str, &str>()?
        .with_discard_listener(print_discard);

    println!("== {policy} ==");
    cache.put(Some("A"), Some("Hello"));
    cache.put(Some("B"), Some("World"));
    cache.put(Some("C"), Some("Holberton"));
    cache.put(Some("D"), Some("School"));
    cache.print_cache();

    println!("{:?}", cache.get(&"B"));
    cache.put(Some("E"), Some("Battery"));
    cache.print_cache();

    cache.put(Some("C"), Some("Street"));
    cache.print_cache();

    println!("{:?}", cache.get(&"A"));
    println!("{:?}", cache.get(&"B"));
    println!("{:?}", cache.get(&"C"));
    cache.put(Some("F"), Some("Mission"));
    cache.print_cache();

    cache.put(None, Some("ignored"));
    cache.put(Some("G"), None);
    println!("{:?}", cache.lookup(None));
    println!();
    Ok(())
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boundcache=warn")),
        )
        .init();

    for policy in CachePolicy::ALL {
        walkthrough(policy)?;
    }
    Ok(())
}
