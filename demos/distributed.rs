use rand::{rng, Rng};
use snowpack::{Snowflake, SnowflakeGenerator, SnowflakeOptions};
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

fn main() {
    let epoch = 1_704_067_200_000;
    let mut handles = vec![];

    // One generator per (worker, pid) pair, as separate producers would have
    for worker in 0..2u8 {
        for pid in 0..2u8 {
            let options = SnowflakeOptions::new().epoch(epoch).worker(worker).pid(pid);
            let generator = SnowflakeGenerator::new(options).unwrap();

            handles.push(thread::spawn(move || {
                let mut ids = Vec::new();
                let mut rng = rng();

                for _ in 0..5 {
                    let id = generator.next_id().unwrap();
                    let parts = id.decompose();
                    println!(
                        "worker={} pid={} generated {} (ts={}, inc={})",
                        parts.worker, parts.pid, id, parts.timestamp, parts.increment
                    );
                    ids.push(id);

                    // Random delay to simulate work
                    thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
                }
                ids
            }));
        }
    }

    let mut all: Vec<Snowflake> = Vec::new();
    for handle in handles {
        all.extend(handle.join().unwrap());
    }

    let unique: HashSet<_> = all.iter().copied().collect();
    println!("\nTotal unique IDs generated: {}", unique.len());
    assert_eq!(unique.len(), all.len(), "Duplicate ID generated!");

    all.sort_unstable();
    println!("Earliest: {}, latest: {}", all[0], all[all.len() - 1]);
}
