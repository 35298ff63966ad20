use snowpack::{generate, generate_at, Snowflake, SnowflakeOptions};

fn main() {
    let epoch = 1_704_067_200_000; // January 1, 2024 UTC
    let options = SnowflakeOptions::new().epoch(epoch).worker(1).pid(2);

    // Current time
    let id1 = generate(None, options.increment(0)).unwrap();
    let id2 = generate(None, options.increment(1)).unwrap();

    // Explicit time
    let id3 = generate_at(epoch + 60_000, options.increment(2)).unwrap();

    println!("Generated IDs:");
    print_id(&id1, epoch);
    print_id(&id2, epoch);
    print_id(&id3, epoch);
}

fn print_id(decimal: &str, epoch: i64) {
    let id: Snowflake = decimal.parse().unwrap();
    let parts = id.decompose();
    let datetime = id.datetime(epoch).unwrap();

    println!(
        "  ID: {decimal}, Human date: {datetime}, Worker: {}, PID: {}, Increment: {}",
        parts.worker, parts.pid, parts.increment
    );
}
