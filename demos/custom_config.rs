use snowpack::layout::{MAX_INCREMENT, MAX_PROCESS_ID, MAX_WORKER_ID};
use snowpack::{encode, unix_time_ms, SnowflakeConfig};

fn main() {
    let config = SnowflakeConfig::builder()
        .epoch(1_640_995_200_000) // 2022-01-01
        .worker(12)
        .unwrap()
        .pid(5)
        .unwrap()
        .increment(5000)
        .build();

    println!("Configuration:");
    println!("  Epoch: {}", config.epoch());
    println!("  Worker: {} (of {})", config.worker(), MAX_WORKER_ID);
    println!("  PID: {} (of {})", config.pid(), MAX_PROCESS_ID);
    println!(
        "  Increment: {} (wraps past {})",
        config.increment(),
        MAX_INCREMENT
    );

    let id = encode(unix_time_ms(), &config).unwrap();
    let parts = id.decompose();

    println!("\nGenerated ID: {id}");
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", parts.timestamp);
    println!("  Worker: {}", parts.worker);
    println!("  PID: {}", parts.pid);
    println!("  Increment: {}", parts.increment);

    if let Err(err) = SnowflakeConfig::builder().worker(40) {
        println!("\nRejected: {err}");
    }
}
