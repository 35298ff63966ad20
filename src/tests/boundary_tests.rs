#[cfg(test)]
mod tests {
    use crate::layout::{MAX_PROCESS_ID, MAX_TIMESTAMP, MAX_WORKER_ID};
    use crate::*;

    #[test]
    fn test_invalid_worker_id() {
        match generate_at(0, SnowflakeOptions::new().worker(32)) {
            Err(SnowflakeError::InvalidWorkerId { worker, max }) => {
                assert_eq!(worker, 32);
                assert_eq!(max, 31);
            }
            other => panic!("Expected InvalidWorkerId error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_process_id() {
        match generate_at(0, SnowflakeOptions::new().pid(32)) {
            Err(SnowflakeError::InvalidProcessId { pid, max }) => {
                assert_eq!(pid, 32);
                assert_eq!(max, 31);
            }
            other => panic!("Expected InvalidProcessId error, got {other:?}"),
        }
    }

    #[test]
    fn test_worker_and_pid_boundaries() {
        assert!(generate_at(0, SnowflakeOptions::new().worker(MAX_WORKER_ID)).is_ok());
        assert!(generate_at(0, SnowflakeOptions::new().pid(MAX_PROCESS_ID)).is_ok());
        for bad in [32u8, 33, 64, 255] {
            assert!(generate_at(0, SnowflakeOptions::new().worker(bad)).is_err());
            assert!(generate_at(0, SnowflakeOptions::new().pid(bad)).is_err());
        }
    }

    #[test]
    fn test_timestamp_upper_boundary() {
        let epoch = 1_000;
        let options = SnowflakeOptions::new().epoch(epoch);
        let last = epoch + MAX_TIMESTAMP as i64;

        let id: Snowflake = generate_at(last, options).unwrap().parse().unwrap();
        assert_eq!(id.timestamp(), MAX_TIMESTAMP);

        assert_eq!(
            generate_at(last + 1, options),
            Err(SnowflakeError::TimestampOverflow {
                delta: MAX_TIMESTAMP + 1,
                max: MAX_TIMESTAMP
            })
        );
    }

    #[test]
    fn test_timestamp_lower_boundary() {
        let epoch = 1_704_067_200_000;
        let options = SnowflakeOptions::new().epoch(epoch);

        assert_eq!(generate_at(epoch, options).unwrap(), "0");
        assert_eq!(
            generate_at(epoch - 1, options),
            Err(SnowflakeError::TimestampBeforeEpoch {
                time: epoch - 1,
                epoch
            })
        );
    }

    #[test]
    fn test_negative_times_with_negative_epoch() {
        // Only the difference matters
        let options = SnowflakeOptions::new().epoch(-1_000);
        let id: Snowflake = generate_at(-999, options).unwrap().parse().unwrap();
        assert_eq!(id.timestamp(), 1);
    }

    #[test]
    fn test_worker_checked_before_timestamp() {
        let err = generate_at(-1, SnowflakeOptions::new().worker(40)).unwrap_err();
        assert!(matches!(err, SnowflakeError::InvalidWorkerId { .. }));
    }

    #[test]
    fn test_generator_rejects_bad_config() {
        let err = SnowflakeGenerator::new(SnowflakeOptions::new().pid(32)).unwrap_err();
        assert_eq!(err, SnowflakeError::InvalidProcessId { pid: 32, max: 31 });
    }
}
