//! Entry point functions and the abort-on-error wrapper

use std::fmt;

use crate::generator::Generator;
use crate::{RandomGenerator, SourceExhaustedError, TimeBasedGenerator, Uuid};

/// Generates a random (version 4) UUID, returning an error if the operating system's random
/// source fails.
///
/// # Errors
///
/// Returns [`SourceExhaustedError`] if the random source cannot supply bytes.
pub fn try_uuid4() -> Result<Uuid, SourceExhaustedError> {
    <RandomGenerator>::default().generate()
}

/// Generates a simplified time-based (version 1) UUID, returning an error if the operating
/// system's random source fails.
///
/// See [`TimeBasedGenerator`] for the departures from RFC 4122.
///
/// # Errors
///
/// Returns [`SourceExhaustedError`] if the random source cannot supply bytes.
pub fn try_uuid1() -> Result<Uuid, SourceExhaustedError> {
    <TimeBasedGenerator>::default().generate()
}

/// Generates a random (version 4) UUID.
///
/// # Panics
///
/// Panics if the operating system's random source fails. Use [`try_uuid4`] to handle the
/// failure instead.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte array
/// ```
#[track_caller]
pub fn uuid4() -> Uuid {
    must(try_uuid4())
}

/// Generates a simplified time-based (version 1) UUID.
///
/// # Panics
///
/// Panics if the operating system's random source fails. Use [`try_uuid1`] to handle the
/// failure instead.
#[track_caller]
pub fn uuid1() -> Uuid {
    must(try_uuid1())
}

/// Unwraps the result of a generation or parsing call, panicking with the error message if the
/// call failed.
///
/// This is meant for call sites that have decided a failure is unrecoverable, such as a missing
/// entropy source at process start.
///
/// # Panics
///
/// Panics if `result` is an error.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{must, Uuid};
///
/// let uuid: Uuid = must("550e8400-e29b-41d4-a716-446655440000".parse());
/// assert_eq!(uuid.to_string(), "550e8400-e29b-41d4-a716-446655440000");
/// ```
#[track_caller]
pub fn must<T, E: fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("uuid4122: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{must, try_uuid1, try_uuid4, uuid1, uuid4};
    use crate::{FormatError, Uuid, Variant, Version};

    /// Generates tagged values from entry points
    #[test]
    fn generates_tagged_values_from_entry_points() {
        for _ in 0..1_000 {
            let e = uuid4();
            assert_eq!(e.version(), Version::RANDOM);
            assert_eq!(e.variant(), Variant::Rfc4122);
            let e = try_uuid4().unwrap();
            assert_eq!(e.version(), Version::RANDOM);

            let e = uuid1();
            assert_eq!(e.version(), Version::TIME_BASED);
            assert_eq!(e.variant(), Variant::Rfc4122);
            let e = try_uuid1().unwrap();
            assert_eq!(e.version(), Version::TIME_BASED);
        }
        assert_ne!(uuid4(), uuid4());
    }

    /// Passes through successful results
    #[test]
    fn passes_through_successful_results() {
        let e: Uuid = must("{550e8400e29b41d4a716446655440000}".parse());
        assert_eq!(must(e.to_string().parse::<Uuid>()), e);
    }

    /// Panics with the error message on failure
    #[test]
    #[should_panic(expected = "uuid4122: invalid UUID length: 20")]
    fn panics_with_the_error_message_on_failure() {
        must(Err::<Uuid, _>(FormatError::InvalidLength(20)));
    }

    /// Round-trips generated values through text
    #[test]
    fn round_trips_generated_values_through_text() {
        for _ in 0..10_000 {
            let e = uuid4();
            assert_eq!(e.to_string().parse::<Uuid>(), Ok(e));
            let e = uuid1();
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
        }
    }

    /// Orders sampled values as a strict total order
    #[test]
    fn orders_sampled_values_as_a_strict_total_order() {
        for _ in 0..1_000 {
            let mut s = [uuid4(), uuid4(), uuid1()];
            s.sort();
            let [a, b, c] = s;
            assert!(a < b && b < c && a < c);
            assert!(!(b < a) && !(c < b));
        }
    }

    /// Generates unique values under multithreading
    #[test]
    fn generates_unique_values_under_multithreading() -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for i in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..10_000 {
                        tx.send(if i % 2 == 0 { uuid4() } else { uuid1() }).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            assert_eq!(e.variant(), Variant::Rfc4122);
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * 10_000);
        Ok(())
    }
}
