use std::any::Any;

/// Asserts that `$run` panics. The `message = ..` form also checks that the panic message contains
/// the expected text, so a panicking method can be tied to the error its `try_*` twin returns.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), "Expected the block to panic.");
    };
    ($run:block, message = $expected:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("Expected the block to panic with {:?}.", $expected),
            Err(payload) => {
                let message = $crate::util::panic::payload_message(&*payload);
                assert!(
                    message.contains($expected),
                    "Panic message {message:?} should contain {:?}.",
                    $expected
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Extracts the text of a panic payload, which is a `String` for formatted messages and a `&str`
/// for literal ones.
#[allow(dead_code)]
pub(crate) fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        String::new()
    }
}
