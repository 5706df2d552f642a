// Path: crates/test_utils/src/assertions/mod.rs

//! Assertion utilities for testing

/// Assert that a result is OK and unwrap it
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?}", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?} ({})", err, format!($($arg)+)),
        }
    };
}

/// Assert that a result is Err and unwrap the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?}", val),
            Err(err) => err,
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?} ({})", val, format!($($arg)+)),
            Err(err) => err,
        }
    };
}

/// Assert that a recorded custodial update marks the transaction submitted with
/// the given hash and nonce.
#[macro_export]
macro_rules! assert_submitted {
    ($update:expr, hash = $hash:expr, nonce = $nonce:expr) => {{
        let update = &$update;
        assert_eq!(
            update.status,
            $crate::fixtures::TransactionStatus::Submitted,
            "custodial update must mark the transaction submitted"
        );
        assert_eq!(update.hash, $hash);
        assert_eq!(update.nonce, $nonce);
    }};
}
