//! Error macros for kex

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::KexError::UsageError($msg.to_string()))
    };
}
