//! Macros that capture the call site
//!
//! Every macro here records the basename of the current file, the line and
//! the enclosing function name, then forwards to [`crate::ContextError`] or
//! [`crate::chain_into`].

/// Capture the current file basename, line and function as a [`crate::Location`]
#[macro_export]
macro_rules! here {
    () => {
        $crate::Location::capture(::std::file!(), ::std::line!(), {
            fn __here() {}
            fn __type_name_of<T>(_: T) -> &'static str {
                ::std::any::type_name::<T>()
            }
            __type_name_of(__here)
        })
    };
}

/// Create a [`crate::ContextError`] raised at the call site.
///
/// `context_error!(message)` or `context_error!(message, code)`.
#[macro_export]
macro_rules! context_error {
    ($msg:expr $(,)?) => {
        $crate::ContextError::new($msg, 0, $crate::here!())
    };
    ($msg:expr, $code:expr $(,)?) => {
        $crate::ContextError::new($msg, $code, $crate::here!())
    };
}

/// Create a [`crate::ContextError`] that supersedes `cause`.
///
/// `wrap_context_error!(cause, message)` or `wrap_context_error!(cause, message, code)`.
#[macro_export]
macro_rules! wrap_context_error {
    ($cause:expr, $msg:expr $(,)?) => {
        $crate::ContextError::wrap($msg, 0, $crate::here!(), $cause)
    };
    ($cause:expr, $msg:expr, $code:expr $(,)?) => {
        $crate::ContextError::wrap($msg, $code, $crate::here!(), $cause)
    };
}

/// Chain a frame onto an `Option<ContextError>`, evaluating to the new option.
///
/// ```ignore
/// slot = chain_context_error!(slot, "load failed");
/// ```
#[macro_export]
macro_rules! chain_context_error {
    ($slot:expr, $msg:expr $(,)?) => {
        $crate::chain_into($slot, $msg, 0, $crate::here!())
    };
    ($slot:expr, $msg:expr, $code:expr $(,)?) => {
        $crate::chain_into($slot, $msg, $code, $crate::here!())
    };
}

/// Return early with an error raised at the call site
#[macro_export]
macro_rules! bail_context {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::context_error!($($arg)*).into())
    };
}

/// Return early with an error raised at the call site unless `cond` holds
#[macro_export]
macro_rules! ensure_context {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail_context!($($arg)*);
        }
    };
}

/// Unwrap an `Ok` value, or return the error wrapped with a frame at the call site.
///
/// `try_context!(expr, message)` or `try_context!(expr, message, code)`.
#[macro_export]
macro_rules! try_context {
    ($expr:expr, $msg:expr $(,)?) => {
        $crate::try_context!($expr, $msg, 0)
    };
    ($expr:expr, $msg:expr, $code:expr $(,)?) => {
        match $expr {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(err) => {
                return ::std::result::Result::Err(
                    $crate::ContextError::wrap($msg, $code, $crate::here!(), err).into(),
                );
            }
        }
    };
}
