pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks a precondition on a named argument, returning early with
/// `ErrorKind::InvalidArgument` when it does not hold.
///
/// The failure message is the stringified condition, optionally followed by
/// a formatted detail:
///
/// ```
/// fn check(len: usize) -> fragset_common::Result<()> {
///     fragset_common::verify_arg!(len, len > 0);
///     fragset_common::verify_arg!(len, len < 10, "got {len}");
///     Ok(())
/// }
/// assert!(check(0).is_err());
/// assert!(check(11).is_err());
/// assert!(check(5).is_ok());
/// ```
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
    ($name:expr, $expr:expr, $($detail:tt)+) => {{
        let result = $expr;
        if !result {
            $crate::result::invalid_arg(
                stringify!($name),
                &format!("{} ({})", stringify!($expr), format_args!($($detail)+)),
            )?;
        }
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::Error::invalid_arg(name, condition))
}
