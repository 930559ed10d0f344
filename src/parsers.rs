use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Largest pool the worker runtime can build.
pub const MAX_THREADS: usize = 65_535;

/// Parse a worker count; `0` is accepted and later means "one per core".
///
/// # Errors
/// Returns an error if the input is not an integer, is negative, or exceeds
/// [`MAX_THREADS`].
pub fn parse_thread_count(s: &str) -> Result<usize, String> {
    if s.trim().starts_with('-') {
        return Err(format!("thread count must not be negative: {s}"));
    }
    parse_bounded_number(s, 0, Some(MAX_THREADS))
}
