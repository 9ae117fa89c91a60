use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional snowflake column.
///
/// Empty strings are treated the same as `NULL`, since older rows stored cleared
/// destinations that way.
///
/// # Returns
/// - `Ok(None)` - Column was `NULL` or empty
/// - `Ok(Some(u64))` - Parsed snowflake
/// - `Err(AppError::InternalErr(ParseStringId))` - Column held a non-numeric value
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(Some(parse_u64_from_string(v)?)),
        _ => Ok(None),
    }
}
