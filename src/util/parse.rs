use crate::error::{server::ServerQueryError, AppError};

/// Parses a server id from a query-string value.
///
/// # Arguments
/// - `value` - The raw query-string value to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed server id
/// - `Err(AppError::QueryErr(InvalidServerId))` - Value is not a valid id
pub fn parse_server_id(value: &str) -> Result<i32, AppError> {
    let id = value
        .parse::<i32>()
        .map_err(|_| ServerQueryError::InvalidServerId)?;

    Ok(id)
}

/// Parses a result-count limit from a query-string value.
///
/// # Arguments
/// - `value` - The raw query-string value to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed limit
/// - `Err(AppError::QueryErr(InvalidQuantity))` - Value is not a non-negative integer
pub fn parse_qty(value: &str) -> Result<u64, AppError> {
    let qty = value
        .parse::<u64>()
        .map_err(|_| ServerQueryError::InvalidQuantity)?;

    Ok(qty)
}
