//! The paths the API is served from.
//!
//! Paths with a parameter, e.g. [TRANSACTION], can be filled in with [format_endpoint].

use crate::TransactionId;

/// Responds with a short banner.
pub const ROOT: &str = "/";
/// List and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transaction";
/// Delete a single transaction.
pub const TRANSACTION: &str = "/api/transaction/{transaction_id}";

/// Substitute `id` for the `{...}` parameter in `endpoint_path`.
///
/// Paths without a parameter are returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: TransactionId) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{id}{}",
            &endpoint_path[..start],
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_owned(),
    }
}
