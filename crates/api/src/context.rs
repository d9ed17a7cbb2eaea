//! Per-request identity context.

use passgate_store::UserRecord;

/// Authenticated identity for the current request.
///
/// Resolved fresh from the store on every request by the auth middleware;
/// never cached across requests. Tenant scoping comes from the record's
/// company association.
#[derive(Debug, Clone)]
pub struct CurrentUser(UserRecord);

impl CurrentUser {
    pub fn new(record: UserRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &UserRecord {
        &self.0
    }
}
