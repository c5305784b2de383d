//! Subscriber rows for the mailing list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mailing-list subscriber.
///
/// The public site only ever inserts; listing and deletion are admin-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
