use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// A client on whose behalf notices are tracked.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}
