//! Named Counter Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Counter ID type
pub type CounterId = RecordId;

/// A named monotonically increasing counter, keyed `counter:<name>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<CounterId>,
    pub name: String,
    pub value: i64,
}
