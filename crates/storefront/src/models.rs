//! Domain models for the storefront.

use serde::{Deserialize, Serialize};

use treasured_touch_core::types::Email;

/// The signed-in user for one session.
///
/// Authentication is a stand-in: nothing is verified against a user store,
/// and the record lives only in the session registry. The shape exists so
/// clients have a stable contract to render against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: Email,
}
