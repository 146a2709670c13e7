//! Actor identity handed to the core by the external identity provider.
//!
//! The core never manages credentials; the transport layer authenticates a
//! request and passes an opaque actor id plus a role claim down. Nothing is
//! enforced at the model layer in the current scope, the identity is only
//! carried for audit logging.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Viewer,
    Editor,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}
