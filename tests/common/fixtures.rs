//! Test fixtures and data factories

use gristctl_scim::{BulkOperation, BulkRequest};
use serde_json::{Value, json};

/// SCIM core user schema
pub const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// Factory for creating bulk requests
pub struct BulkRequestFactory;

impl BulkRequestFactory {
    /// SCIM user resource payload
    pub fn user(user_name: &str) -> Value {
        json!({
            "schemas": [USER_SCHEMA],
            "userName": user_name,
            "emails": [{"value": user_name, "primary": true}]
        })
    }

    /// A POST /Users operation with a bulkId derived from the user name
    pub fn create_user(user_name: &str) -> BulkOperation {
        BulkOperation::new("POST", "/Users")
            .with_bulk_id(format!("create-{}", user_name))
            .with_data(Self::user(user_name))
    }

    /// `count` user-creation operations in one request
    pub fn create_users(count: usize) -> BulkRequest {
        BulkRequest::new(
            (0..count)
                .map(|i| Self::create_user(&format!("user{}@example.com", i)))
                .collect(),
        )
    }

    /// A PATCH operation replacing the display name
    pub fn rename_user(id: &str, display_name: &str) -> BulkOperation {
        BulkOperation::new("PATCH", format!("/Users/{}", id))
            .with_bulk_id(format!("rename-{}", id))
            .with_data(json!({
                "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
                "Operations": [{"op": "replace", "path": "displayName", "value": display_name}]
            }))
    }

    /// A DELETE operation
    pub fn delete_user(id: &str) -> BulkOperation {
        BulkOperation::new("DELETE", format!("/Users/{}", id)).with_bulk_id(format!("delete-{}", id))
    }
}
