//! Authorization gate
//!
//! A stateless policy over operations and caller identities. The identity
//! handed in must already be server-verified (resolved from a session
//! token by the middleware); this module never consults the store.

use crate::error::ApiError;
use crate::models::Identity;

/// Operations subject to the authorization gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPosts,
    CreatePost,
    Register,
    Authenticate,
    Logout,
    ListUsers,
    DeleteUser,
    DeletePost,
}

impl Operation {
    /// Operations reserved to administrators
    fn admin_only(self) -> bool {
        matches!(
            self,
            Operation::ListUsers | Operation::DeleteUser | Operation::DeletePost
        )
    }

    /// Operations that need an authenticated identity at all
    fn requires_identity(self) -> bool {
        self.admin_only() || matches!(self, Operation::CreatePost | Operation::Logout)
    }
}

/// Decide whether `identity` may perform `op`
pub fn authorize(identity: Option<&Identity>, op: Operation) -> Result<(), ApiError> {
    if !op.requires_identity() {
        return Ok(());
    }

    let identity = identity.ok_or(ApiError::Unauthorized)?;

    if op.admin_only() && !identity.is_admin {
        return Err(ApiError::Forbidden);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity(is_admin: bool) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_public_operations_allow_anonymous() {
        for op in [Operation::ListPosts, Operation::Register, Operation::Authenticate] {
            assert!(authorize(None, op).is_ok());
        }
    }

    #[test]
    fn test_create_post_requires_identity() {
        assert!(matches!(
            authorize(None, Operation::CreatePost),
            Err(ApiError::Unauthorized)
        ));
        assert!(authorize(Some(&identity(false)), Operation::CreatePost).is_ok());
    }

    #[test]
    fn test_admin_operations_deny_non_admin() {
        for op in [Operation::ListUsers, Operation::DeleteUser, Operation::DeletePost] {
            assert!(matches!(
                authorize(Some(&identity(false)), op),
                Err(ApiError::Forbidden)
            ));
            assert!(matches!(authorize(None, op), Err(ApiError::Unauthorized)));
            assert!(authorize(Some(&identity(true)), op).is_ok());
        }
    }

    #[test]
    fn test_admin_identity_passes_everywhere() {
        for op in [
            Operation::ListPosts,
            Operation::CreatePost,
            Operation::Logout,
            Operation::ListUsers,
            Operation::DeleteUser,
            Operation::DeletePost,
        ] {
            assert!(authorize(Some(&identity(true)), op).is_ok());
        }
    }
}
