//! Ownership-based authorization

use crate::principal::Principal;

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Decide whether a principal may mutate a resource owned by `owner_id`
///
/// Only the owner may. There is no administrator bypass. The caller must
/// have confirmed the resource exists before asking.
pub fn authorize(principal: &Principal, owner_id: i64) -> Access {
    if principal.id() == owner_id {
        Access::Allow
    } else {
        Access::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use course_db::User;

    fn principal(id: i64) -> Principal {
        Principal::new(User {
            id,
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: format!("user{}@example.com", id),
            password: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    #[test]
    fn test_owner_is_allowed() {
        assert_eq!(authorize(&principal(1), 1), Access::Allow);
        assert!(authorize(&principal(1), 1).is_allowed());
    }

    #[test]
    fn test_everyone_else_is_denied() {
        for owner in [0, 2, -1, i64::MAX] {
            assert_eq!(authorize(&principal(1), owner), Access::Deny);
        }
    }
}
