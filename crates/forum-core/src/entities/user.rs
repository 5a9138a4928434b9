//! User entity - represents a forum account

/// A user about to be registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl NewUser {
    /// Create a new user registration
    pub fn new(id: String, username: String, fullname: String) -> Self {
        Self {
            id,
            username,
            fullname,
        }
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl From<&NewUser> for AddedUser {
    fn from(user: &NewUser) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            fullname: user.fullname.clone(),
        }
    }
}

/// Stored login credentials for a username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub id: String,
    pub password_hash: String,
}
