use super::order::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Consumer,
    /// Café owner; may open the admin console.
    Owner,
}

/// Represents a signed-in shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
    /// Newest first.
    pub history: Vec<Order>,
}

/// Params for registering a profile on first sign-in.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub role: UserRole,
}

/// Payload for updating an existing profile.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub role: Option<UserRole>,
}

/// Credentials typed into the sign-in form. The password is never checked.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self { email: email.into(), password: password.into(), role }
    }
}

impl UserProfile {
    /// Builds a fresh profile for `email`.
    ///
    /// # Notes
    /// The display name is the email's local part with its first letter upper-cased.
    pub fn for_email(id: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        let email = email.into();
        Self {
            id: id.into(),
            name: display_name(&email),
            avatar: format!("https://i.pravatar.cc/150?u={}", email),
            email,
            role,
            history: Vec::new(),
        }
    }

    pub fn is_owner(&self) -> bool {
        self.role == UserRole::Owner
    }

    pub fn find_order(&self, order_id: &str) -> Option<&Order> {
        self.history.iter().find(|o| o.id == order_id)
    }
}

/// Key a profile is stored under: the trimmed, lower-cased email.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_derives_name_and_avatar() {
        let user = UserProfile::for_email("user_1", "guest@cafe.com", UserRole::Consumer);
        assert_eq!(user.name, "Guest");
        assert_eq!(user.avatar, "https://i.pravatar.cc/150?u=guest@cafe.com");
        assert!(user.history.is_empty());
        assert!(!user.is_owner());
    }

    #[test]
    fn test_display_name_edge_cases() {
        assert_eq!(display_name("@cafe.com"), "");
        assert_eq!(display_name("élodie@cafe.com"), "Élodie");
        assert_eq!(display_name("noatsign"), "Noatsign");
    }
}
