use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{normalize_email, Order, UserCreate, UserPatch, UserProfile};

/// Custom actions for user profiles.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Prepends a placed order to the profile's history.
    RecordOrder(Box<Order>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// History length after recording.
    Recorded(usize),
}

impl Entity for UserProfile {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = UserAction;
    type ActionResult = UserActionResult;

    fn id(&self) -> &String { &self.id }

    fn natural_id(params: &UserCreate) -> Option<String> {
        Some(normalize_email(&params.email))
    }

    /// Creates a new profile on first sign-in.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `params` - Email and requested role
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, FrameworkError> {
        if params.email.trim().is_empty() {
            return Err(FrameworkError::Rejected("email is required".to_string()));
        }
        Ok(UserProfile::for_email(id, normalize_email(&params.email), params.role))
    }

    /// Updates the profile.
    ///
    /// # Fields Updated
    /// - `name`: Display name
    /// - `role`: Role requested on the latest sign-in
    fn on_update(&mut self, patch: UserPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: UserAction) -> Result<UserActionResult, FrameworkError> {
        match action {
            UserAction::RecordOrder(order) => {
                if order.user_id != self.id {
                    return Err(FrameworkError::Rejected(format!(
                        "order {} belongs to {}, not {}", order.id, order.user_id, self.id
                    )));
                }
                self.history.insert(0, *order);
                Ok(UserActionResult::Recorded(self.history.len()))
            }
        }
    }
}
