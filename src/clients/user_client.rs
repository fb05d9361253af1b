use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{normalize_email, Credentials, Order, UserCreate, UserPatch, UserProfile};
use crate::user_actor::{UserAction, UserActionResult, UserError};

/// Client for interacting with the user actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<UserProfile>,
}

impl_basic_client!(UserClient, UserProfile, UserError, user);

impl UserClient {
    /// Simulated sign-in: any non-empty email/password pair is accepted.
    ///
    /// Profiles are keyed by the normalised email, so concurrent first sign-ins for the
    /// same address resolve to one profile. Returns the existing profile (switched to the
    /// requested role) or registers a new one.
    #[instrument(skip(self, credentials), fields(email = %credentials.email, role = ?credentials.role))]
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<UserProfile, UserError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(UserError::ValidationError("email and password are required".to_string()));
        }
        let email = normalize_email(&credentials.email);

        let user = match self.inner.get(email.clone()).await? {
            Some(user) => user,
            None => {
                debug!("Registering new profile");
                let id = match self.inner.create(UserCreate { email, role: credentials.role }).await {
                    Ok(id) => id,
                    Err(FrameworkError::AlreadyExists(id)) => {
                        debug!(user_id = %id, "Profile registered concurrently");
                        id
                    }
                    Err(e) => return Err(e.into()),
                };
                self.inner.get(id.clone()).await?.ok_or(UserError::NotFound(id))?
            }
        };

        if user.role == credentials.role {
            info!(user_id = %user.id, "User signed in");
            return Ok(user);
        }
        let patch = UserPatch { role: Some(credentials.role), ..Default::default() };
        let user = self.inner.update(user.id.clone(), patch).await?;
        info!(user_id = %user.id, "Returning user signed in with new role");
        Ok(user)
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn record_order(&self, user_id: String, order: Order) -> Result<usize, UserError> {
        debug!("Sending request");
        match self.inner.perform_action(user_id, UserAction::RecordOrder(Box::new(order))).await? {
            UserActionResult::Recorded(len) => Ok(len),
        }
    }
}
