use tokio::sync::oneshot;
use crate::domain::AdminSettings;
use crate::settings_actor::SettingsError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enum for the settings service. Each variant includes parameters
/// and a oneshot channel for responses.
#[derive(Debug)]
pub enum SettingsRequest {
    GetSettings {
        respond_to: ServiceResponse<AdminSettings, SettingsError>,
    },
    SaveSettings {
        settings: AdminSettings,
        respond_to: ServiceResponse<AdminSettings, SettingsError>,
    },
    Shutdown,
}
