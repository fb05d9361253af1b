use tokio::sync::mpsc;
use tracing::debug;
use crate::domain::AdminSettings;
use crate::messages::SettingsRequest;
use crate::settings_actor::SettingsError;

/// Client for the settings service.
#[derive(Clone)]
pub struct SettingsClient {
    sender: mpsc::Sender<SettingsRequest>,
}

impl SettingsClient {
    pub fn new(sender: mpsc::Sender<SettingsRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. A service that is already gone is fine.
    pub async fn shutdown(&self) {
        debug!("Sending shutdown");
        let _ = self.sender.send(SettingsRequest::Shutdown).await;
    }
}

client_method!(SettingsClient => fn get_settings() -> AdminSettings as SettingsRequest::GetSettings, Error = SettingsError);
client_method!(SettingsClient => fn save_settings(settings: AdminSettings) -> AdminSettings as SettingsRequest::SaveSettings, Error = SettingsError);
