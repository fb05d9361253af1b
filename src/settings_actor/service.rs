use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::SettingsClient;
use crate::domain::AdminSettings;
use crate::messages::{ServiceResponse, SettingsRequest};
use super::SettingsError;

pub struct SettingsService {
    receiver: mpsc::Receiver<SettingsRequest>,
    settings: AdminSettings,
}

impl SettingsService {
    pub fn new(buffer_size: usize, settings: AdminSettings) -> (Self, SettingsClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, settings };
        (service, SettingsClient::new(sender))
    }

    #[instrument(name = "settings_service", skip(self))]
    pub async fn run(mut self) {
        info!("SettingsService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SettingsRequest::GetSettings { respond_to } => {
                    let _ = respond_to.send(Ok(self.settings.clone()));
                }
                SettingsRequest::SaveSettings { settings, respond_to } => {
                    self.handle_save_settings(settings, respond_to);
                }
                SettingsRequest::Shutdown => {
                    info!("SettingsService shutting down");
                    break;
                }
            }
        }
        info!("SettingsService stopped");
    }

    #[instrument(fields(vat_rate = settings.vat_rate, delivery_fee = settings.delivery_fee), skip(self, settings, respond_to))]
    fn handle_save_settings(
        &mut self,
        settings: AdminSettings,
        respond_to: ServiceResponse<AdminSettings, SettingsError>,
    ) {
        debug!("Processing save_settings request");
        if let Err(reason) = settings.validate() {
            warn!(%reason, "Settings rejected");
            let _ = respond_to.send(Err(SettingsError::Invalid(reason)));
            return;
        }
        self.settings = settings;
        info!(categories = self.settings.categories.len(), "Settings saved");
        let _ = respond_to.send(Ok(self.settings.clone()));
    }
}
