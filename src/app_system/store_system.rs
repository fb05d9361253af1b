use std::time::Duration;
use tracing::{error, info, instrument, warn};
use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, ProductClient, SettingsClient, UserClient};
use crate::domain::{next_order_id, Order, Product, UserProfile};
use crate::product_actor::ProductError;
use crate::recommend::ComplementRules;
use crate::settings_actor::SettingsService;
use crate::storefront::Session;
use super::{StoreConfig, StoreError};

/// How long [`StoreSystem::shutdown`] waits for the actors to stop.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Handles to every actor in the store. Cheap to clone.
#[derive(Clone)]
pub struct StoreClients {
    pub products: ProductClient,
    pub users: UserClient,
    pub orders: OrderClient,
    pub settings: SettingsClient,
}

/// The application system that starts and wires all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StoreSystem {
    pub clients: StoreClients,
    rules: ComplementRules,
    prep_delay: Duration,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    pub fn new(config: StoreConfig) -> Self {
        let buffer = config.actor_buffer;

        // 1. Settings service
        let (settings_service, settings_client) = SettingsService::new(buffer, config.settings);
        let settings_handle = tokio::spawn(settings_service.run());

        // 2. Catalog, keyed by SKU
        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(buffer, String::new);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 3. Users, keyed by normalised email
        let (user_actor, user_resource_client) = ResourceActor::<UserProfile>::new(buffer, String::new);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 4. Orders, validated against users and catalog
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(buffer, next_order_id);
        let order_client = OrderClient::new(order_resource_client, user_client.clone(), product_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        info!(buffer, "Store system started");
        Self {
            clients: StoreClients {
                products: product_client,
                users: user_client,
                orders: order_client,
                settings: settings_client,
            },
            rules: config.complement_rules,
            prep_delay: config.prep_delay,
            handles: vec![settings_handle, product_handle, user_handle, order_handle],
        }
    }

    /// Loads `products` into the catalog in order. Returns how many were added.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn seed_catalog(&self, products: Vec<Product>) -> Result<usize, ProductError> {
        let mut added = 0;
        for product in products {
            self.clients.products.create_product(product.into()).await?;
            added += 1;
        }
        info!(added, "Catalog seeded");
        Ok(added)
    }

    pub fn open_session(&self) -> Session {
        Session::new(self.clients.clone(), self.rules.clone(), self.prep_delay)
    }

    /// Stops every actor, waiting at most [`SHUTDOWN_GRACE`].
    ///
    /// The resource actors stop once all their clients are gone, so sessions opened from
    /// this system should be dropped first. Actors still running when the grace period
    /// ends are aborted and reported as an error.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        self.shutdown_within(SHUTDOWN_GRACE).await
    }

    pub async fn shutdown_within(self, grace: Duration) -> Result<(), StoreError> {
        info!("Shutting down system...");
        self.clients.settings.shutdown().await;
        drop(self.clients);

        let deadline = tokio::time::Instant::now() + grace;
        let mut failures = Vec::new();
        for mut handle in self.handles {
            match tokio::time::timeout_at(deadline, &mut handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!("Actor task failed: {:?}", e);
                    failures.push(e.to_string());
                }
                Err(_) => {
                    warn!("Actor still has live clients, aborting");
                    handle.abort();
                    failures.push("actor did not stop before the shutdown deadline".to_string());
                }
            }
        }

        if failures.is_empty() {
            info!("System shutdown complete.");
            Ok(())
        } else {
            Err(StoreError::Task(failures.join("; ")))
        }
    }
}
