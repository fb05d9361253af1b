mod domain;
mod recommend;
mod clients;
mod messages;

mod app_system;
mod storefront;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;
mod user_actor;
mod order_actor;
mod settings_actor;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{demo_catalog, setup_tracing, StoreConfig, StoreError, StoreSystem};
use crate::domain::{CategoryFilter, Credentials, CustomerDetails, ProductPatch, UserRole};

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(vat_rate = config.settings.vat_rate, delivery_fee = config.settings.delivery_fee, "Starting café storefront");

    let system = StoreSystem::new(config);
    system.seed_catalog(demo_catalog()).await?;

    // A guest browses, fills the cart and checks out
    let mut guest = system.open_session();
    let span = tracing::info_span!("guest_session");
    let order = async {
        guest.sign_in(Credentials::new("guest@cafe.com", "123456", UserRole::Consumer)).await?;

        for combo in guest.combos().await? {
            info!(sku = %combo.sku, name = %combo.name, price = combo.price, "Combo on offer");
        }
        let menu = guest.menu(&CategoryFilter::All).await?;
        info!(items = menu.len(), "Menu loaded");

        guest.update_cart("CMB-01", 1).await?;
        guest.update_cart("SNK-02", 2).await?;

        for suggestion in guest.recommendations().await? {
            info!(sku = %suggestion.sku, price = suggestion.price, "Suggested pairing");
        }
        if let Some(top) = guest.recommendations().await?.first() {
            guest.update_cart(&top.sku, 1).await?;
        }

        let invoice = guest.invoice().await?;
        info!(subtotal = invoice.subtotal, vat = invoice.vat, total = invoice.total, "Invoice ready");

        let order = guest.checkout(CustomerDetails::new("Alexander Pierce", "alex@example.com")).await?;
        Ok::<_, StoreError>(order)
    }
    .instrument(span)
    .await;

    match &order {
        Ok(order) => info!(order_id = %order.id, total = order.total, "Order placed"),
        Err(e) => error!(error = %e, "Order failed"),
    }

    // Same guest restores the selection, then scans a menu photo
    if let Ok(order) = &order {
        let lines = guest.reorder(&order.id)?;
        info!(lines, "Previous order restored to cart");
    }
    match guest.scan_menu(b"photo-of-the-chalkboard-menu").await {
        Ok(found) => info!(found = found.len(), cart_lines = guest.cart().line_count(), "Scan added items"),
        Err(e) => warn!(error = %e, "Scan failed"),
    }

    // The owner archives a drink and raises the delivery fee
    let mut owner = system.open_session();
    let span = tracing::info_span!("admin_session");
    async {
        owner.sign_in(Credentials::new("admin@cafe.com", "admin123", UserRole::Owner)).await?;
        let mut console = owner.open_admin().await?;
        console.toggle_lock();
        console.set_delivery_fee(3.00)?;
        console.update_product("DRK-03", ProductPatch { active: Some(false), ..Default::default() })?;
        if let Some(commit) = console.toggle_lock() {
            owner.commit_admin(commit).await?;
        }
        Ok::<_, StoreError>(())
    }
    .instrument(span)
    .await?;

    let invoice = guest.invoice().await?;
    info!(delivery = invoice.delivery, total = invoice.total, "Guest invoice after admin changes");

    // Shutdown system gracefully
    drop(guest);
    drop(owner);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
