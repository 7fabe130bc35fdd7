//! Record and add-quantity command handlers

use super::open_inventory;
use crate::config::Config;
use crate::services::InventoryService;

pub async fn cmd_record(config: &Config, name: &str, quantity: i64) -> anyhow::Result<()> {
    let inventory = open_inventory(config).await?;
    let outcome = inventory.record_item(name, quantity).await?;

    if outcome.was_created {
        println!(
            "✓ Recorded new item '{}' with quantity {}",
            outcome.item.name, outcome.item.quantity
        );
    } else {
        println!(
            "✓ Added {} to '{}'. Total now: {}",
            quantity, outcome.item.name, outcome.item.quantity
        );
    }

    Ok(())
}

pub async fn cmd_add_quantity(config: &Config, name: &str, quantity: i64) -> anyhow::Result<()> {
    let inventory = open_inventory(config).await?;
    let added = inventory.add_quantity_to_existing(name, quantity).await?;

    println!(
        "✓ '{}': {} + {} = {}",
        added.item.name, added.quantity_before, added.quantity_added, added.item.quantity
    );

    Ok(())
}
