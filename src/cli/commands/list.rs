//! Read-only item command handlers

use super::{open_inventory, print_item_header, print_item_row};
use crate::config::Config;
use crate::services::InventoryService;

pub async fn cmd_latest(config: &Config) -> anyhow::Result<()> {
    let inventory = open_inventory(config).await?;
    let items = inventory.get_latest().await?;

    if items.is_empty() {
        println!("No items recorded yet.");
        println!();
        println!("Record one with: intake record \"item name\" 5");
        return Ok(());
    }

    println!("Latest Items ({} shown)", items.len());
    print_item_header();
    for item in &items {
        print_item_row(item);
    }

    Ok(())
}

pub async fn cmd_list(config: &Config, page: u64, limit: u64) -> anyhow::Result<()> {
    let inventory = open_inventory(config).await?;
    let page = inventory.get_all_paged(page, limit).await?;

    if page.items.is_empty() {
        println!(
            "No items on page {} ({} items total).",
            page.page, page.total_items
        );
        return Ok(());
    }

    print_item_header();
    for item in &page.items {
        print_item_row(item);
    }
    println!();
    println!(
        "Page {}/{} | {} items total | {} per page",
        page.page, page.total_pages, page.total_items, page.limit
    );

    Ok(())
}

pub async fn cmd_show(config: &Config, name: &str) -> anyhow::Result<()> {
    let inventory = open_inventory(config).await?;
    let item = inventory.get_by_name(name).await?;

    println!("{}", item.name);
    println!("  ID:            {}", item.id);
    println!("  Quantity:      {}", item.quantity);
    println!("  Last recorded: {}", item.last_recorded_at.to_rfc3339());

    Ok(())
}
