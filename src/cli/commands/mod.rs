mod list;
mod record;
mod serve;

pub use list::{cmd_latest, cmd_list, cmd_show};
pub use record::{cmd_add_quantity, cmd_record};
pub use serve::cmd_serve;

use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::DefaultInventoryService;

async fn open_inventory(config: &Config) -> anyhow::Result<DefaultInventoryService> {
    let store = Store::new(&config.general.database_path).await?;
    Ok(DefaultInventoryService::new(Arc::new(store))
        .with_latest_limit(config.inventory.latest_limit))
}

fn print_item_header() {
    println!("{:<6} {:<40} {:>10}  {}", "ID", "Name", "Quantity", "Last recorded");
    println!("{:-<80}", "");
}

fn print_item_row(item: &crate::models::Item) {
    println!(
        "{:<6} {:<40} {:>10}  {}",
        item.id,
        item.name,
        item.quantity,
        item.last_recorded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}
