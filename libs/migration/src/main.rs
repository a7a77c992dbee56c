//! Standalone migration runner.
//!
//! The sea-orm CLI reads `DATABASE_URL` (or `-u`), not the service's `DB_URL`:
//!
//! ```text
//! DATABASE_URL="$DB_URL" cargo run -p migration -- up
//! ```

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
