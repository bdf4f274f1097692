pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_portfolio_items_table;
mod m20250301_000002_create_experience_table;
mod m20250301_000003_create_site_settings_table;
mod m20250305_000001_add_portfolio_visibility_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_portfolio_items_table::Migration),
            Box::new(m20250301_000002_create_experience_table::Migration),
            Box::new(m20250301_000003_create_site_settings_table::Migration),
            Box::new(m20250305_000001_add_portfolio_visibility_index::Migration),
        ]
    }
}
