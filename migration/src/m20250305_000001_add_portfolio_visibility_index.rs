use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PortfolioItems {
    Table,
    Status,
    Featured,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing order for every portfolio read
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_items_created_at")
                    .table(PortfolioItems::Table)
                    .col(PortfolioItems::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Homepage query: featured + published, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_items_featured_status")
                    .table(PortfolioItems::Table)
                    .col(PortfolioItems::Featured)
                    .col(PortfolioItems::Status)
                    .col(PortfolioItems::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_portfolio_items_created_at").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolio_items_featured_status")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
