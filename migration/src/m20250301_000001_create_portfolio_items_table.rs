use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio_items` table and its columns.
#[derive(DeriveIden)]
enum PortfolioItems {
    Table,
    Id,
    Title,
    Description,
    Category,
    Tags,
    ImageUrl,
    ProjectUrl,
    GithubUrl,
    Status,
    Featured,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioItems::Title).string().not_null())
                    .col(ColumnDef::new(PortfolioItems::Description).text().not_null())
                    .col(ColumnDef::new(PortfolioItems::Category).string().not_null())
                    .col(
                        ColumnDef::new(PortfolioItems::Tags)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'::text[]")),
                    )
                    .col(ColumnDef::new(PortfolioItems::ImageUrl).string().not_null())
                    .col(ColumnDef::new(PortfolioItems::ProjectUrl).string().null())
                    .col(ColumnDef::new(PortfolioItems::GithubUrl).string().null())
                    .col(
                        ColumnDef::new(PortfolioItems::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioItems::Table).to_owned())
            .await
    }
}
