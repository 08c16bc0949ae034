use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(ColumnDef::new(User::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(User::LastName).string_len(50).not_null())
                    .col(
                        ColumnDef::new(User::Email)
                            .string_len(50)
                            .not_null()
                            .unique_key()
                    )
                    .col(ColumnDef::new(User::Password).string().not_null())
                    .col(ColumnDef::new(User::PicturePath).string().not_null().default(""))
                    .col(
                        ColumnDef::new(User::Friends)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb"))
                    )
                    .col(ColumnDef::new(User::Location).string().not_null().default(""))
                    .col(ColumnDef::new(User::Occupation).string().not_null().default(""))
                    .col(ColumnDef::new(User::ViewedProfile).integer().not_null().default(0))
                    .col(ColumnDef::new(User::Impressions).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(User::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(User::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    PicturePath,
    Friends,
    Location,
    Occupation,
    ViewedProfile,
    Impressions,
    CreatedAt,
    UpdatedAt,
}
