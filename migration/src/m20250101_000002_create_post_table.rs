use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Location,
    UserPicturePath,
    Description,
    PicturePath,
    Likes,
    Comments,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Post::Table)
                .if_not_exists()
                .col(ColumnDef::new(Post::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Post::UserId).uuid().not_null())
                .col(ColumnDef::new(Post::FirstName).string().not_null())
                .col(ColumnDef::new(Post::LastName).string().not_null())
                .col(ColumnDef::new(Post::Location).string().not_null().default(""))
                .col(ColumnDef::new(Post::UserPicturePath).string().not_null().default(""))
                .col(ColumnDef::new(Post::Description).text().not_null().default(""))
                .col(ColumnDef::new(Post::PicturePath).string().not_null().default(""))
                .col(
                    ColumnDef::new(Post::Likes)
                        .json_binary()
                        .not_null()
                        .default(Expr::cust("'{}'::jsonb")),
                )
                .col(
                    ColumnDef::new(Post::Comments)
                        .json_binary()
                        .not_null()
                        .default(Expr::cust("'[]'::jsonb")),
                )
                .col(ColumnDef::new(Post::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Post::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_user")
                        .from(Post::Table, Post::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // feed for a single profile page
        m.create_index(
            Index::create()
                .name("idx_post_user_id")
                .table(Post::Table)
                .col(Post::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Post::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
