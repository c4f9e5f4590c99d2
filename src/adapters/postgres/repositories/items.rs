use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::repo_trait::{Entity, Repository};
use super::unit_of_work::UnitOfWork;
use super::UnitOfWorkInternal;
use crate::adapters::postgres::models::{ItemChangeset, ItemModel, NewItemModel};
use crate::adapters::postgres::schema::items;
use crate::dtos::items::ItemDTO;
use crate::errors::RepositoryError;

pub struct ItemsRepo {}

impl Repository<ItemDTO, i32> for ItemsRepo {
    async fn save(item: &ItemDTO, uow: &mut UnitOfWork) -> Result<ItemDTO, RepositoryError> {
        let saved: ItemModel = if item.is_new() {
            let saved = diesel::insert_into(items::table)
                .values(NewItemModel::from_dto(item))
                .returning(ItemModel::as_returning())
                .get_result(uow.get_conn())
                .await?;
            tracing::debug!(id = saved.id, "Inserted item");
            saved
        } else {
            let saved = diesel::update(items::table.find(item.id))
                .set(ItemChangeset::from_dto(item))
                .returning(ItemModel::as_returning())
                .get_result(uow.get_conn())
                .await?;
            tracing::debug!(id = saved.id, "Updated item");
            saved
        };

        Ok(saved.into())
    }

    async fn find_by_id(
        item_id: i32,
        uow: &mut UnitOfWork,
    ) -> Result<Option<ItemDTO>, RepositoryError> {
        let item = items::table
            .find(item_id)
            .select(ItemModel::as_select())
            .first(uow.get_conn())
            .await
            .optional()?;

        Ok(item.map(ItemDTO::from))
    }

    async fn find_all(uow: &mut UnitOfWork) -> Result<Vec<ItemDTO>, RepositoryError> {
        let all = items::table
            .select(ItemModel::as_select())
            .order(items::id.asc())
            .load(uow.get_conn())
            .await?;

        Ok(all.into_iter().map(ItemDTO::from).collect())
    }

    async fn find_all_by_id(
        ids: &[i32],
        uow: &mut UnitOfWork,
    ) -> Result<Vec<ItemDTO>, RepositoryError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let found = items::table
            .filter(items::id.eq_any(ids.to_vec()))
            .select(ItemModel::as_select())
            .order(items::id.asc())
            .load(uow.get_conn())
            .await?;

        Ok(found.into_iter().map(ItemDTO::from).collect())
    }

    async fn delete_by_id(item_id: i32, uow: &mut UnitOfWork) -> Result<(), RepositoryError> {
        let deleted = diesel::delete(items::table.find(item_id))
            .execute(uow.get_conn())
            .await?;

        if deleted == 0 {
            tracing::debug!(id = item_id, "No item to delete");
        } else {
            tracing::debug!(id = item_id, "Deleted item");
        }
        Ok(())
    }

    async fn delete_all_by_id(ids: &[i32], uow: &mut UnitOfWork) -> Result<(), RepositoryError> {
        if ids.is_empty() {
            return Ok(());
        }

        let deleted = diesel::delete(items::table.filter(items::id.eq_any(ids.to_vec())))
            .execute(uow.get_conn())
            .await?;
        tracing::debug!(requested = ids.len(), deleted, "Deleted items by id");
        Ok(())
    }

    async fn delete_all(uow: &mut UnitOfWork) -> Result<(), RepositoryError> {
        let deleted = diesel::delete(items::table)
            .execute(uow.get_conn())
            .await?;
        tracing::debug!(deleted, "Deleted all items");
        Ok(())
    }

    async fn count(uow: &mut UnitOfWork) -> Result<i64, RepositoryError> {
        let total = items::table
            .count()
            .get_result::<i64>(uow.get_conn())
            .await?;
        Ok(total)
    }
}
