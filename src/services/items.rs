use chrono::{SubsecRound, Utc};

use crate::adapters::postgres::repositories::{
    ItemsRepo, Repository, UnitOfWorkFactory, UnitOfWorkPublic,
};
use crate::dtos::items::ItemDTO;
use crate::errors::RepositoryError;

/// Service-level access to items. Every call runs on its own unit of work.
#[derive(Clone)]
pub struct ItemsService {
    uow_factory: UnitOfWorkFactory,
}

impl ItemsService {
    pub fn new(uow_factory: UnitOfWorkFactory) -> Self {
        Self { uow_factory }
    }

    pub async fn create_item(&self, name: &str) -> Result<ItemDTO, RepositoryError> {
        // Postgres keeps microseconds
        let created_at = Utc::now().naive_utc().trunc_subsecs(6);
        let mut uow = self.uow_factory.create_uow().await?;
        let item = ItemsRepo::save(&ItemDTO::new(name, created_at), &mut uow).await?;
        tracing::info!(id = item.id, name = %item.name, "Created item");
        Ok(item)
    }

    /// Creates all items in one transaction; nothing is stored if any insert fails.
    pub async fn create_items(&self, names: &[&str]) -> Result<Vec<ItemDTO>, RepositoryError> {
        let created_at = Utc::now().naive_utc().trunc_subsecs(6);
        let new_items = names
            .iter()
            .map(|name| ItemDTO::new(*name, created_at))
            .collect::<Vec<_>>();

        let mut uow = self.uow_factory.create_uow().await?;
        uow.begin_transaction().await?;
        match ItemsRepo::save_all(&new_items, &mut uow).await {
            Ok(saved) => {
                uow.commit().await?;
                tracing::info!(count = saved.len(), "Created items");
                Ok(saved)
            }
            Err(error) => {
                if let Err(rollback_error) = uow.rollback().await {
                    tracing::warn!(%rollback_error, "Failed to roll back item batch");
                }
                Err(error)
            }
        }
    }

    /// Returns `None` when no item has this id, including when the item is
    /// deleted between the lookup and the update.
    pub async fn rename_item(
        &self,
        id: i32,
        name: &str,
    ) -> Result<Option<ItemDTO>, RepositoryError> {
        let mut uow = self.uow_factory.create_uow().await?;
        let Some(mut item) = ItemsRepo::find_by_id(id, &mut uow).await? else {
            return Ok(None);
        };
        item.name = name.to_string();
        let renamed = missing_as_none(ItemsRepo::save(&item, &mut uow).await)?;
        match &renamed {
            Some(item) => tracing::info!(id = item.id, name = %item.name, "Renamed item"),
            None => tracing::debug!(id, "Item vanished before rename"),
        }
        Ok(renamed)
    }

    pub async fn get_item(&self, id: i32) -> Result<Option<ItemDTO>, RepositoryError> {
        let mut uow = self.uow_factory.create_uow().await?;
        ItemsRepo::find_by_id(id, &mut uow).await
    }

    pub async fn list_items(&self) -> Result<Vec<ItemDTO>, RepositoryError> {
        let mut uow = self.uow_factory.create_uow().await?;
        ItemsRepo::find_all(&mut uow).await
    }

    pub async fn remove_item(&self, id: i32) -> Result<(), RepositoryError> {
        let mut uow = self.uow_factory.create_uow().await?;
        ItemsRepo::delete_by_id(id, &mut uow).await?;
        tracing::info!(id, "Removed item");
        Ok(())
    }

    pub async fn count_items(&self) -> Result<i64, RepositoryError> {
        let mut uow = self.uow_factory.create_uow().await?;
        ItemsRepo::count(&mut uow).await
    }
}

fn missing_as_none(
    saved: Result<ItemDTO, RepositoryError>,
) -> Result<Option<ItemDTO>, RepositoryError> {
    match saved {
        Ok(item) => Ok(Some(item)),
        Err(error) if error.is_not_found() => Ok(None),
        Err(error) => Err(error),
    }
}
