use super::unit_of_work::UnitOfWork;
use crate::errors::RepositoryError;

/// A record persisted by a [`Repository`], identified by a single key.
pub trait Entity {
    type Id: Copy + Send + Sync;

    fn id(&self) -> Self::Id;

    /// True until the database has assigned an id.
    fn is_new(&self) -> bool;
}

/// Generic CRUD access to one entity type keyed by `IdType`.
///
/// Implementors are stateless: every call reaches storage through the given
/// unit of work, and errors from the storage layer are returned unchanged.
pub trait Repository<EntityType, IdType>: Send + Sync + 'static
where
    EntityType: Entity<Id = IdType>,
    IdType: Copy + Send + Sync,
{
    /// Inserts a new entity or updates an existing one, returning the stored row.
    ///
    /// Saving an entity whose id matches no row fails with
    /// `diesel::result::Error::NotFound`.
    async fn save(entity: &EntityType, uow: &mut UnitOfWork)
        -> Result<EntityType, RepositoryError>;

    async fn find_by_id(
        id: IdType,
        uow: &mut UnitOfWork,
    ) -> Result<Option<EntityType>, RepositoryError>;

    /// All stored entities, in whatever order storage returns them.
    async fn find_all(uow: &mut UnitOfWork) -> Result<Vec<EntityType>, RepositoryError>;

    async fn find_all_by_id(
        ids: &[IdType],
        uow: &mut UnitOfWork,
    ) -> Result<Vec<EntityType>, RepositoryError>;

    /// Removes the entity with this id. A missing id is a no-op.
    async fn delete_by_id(id: IdType, uow: &mut UnitOfWork) -> Result<(), RepositoryError>;

    async fn delete_all_by_id(ids: &[IdType], uow: &mut UnitOfWork)
        -> Result<(), RepositoryError>;

    async fn delete_all(uow: &mut UnitOfWork) -> Result<(), RepositoryError>;

    async fn count(uow: &mut UnitOfWork) -> Result<i64, RepositoryError>;

    async fn delete(entity: &EntityType, uow: &mut UnitOfWork) -> Result<(), RepositoryError> {
        Self::delete_by_id(entity.id(), uow).await
    }

    async fn exists_by_id(id: IdType, uow: &mut UnitOfWork) -> Result<bool, RepositoryError> {
        Ok(Self::find_by_id(id, uow).await?.is_some())
    }

    async fn save_all(
        entities: &[EntityType],
        uow: &mut UnitOfWork,
    ) -> Result<Vec<EntityType>, RepositoryError> {
        let mut saved = Vec::with_capacity(entities.len());
        for entity in entities {
            saved.push(Self::save(entity, uow).await?);
        }
        Ok(saved)
    }
}
