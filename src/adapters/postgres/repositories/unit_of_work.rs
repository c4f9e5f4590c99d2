// Repositories take a mutable reference to a unit of work in every method.
// The connection inside is reachable only through `UnitOfWorkInternal`, which is
// private to the repositories module, so code above the db level sees nothing but
// transaction control (begin / commit / rollback).

use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::{AnsiTransactionManager, AsyncPgConnection, TransactionManager};

use super::UnitOfWorkInternal;
use crate::errors::RepositoryError;

#[derive(Clone)]
pub struct UnitOfWorkFactory {
    conn_pool: Pool<AsyncPgConnection>,
}

impl UnitOfWorkFactory {
    pub fn new(conn_pool: Pool<AsyncPgConnection>) -> Self {
        Self { conn_pool }
    }

    /// Checks out one pooled connection for the lifetime of the unit of work.
    pub async fn create_uow(&self) -> Result<UnitOfWork, RepositoryError> {
        let conn = self.conn_pool.get().await?;
        Ok(UnitOfWork::new(conn))
    }
}

pub struct UnitOfWork {
    conn: Object<AsyncPgConnection>,
}

impl UnitOfWork {
    fn new(conn: Object<AsyncPgConnection>) -> Self {
        Self { conn }
    }
}

impl UnitOfWorkInternal for UnitOfWork {
    fn get_conn(&mut self) -> &mut AsyncPgConnection {
        &mut self.conn
    }
}

pub trait UnitOfWorkPublic {
    async fn begin_transaction(&mut self) -> Result<(), RepositoryError>;

    async fn commit(&mut self) -> Result<(), RepositoryError>;

    async fn rollback(&mut self) -> Result<(), RepositoryError>;
}

impl UnitOfWorkPublic for UnitOfWork {
    async fn begin_transaction(&mut self) -> Result<(), RepositoryError> {
        AnsiTransactionManager::begin_transaction(self.get_conn()).await?;
        tracing::debug!("Transaction started");
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        AnsiTransactionManager::commit_transaction(self.get_conn()).await?;
        tracing::debug!("Transaction committed");
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), RepositoryError> {
        AnsiTransactionManager::rollback_transaction(self.get_conn()).await?;
        tracing::debug!("Transaction rolled back");
        Ok(())
    }
}
