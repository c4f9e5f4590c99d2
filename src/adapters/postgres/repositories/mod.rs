mod items;
mod repo_trait;
mod unit_of_work;

trait UnitOfWorkInternal {
    fn get_conn(&mut self) -> &mut diesel_async::AsyncPgConnection;
}

pub use items::ItemsRepo;
pub use repo_trait::{Entity, Repository};
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory, UnitOfWorkPublic};
