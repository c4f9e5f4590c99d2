use chrono::prelude::*;

use crate::adapters::postgres::repositories::Entity;

/// Id value carried by an item the database has not assigned an id to yet.
pub const UNASSIGNED_ID: i32 = 0;

#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub struct ItemDTO {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl ItemDTO {
    /// An item that has not been saved yet. `save` assigns the id.
    pub fn new(name: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            created_at,
        }
    }
}

impl Entity for ItemDTO {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn is_new(&self) -> bool {
        self.id == UNASSIGNED_ID
    }
}
