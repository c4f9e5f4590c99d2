use crate::dtos::items::ItemDTO;
use chrono::prelude::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, PartialEq, Debug)]
#[diesel(table_name = super::schema::items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemModel {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<ItemModel> for ItemDTO {
    fn from(item: ItemModel) -> Self {
        ItemDTO {
            id: item.id,
            name: item.name,
            created_at: item.created_at,
        }
    }
}

/// Columns written on insert; the id comes from the `SERIAL` sequence.
#[derive(Insertable)]
#[diesel(table_name = super::schema::items)]
pub struct NewItemModel<'a> {
    pub name: &'a str,
    pub created_at: &'a NaiveDateTime,
}

impl<'a> NewItemModel<'a> {
    pub fn from_dto(dto: &'a ItemDTO) -> Self {
        Self {
            name: &dto.name,
            created_at: &dto.created_at,
        }
    }
}

/// Columns overwritten when an existing item is saved again.
#[derive(AsChangeset)]
#[diesel(table_name = super::schema::items)]
pub struct ItemChangeset<'a> {
    pub name: &'a str,
    pub created_at: &'a NaiveDateTime,
}

impl<'a> ItemChangeset<'a> {
    pub fn from_dto(dto: &'a ItemDTO) -> Self {
        Self {
            name: &dto.name,
            created_at: &dto.created_at,
        }
    }
}
