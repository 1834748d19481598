use std::sync::Arc;

use board_db::{Database, queries};
use board_types::api::CategoryRequest;
use board_types::models::Category;
use tracing::info;

use super::{
    Action, Listing, Mutation, ServiceError, ServiceResult, exists_as, in_use_as, normalize_name,
    not_found,
};

const RESOURCE: &str = "Category";

pub struct CategoryService {
    db: Arc<Database>,
}

impl CategoryService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn create(&self, req: &CategoryRequest) -> ServiceResult<Mutation> {
        let category_name = normalize_name("category_name", &req.category_name)?;

        let row = self.db.with_tx(|tx| {
            let id = queries::insert_category(tx, &category_name)
                .map_err(exists_as(&category_name))?;
            queries::query_category_by_id(tx, id)?.ok_or_else(|| {
                ServiceError::Internal(format!("category {id} missing after insert"))
            })
        })?;

        info!("Category {} created (id {})", row.category_name, row.id);
        Ok(Mutation::new(Action::Created, row.category_name))
    }

    pub fn get(&self, id: i64) -> ServiceResult<Category> {
        self.db
            .get_category(id)?
            .map(Category::from)
            .ok_or_else(|| not_found(RESOURCE))
    }

    pub fn list(&self) -> ServiceResult<Listing<Category>> {
        Ok(Listing::from_rows(self.db.list_categories()?, "categories"))
    }

    pub fn update(&self, id: i64, req: &CategoryRequest) -> ServiceResult<Mutation> {
        let category_name = normalize_name("category_name", &req.category_name)?;

        let row = self.db.with_tx(|tx| {
            let changed = queries::update_category_name(tx, id, &category_name)
                .map_err(exists_as("Category name"))?;
            if !changed {
                return Err(not_found(RESOURCE));
            }
            queries::query_category_by_id(tx, id)?.ok_or_else(|| not_found(RESOURCE))
        })?;

        info!("Category {} renamed to {}", row.id, row.category_name);
        Ok(Mutation::new(Action::Updated, row.category_name))
    }

    pub fn delete(&self, id: i64) -> ServiceResult<Mutation> {
        let category_name = self.db.with_tx(|tx| -> ServiceResult<String> {
            let row = queries::query_category_by_id(tx, id)?.ok_or_else(|| not_found(RESOURCE))?;
            queries::delete_category(tx, id).map_err(in_use_as(RESOURCE))?;
            Ok(row.category_name)
        })?;

        info!("Category {} deleted (id {})", category_name, id);
        Ok(Mutation::new(Action::Deleted, category_name))
    }
}
