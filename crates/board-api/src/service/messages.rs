use std::sync::Arc;

use board_db::{Database, queries};
use board_types::api::MessageRequest;
use board_types::models::Message;
use tracing::{info, warn};

use super::{
    Action, Listing, MESSAGE_MAX_CHARS, Mutation, ServiceError, ServiceResult, check_text,
    not_found,
};

const RESOURCE: &str = "Message";

/// Messages have no update operation.
pub struct MessageService {
    db: Arc<Database>,
}

impl MessageService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Both foreign keys are looked up before either failure is raised, so a
    /// request missing both reports them together.
    pub fn create(&self, req: &MessageRequest) -> ServiceResult<Mutation> {
        check_text("message", &req.message, MESSAGE_MAX_CHARS)?;

        let row = self.db.with_tx(|tx| {
            let user = queries::query_user_by_id(tx, req.user_id)?;
            let category = queries::query_category_by_id(tx, req.category_id)?;

            let missing = match (user.is_some(), category.is_some()) {
                (true, true) => None,
                (false, false) => Some("User and Category"),
                (false, true) => Some("User"),
                (true, false) => Some("Category"),
            };
            if let Some(missing) = missing {
                warn!(
                    "Message rejected: {} not found (user_id {}, category_id {})",
                    missing, req.user_id, req.category_id
                );
                return Err(not_found(missing));
            }

            let id = queries::insert_message(tx, &req.message, req.user_id, req.category_id)?;
            queries::query_message_by_id(tx, id)?.ok_or_else(|| {
                ServiceError::Internal(format!("message {id} missing after insert"))
            })
        })?;

        info!(
            "Message {} created (user {}, category {})",
            row.id, row.user_id, row.category_id
        );
        Ok(Mutation::new(Action::Created, row.message))
    }

    pub fn get(&self, id: i64) -> ServiceResult<Message> {
        self.db
            .get_message(id)?
            .map(Message::from)
            .ok_or_else(|| not_found(RESOURCE))
    }

    pub fn list(&self) -> ServiceResult<Listing<Message>> {
        Ok(Listing::from_rows(self.db.list_messages()?, "messages"))
    }

    pub fn delete(&self, id: i64) -> ServiceResult<Mutation> {
        self.db.with_tx(|tx| -> ServiceResult<()> {
            if !queries::delete_message(tx, id)? {
                return Err(not_found(RESOURCE));
            }
            Ok(())
        })?;

        info!("Message {} deleted", id);
        Ok(Mutation::new(Action::Deleted, RESOURCE))
    }
}
