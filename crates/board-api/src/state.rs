use std::sync::Arc;

use board_db::Database;

use crate::service::categories::CategoryService;
use crate::service::messages::MessageService;
use crate::service::users::UserService;

pub type AppState = Arc<AppStateInner>;

/// Everything a handler can reach. Built once at startup around a single
/// store handle that every service shares.
pub struct AppStateInner {
    pub db: Arc<Database>,
    pub users: UserService,
    pub categories: CategoryService,
    pub messages: MessageService,
}

impl AppStateInner {
    pub fn new(db: Arc<Database>) -> AppState {
        Arc::new(Self {
            users: UserService::new(db.clone()),
            categories: CategoryService::new(db.clone()),
            messages: MessageService::new(db.clone()),
            db,
        })
    }
}
