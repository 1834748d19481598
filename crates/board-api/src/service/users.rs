use std::sync::Arc;

use board_db::{Database, queries};
use board_types::api::UserRequest;
use board_types::models::User;
use tracing::info;

use super::{
    Action, Listing, Mutation, ServiceError, ServiceResult, exists_as, in_use_as, normalize_name,
    not_found,
};

const RESOURCE: &str = "User";

pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn create(&self, req: &UserRequest) -> ServiceResult<Mutation> {
        let username = normalize_name("username", &req.username)?;

        let row = self.db.with_tx(|tx| {
            let id = queries::insert_user(tx, &username).map_err(exists_as(&username))?;
            queries::query_user_by_id(tx, id)?
                .ok_or_else(|| ServiceError::Internal(format!("user {id} missing after insert")))
        })?;

        info!("User {} created (id {})", row.username, row.id);
        Ok(Mutation::new(Action::Created, row.username))
    }

    pub fn get(&self, id: i64) -> ServiceResult<User> {
        self.db
            .get_user(id)?
            .map(User::from)
            .ok_or_else(|| not_found(RESOURCE))
    }

    pub fn list(&self) -> ServiceResult<Listing<User>> {
        Ok(Listing::from_rows(self.db.list_users()?, "users"))
    }

    pub fn update(&self, id: i64, req: &UserRequest) -> ServiceResult<Mutation> {
        let username = normalize_name("username", &req.username)?;

        let row = self.db.with_tx(|tx| {
            if !queries::update_username(tx, id, &username).map_err(exists_as("Username"))? {
                return Err(not_found(RESOURCE));
            }
            queries::query_user_by_id(tx, id)?.ok_or_else(|| not_found(RESOURCE))
        })?;

        info!("User {} renamed to {}", row.id, row.username);
        Ok(Mutation::new(Action::Updated, row.username))
    }

    pub fn delete(&self, id: i64) -> ServiceResult<Mutation> {
        let username = self.db.with_tx(|tx| -> ServiceResult<String> {
            let row = queries::query_user_by_id(tx, id)?.ok_or_else(|| not_found(RESOURCE))?;
            queries::delete_user(tx, id).map_err(in_use_as(RESOURCE))?;
            Ok(row.username)
        })?;

        info!("User {} deleted (id {})", username, id);
        Ok(Mutation::new(Action::Deleted, username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support;

    fn request(username: &str) -> UserRequest {
        UserRequest {
            username: username.into(),
        }
    }

    #[test]
    fn create_returns_case_folded_name() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);

        let done = users.create(&request("Alice")).unwrap();
        assert_eq!(done, Mutation::new(Action::Created, "alice"));
    }

    #[test]
    fn names_differing_only_in_case_conflict() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);

        users.create(&request("bob")).unwrap();
        let err = users.create(&request("BOB")).unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref name) if name == "bob"));
    }

    #[test]
    fn padded_name_conflicts_with_bare_name() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);

        users.create(&request("bob")).unwrap();
        let err = users.create(&request(" Bob ")).unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(ref name) if name == "bob"));
    }

    #[test]
    fn failed_update_keeps_original_value() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);
        users.create(&request("alice")).unwrap();
        users.create(&request("bob")).unwrap();

        let bob = match users.list().unwrap() {
            Listing::Rows(rows) => rows[0].clone(),
            Listing::Empty { .. } => panic!("expected rows"),
        };
        assert_eq!(bob.username, "bob");

        let err = users.update(bob.id, &request("Alice")).unwrap_err();
        assert_eq!(err.to_string(), "Username already exists");
        assert_eq!(users.get(bob.id).unwrap().username, "bob");
    }

    #[test]
    fn update_of_missing_user_is_not_found() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);

        let err = users.update(7, &request("carol")).unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn update_returns_new_value() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);
        users.create(&request("alice")).unwrap();

        let done = users.update(1, &request("Alicia")).unwrap();
        assert_eq!(done, Mutation::new(Action::Updated, "alicia"));
    }

    #[test]
    fn deleted_user_is_gone() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);
        users.create(&request("alice")).unwrap();

        let done = users.delete(1).unwrap();
        assert_eq!(done, Mutation::new(Action::Deleted, "alice"));
        assert!(matches!(users.get(1), Err(ServiceError::NotFound(_))));
        assert!(matches!(users.delete(1), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn empty_table_lists_as_sentinel() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);
        assert_eq!(users.list().unwrap(), Listing::Empty { resource: "users" });
    }

    #[test]
    fn listing_is_newest_first() {
        let (db, _dir) = test_support::open();
        let users = UserService::new(db);
        for name in ["a", "b", "c"] {
            users.create(&request(name)).unwrap();
        }

        let Listing::Rows(rows) = users.list().unwrap() else {
            panic!("expected rows");
        };
        let names: Vec<_> = rows.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }
}
