pub mod sqlite_event_type_repo;
pub mod sqlite_user_repo;

pub mod postgres_event_type_repo;
pub mod postgres_user_repo;
