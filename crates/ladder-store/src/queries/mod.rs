pub mod activity_ops;
pub mod user_crud;
