//! Service layer - CRUD wrappers over the book repository.

mod crud;

pub use crud::{
    crud_delete, crud_delete_all, crud_delete_any, crud_find, crud_find_alias, crud_find_all,
    crud_find_all_chained, crud_insert, crud_insert_all, crud_update, crud_update_any,
};
