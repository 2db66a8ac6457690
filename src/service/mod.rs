//! TodoService: CRUD over the `todos` table, plus payload validation.

mod crud;
mod validation;
pub use crud::TodoService;
pub use validation::{parse_due_date, parse_form_bool, RequestValidator};
