pub mod csrf;
pub mod errors;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod templates_structs;
pub mod validate;
