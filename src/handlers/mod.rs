pub mod contact_handlers;
