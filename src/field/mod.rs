pub mod composer;
pub mod derive;
pub mod field_model;
pub mod mapping;
pub mod selector;
