pub mod add_controller;
pub mod sql_container;

// Re-export add_controller types
pub use add_controller::{
    AuthType, ControllerConnection, add_controller_dialog, credentials_validator,
};

// Re-export sql_container types
pub use sql_container::{SQL_SERVER_IMAGE, sql_container_dialog};
