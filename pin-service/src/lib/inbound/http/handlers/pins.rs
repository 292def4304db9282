pub mod create_pin;
pub mod delete_pin;
pub mod get_pin;
pub mod list_pins;
pub mod update_pin;

pub use create_pin::create_pin;
pub use delete_pin::delete_pin;
pub use get_pin::get_pin;
pub use list_pins::list_pins;
pub use update_pin::update_pin;
