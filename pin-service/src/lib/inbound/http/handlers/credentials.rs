pub mod refresh;
pub mod register;
pub mod token;

pub use refresh::refresh;
pub use register::register;
pub use token::token;
