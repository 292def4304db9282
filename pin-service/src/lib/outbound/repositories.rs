pub mod pin;
pub mod user;

pub use pin::PostgresPinRepository;
pub use user::PostgresUserRepository;
