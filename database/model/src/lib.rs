pub use sea_orm;

pub mod system;
