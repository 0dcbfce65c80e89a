pub mod request;

pub mod prelude {
    pub use super::request::{
        ActiveModel as RequestActiveModel, Column as RequestColumn, Entity as RequestEntity,
        Model as RequestModel, PrimaryKey as RequestPrimaryKey, Relation as RequestRelation,
    };
}
