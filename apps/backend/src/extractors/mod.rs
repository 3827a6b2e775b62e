pub mod auth_token;
pub mod page_query;
pub mod permissions;
pub mod record_id;
pub mod validated_json;

pub use auth_token::AuthToken;
pub use page_query::PageQuery;
pub use permissions::{
    Authorized, DeleteDrinks, GetDrinksDetail, PatchDrinks, Permission, PostDrinks,
};
pub use record_id::RecordId;
pub use validated_json::ValidatedJson;
