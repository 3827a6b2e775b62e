pub mod claims;
pub mod jwt;

pub use claims::{permissions, Claims};
pub use jwt::{mint_access_token, verify_access_token};
