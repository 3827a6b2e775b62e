//! Permission-gated access for the coffee shop endpoints.
//!
//! `Authorized<P>` succeeds only when the request carries a valid bearer
//! token whose `permissions` claim contains `P::NAME`:
//!
//! - no / malformed header → 401 `UNAUTHORIZED_MISSING_BEARER`
//! - bad signature, garbage, expired → 401 `UNAUTHORIZED_INVALID_JWT` / `UNAUTHORIZED_EXPIRED_JWT`
//! - permission absent → 403 `MISSING_PERMISSION`

use std::marker::PhantomData;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use super::auth_token::AuthToken;
use crate::auth::{permissions, verify_access_token, Claims};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// A permission an endpoint can demand.
pub trait Permission {
    const NAME: &'static str;
}

macro_rules! permission {
    ($(#[$doc:meta])* $ty:ident => $name:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $ty;

        impl Permission for $ty {
            const NAME: &'static str = $name;
        }
    };
}

permission!(
    /// View full drink recipes.
    GetDrinksDetail => permissions::GET_DRINKS_DETAIL
);
permission!(PostDrinks => permissions::POST_DRINKS);
permission!(PatchDrinks => permissions::PATCH_DRINKS);
permission!(DeleteDrinks => permissions::DELETE_DRINKS);

/// Verified claims of a caller holding permission `P`.
#[derive(Debug)]
pub struct Authorized<P: Permission> {
    pub claims: Claims,
    _permission: PhantomData<P>,
}

impl<P: Permission> Authorized<P> {
    /// Check `claims` against `P`.
    pub fn check(claims: Claims, path: &str) -> Result<Self, AppError> {
        if !claims.has_permission(P::NAME) {
            security::permission_denied(P::NAME, Some(&claims.sub), path);
            return Err(AppError::missing_permission(P::NAME));
        }

        Ok(Self {
            claims,
            _permission: PhantomData,
        })
    }
}

impl<P: Permission + 'static> FromRequest for Authorized<P> {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let AuthToken { token } = AuthToken::from_headers(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not found"))?;

            let claims = verify_access_token(&token, &app_state.security).map_err(|e| {
                security::token_rejected(e.code().as_str(), req.path());
                e
            })?;

            Authorized::<P>::check(claims, req.path())
        })
    }
}
