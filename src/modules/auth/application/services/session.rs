use crate::auth::application::{
    domain::entities::UserProfile,
    ports::{incoming::use_cases::AuthSession, outgoing::TokenError, outgoing::TokenProvider},
};

pub(super) const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Issues an access/refresh token pair for `user`.
pub(super) fn issue_session(
    tokens: &dyn TokenProvider,
    user: UserProfile,
) -> Result<AuthSession, TokenError> {
    let user_id = user.id.value();
    let access_token = tokens.generate_access_token(user_id, user.role)?;
    let refresh_token = tokens.generate_refresh_token(user_id, user.role)?;

    Ok(AuthSession {
        access_token,
        refresh_token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: tokens.access_token_ttl(),
        user,
    })
}
