//! In-memory fakes for the auth ports, shared by service and route tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    InstructorStatus, UserId, UserProfile, UserRole,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider,
    TokenRepository, TokenRepositoryError, UpdateProfileData, UserCredentials, UserListFilter,
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

pub fn sample_profile(role: UserRole) -> UserProfile {
    let id = Uuid::new_v4();
    UserProfile {
        id: UserId::from(id),
        name: format!("{} {}", role.as_str(), &id.simple().to_string()[..6]),
        email: format!("{}@example.com", id.simple()),
        role,
        instructor_status: match role {
            UserRole::Instructor => Some(InstructorStatus::Approved),
            _ => None,
        },
        headline: None,
        bio: None,
        website: None,
        linkedin: None,
        created_at: Utc::now(),
    }
}

//
// ──────────────────────────────────────────────────────────
// UserRepository
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct FakeUserRepository {
    error: Option<UserRepositoryError>,
    existing: Option<UserProfile>,
    created: Arc<Mutex<Option<CreateUserData>>>,
    updated: Arc<Mutex<Option<UpdateProfileData>>>,
    deleted: Arc<Mutex<Vec<UserId>>>,
}

impl FakeUserRepository {
    pub fn failing(error: UserRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    /// Repository holding one stored profile that updates apply to.
    pub fn with_existing(profile: UserProfile) -> Self {
        Self {
            existing: Some(profile),
            ..Default::default()
        }
    }

    pub fn created(&self) -> Option<CreateUserData> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Option<UpdateProfileData> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<UserId> {
        self.deleted.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), UserRepositoryError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn existing_for(&self, user_id: UserId) -> Result<UserProfile, UserRepositoryError> {
        self.existing
            .clone()
            .filter(|p| p.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn create_user(&self, data: CreateUserData) -> Result<UserProfile, UserRepositoryError> {
        self.check()?;
        *self.created.lock().unwrap() = Some(data.clone());
        Ok(UserProfile {
            id: UserId::from(Uuid::new_v4()),
            name: data.name,
            email: data.email,
            role: data.role,
            instructor_status: data.instructor_status,
            headline: None,
            bio: None,
            website: None,
            linkedin: None,
            created_at: Utc::now(),
        })
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<UserProfile, UserRepositoryError> {
        self.check()?;
        *self.updated.lock().unwrap() = Some(data.clone());
        let mut profile = self.existing_for(user_id)?;
        if let Some(name) = data.name {
            profile.name = name;
        }
        if let Some(headline) = data.headline {
            profile.headline = headline;
        }
        if let Some(bio) = data.bio {
            profile.bio = bio;
        }
        if let Some(website) = data.website {
            profile.website = website;
        }
        if let Some(linkedin) = data.linkedin {
            profile.linkedin = linkedin;
        }
        Ok(profile)
    }

    async fn set_instructor_status(
        &self,
        user_id: UserId,
        status: InstructorStatus,
    ) -> Result<UserProfile, UserRepositoryError> {
        self.check()?;
        let mut profile = self.existing_for(user_id)?;
        profile.instructor_status = Some(status);
        Ok(profile)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        self.check()?;
        self.deleted.lock().unwrap().push(user_id);
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// UserQuery
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct FakeUserQuery {
    users: Vec<UserCredentials>,
    fail: bool,
}

impl FakeUserQuery {
    pub fn failing() -> Self {
        Self {
            users: Vec::new(),
            fail: true,
        }
    }

    pub fn with_user(mut self, profile: UserProfile, password_hash: &str) -> Self {
        self.users.push(UserCredentials {
            profile,
            password_hash: password_hash.to_string(),
        });
        self
    }

    fn check(&self) -> Result<(), UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserQuery for FakeUserQuery {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserProfile>, UserQueryError> {
        self.check()?;
        Ok(self
            .users
            .iter()
            .find(|u| u.profile.id == user_id)
            .map(|u| u.profile.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.profile.email == email).cloned())
    }

    async fn list_users(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserProfile>, UserQueryError> {
        self.check()?;
        let matching: Vec<UserProfile> = self
            .users
            .iter()
            .map(|u| u.profile.clone())
            .filter(|p| filter.role.is_none_or(|r| p.role == r))
            .filter(|p| {
                filter.search.as_deref().is_none_or(|s| {
                    let s = s.to_lowercase();
                    p.name.to_lowercase().contains(&s) || p.email.contains(&s)
                })
            })
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// PasswordHasher
// ──────────────────────────────────────────────────────────
//

/// Hashes to `hashed:{password}`.
#[derive(Clone, Default)]
pub struct FakePasswordHasher {
    fail: bool,
}

impl FakePasswordHasher {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if self.fail {
            return Err(HashError::HashFailed);
        }
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.fail {
            return Err(HashError::TaskFailed);
        }
        Ok(hash == format!("hashed:{password}"))
    }
}

//
// ──────────────────────────────────────────────────────────
// TokenProvider
// ──────────────────────────────────────────────────────────
//

/// Accepts any token and resolves it to a fixed identity.
///
/// Generated tokens look like `access-{user_id}` / `refresh-{user_id}`.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Uuid,
    role: UserRole,
    reject: bool,
}

impl StubTokenProvider {
    pub fn anonymous() -> Self {
        Self::for_user(Uuid::new_v4(), UserRole::User)
    }

    pub fn for_user(user_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::anonymous()
        }
    }

    fn claims(&self, token_type: &str) -> Result<TokenClaims, TokenError> {
        if self.reject {
            return Err(TokenError::InvalidSignature);
        }
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: token_type.to_string(),
            role: self.role,
        })
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, _role: UserRole) -> Result<String, TokenError> {
        Ok(format!("access-{user_id}"))
    }

    fn generate_refresh_token(&self, user_id: Uuid, _role: UserRole) -> Result<String, TokenError> {
        Ok(format!("refresh-{user_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.claims("access")
    }

    fn verify_refresh_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.claims("refresh")
    }

    fn access_token_ttl(&self) -> i64 {
        1800
    }
}

//
// ──────────────────────────────────────────────────────────
// TokenRepository
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct FakeTokenRepository {
    hashes: Arc<Mutex<HashSet<String>>>,
    fail: bool,
}

impl FakeTokenRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn insert(&self, token_hash: &str) {
        self.hashes.lock().unwrap().insert(token_hash.to_string());
    }

    pub fn contains(&self, token_hash: &str) -> bool {
        self.hashes.lock().unwrap().contains(token_hash)
    }
}

#[async_trait]
impl TokenRepository for FakeTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        _user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        if self.fail {
            return Err(TokenRepositoryError::StorageError("redis down".to_string()));
        }
        if expires_at < Utc::now() - Duration::seconds(1) {
            return Err(TokenRepositoryError::TokenExpired);
        }
        self.hashes.lock().unwrap().insert(token_hash);
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        if self.fail {
            return Err(TokenRepositoryError::StorageError("redis down".to_string()));
        }
        Ok(self.contains(token_hash))
    }
}
