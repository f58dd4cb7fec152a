//! Auth Command Handlers - 注册与登录

use std::sync::Arc;

use crate::application::commands::{LoginUser, RegisterUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    NewUser, PasswordHasherPort, TokenIssuerPort, UserRepositoryPort,
};
use crate::application::queries::UserProfileView;
use crate::domain::{Email, Password, Username};

/// 认证响应：完整资料 + 签发的令牌
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub user: UserProfileView,
    pub token: String,
}

// ============================================================================
// RegisterUser
// ============================================================================

/// RegisterUser Handler
pub struct RegisterUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    password_hasher: Arc<dyn PasswordHasherPort>,
    token_issuer: Arc<dyn TokenIssuerPort>,
}

impl RegisterUserHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
        token_issuer: Arc<dyn TokenIssuerPort>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_issuer,
        }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<AuthResponse, ApplicationError> {
        let username = Username::new(command.username)
            .map_err(|e| ApplicationError::validation("username", e))?;
        let email =
            Email::new(command.email).map_err(|e| ApplicationError::validation("email", e))?;
        let password = Password::new(command.password)
            .map_err(|e| ApplicationError::validation("password", e))?;

        // 用户名与邮箱唯一性检查，各自返回独立错误码
        if self
            .user_repo
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict("USER_EXISTS", "用户名已存在"));
        }
        if self
            .user_repo
            .find_by_email(email.as_str())
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict("EMAIL_EXISTS", "邮箱已存在"));
        }

        let password_hash = self.password_hasher.hash(password.as_str())?;

        let user = self
            .user_repo
            .create(NewUser {
                username: username.into_string(),
                email: email.into_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        let stats = self.user_repo.stats(user.id).await?;
        let token = self.token_issuer.issue(user.id)?;

        Ok(AuthResponse {
            user: UserProfileView::from_record(user, stats, true),
            token,
        })
    }
}

// ============================================================================
// LoginUser
// ============================================================================

/// LoginUser Handler
pub struct LoginUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    password_hasher: Arc<dyn PasswordHasherPort>,
    token_issuer: Arc<dyn TokenIssuerPort>,
}

impl LoginUserHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
        token_issuer: Arc<dyn TokenIssuerPort>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_issuer,
        }
    }

    pub async fn handle(&self, command: LoginUser) -> Result<AuthResponse, ApplicationError> {
        // 未知用户与密码错误返回同一错误，不泄露账号是否存在
        let user = self
            .user_repo
            .find_by_login(command.login.trim())
            .await?
            .ok_or_else(|| {
                ApplicationError::InvalidCredentials("用户名或密码错误".to_string())
            })?;

        let valid = self
            .password_hasher
            .verify(&command.password, &user.password_hash)?;
        if !valid {
            return Err(ApplicationError::InvalidCredentials(
                "用户名或密码错误".to_string(),
            ));
        }

        tracing::info!(user_id = user.id, username = %user.username, "User logged in");

        let stats = self.user_repo.stats(user.id).await?;
        let token = self.token_issuer.issue(user.id)?;

        Ok(AuthResponse {
            user: UserProfileView::from_record(user, stats, true),
            token,
        })
    }
}
