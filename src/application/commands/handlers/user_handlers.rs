//! User Command Handlers - 资料更新

use std::sync::Arc;

use crate::application::commands::UpdateProfile;
use crate::application::error::ApplicationError;
use crate::application::ports::{ProfilePatch, UserRepositoryPort};
use crate::application::queries::UserProfileView;
use crate::domain::{AvatarUrl, Bio};

/// UpdateProfile Handler
pub struct UpdateProfileHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateProfileHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(
        &self,
        command: UpdateProfile,
    ) -> Result<UserProfileView, ApplicationError> {
        let avatar = command
            .avatar
            .map(|a| AvatarUrl::new(a).map(AvatarUrl::into_string))
            .transpose()
            .map_err(|e| ApplicationError::validation("avatar", e))?;
        let bio = command
            .bio
            .map(|b| Bio::new(b).map(Bio::into_string))
            .transpose()
            .map_err(|e| ApplicationError::validation("bio", e))?;

        let user = self
            .user_repo
            .update_profile(command.user_id, ProfilePatch { avatar, bio })
            .await?
            .ok_or_else(|| ApplicationError::not_found("USER_NOT_FOUND", "用户不存在"))?;

        tracing::info!(user_id = user.id, "Profile updated");

        let stats = self.user_repo.stats(user.id).await?;
        Ok(UserProfileView::from_record(user, stats, true))
    }
}
