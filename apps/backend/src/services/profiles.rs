//! Candidate profile flows.

use tracing::info;

use crate::domain::validate::{is_valid_email, require_non_empty};
use crate::domain::{NewUserProfile, UserProfile};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::storage::Storage;

/// Validate and publish a candidate profile.
pub async fn publish_profile(
    storage: &dyn Storage,
    new: NewUserProfile,
) -> Result<UserProfile, AppError> {
    require_non_empty("fullName", &new.full_name)?;
    if !is_valid_email(&new.email) {
        return Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            format!("invalid email: {}", Redacted(&new.email)),
        ));
    }

    let profile = storage.create_user_profile(new).await?;
    info!(
        profile_id = profile.id,
        email = %Redacted(&profile.email),
        area_id = ?profile.professional_area_id,
        "user_profile.published"
    );
    Ok(profile)
}
