//! Professional area flows.

use tracing::info;

use crate::domain::validate::require_non_empty;
use crate::domain::{NewProfessionalArea, ProfessionalArea};
use crate::error::AppError;
use crate::storage::Storage;

pub async fn create_area(
    storage: &dyn Storage,
    new: NewProfessionalArea,
) -> Result<ProfessionalArea, AppError> {
    require_non_empty("name", &new.name)?;

    let area = storage.create_professional_area(new).await?;
    info!(area_id = area.id, name = %area.name, "professional_area.created");
    Ok(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::storage::MemStorage;

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let store = MemStorage::new();
        let err = create_area(
            &store,
            NewProfessionalArea {
                name: " ".to_string(),
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn create_stores_the_area() {
        let store = MemStorage::new();
        let area = create_area(
            &store,
            NewProfessionalArea {
                name: "Tecnología".to_string(),
                description: Some("Desarrollo de software".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(area.id, 1);
        assert_eq!(area.name, "Tecnología");
    }
}
