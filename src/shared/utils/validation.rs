use regex::Regex;

use crate::shared::errors::AppError;

/// Rating scale bounds, enforced at write time. Aggregation assumes values
/// are already in range.
pub const MIN_RATING_VALUE: f32 = 1.0;
pub const MAX_RATING_VALUE: f32 = 10.0;

/// Largest ranked list a caller may request
pub const MAX_RANKING_SIZE: usize = 100;

pub struct Validator;

impl Validator {
    pub fn validate_series_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_character_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Character name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Character name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_pillar_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Pillar name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Pillar name too long (max 100 characters)".to_string(),
            ));
        }

        // Alphanumeric, spaces, and a few separators
        let re = Regex::new(r"^[a-zA-Z0-9\s\-_]+$").unwrap();
        if !re.is_match(name) {
            return Err(AppError::ValidationError(
                "Pillar name contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_question_prompt(prompt: &str) -> Result<(), AppError> {
        if prompt.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Question prompt cannot be empty".to_string(),
            ));
        }
        if prompt.len() > 500 {
            return Err(AppError::ValidationError(
                "Question prompt too long (max 500 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating_value(value: f32) -> Result<(), AppError> {
        if !value.is_finite() || !(MIN_RATING_VALUE..=MAX_RATING_VALUE).contains(&value) {
            return Err(AppError::ValidationError(format!(
                "Rating value must be between {} and {}",
                MIN_RATING_VALUE, MAX_RATING_VALUE
            )));
        }
        Ok(())
    }

    pub fn validate_slot_index(slot: i32, capacity: usize) -> Result<(), AppError> {
        if slot < 0 || slot as usize >= capacity {
            return Err(AppError::ValidationError(format!(
                "Slot index must be between 0 and {}",
                capacity.saturating_sub(1)
            )));
        }
        Ok(())
    }

    pub fn validate_ranking_size(size: usize) -> Result<(), AppError> {
        if size == 0 {
            return Err(AppError::ValidationError(
                "Ranking size must be positive".to_string(),
            ));
        }
        if size > MAX_RANKING_SIZE {
            return Err(AppError::ValidationError(format!(
                "Ranking size cannot exceed {}",
                MAX_RANKING_SIZE
            )));
        }
        Ok(())
    }

    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_pagination(params: &crate::shared::application::PaginationParams) -> Result<(), AppError> {
        if params.page == 0 {
            return Err(AppError::ValidationError(
                "Page must be positive".to_string(),
            ));
        }
        if params.page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if params.page_size > 100 {
            return Err(AppError::ValidationError(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
