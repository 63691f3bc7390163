use crate::error::AppError;

/// Hard cap on the analyzed process description, mirrored by the backend.
pub const MAX_PROCESS_DESCRIPTION_CHARS: usize = 4000;

/// Check a process description before any provider call is made.
///
/// Failing fast here keeps validation errors off the network path entirely:
/// an empty or over-length description never produces an outbound request.
pub fn validate_process_description(description: &str) -> Result<(), AppError> {
    if description.trim().is_empty() {
        return Err(AppError::validation(
            "A process description is required before analysis can run",
        ));
    }
    if description.chars().count() > MAX_PROCESS_DESCRIPTION_CHARS {
        return Err(AppError::validation(format!(
            "Process description is too long. Limit it to {MAX_PROCESS_DESCRIPTION_CHARS} characters"
        )));
    }
    Ok(())
}
