mod document_validator;
mod validation_error;

pub use document_validator::DocumentValidator;
pub use validation_error::ValidationError;

#[cfg(test)]
mod tests;
