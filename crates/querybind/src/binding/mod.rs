mod bind_error;
mod document_builder;

pub use bind_error::BindError;
pub use document_builder::DocumentBuilder;

#[cfg(test)]
mod tests;
