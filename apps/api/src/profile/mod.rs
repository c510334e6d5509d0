// Portfolio profile: immutable data model, startup loading, validation, and read-only routes.
// The profile is loaded once and never mutated afterwards.

pub mod handlers;
pub mod loader;
pub mod models;
pub mod validation;

#[cfg(test)]
pub mod test_support;
