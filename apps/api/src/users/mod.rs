// User profile, stored preferences and favorites.
// Registration and login live outside this service.

pub mod handlers;
pub mod validation;
