// Restaurant catalogue: listings, detail pages, search, menu items and reviews.
// Plain parameterized queries; the recommendation pipeline reads through `store` instead.

pub mod handlers;
pub mod validation;
