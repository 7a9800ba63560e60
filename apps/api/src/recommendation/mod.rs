// Preference-based restaurant recommendations.
// Flow: preferences → formatter → prompts → client → resolver, orchestrated by pipeline.
// The upstream model only ranks; every returned record comes from the candidate set.

pub mod client;
pub mod formatter;
pub mod handlers;
pub mod pipeline;
pub mod preferences;
pub mod prompts;
pub mod resolver;

#[cfg(test)]
pub mod testing;
