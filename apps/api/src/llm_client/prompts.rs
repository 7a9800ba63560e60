// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System instruction fragment that forbids anything but the requested plain-text answer.
pub const PLAIN_TEXT_ONLY_SYSTEM: &str = "You are a precise, literal assistant. \
    Respond with plain text only. \
    Do NOT use markdown, bullet points, numbering or quotes. \
    Do NOT include explanations or apologies.";
