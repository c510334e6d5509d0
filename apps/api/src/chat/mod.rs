// Chat assistant: ordered keyword rules over the read-only profile.
// No session state, no history, no network calls; one question in, one answer out.

pub mod handlers;
pub mod prompts;
pub mod responder;
pub mod rules;
