// Canned chat phrasing. Rule answers that do not depend on profile data live here
// so the exact wording stays in one place.

/// Prefix of the skills answer; followed by every skill name, comma-separated.
pub const SKILLS_PREFIX: &str = "Key skills: ";

/// Impact areas named in the experience answer.
pub const EXPERIENCE_IMPACT: &str = "with impact in ML, SQL, and automation.";

/// Fixed project callout. Does not read the project list.
pub const PROJECT_HIGHLIGHT: &str =
    "One highlight is my AI-powered SQL chatbot using Streamlit + Ollama Mistral.";

/// Returned when no rule matches, including for an empty question.
pub const FALLBACK_ANSWER: &str =
    "Thanks for asking! I’d be happy to chat about my skills, projects, or goals.";

/// Greeting shown above the chat input. `{assistant}`, `{name}` and `{first_name}` are substituted.
pub const INTRO_TEMPLATE: &str = "Hi! I'm {assistant}, {name}'s AI assistant. \
    Ask me anything about {first_name}'s skills, experience, projects, qualifications or visa status! 🚀";
