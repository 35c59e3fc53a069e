/// Text shown next to a captured photo.
pub type Thought = String;

/// Static thought shown on the result screen until a real generator exists.
pub const PLACEHOLDER_THOUGHT: &str =
    "Oh, the things I could tell you about what's going on in my human's head right now... 😏";
