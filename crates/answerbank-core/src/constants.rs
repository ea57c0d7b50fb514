/// Answerbank version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returned by the similarity tier while the background index is still being built.
pub const NOT_READY_MESSAGE: &str = "I'm still learning... Please ask again in a few seconds.";

/// Returned when the caller sends an empty or whitespace-only message.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a message.";

/// Returned when the chat boundary is called without a session identity.
pub const SIGN_IN_MESSAGE: &str = "Please sign in first.";

/// Returned when a similarity cutoff is configured and the nearest neighbour is too far away.
pub const NO_CONFIDENT_MATCH_MESSAGE: &str =
    "I'm not sure I understand. Could you rephrase the question?";

/// Returned when the pipeline hit an internal failure it could not route around.
pub const INTERNAL_FAILURE_MESSAGE: &str =
    "Something went wrong while looking up an answer. Please try again.";

/// Identity used by the guest sign-in flow.
pub const GUEST_USERNAME: &str = "Guest";
