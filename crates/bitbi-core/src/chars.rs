//! Character constants for the rain animation.

/// Characters the rain columns draw from: uppercase Latin letters,
/// digits, and a fixed set of symbols.
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()_+-=[]{}|;:,.<>?~";
