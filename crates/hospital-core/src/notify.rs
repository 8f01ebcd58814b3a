//! User notification and confirmation seams.
//!
//! The original interaction model is blocking browser dialogues (`alert`,
//! `confirm`). Those are modelled here as injected services so the page logic
//! stays headless: the CLI provides console implementations, tests provide
//! recording fakes.

/// Surface for user-facing outcome messages.
///
/// Implementations must not fail; a notification that cannot be delivered is
/// dropped silently.
pub trait Notifier: Send + Sync {
    /// Report a successful operation.
    fn success(&self, message: &str);

    /// Report a failed operation. The page has already logged the underlying
    /// error; `message` is the user-facing summary.
    fn error(&self, message: &str);
}

/// Interactive yes/no confirmation, required before destructive operations.
pub trait Confirmer: Send + Sync {
    /// Ask the user to confirm. Returning `false` aborts the operation
    /// before any network call is made.
    fn confirm(&self, prompt: &str) -> bool;
}
