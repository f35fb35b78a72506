//! Instructor secret source port

/// Resolves the configured instructor unlock code.
///
/// `None` means no code is configured anywhere, which disables the
/// instructor unlock entirely.
pub trait SecretSource: Send + Sync {
    fn unlock_code(&self) -> Option<String>;
}
