//! Credential checking.
//!
//! The comparison lives behind a trait so a hashing scheme can replace
//! the plaintext check without touching the login path.

/// Compares a login-supplied password against the stored one.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, candidate: &str, stored: &str) -> bool;
}

/// Plain-text equality, matching how passwords are stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, candidate: &str, stored: &str) -> bool {
        candidate == stored
    }
}
