// API token hashing

use anyhow::{Context, Result};

// Same cost the dashboard uses when it issues keys of its own.
const BCRYPT_COST: u32 = 10;

// "$2b$10$" plus the 22 character salt block.
const SALT_PREFIX_LEN: usize = 29;

/// bcrypt output split the way the apiKey table stores it: the full hash in
/// one column and the modular-crypt salt prefix in another, so the consuming
/// system can re-hash a presented token against the stored salt.
#[derive(Debug, Clone)]
pub struct HashedToken {
    pub hash: String,
    pub salt: String,
}

// Hash an API token with a freshly generated salt
pub fn hash_api_token(token: &str) -> Result<HashedToken> {
    let hash = bcrypt::hash(token, BCRYPT_COST).context("Failed to hash API token")?;
    let salt = hash
        .get(..SALT_PREFIX_LEN)
        .context("bcrypt produced a malformed hash")?
        .to_string();

    Ok(HashedToken { hash, salt })
}

// Verify a token against a stored hash
pub fn verify_api_token(token: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(token, hash).context("Failed to verify API token")
}
