// Deploy-time constants for the seeded data set

/// Well-known bootstrap API key credentials.
///
/// The key is intentionally static and gets rotated by the container adapter
/// on first boot. bcrypt rejects inputs past 72 bytes, so the token is kept
/// short.
pub const BOOTSTRAP_API_KEY_ID: &str = "halos-bootstrap";
pub const BOOTSTRAP_API_KEY_TOKEN: &str = "halos-bootstrap-rotate-me-on-first-boot-abc123";

// Service account for API key ownership and programmatic access. The email
// lives under example.local (RFC 2606 reserved domain) and never resolves.
pub const SYNC_USER_ID: &str = "halos-sync";
pub const SYNC_USER_NAME: &str = "HaLOS Sync Service";
pub const SYNC_USER_EMAIL: &str = "halos-sync@example.local";

// Human admin account for OIDC login. The OIDC provider supplies the real
// email at first login; this synthetic one is what gets matched for linking.
pub const ADMIN_USER_ID: &str = "admin";
pub const ADMIN_USER_NAME: &str = "Administrator";
pub const ADMIN_USER_EMAIL: &str = "admin@example.local";

// Both accounts carry provider='oidc' so the dashboard's adapter, which
// filters accounts by (email, provider), links an OIDC login to them instead
// of creating a duplicate.
pub const OIDC_PROVIDER: &str = "oidc";
pub const COLOR_SCHEME: &str = "dark";

// Must match the admins group id defined inside the schema template.
pub const ADMINS_GROUP_ID: &str = "z4qbfvum6cs94sr6s5pslxq6";

/// One user account to provision.
#[derive(Debug, Clone)]
pub struct UserSeed {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Everything the seeder needs to know about the data set it creates.
///
/// `Default` yields the well-known HaLOS values; tests pass alternate
/// fixtures instead of relying on hidden globals.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub api_key_id: String,
    pub api_key_token: String,
    pub service_user: UserSeed,
    pub admin_user: UserSeed,
    pub provider: String,
    pub color_scheme: String,
    pub admins_group_id: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            api_key_id: BOOTSTRAP_API_KEY_ID.to_string(),
            api_key_token: BOOTSTRAP_API_KEY_TOKEN.to_string(),
            service_user: UserSeed {
                id: SYNC_USER_ID.to_string(),
                name: SYNC_USER_NAME.to_string(),
                email: SYNC_USER_EMAIL.to_string(),
            },
            admin_user: UserSeed {
                id: ADMIN_USER_ID.to_string(),
                name: ADMIN_USER_NAME.to_string(),
                email: ADMIN_USER_EMAIL.to_string(),
            },
            provider: OIDC_PROVIDER.to_string(),
            color_scheme: COLOR_SCHEME.to_string(),
            admins_group_id: ADMINS_GROUP_ID.to_string(),
        }
    }
}
