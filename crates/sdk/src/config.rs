//! Configuration types for the App Store Connect client.

use crate::error::{ClientError, ClientResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.appstoreconnect.apple.com";

/// Upper bound on pages followed by a single paginated call.
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Configuration for the App Store Connect client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL that request paths (`/v1/...`) are resolved against.
    pub base_url: Url,
    /// Maximum number of pages fetched by `execute_all_pages`.
    pub max_pages: u32,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: format!("asc-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Where the `.p8` private key comes from.
#[derive(Clone)]
pub enum PrivateKeySource {
    /// PEM content given directly.
    Inline(String),
    /// Path to an `AuthKey_XXXX.p8` file.
    File(PathBuf),
}

impl PrivateKeySource {
    /// Read the PEM content.
    pub fn load_pem(&self) -> ClientResult<String> {
        match self {
            Self::Inline(pem) => Ok(normalize_pem(pem)),
            Self::File(path) => read_key_file(path),
        }
    }
}

// Key material never appears in logs or debug output.
impl fmt::Debug for PrivateKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => f.write_str("Inline(<redacted>)"),
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

fn read_key_file(path: &Path) -> ClientResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ClientError::Config(format!(
            "failed to read private key file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Environment variables often carry PEM with literal `\n` sequences.
fn normalize_pem(pem: &str) -> String {
    if pem.contains("\\n") && !pem.contains('\n') {
        pem.replace("\\n", "\n")
    } else {
        pem.to_string()
    }
}

/// API key credentials issued in App Store Connect (Users and Access → Keys).
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Issuer ID of the API key's team.
    pub issuer_id: String,
    /// Key ID (the `XXXX` in `AuthKey_XXXX.p8`).
    pub key_id: String,
    /// The ES256 private key.
    pub private_key: PrivateKeySource,
}

impl Credentials {
    pub fn new(
        issuer_id: impl Into<String>,
        key_id: impl Into<String>,
        private_key: PrivateKeySource,
    ) -> Self {
        Self {
            issuer_id: issuer_id.into(),
            key_id: key_id.into(),
            private_key,
        }
    }

    /// Check that no field is blank.
    pub fn validate(&self) -> ClientResult<()> {
        if self.issuer_id.trim().is_empty() {
            return Err(ClientError::Config("issuer ID is empty".to_string()));
        }
        if self.key_id.trim().is_empty() {
            return Err(ClientError::Config("key ID is empty".to_string()));
        }
        if let PrivateKeySource::Inline(pem) = &self.private_key {
            if pem.trim().is_empty() {
                return Err(ClientError::Config("private key is empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Token lifetime and refresh margin for generated bearer tokens.
#[derive(Debug, Clone, Copy)]
pub struct TokenPolicy {
    /// How long a freshly signed token is valid. Apple caps this at 20 minutes.
    pub lifetime: Duration,
    /// A cached token is replaced once this little validity remains.
    pub refresh_margin: Duration,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self {
            lifetime: Duration::from_secs(20 * 60),
            refresh_margin: Duration::from_secs(60),
        }
    }
}
