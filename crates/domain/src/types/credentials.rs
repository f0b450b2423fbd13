//! Account credentials

/// Account identifier and access token used to authenticate every request.
///
/// Both values are opaque: the client never validates or normalizes them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    account_id: String,
    access_token: String,
}

impl Credentials {
    /// Pair an account identifier with its access token.
    pub fn new(account_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self { account_id: account_id.into(), access_token: access_token.into() }
    }

    /// Account identifier; also the first path segment of every endpoint.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Access token paired with the account.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The `user:password` pair that Basic authentication encodes.
    pub fn basic_pair(&self) -> String {
        format!("{}:{}", self.account_id, self.access_token)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
