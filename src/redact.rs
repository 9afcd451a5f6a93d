//! Redaction for values that must not reach logs.
//!
//! RPC endpoints routinely embed provider API keys in their path or query,
//! so they are logged through [`Redacted`], which keeps only the scheme and
//! host of a URL and hides everything else.

use std::fmt::{self, Debug, Display};

/// Wrapper that hides its inner value when formatted or serialized.
///
/// Strings that parse as URLs are shown as `scheme://host/<redacted>` so logs
/// still say which provider was used; anything else prints `<redacted>`.
///
/// ```ignore
/// use multiname_rs::redact::Redacted;
///
/// let rpc = "https://eth-mainnet.example.com/v2/secret-key";
/// tracing::info!(rpc_url = %Redacted(rpc), "Created client");
/// // Logs: rpc_url = https://eth-mainnet.example.com/<redacted>
/// ```
#[derive(Clone, Copy)]
pub struct Redacted<T>(pub T);

impl<T: AsRef<str>> Redacted<T> {
    fn render(&self) -> String {
        match url::Url::parse(self.0.as_ref()) {
            Ok(url) => match url.host_str() {
                Some(host) => format!("{}://{}/<redacted>", url.scheme(), host),
                None => "<redacted>".to_string(),
            },
            Err(_) => "<redacted>".to_string(),
        }
    }
}

impl<T: AsRef<str>> Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: AsRef<str>> Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: AsRef<str>> serde::Serialize for Redacted<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.render().serialize(serializer)
    }
}
