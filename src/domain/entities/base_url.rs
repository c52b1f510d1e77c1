//! Public base URL used to build shareable short links.

/// The externally visible prefix that short codes are appended to.
///
/// Trailing slashes are dropped on construction so that joining always yields
/// exactly one `/` between the prefix and the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self(base.trim_end_matches('/').to_string())
    }

    /// Builds `"{base}/{code}"`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.0, code)
    }
}
