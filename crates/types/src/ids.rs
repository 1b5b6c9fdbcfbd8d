//! Newtype wrapper for asset references.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A reference to an asset (typically an image file) resolved through a
/// `ResourceProvider` at write time.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceUri(Arc<str>);

impl ResourceUri {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceUri {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for ResourceUri {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ResourceUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ResourceUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_uri_creation() {
        let a = ResourceUri::new("signup_screen.png");
        let b = ResourceUri::from(String::from("signup_screen.png"));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "signup_screen.png");
        assert_eq!(a.to_string(), "signup_screen.png");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ResourceUri::from("about_nextstep.png")).unwrap();
        assert_eq!(json, r#""about_nextstep.png""#);
    }
}
