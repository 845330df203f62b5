//! Local decoding of the bearer credential's claim payload.
//!
//! The credential is a JWT issued by the backend. Decoding here is purely
//! structural: split the token, base64url-decode the middle segment, parse
//! the claims. The signature and expiry are never checked locally; only a
//! 401 from the backend proves a credential stale.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// The role a credential was granted for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Hospital,
    Patient,
    /// Granted by the backend but has no backing view; its landing path
    /// falls through to the router's not-found fallback.
    User,
}

impl SubjectKind {
    /// Value sent as `grant_type` when requesting a credential.
    pub fn as_grant(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Patient => "patient",
            Self::User => "user",
        }
    }

    /// Parse a `grant_type` form value.
    pub fn from_grant(value: &str) -> Option<Self> {
        match value {
            "hospital" => Some(Self::Hospital),
            "patient" => Some(Self::Patient),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    /// Where a fresh login of this kind lands.
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Hospital => "/hospitals",
            Self::Patient => "/patients",
            Self::User => "/users",
        }
    }
}

/// Claims embedded in every credential issued by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id: the hospital, patient, or user primary key.
    pub sub: String,
    /// Role the credential was granted for.
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    /// Expiry as Unix seconds. Informational only on the client.
    pub exp: u64,
}

/// Why a credential could not be decoded.
///
/// Any variant means the holder must be treated as unauthenticated; there
/// is no default subject kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("credential is not a three-segment token")]
    Shape,
    #[error("claim payload is not valid base64")]
    Encoding,
    #[error("claim payload is not a recognized claims document")]
    Claims,
}

/// Extract the claims from a credential without contacting the server.
///
/// Success proves structural well-formedness only, not current validity.
pub fn decode(credential: &str) -> Result<Claims, DecodeError> {
    let mut segments = credential.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(DecodeError::Shape),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|_| DecodeError::Claims)
}
