//! # Domain-Primitive Newtypes
//!
//! Identifier newtypes used throughout the Academic Credential Ledger.
//! Each identifier is a distinct type — you cannot pass a [`MerkleRoot`]
//! where a [`UidHash`] is expected.
//!
//! ## Validation
//!
//! Digest newtypes and [`Address`] are 32 raw bytes, always valid by
//! construction from bytes; hex input is validated in `from_hex` and at
//! deserialization time. String primitives ([`Locator`], [`CredentialId`],
//! [`DataType`], [`AcademicLevel`], [`FieldOfStudy`]) validate
//! non-emptiness at construction.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn decode_hex_32(s: &str) -> Option<[u8; 32]> {
    if s.len() != 64 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).ok()?;
    }
    Some(out)
}

/// Helper macro implementing the shared plumbing for 32-byte digest
/// newtypes: byte/hex constructors, the all-zero sentinel, `Display`,
/// `FromStr`, and hex-string serde. Deserialization routes through
/// `from_hex` so invalid values are rejected, not silently accepted.
macro_rules! impl_digest_newtype {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// The all-zero digest. Used as a null sentinel (e.g. the
            /// `previous_hash` of a genesis data update).
            pub const ZERO: Self = Self([0u8; 32]);

            /// Construct from raw bytes.
            pub fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Construct from a 64-character lowercase or uppercase hex string.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidDigestHex`] on bad length
            /// or non-hex characters.
            pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
                decode_hex_32(s)
                    .map(Self)
                    .ok_or_else(|| ValidationError::InvalidDigestHex {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }

            /// Access the raw digest bytes.
            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            /// Lowercase hex rendering.
            pub fn to_hex(&self) -> String {
                encode_hex(&self.0)
            }

            /// Whether this is the all-zero sentinel.
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; 32]
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::from_hex(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Digest identifiers
// ---------------------------------------------------------------------------

/// The pseudonymous identity key of a student, derived from the student's
/// private identifier. Primary key of the identity registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UidHash(pub(crate) [u8; 32]);

impl_digest_newtype!(UidHash, "uid hash");

/// A commitment identifying the issuing institution without revealing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstitutionHash(pub(crate) [u8; 32]);

impl_digest_newtype!(InstitutionHash, "institution hash");

/// The root of a merkle tree binding a batch of credential identifiers.
/// Primary key of the credential anchor store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MerkleRoot(pub(crate) [u8; 32]);

impl_digest_newtype!(MerkleRoot, "merkle root");

/// Key of a pending recovery request, derived from the hashed national
/// identifier and a salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecoveryId(pub(crate) [u8; 32]);

impl_digest_newtype!(RecoveryId, "recovery id");

/// The hash of a student's national identifier. Never the raw identifier —
/// the ledger only ever sees the commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NationalIdHash(pub(crate) [u8; 32]);

impl_digest_newtype!(NationalIdHash, "national id hash");

/// A 32-byte salt commitment blinding the national identifier in UID and
/// recovery-id derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Salt(pub(crate) [u8; 32]);

impl_digest_newtype!(Salt, "salt");

/// A caller-declared content hash: a data-stream update hash or a
/// recovery-channel commitment. The ledger stores these as declared; it
/// never re-derives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataHash(pub(crate) [u8; 32]);

impl_digest_newtype!(DataHash, "data hash");

/// An account address: the SHA-256 digest of an Ed25519 verifying key.
///
/// The all-zero address is the null sentinel and is rejected wherever an
/// address identifies a live participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub(crate) [u8; 32]);

impl_digest_newtype!(Address, "address");

// ---------------------------------------------------------------------------
// Validated string primitives
// ---------------------------------------------------------------------------

/// Helper macro for non-empty string newtypes. The ledger treats these as
/// opaque content: non-emptiness is the only validated property.
macro_rules! nonempty_string_newtype {
    ($(#[$meta:meta])* $ty:ident, $err:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $ty(String);

        impl $ty {
            /// Construct from a string, rejecting empty input.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::$err`] if the string is empty.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if s.is_empty() {
                    return Err(ValidationError::$err);
                }
                Ok(Self(s))
            }

            /// Access the string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

nonempty_string_newtype!(
    /// An opaque reference to off-chain stored content (an Arweave-style
    /// transaction id or URI). The ledger validates only non-emptiness —
    /// never content or reachability.
    Locator,
    EmptyLocator
);

nonempty_string_newtype!(
    /// An institution-assigned credential identifier (e.g.
    /// `"DIPLOMA_CS_2024_001"`).
    CredentialId,
    EmptyCredentialId
);

nonempty_string_newtype!(
    /// The category of a data-stream update (e.g. `"GRADES"`,
    /// `"ATTENDANCE"`). Free-form, institution-defined.
    DataType,
    EmptyDataType
);

nonempty_string_newtype!(
    /// An academic level label (e.g. `"Bachelor"`).
    AcademicLevel,
    EmptyAcademicLevel
);

nonempty_string_newtype!(
    /// A field-of-study label (e.g. `"Computer Science"`).
    FieldOfStudy,
    EmptyFieldOfStudy
);

// ---------------------------------------------------------------------------
// Recovery methods
// ---------------------------------------------------------------------------

/// The enumerated channels through which a student may claim recovery of
/// a UID. Anything outside this set is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryMethod {
    /// Recovery attested against a registered email address.
    Email,
    /// Recovery attested against a registered phone number.
    Phone,
    /// Recovery attested against a biometric commitment.
    Biometric,
}

impl RecoveryMethod {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryMethod::Email => "email",
            RecoveryMethod::Phone => "phone",
            RecoveryMethod::Biometric => "biometric",
        }
    }
}

impl std::fmt::Display for RecoveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RecoveryMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(RecoveryMethod::Email),
            "phone" => Ok(RecoveryMethod::Phone),
            "biometric" => Ok(RecoveryMethod::Biometric),
            other => Err(ValidationError::InvalidRecoveryMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn digest(fill: u8) -> [u8; 32] {
        [fill; 32]
    }

    // -- Digest newtypes --

    #[test]
    fn uid_hash_hex_roundtrip() {
        let uid = UidHash::from_bytes(digest(0xab));
        let hex = uid.to_hex();
        assert_eq!(hex, "ab".repeat(32));
        assert_eq!(UidHash::from_hex(&hex).unwrap(), uid);
    }

    #[test]
    fn uid_hash_rejects_bad_hex() {
        assert!(UidHash::from_hex("").is_err());
        assert!(UidHash::from_hex("abcd").is_err());
        assert!(UidHash::from_hex(&"zz".repeat(32)).is_err());
        assert!(UidHash::from_hex(&"ab".repeat(33)).is_err());
    }

    #[test]
    fn zero_sentinel_detected() {
        assert!(UidHash::ZERO.is_zero());
        assert!(!UidHash::from_bytes(digest(1)).is_zero());
        assert!(Address::ZERO.is_zero());
        assert!(MerkleRoot::ZERO.is_zero());
    }

    #[test]
    fn digest_newtypes_are_distinct_types() {
        // Compile-time property — this test documents it.
        let uid = UidHash::from_bytes(digest(1));
        let root = MerkleRoot::from_bytes(digest(1));
        assert_eq!(uid.as_bytes(), root.as_bytes());
    }

    #[test]
    fn digest_serde_roundtrip() {
        let root = MerkleRoot::from_bytes(digest(0x5c));
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, format!("\"{}\"", "5c".repeat(32)));
        let back: MerkleRoot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn digest_deserialize_rejects_invalid() {
        let result: Result<UidHash, _> = serde_json::from_str("\"not-hex\"");
        assert!(result.is_err());
    }

    #[test]
    fn digest_display_and_fromstr() {
        let id = RecoveryId::from_bytes(digest(0x09));
        let shown = format!("{id}");
        assert_eq!(RecoveryId::from_str(&shown).unwrap(), id);
    }

    #[test]
    fn uppercase_hex_accepted() {
        let uid = UidHash::from_hex(&"AB".repeat(32)).unwrap();
        assert_eq!(uid.to_hex(), "ab".repeat(32));
    }

    // -- String primitives --

    #[test]
    fn locator_rejects_empty() {
        assert_eq!(Locator::new(""), Err(ValidationError::EmptyLocator));
        assert!(Locator::new("ar://tx_abc123").is_ok());
    }

    #[test]
    fn locator_is_opaque() {
        // Any non-empty string passes — content is never inspected.
        assert!(Locator::new("   ").is_ok());
        assert!(Locator::new("not a uri at all").is_ok());
    }

    #[test]
    fn credential_id_rejects_empty() {
        assert_eq!(
            CredentialId::new(""),
            Err(ValidationError::EmptyCredentialId)
        );
        let cid = CredentialId::new("DIPLOMA_CS_2024_001").unwrap();
        assert_eq!(cid.as_str(), "DIPLOMA_CS_2024_001");
    }

    #[test]
    fn data_type_rejects_empty() {
        assert_eq!(DataType::new(""), Err(ValidationError::EmptyDataType));
        assert_eq!(DataType::new("GRADES").unwrap().as_str(), "GRADES");
    }

    #[test]
    fn academic_strings_reject_empty() {
        assert_eq!(
            AcademicLevel::new(""),
            Err(ValidationError::EmptyAcademicLevel)
        );
        assert_eq!(
            FieldOfStudy::new(""),
            Err(ValidationError::EmptyFieldOfStudy)
        );
    }

    #[test]
    fn string_newtype_deserialize_rejects_empty() {
        let result: Result<Locator, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn string_newtype_serde_roundtrip() {
        let dt = DataType::new("ATTENDANCE").unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        let back: DataType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
    }

    // -- RecoveryMethod --

    #[test]
    fn recovery_method_parses_known_values() {
        assert_eq!(
            RecoveryMethod::from_str("email").unwrap(),
            RecoveryMethod::Email
        );
        assert_eq!(
            RecoveryMethod::from_str("phone").unwrap(),
            RecoveryMethod::Phone
        );
        assert_eq!(
            RecoveryMethod::from_str("biometric").unwrap(),
            RecoveryMethod::Biometric
        );
    }

    #[test]
    fn recovery_method_rejects_unknown() {
        assert!(RecoveryMethod::from_str("invalid_method").is_err());
        assert!(RecoveryMethod::from_str("EMAIL").is_err());
        assert!(RecoveryMethod::from_str("").is_err());
    }

    #[test]
    fn recovery_method_display_matches_parse() {
        for m in [
            RecoveryMethod::Email,
            RecoveryMethod::Phone,
            RecoveryMethod::Biometric,
        ] {
            assert_eq!(RecoveryMethod::from_str(&format!("{m}")).unwrap(), m);
        }
    }

    #[test]
    fn recovery_method_serde_lowercase() {
        let json = serde_json::to_string(&RecoveryMethod::Biometric).unwrap();
        assert_eq!(json, "\"biometric\"");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn digest_hex_roundtrips(bytes in any::<[u8; 32]>()) {
                let uid = UidHash::from_bytes(bytes);
                prop_assert_eq!(UidHash::from_hex(&uid.to_hex()).unwrap(), uid);
            }

            #[test]
            fn locator_accepts_any_nonempty_string(s in "\\PC{1,64}") {
                let locator = Locator::new(s.clone()).unwrap();
                prop_assert_eq!(locator.as_str(), s.as_str());
            }
        }
    }
}
