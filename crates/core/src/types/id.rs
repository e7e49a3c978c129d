//! Newtype IDs for type-safe entity references.
//!
//! CAPRA ids are opaque string tokens: seed records carry small decimal
//! strings ("1", "2", ...) while records registered at runtime get a token
//! derived from the current clock. The `define_id!` macro creates one wrapper
//! per entity type so a `PetId` can never be passed where a `UserId` is
//! expected.

/// Macro to define a type-safe ID wrapper around an opaque string token.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `generate()` producing a fresh clock-derived token
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use capra_core::define_id;
/// define_id!(PetId);
/// define_id!(UserId);
///
/// let pet_id = PetId::new("1");
/// let user_id = UserId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: PetId = user_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing token.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh ID from the current clock.
            ///
            /// The token is the nanosecond UTC timestamp rendered as a
            /// decimal string. Collisions are not guarded against beyond
            /// the clock resolution.
            #[must_use]
            pub fn generate() -> Self {
                let now = ::chrono::Utc::now();
                let token = now
                    .timestamp_nanos_opt()
                    .unwrap_or_else(|| now.timestamp_micros());
                Self(token.to_string())
            }

            /// Returns the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the ID and returns the inner token.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

// Define standard entity IDs
define_id!(PetId);
define_id!(UserId);
define_id!(RequestId);
define_id!(DonationId);
