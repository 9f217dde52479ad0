//! DRY macros for closed categorical inputs.
//!
//! - **`categorical_enum!`** - Generates `ALL`, `as_str`, `Display` and a
//!   `FromStr` that rejects unrecognized strings with a typed
//!   [`ValidationError`](crate::domain::foundation::ValidationError).
//!
//! # Usage
//!
//! ```ignore
//! categorical_enum! {
//!     /// Doc comment for the enum.
//!     pub enum RiskTolerance, field = "risk_tolerance" {
//!         Low => "low",
//!         Medium => "medium",
//!         High => "high",
//!     }
//! }
//! ```
//!
//! The string forms match the serde `snake_case` representation, so a value
//! parsed from a form field and one deserialized from JSON always agree.

macro_rules! categorical_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident, field = $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Returns the canonical lowercase identifier.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $( $text => Ok($name::$variant), )+
                    _ => Err($crate::domain::foundation::ValidationError::unknown_variant(
                        $field,
                        s,
                        &[ $( $text ),+ ],
                    )),
                }
            }
        }
    };
}

pub(crate) use categorical_enum;
