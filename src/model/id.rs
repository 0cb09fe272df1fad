use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::Display;

/// An opaque identifier issued by the commerce service.
///
/// The service may use JSON numbers (`1`, `18446744073709551615`, `1.5`) or strings
/// (`"hoodie-001"`). Numbers are held as [`serde_json::Number`], so unsigned 64-bit and
/// fractional values are accepted and echoed back in the same form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(Number),
    Text(String),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Identifier);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(Identifier::Number(Number::from(id)))
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(Identifier::Number(Number::from(id)))
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(Identifier::Number(Number::from(id)))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(Identifier::Text(id.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(Identifier::Text(id))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

opaque_id!(
    /// Type-safe identifier for catalog products.
    ProductId
);

opaque_id!(
    /// Type-safe identifier for orders created by the commerce service.
    OrderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_keep_their_json_form() {
        let numeric: ProductId = serde_json::from_str("1").unwrap();
        let text: ProductId = serde_json::from_str("\"hoodie-001\"").unwrap();

        assert_eq!(numeric, ProductId::from(1));
        assert_eq!(text, ProductId::from("hoodie-001"));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "1");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"hoodie-001\"");
    }

    #[test]
    fn display_is_the_raw_value() {
        assert_eq!(OrderId::from("ORD-99").to_string(), "ORD-99");
        assert_eq!(OrderId::from(42).to_string(), "42");
    }

    #[test]
    fn ids_beyond_i64_are_kept() {
        let id: ProductId = serde_json::from_str("18446744073709551615").unwrap();

        assert_eq!(id, ProductId::from(u64::MAX));
        assert_eq!(id.to_string(), "18446744073709551615");
        assert_eq!(serde_json::to_string(&id).unwrap(), "18446744073709551615");
    }

    #[test]
    fn fractional_ids_are_kept() {
        let id: OrderId = serde_json::from_str("1.5").unwrap();

        assert_eq!(id.to_string(), "1.5");
        assert_eq!(serde_json::to_string(&id).unwrap(), "1.5");
    }

    #[test]
    fn non_scalar_ids_are_rejected() {
        assert!(serde_json::from_str::<ProductId>("{\"id\":1}").is_err());
        assert!(serde_json::from_str::<ProductId>("null").is_err());
    }
}
