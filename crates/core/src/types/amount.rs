//! Monetary values in Brazilian reais.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A BRL amount as shown on donation cards.
///
/// Stored as a decimal in the currency's standard unit (reais, not centavos)
/// and displayed with the comma decimal separator the app uses everywhere
/// ("50,00").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from a decimal number of reais.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create an amount from a whole number of centavos.
    #[must_use]
    pub fn from_centavos(centavos: i64) -> Self {
        Self(Decimal::new(centavos, 2))
    }

    /// The underlying decimal value in reais.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Format with the currency sign, the way donation cards print it
    /// ("R$50,00").
    #[must_use]
    pub fn display_brl(self) -> String {
        format!("R${self}")
    }
}

impl std::fmt::Display for Amount {
    /// Two decimal places, comma separator ("50,00").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = format!("{:.2}", self.0).replace('.', ",");
        write!(f, "{digits}")
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}
