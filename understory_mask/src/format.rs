// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in format identifiers.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Identifier of a built-in display format.
///
/// The set is closed; behavior for each identifier lives in a
/// [`FormatterRegistry`](crate::FormatterRegistry), which may override it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FormatId {
    /// Brazilian real, digits read as cents: `R$ 1.234,56`.
    CurrencyBrl,
    /// US dollar, digits read as cents: `$1,234.56`.
    CurrencyUsd,
    /// Individual taxpayer registry: `123.456.789-01`.
    Cpf,
    /// Company taxpayer registry: `12.345.678/0001-90`.
    Cnpj,
    /// Phone number with area code: `(11) 2345-6789` or `(11) 92345-6789`.
    Phone,
    /// Postal code: `12345-678`.
    Cep,
    /// Classification society certificate number: `123.456.789/2024`.
    RbnaCertificateNumber,
    /// Electronic invoice access key: 44 digits in groups of four.
    #[cfg_attr(feature = "serde", serde(rename = "danfe-accesskey"))]
    DanfeAccessKey,
}

impl FormatId {
    /// Every format identifier, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::CurrencyBrl,
        Self::CurrencyUsd,
        Self::Cpf,
        Self::Cnpj,
        Self::Phone,
        Self::Cep,
        Self::RbnaCertificateNumber,
        Self::DanfeAccessKey,
    ];

    /// The kebab-case name of this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrencyBrl => "currency-brl",
            Self::CurrencyUsd => "currency-usd",
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Phone => "phone",
            Self::Cep => "cep",
            Self::RbnaCertificateNumber => "rbna-certificate-number",
            Self::DanfeAccessKey => "danfe-accesskey",
        }
    }

    /// Returns `true` for the currency formats.
    ///
    /// Currency formats read their digits as cents and drop leading zeros, so
    /// they only round-trip for amounts of at least one unit.
    #[must_use]
    pub const fn is_currency(self) -> bool {
        matches!(self, Self::CurrencyBrl | Self::CurrencyUsd)
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name does not match any [`FormatId`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown format `{name}`")]
pub struct UnknownFormatId {
    /// The name that failed to match.
    pub name: String,
}

impl FromStr for FormatId {
    type Err = UnknownFormatId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownFormatId { name: s.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for id in FormatId::ALL {
            assert_eq!(id.as_str().parse::<FormatId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "iban".parse::<FormatId>().unwrap_err();
        assert_eq!(err.name, "iban");
    }
}
