//! Postal address value object.
//!
//! An [`Address`] can only be obtained through [`Address::create`], which
//! validates and normalizes the raw props. Every live instance is therefore
//! both valid and canonical, and read sites never re-validate.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::constants::{ZIP_CODE_DIGITS, ZIP_CODE_PREFIX_LENGTH};
use crate::error::InvalidAddressError;

/// Raw address fields as supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressProps {
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Immutable, self-validating postal address.
///
/// Equality is structural. Deserializing goes through [`Address::create`], so
/// untrusted input gets the same checks as code-built addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressProps", into = "AddressProps")]
pub struct Address {
    street: String,
    number: String,
    complement: Option<String>,
    neighborhood: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
}

impl Address {
    /// Validate and normalize `props` into an address.
    ///
    /// Checks run in field order and stop at the first failure; the zip code
    /// digit count is checked last.
    ///
    /// # Errors
    /// Returns [`InvalidAddressError`] naming the first field that failed.
    pub fn create(props: AddressProps) -> Result<Self, InvalidAddressError> {
        Self::validate(&props)?;

        Ok(Self {
            street: props.street.trim().to_string(),
            number: props.number.trim().to_string(),
            complement: props
                .complement
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            neighborhood: props.neighborhood.trim().to_string(),
            city: props.city.trim().to_string(),
            state: props.state.trim().to_string(),
            zip_code: zip_code_digits(&props.zip_code),
            country: props.country.trim().to_string(),
        })
    }

    fn validate(props: &AddressProps) -> Result<(), InvalidAddressError> {
        let required = [
            (&props.street, "Street is required"),
            (&props.number, "Number is required"),
            (&props.neighborhood, "Neighborhood is required"),
            (&props.city, "City is required"),
            (&props.state, "State is required"),
            (&props.zip_code, "Zip code is required"),
            (&props.country, "Country is required"),
        ];

        for (value, reason) in required {
            if value.trim().is_empty() {
                return Err(InvalidAddressError::new(reason));
            }
        }

        if zip_code_digits(&props.zip_code).len() != ZIP_CODE_DIGITS {
            return Err(InvalidAddressError::new(format!(
                "Zip code must have {} digits",
                ZIP_CODE_DIGITS
            )));
        }

        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// The eight zip code digits, without punctuation
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Zip code as `NNNNN-NNN`
    pub fn formatted_zip_code(&self) -> String {
        let (prefix, suffix) = self.zip_code.split_at(ZIP_CODE_PREFIX_LENGTH);
        format!("{}-{}", prefix, suffix)
    }

    /// Canonical one-line rendering; the complement segment only appears when present
    pub fn full_address(&self) -> String {
        let complement = self
            .complement
            .as_deref()
            .map(|c| format!(", {}", c))
            .unwrap_or_default();

        format!(
            "{}, {}{}, {}, {} - {}, {}, {}",
            self.street,
            self.number,
            complement,
            self.neighborhood,
            self.city,
            self.state,
            self.formatted_zip_code(),
            self.country
        )
    }

    /// Structural comparison against a value of any type.
    ///
    /// Anything that is not an `Address` compares unequal.
    pub fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Address>()
            .is_some_and(|other| self == other)
    }
}

/// Keep only ASCII digits
fn zip_code_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

impl TryFrom<AddressProps> for Address {
    type Error = InvalidAddressError;

    fn try_from(props: AddressProps) -> Result<Self, Self::Error> {
        Address::create(props)
    }
}

impl From<Address> for AddressProps {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            number: address.number,
            complement: address.complement,
            neighborhood: address.neighborhood,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_address())
    }
}
