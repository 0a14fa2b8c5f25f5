//! Raw form input and its validation
//!
//! The form keeps exactly what the user typed. Nothing reaches the scorer
//! until `validate` has checked presence and parsed every number.

use crate::{Error, Result, TransactionInput, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Transaction type
    Type,
    /// Amount
    Amount,
    /// Origin balance before
    OriginOldBalance,
    /// Origin balance after
    OriginNewBalance,
    /// Destination balance before
    DestOldBalance,
    /// Destination balance after
    DestNewBalance,
}

impl FormField {
    /// Fields that must be filled before scoring
    pub const REQUIRED: [FormField; 4] = [
        FormField::Type,
        FormField::Amount,
        FormField::OriginOldBalance,
        FormField::OriginNewBalance,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Type => "type",
            FormField::Amount => "amount",
            FormField::OriginOldBalance => "originOldBalance",
            FormField::OriginNewBalance => "originNewBalance",
            FormField::DestOldBalance => "destOldBalance",
            FormField::DestNewBalance => "destNewBalance",
        }
    }

    /// Label as shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Type => "Transaction Type",
            FormField::Amount => "Amount",
            FormField::OriginOldBalance => "Origin Old Balance",
            FormField::OriginNewBalance => "Origin New Balance",
            FormField::DestOldBalance => "Destination Old Balance",
            FormField::DestNewBalance => "Destination New Balance",
        }
    }

    /// Check if required
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated transaction form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionForm {
    /// Transaction type name
    #[serde(rename = "type")]
    pub tx_type: String,
    /// Amount
    pub amount: String,
    /// Origin balance before
    pub origin_old_balance: String,
    /// Origin balance after
    pub origin_new_balance: String,
    /// Destination balance before
    pub dest_old_balance: String,
    /// Destination balance after
    pub dest_new_balance: String,
}

impl TransactionForm {
    /// Create empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Overwrite one field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Current text of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Type => &self.tx_type,
            FormField::Amount => &self.amount,
            FormField::OriginOldBalance => &self.origin_old_balance,
            FormField::OriginNewBalance => &self.origin_new_balance,
            FormField::DestOldBalance => &self.dest_old_balance,
            FormField::DestNewBalance => &self.dest_new_balance,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Type => &mut self.tx_type,
            FormField::Amount => &mut self.amount,
            FormField::OriginOldBalance => &mut self.origin_old_balance,
            FormField::OriginNewBalance => &mut self.origin_new_balance,
            FormField::DestOldBalance => &mut self.dest_old_balance,
            FormField::DestNewBalance => &mut self.dest_new_balance,
        }
    }

    fn is_blank(&self, field: FormField) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Required fields that are still blank, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|f| self.is_blank(*f))
            .collect()
    }

    /// Check presence, then parse every field into a `TransactionInput`
    pub fn validate(&self) -> Result<TransactionInput> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::MissingField(missing));
        }

        let tx_type = TransactionType::from_str(self.tx_type.trim())?;

        let amount = self.parse_number(FormField::Amount)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(Error::InvalidNumber {
                field: FormField::Amount,
                value: self.amount.clone(),
            });
        }

        let mut input = TransactionInput::new(
            tx_type,
            amount,
            self.parse_number(FormField::OriginOldBalance)?,
            self.parse_number(FormField::OriginNewBalance)?,
        );
        input.dest_old_balance = self.parse_optional(FormField::DestOldBalance)?;
        input.dest_new_balance = self.parse_optional(FormField::DestNewBalance)?;

        Ok(input)
    }

    fn parse_number(&self, field: FormField) -> Result<Decimal> {
        let raw = self.get(field);
        parse_decimal(raw.trim()).ok_or_else(|| Error::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    }

    fn parse_optional(&self, field: FormField) -> Result<Option<Decimal>> {
        if self.is_blank(field) {
            return Ok(None);
        }
        self.parse_number(field).map(Some)
    }
}

impl From<&TransactionInput> for TransactionForm {
    fn from(input: &TransactionInput) -> Self {
        Self {
            tx_type: input.tx_type.to_string(),
            amount: input.amount.to_string(),
            origin_old_balance: input.origin_old_balance.to_string(),
            origin_new_balance: input.origin_new_balance.to_string(),
            dest_old_balance: input
                .dest_old_balance
                .map(|d| d.to_string())
                .unwrap_or_default(),
            dest_new_balance: input
                .dest_new_balance
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Plain and scientific notation (`1e5`, as number inputs allow)
fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
