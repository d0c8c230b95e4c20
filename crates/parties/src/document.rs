//! Identity document types accepted for delivery customers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use posdelivery_core::DomainError;

/// Identity document type, stored on the partner as a selection code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Cédula de Ciudadanía.
    Cc,
    /// Cédula de Extranjería.
    Ce,
    /// Tarjeta de Identidad.
    Ti,
    Passport,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Cc,
        DocumentType::Ce,
        DocumentType::Ti,
        DocumentType::Passport,
        DocumentType::Other,
    ];

    /// Selection code as stored in the backend.
    pub fn code(self) -> &'static str {
        match self {
            DocumentType::Cc => "cc",
            DocumentType::Ce => "ce",
            DocumentType::Ti => "ti",
            DocumentType::Passport => "passport",
            DocumentType::Other => "other",
        }
    }

    /// Label printed for the customer.
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Cc => "Cédula de Ciudadanía",
            DocumentType::Ce => "Cédula de Extranjería",
            DocumentType::Ti => "Tarjeta de Identidad",
            DocumentType::Passport => "Pasaporte",
            DocumentType::Other => "Otro",
        }
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        DocumentType::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| DomainError::validation(format!("unknown document type: {code}")))
    }
}

impl core::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}
