// src/models.rs
use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;
use crate::generators::GeneratorError;

/// Longest password a request may ask for.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

// Password generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

impl GenerationRequest {
    /// Selected classes in fixed order: uppercase, lowercase, digits, special.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        let flags = [
            self.include_uppercase,
            self.include_lowercase,
            self.include_digits,
            self.include_special,
        ];
        CharacterClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, selected)| selected.then_some(class))
            .collect()
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Special => self.include_special,
        }
    }

    // Length is checked first, then class selection
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.length == 0 {
            return Err(GeneratorError::InvalidLength);
        }
        if self.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::LengthTooLarge {
                max: MAX_PASSWORD_LENGTH,
            });
        }
        if !(self.include_uppercase
            || self.include_lowercase
            || self.include_digits
            || self.include_special)
        {
            return Err(GeneratorError::NoCharacterClassSelected);
        }
        Ok(())
    }
}

// Result of a generation run, as emitted in JSON mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub passwords: Vec<String>,
    pub request: Option<GenerationRequest>,
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn ok(request: GenerationRequest, passwords: Vec<String>) -> Self {
        Self {
            success: true,
            passwords,
            request: Some(request),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            passwords: Vec::new(),
            request: None,
            error: Some(error.to_string()),
        }
    }
}
