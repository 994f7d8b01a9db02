// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::GenerationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Password length must be greater than 0.")]
    InvalidLength,

    #[error("Password length must be at most {max}.")]
    LengthTooLarge { max: usize },

    #[error("At least one character type must be selected.")]
    NoCharacterClassSelected,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generates random passwords that contain at least one character of every
/// selected class.
///
/// The generator holds no state; every call draws from its own randomness
/// source, so a single instance can be shared between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password using the thread-local RNG.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.generate_with_rng(&mut rand::thread_rng(), request)
    }

    /// Generate a password drawing every random choice from `rng`.
    ///
    /// When `request.length` is smaller than the number of selected classes,
    /// exact length wins: the coverage characters are shuffled and truncated,
    /// so a random subset of the selected classes ends up in the password.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &GenerationRequest,
    ) -> Result<String> {
        request.validate()?;

        let classes = request.selected_classes();
        let alphabet: Vec<u8> = classes
            .iter()
            .flat_map(|class| class.chars().iter().copied())
            .collect();

        let mut password: Vec<u8> = Vec::with_capacity(request.length.max(classes.len()));

        // One character from every selected class
        for class in &classes {
            if let Some(&c) = class.chars().choose(rng) {
                password.push(c);
            }
        }

        let remaining = request.length.saturating_sub(password.len());
        password.extend((0..remaining).map(|_| alphabet[rng.gen_range(0..alphabet.len())]));

        password.shuffle(rng);
        password.truncate(request.length);

        log::debug!(
            "Generated password of length {} from {} character classes",
            password.len(),
            classes.len()
        );

        // Every class is ASCII
        Ok(password.into_iter().map(char::from).collect())
    }
}
