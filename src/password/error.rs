#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Please select at least one character type")]
    NoCharacterClasses,

    #[error("Password length {0} exceeds the maximum of {max}", max = crate::password::MAX_LENGTH)]
    TooLong(usize),
}
