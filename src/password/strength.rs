use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Rating shown next to a generated password
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// 0 for no password, 1 (weak) through 4 (strong)
    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::None => "None",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Serialized as {"score": 0-4, "label": "..."}
impl Serialize for Strength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Strength", 2)?;
        state.serialize_field("score", &self.score())?;
        state.serialize_field("label", self.label())?;
        state.end()
    }
}

/// One point per length threshold reached and per character class present
pub fn strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::None;
    }

    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        length >= 16,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    match checks.iter().filter(|passed| **passed).count() {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Fair,
        5 => Strength::Good,
        _ => Strength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        assert_eq!(strength(""), Strength::None);
        assert_eq!(Strength::None.score(), 0);
    }

    #[test]
    fn test_strength_thresholds() {
        // lowercase only, short
        assert_eq!(strength("abc"), Strength::Weak);
        // 8+ chars, lowercase, digit
        assert_eq!(strength("abcdef12"), Strength::Fair);
        // 12+ chars, lowercase, upper, digit
        assert_eq!(strength("Abcdefgh1234"), Strength::Good);
        // every check
        assert_eq!(strength("Abcdefgh1234!@#$"), Strength::Strong);
    }

    #[test]
    fn test_scores() {
        assert_eq!(Strength::Weak.score(), 1);
        assert_eq!(Strength::Strong.score(), 4);
        assert_eq!(Strength::Good.to_string(), "Good");
    }

    #[test]
    fn test_serializes_score_and_label() {
        assert_eq!(
            serde_json::to_value(Strength::Good).unwrap(),
            serde_json::json!({"score": 3, "label": "Good"})
        );
        assert_eq!(
            serde_json::to_string(&strength("")).unwrap(),
            r#"{"score":0,"label":"None"}"#
        );
    }
}
