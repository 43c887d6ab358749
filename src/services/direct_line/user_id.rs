//! Anonymous user ids bound to Direct Line tokens.
use std::fmt;

use crate::services::direct_line::error::DirectLineError;

/// Direct Line requires user ids supplied with a secret-issued token to
/// carry the `dl_` prefix.
pub const USER_ID_PREFIX: &str = "dl_";

const USER_ID_ENTROPY_BYTES: usize = 16;

/// `dl_` followed by 32 lowercase hex chars (16 bytes from the OS CSPRNG).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn generate() -> Result<Self, DirectLineError> {
        let mut bytes = [0u8; USER_ID_ENTROPY_BYTES];
        getrandom::fill(&mut bytes).map_err(|e| DirectLineError::Entropy(e.to_string()))?;

        Ok(Self(format!("{USER_ID_PREFIX}{}", hex::encode(bytes))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_well_formed(id: &str) -> bool {
        match id.strip_prefix(USER_ID_PREFIX) {
            Some(hex) => {
                hex.len() == 32
                    && hex
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            }
            None => false,
        }
    }

    #[test]
    fn generated_id_has_prefix_and_32_lowercase_hex_chars() {
        let id = UserId::generate().unwrap();
        assert!(is_well_formed(id.as_str()), "unexpected id: {id}");
        assert_eq!(id.as_str().len(), 35);
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..256)
            .map(|_| UserId::generate().unwrap().into_string())
            .collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn display_matches_inner_value() {
        let id = UserId::generate().unwrap();
        assert_eq!(id.to_string(), id.as_str());
    }
}
