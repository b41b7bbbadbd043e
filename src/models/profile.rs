//! User profile model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile details shown on the profile screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name, stored upper-cased as issued
    pub name: String,

    /// Social handle ("@nicolass1748")
    pub handle: String,

    /// Avatar image URL (rendered as a placeholder block in the terminal)
    pub avatar_url: String,

    /// Membership number printed on the card
    pub membership_number: String,
}

/// Editable fields of the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Handle,
    AvatarUrl,
    MembershipNumber,
}

impl ProfileField {
    /// Fields in the order the profile screen lists them
    pub const ALL: [ProfileField; 4] = [
        Self::Name,
        Self::Handle,
        Self::AvatarUrl,
        Self::MembershipNumber,
    ];
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::Handle => write!(f, "Handle"),
            Self::AvatarUrl => write!(f, "Avatar"),
            Self::MembershipNumber => write!(f, "Membership"),
        }
    }
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        handle: impl Into<String>,
        avatar_url: impl Into<String>,
        membership_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            avatar_url: avatar_url.into(),
            membership_number: membership_number.into(),
        }
    }

    /// Name with each word title-cased, for the profile header
    pub fn title_cased_name(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>()
                            + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Field accessor used by the inline editor
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Handle => &self.handle,
            ProfileField::AvatarUrl => &self.avatar_url,
            ProfileField::MembershipNumber => &self.membership_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserProfile {
        UserProfile::new(
            "NICOLÁS SALCEDO FERIX",
            "@nicolass1748",
            "https://picsum.photos/100/100",
            "P38371203",
        )
    }

    #[test]
    fn test_title_cased_name() {
        assert_eq!(sample().title_cased_name(), "Nicolás Salcedo Ferix");
    }

    #[test]
    fn test_title_cased_name_single_word() {
        let mut profile = sample();
        profile.name = "FERIX".to_string();
        assert_eq!(profile.title_cased_name(), "Ferix");
    }

    #[test]
    fn test_field_accessor() {
        let profile = sample();
        assert_eq!(profile.field(ProfileField::Name), "NICOLÁS SALCEDO FERIX");
        assert_eq!(profile.field(ProfileField::Handle), "@nicolass1748");
        assert_eq!(
            profile.field(ProfileField::AvatarUrl),
            "https://picsum.photos/100/100"
        );
        assert_eq!(profile.field(ProfileField::MembershipNumber), "P38371203");
    }

    #[test]
    fn test_serialization() {
        let profile = sample();
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
