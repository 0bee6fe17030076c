//! User profile model returned by the user-info endpoint.

use serde::{Deserialize, Serialize};

/// Role assigned to accounts the server did not mark otherwise.
pub const DEFAULT_ROLE: &str = "user";

/// Role granting administrative access.
pub const ADMIN_ROLE: &str = "admin";

/// Profile for the signed-in user.
///
/// The server may omit `role` entirely; it deserializes to an empty string
/// and the session store backfills it to [`DEFAULT_ROLE`] when the profile
/// is stored via `store_user_info`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "user_pic")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserProfile {
    /// Name to show in the UI, preferring the nickname over the login name.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nick) if !nick.is_empty() => nick,
            _ => &self.username,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_empty_when_omitted() {
        let json = r#"{"id": 7, "username": "sora", "nickname": null, "email": null, "user_pic": null}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, "");
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_display_name_prefers_nickname() {
        let mut profile = UserProfile {
            id: 1,
            username: "sora".to_string(),
            nickname: Some("Sky".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "Sky");

        profile.nickname = Some(String::new());
        assert_eq!(profile.display_name(), "sora");

        profile.nickname = None;
        assert_eq!(profile.display_name(), "sora");
    }
}
