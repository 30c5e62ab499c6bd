use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UserProfile {
    pub id: i64,
    /// Subject identifier issued by the authentication server.
    pub user_id: String,
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    #[serde(with = "super::timestamp")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Nickname, falling back to the auth subject.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.user_id)
    }
}

/// Partial profile update; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UserProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let json = r#"{"id":3,"user_id":"auth0|abc","nickname":null,"profile_image_url":null,"bio":"hi","is_active":true,"created_at":"2024-02-10T08:00:00"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.display_name(), "auth0|abc");
        assert_eq!(user.bio.as_deref(), Some("hi"));
    }

    #[test]
    fn test_update_omits_unset_fields() {
        let update = UserProfileUpdate {
            bio: Some("new bio".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"bio": "new bio"})
        );
    }
}
