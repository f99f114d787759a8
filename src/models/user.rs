use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::{roles, XP_DISPLAY_CAP};

/// Account role. Stored as text in the database; parse at the boundary
/// and branch on the variant, never on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => roles::STUDENT,
            Role::Admin => roles::ADMIN,
        }
    }

    /// Unknown values fall back to the least privileged role.
    pub fn parse(s: &str) -> Self {
        match s {
            roles::ADMIN => Role::Admin,
            _ => Role::Student,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: String,
    pub college: String,
    pub streak: i32,
    pub college_rank: i32,
    pub global_rank: i32,
    pub level: i32,
    pub xp: i32,
    pub last_accepted_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }

    /// Progress toward the displayed XP cap, as a percentage clamped to [0, 100].
    pub fn xp_percentage(&self) -> f64 {
        let pct = f64::from(self.xp.max(0)) / f64::from(XP_DISPLAY_CAP) * 100.0;
        pct.min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_xp(xp: i32) -> User {
        User {
            id: Uuid::new_v4(),
            username: "tester".to_string(),
            email: "tester@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: None,
            role: roles::STUDENT.to_string(),
            college: "CampusCode Institute".to_string(),
            streak: 1,
            college_rank: 500,
            global_rank: 9999,
            level: 1,
            xp,
            last_accepted_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn xp_percentage_scales_against_display_cap() {
        assert_eq!(user_with_xp(0).xp_percentage(), 0.0);
        assert_eq!(user_with_xp(100).xp_percentage(), 5.0);
        assert_eq!(user_with_xp(1000).xp_percentage(), 50.0);
        assert_eq!(user_with_xp(2000).xp_percentage(), 100.0);
    }

    #[test]
    fn xp_percentage_never_exceeds_one_hundred() {
        assert_eq!(user_with_xp(2001).xp_percentage(), 100.0);
        assert_eq!(user_with_xp(1_000_000).xp_percentage(), 100.0);
    }

    #[test]
    fn xp_percentage_clamps_negative_values() {
        assert_eq!(user_with_xp(-50).xp_percentage(), 0.0);
    }

    #[test]
    fn role_parse_defaults_to_student() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("student"), Role::Student);
        assert_eq!(Role::parse("superuser"), Role::Student);
        assert_eq!(Role::parse(""), Role::Student);
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Student, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), role);
        }
    }

    #[test]
    fn admin_check_uses_typed_role() {
        let mut user = user_with_xp(0);
        assert!(!user.is_admin());
        user.role = roles::ADMIN.to_string();
        assert!(user.is_admin());
    }
}
