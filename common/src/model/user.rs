use serde::{Deserialize, Serialize};

/// A registered person: student, seminarist or administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(default, alias = "groupID")]
    pub group_id: Option<i64>,
    #[serde(default, alias = "isApproved")]
    pub is_approved: bool,
    #[serde(default, alias = "roleID")]
    pub role_id: i64,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from_role_id(&self.role_id.to_string())
    }

    /// "Last First Patronymic", skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.patronymic]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "Last F.P." as printed in the gradebook.
    pub fn short_name(&self) -> String {
        let initial = |s: &str| s.chars().next().map(|c| format!("{}.", c)).unwrap_or_default();
        format!(
            "{} {}{}",
            self.last_name,
            initial(&self.first_name),
            initial(&self.patronymic)
        )
    }
}

/// Access level derived from the numeric role id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Seminarist,
    Student,
    /// Any id outside the fixed lookup, including users still pending approval.
    #[default]
    Unrecognized,
}

impl Role {
    /// Fixed lookup: `"3"` admin, `"2"` seminarist, `"1"` student.
    pub fn from_role_id(id: &str) -> Role {
        match id.trim() {
            "3" => Role::Admin,
            "2" => Role::Seminarist,
            "1" => Role::Student,
            _ => Role::Unrecognized,
        }
    }

    /// Role string used by the pages; empty for [`Role::Unrecognized`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Seminarist => "seminarist",
            Role::Student => "student",
            Role::Unrecognized => "",
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Seminarist)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub group_id: Option<i64>,
    pub role: String,
}

/// Token pair issued by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_lookup_is_fixed() {
        assert_eq!(Role::from_role_id("3"), Role::Admin);
        assert_eq!(Role::from_role_id("2"), Role::Seminarist);
        assert_eq!(Role::from_role_id("1"), Role::Student);
        assert_eq!(Role::from_role_id("0"), Role::Unrecognized);
        assert_eq!(Role::from_role_id("admin"), Role::Unrecognized);
        assert_eq!(Role::Unrecognized.as_str(), "");
    }

    #[test]
    fn accepts_camel_case_profile() {
        let user: User = serde_json::from_str(
            r#"{"id":5,"email":"a@b.ru","firstName":"Иван","lastName":"Иванов",
                "patronymic":"Иванович","groupID":2,"isApproved":true,"roleID":1}"#,
        )
        .unwrap();
        assert_eq!(user.role(), Role::Student);
        assert_eq!(user.group_id, Some(2));
        assert_eq!(user.short_name(), "Иванов И.И.");
        assert_eq!(user.full_name(), "Иванов Иван Иванович");
    }
}
