//! Accounts, roles and the login exchange.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Deserializer, Serialize};

use super::{opt_cell, ref_cell};
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError, id_text};
use crate::{Endpoint, Record, RefKind};

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Reply from `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// The backend sends this as a number on some deployments and a string on others.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<i64>,
}

impl User {
    /// Full name when present, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

impl Record for User {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/auth/user/",
        page: "/users",
        title: "Users",
    };
    const COLUMNS: &'static [&'static str] = &["Username", "Name", "Email", "Role"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.username.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.display_name(),
            opt_cell(self.email.as_deref()),
            ref_cell(self.role),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.username.as_str(),
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    Username,
    Email,
    FirstName,
    LastName,
    Role,
}

impl FormField for UserField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Username => FieldSpec { name: "username", label: "Username", input: Input::Text },
            Self::Email => FieldSpec { name: "email", label: "Email", input: Input::Email },
            Self::FirstName => FieldSpec { name: "firstName", label: "First name", input: Input::Text },
            Self::LastName => FieldSpec { name: "lastName", label: "Last name", input: Input::Text },
            Self::Role => FieldSpec { name: "role", label: "Role", input: Input::Reference(RefKind::Role) },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<i64>,
}

impl Draft for UserDraft {
    type Field = UserField;
    type Record = User;
    type Payload = UserPayload;

    const FIELDS: &'static [UserField] = &[
        UserField::Username,
        UserField::Email,
        UserField::FirstName,
        UserField::LastName,
        UserField::Role,
    ];
    const REQUIRED: &'static [UserField] = &[UserField::Username, UserField::Email];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: UserField) -> &str {
        match field {
            UserField::Username => &self.username,
            UserField::Email => &self.email,
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Role => &self.role,
        }
    }

    fn set_field(&mut self, field: UserField, value: String) {
        match field {
            UserField::Username => self.username = value,
            UserField::Email => self.email = value,
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::Role => self.role = value,
        }
    }

    fn from_record(record: &User) -> Self {
        Self {
            id: Some(record.id),
            username: record.username.clone(),
            email: record.email.clone().unwrap_or_default(),
            first_name: record.first_name.clone().unwrap_or_default(),
            last_name: record.last_name.clone().unwrap_or_default(),
            role: id_text(record.role),
        }
    }

    fn to_payload(&self) -> Result<UserPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = UserPayload {
            username: c.required_text("Username", &self.username),
            email: c.required_text("Email", &self.email),
            first_name: c.optional_text(&self.first_name),
            last_name: c.optional_text(&self.last_name),
            role: c.optional_id("Role", &self.role),
        };
        c.finish(payload)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

impl Record for Role {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/auth/roles/",
        page: "/roles",
        title: "Roles",
    };
    const COLUMNS: &'static [&'static str] = &["Name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleField {
    Name,
}

impl FormField for RoleField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec { name: "name", label: "Name", input: Input::Text },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleDraft {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RolePayload {
    pub name: String,
}

impl Draft for RoleDraft {
    type Field = RoleField;
    type Record = Role;
    type Payload = RolePayload;

    const FIELDS: &'static [RoleField] = &[RoleField::Name];
    const REQUIRED: &'static [RoleField] = &[RoleField::Name];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: RoleField) -> &str {
        match field {
            RoleField::Name => &self.name,
        }
    }

    fn set_field(&mut self, field: RoleField, value: String) {
        match field {
            RoleField::Name => self.name = value,
        }
    }

    fn from_record(record: &Role) -> Self {
        Self { id: Some(record.id), name: record.name.clone() }
    }

    fn to_payload(&self) -> Result<RolePayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = RolePayload { name: c.required_text("Name", &self.name) };
        c.finish(payload)
    }
}
