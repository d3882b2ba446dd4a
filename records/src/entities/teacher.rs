#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use serde::{Deserialize, Serialize};

use super::opt_cell;
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError};
use crate::{Endpoint, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

impl Teacher {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

impl Record for Teacher {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/auth/teacher/",
        page: "/teachers",
        title: "Teachers",
    };
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Phone", "Subject"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.full_name()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.email.clone(),
            opt_cell(self.phone.as_deref()),
            opt_cell(self.subject.as_deref()),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.subject.as_deref().unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeacherField {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
}

impl FormField for TeacherField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::FirstName => FieldSpec { name: "firstName", label: "First name", input: Input::Text },
            Self::LastName => FieldSpec { name: "lastName", label: "Last name", input: Input::Text },
            Self::Email => FieldSpec { name: "email", label: "Email", input: Input::Email },
            Self::Phone => FieldSpec { name: "phone", label: "Phone", input: Input::Text },
            Self::Subject => FieldSpec { name: "subject", label: "Subject", input: Input::Text },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeacherDraft {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeacherPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
}

impl Draft for TeacherDraft {
    type Field = TeacherField;
    type Record = Teacher;
    type Payload = TeacherPayload;

    const FIELDS: &'static [TeacherField] = &[
        TeacherField::FirstName,
        TeacherField::LastName,
        TeacherField::Email,
        TeacherField::Phone,
        TeacherField::Subject,
    ];
    const REQUIRED: &'static [TeacherField] = &[TeacherField::FirstName, TeacherField::LastName, TeacherField::Email];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: TeacherField) -> &str {
        match field {
            TeacherField::FirstName => &self.first_name,
            TeacherField::LastName => &self.last_name,
            TeacherField::Email => &self.email,
            TeacherField::Phone => &self.phone,
            TeacherField::Subject => &self.subject,
        }
    }

    fn set_field(&mut self, field: TeacherField, value: String) {
        match field {
            TeacherField::FirstName => self.first_name = value,
            TeacherField::LastName => self.last_name = value,
            TeacherField::Email => self.email = value,
            TeacherField::Phone => self.phone = value,
            TeacherField::Subject => self.subject = value,
        }
    }

    fn from_record(record: &Teacher) -> Self {
        Self {
            id: Some(record.id),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            subject: record.subject.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<TeacherPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = TeacherPayload {
            first_name: c.required_text("First name", &self.first_name),
            last_name: c.required_text("Last name", &self.last_name),
            email: c.required_text("Email", &self.email),
            phone: c.optional_text(&self.phone),
            subject: c.optional_text(&self.subject),
        };
        c.finish(payload)
    }
}
