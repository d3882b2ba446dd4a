#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use serde::{Deserialize, Serialize};

use super::{opt_cell, ref_cell};
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError, id_text};
use crate::{Endpoint, Record, RefKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub classroom: Option<i64>,
}

impl Student {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

impl Record for Student {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/students/",
        page: "/students",
        title: "Students",
    };
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Date of birth", "Classroom"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.full_name()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name(),
            opt_cell(self.email.as_deref()),
            opt_cell(self.date_of_birth.as_deref()),
            ref_cell(self.classroom),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.first_name.as_str(), self.last_name.as_str(), self.email.as_deref().unwrap_or_default()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    Classroom,
}

impl FormField for StudentField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::FirstName => FieldSpec { name: "firstName", label: "First name", input: Input::Text },
            Self::LastName => FieldSpec { name: "lastName", label: "Last name", input: Input::Text },
            Self::Email => FieldSpec { name: "email", label: "Email", input: Input::Email },
            Self::DateOfBirth => FieldSpec { name: "dateOfBirth", label: "Date of birth", input: Input::Date },
            Self::Classroom => FieldSpec {
                name: "classroom",
                label: "Classroom",
                input: Input::Reference(RefKind::Classroom),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub classroom: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub classroom: Option<i64>,
}

impl Draft for StudentDraft {
    type Field = StudentField;
    type Record = Student;
    type Payload = StudentPayload;

    const FIELDS: &'static [StudentField] = &[
        StudentField::FirstName,
        StudentField::LastName,
        StudentField::Email,
        StudentField::DateOfBirth,
        StudentField::Classroom,
    ];
    const REQUIRED: &'static [StudentField] = &[StudentField::FirstName, StudentField::LastName];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::FirstName => &self.first_name,
            StudentField::LastName => &self.last_name,
            StudentField::Email => &self.email,
            StudentField::DateOfBirth => &self.date_of_birth,
            StudentField::Classroom => &self.classroom,
        }
    }

    fn set_field(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::FirstName => self.first_name = value,
            StudentField::LastName => self.last_name = value,
            StudentField::Email => self.email = value,
            StudentField::DateOfBirth => self.date_of_birth = value,
            StudentField::Classroom => self.classroom = value,
        }
    }

    fn from_record(record: &Student) -> Self {
        Self {
            id: Some(record.id),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone().unwrap_or_default(),
            date_of_birth: record.date_of_birth.clone().unwrap_or_default(),
            classroom: id_text(record.classroom),
        }
    }

    fn to_payload(&self) -> Result<StudentPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = StudentPayload {
            first_name: c.required_text("First name", &self.first_name),
            last_name: c.required_text("Last name", &self.last_name),
            email: c.optional_text(&self.email),
            date_of_birth: c.optional_date("Date of birth", &self.date_of_birth),
            classroom: c.optional_id("Classroom", &self.classroom),
        };
        c.finish(payload)
    }
}
