#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;

use serde::{Deserialize, Serialize};

use super::{opt_cell, ref_cell};
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError};
use crate::{Endpoint, Record, RefKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student: i64,
    pub course: i64,
    #[serde(default)]
    pub enrolled_on: Option<String>,
}

impl Record for Enrollment {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/enrollments/",
        page: "/enrollments",
        title: "Enrollments",
    };
    const COLUMNS: &'static [&'static str] = &["Student", "Course", "Enrolled on"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("Enrollment #{}", self.id)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            ref_cell(Some(self.student)),
            ref_cell(Some(self.course)),
            opt_cell(self.enrolled_on.as_deref()),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.enrolled_on.as_deref().unwrap_or_default()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentField {
    Student,
    Course,
    EnrolledOn,
}

impl FormField for EnrollmentField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Student => FieldSpec { name: "student", label: "Student", input: Input::Reference(RefKind::Student) },
            Self::Course => FieldSpec { name: "course", label: "Course", input: Input::Reference(RefKind::Course) },
            Self::EnrolledOn => FieldSpec { name: "enrolledOn", label: "Enrolled on", input: Input::Date },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrollmentDraft {
    pub id: Option<i64>,
    pub student: String,
    pub course: String,
    pub enrolled_on: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrollmentPayload {
    pub student: i64,
    pub course: i64,
    pub enrolled_on: Option<String>,
}

impl Draft for EnrollmentDraft {
    type Field = EnrollmentField;
    type Record = Enrollment;
    type Payload = EnrollmentPayload;

    const FIELDS: &'static [EnrollmentField] =
        &[EnrollmentField::Student, EnrollmentField::Course, EnrollmentField::EnrolledOn];
    const REQUIRED: &'static [EnrollmentField] = &[EnrollmentField::Student, EnrollmentField::Course];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: EnrollmentField) -> &str {
        match field {
            EnrollmentField::Student => &self.student,
            EnrollmentField::Course => &self.course,
            EnrollmentField::EnrolledOn => &self.enrolled_on,
        }
    }

    fn set_field(&mut self, field: EnrollmentField, value: String) {
        match field {
            EnrollmentField::Student => self.student = value,
            EnrollmentField::Course => self.course = value,
            EnrollmentField::EnrolledOn => self.enrolled_on = value,
        }
    }

    fn from_record(record: &Enrollment) -> Self {
        Self {
            id: Some(record.id),
            student: record.student.to_string(),
            course: record.course.to_string(),
            enrolled_on: record.enrolled_on.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<EnrollmentPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = EnrollmentPayload {
            student: c.id("Student", &self.student),
            course: c.id("Course", &self.course),
            enrolled_on: c.optional_date("Enrolled on", &self.enrolled_on),
        };
        c.finish(payload)
    }
}
