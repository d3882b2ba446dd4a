#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use serde::{Deserialize, Serialize};

use super::{opt_cell, ref_cell};
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError, id_text};
use crate::{Endpoint, Record, RefKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub program: Option<i64>,
}

impl Record for Course {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/courses/",
        page: "/courses",
        title: "Courses",
    };
    const COLUMNS: &'static [&'static str] = &["Code", "Name", "Program", "Description"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} {}", self.code, self.name)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            ref_cell(self.program),
            opt_cell(self.description.as_deref()),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseField {
    Name,
    Code,
    Description,
    Program,
}

impl FormField for CourseField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec { name: "name", label: "Name", input: Input::Text },
            Self::Code => FieldSpec { name: "code", label: "Code", input: Input::Text },
            Self::Description => FieldSpec { name: "description", label: "Description", input: Input::Text },
            Self::Program => FieldSpec {
                name: "program",
                label: "Program",
                input: Input::Reference(RefKind::Program),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
    pub description: String,
    pub program: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoursePayload {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub program: Option<i64>,
}

impl Draft for CourseDraft {
    type Field = CourseField;
    type Record = Course;
    type Payload = CoursePayload;

    const FIELDS: &'static [CourseField] =
        &[CourseField::Code, CourseField::Name, CourseField::Description, CourseField::Program];
    const REQUIRED: &'static [CourseField] = &[CourseField::Code, CourseField::Name];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: CourseField) -> &str {
        match field {
            CourseField::Name => &self.name,
            CourseField::Code => &self.code,
            CourseField::Description => &self.description,
            CourseField::Program => &self.program,
        }
    }

    fn set_field(&mut self, field: CourseField, value: String) {
        match field {
            CourseField::Name => self.name = value,
            CourseField::Code => self.code = value,
            CourseField::Description => self.description = value,
            CourseField::Program => self.program = value,
        }
    }

    fn from_record(record: &Course) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            code: record.code.clone(),
            description: record.description.clone().unwrap_or_default(),
            program: id_text(record.program),
        }
    }

    fn to_payload(&self) -> Result<CoursePayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = CoursePayload {
            name: c.required_text("Name", &self.name),
            code: c.required_text("Code", &self.code),
            description: c.optional_text(&self.description),
            program: c.optional_id("Program", &self.program),
        };
        c.finish(payload)
    }
}
