//! Classrooms carry the one multi-select in the app: the student roster.

#[cfg(test)]
#[path = "classroom_test.rs"]
mod classroom_test;

use serde::{Deserialize, Serialize};

use super::ref_cell;
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError, id_text};
use crate::selection::LinkedSelection;
use crate::{Endpoint, Record, RefKind, Student};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub program: Option<i64>,
    #[serde(default)]
    pub teacher: Option<i64>,
    #[serde(default)]
    pub students: Vec<i64>,
}

impl Record for Classroom {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/classrooms/",
        page: "/classrooms",
        title: "Classrooms",
    };
    const COLUMNS: &'static [&'static str] = &["Name", "Program", "Teacher", "Students"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            ref_cell(self.program),
            ref_cell(self.teacher),
            self.students.len().to_string(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassroomField {
    Name,
    Program,
    Teacher,
}

impl FormField for ClassroomField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec { name: "name", label: "Name", input: Input::Text },
            Self::Program => FieldSpec {
                name: "program",
                label: "Program",
                input: Input::Reference(RefKind::Program),
            },
            Self::Teacher => FieldSpec {
                name: "teacher",
                label: "Teacher",
                input: Input::Reference(RefKind::Teacher),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassroomDraft {
    pub id: Option<i64>,
    pub name: String,
    pub program: String,
    pub teacher: String,
    pub students: LinkedSelection,
}

impl ClassroomDraft {
    /// Add a student to the roster; duplicates are ignored.
    pub fn add_student(&mut self, student: &Student) -> bool {
        self.students.add(student.id, student.full_name())
    }

    pub fn remove_student(&mut self, id: i64) -> bool {
        self.students.remove(id)
    }

    /// Replace placeholder roster names once the student list has loaded.
    pub fn resolve_student_names(&mut self, students: &[Student]) {
        for student in students {
            self.students.rename(student.id, student.full_name());
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassroomPayload {
    pub name: String,
    pub program: Option<i64>,
    pub teacher: Option<i64>,
    pub students: Vec<i64>,
}

impl Draft for ClassroomDraft {
    type Field = ClassroomField;
    type Record = Classroom;
    type Payload = ClassroomPayload;

    const FIELDS: &'static [ClassroomField] = &[ClassroomField::Name, ClassroomField::Program, ClassroomField::Teacher];
    const REQUIRED: &'static [ClassroomField] = &[ClassroomField::Name];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: ClassroomField) -> &str {
        match field {
            ClassroomField::Name => &self.name,
            ClassroomField::Program => &self.program,
            ClassroomField::Teacher => &self.teacher,
        }
    }

    fn set_field(&mut self, field: ClassroomField, value: String) {
        match field {
            ClassroomField::Name => self.name = value,
            ClassroomField::Program => self.program = value,
            ClassroomField::Teacher => self.teacher = value,
        }
    }

    /// Program and teacher changes, plus "Students" when anyone joins or
    /// leaves the roster. Reordering alone is not a change.
    fn ownership_changes(&self, original: &Self) -> Vec<&'static str> {
        let mut changes: Vec<&'static str> = Self::ownership_fields()
            .into_iter()
            .filter(|field| self.value(*field).trim() != original.value(*field).trim())
            .map(|field| field.spec().label)
            .collect();
        let mut now = self.students.ids().to_vec();
        let mut before = original.students.ids().to_vec();
        now.sort_unstable();
        before.sort_unstable();
        if now != before {
            changes.push("Students");
        }
        changes
    }

    fn from_record(record: &Classroom) -> Self {
        let mut students = LinkedSelection::new();
        for id in &record.students {
            students.add(*id, format!("Student #{id}"));
        }
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            program: id_text(record.program),
            teacher: id_text(record.teacher),
            students,
        }
    }

    fn to_payload(&self) -> Result<ClassroomPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = ClassroomPayload {
            name: c.required_text("Name", &self.name),
            program: c.optional_id("Program", &self.program),
            teacher: c.optional_id("Teacher", &self.teacher),
            students: self.students.ids().to_vec(),
        };
        c.finish(payload)
    }
}
