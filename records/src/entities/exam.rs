#[cfg(test)]
#[path = "exam_test.rs"]
mod exam_test;

use serde::{Deserialize, Serialize};

use super::{opt_cell, ref_cell};
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError, id_text, number_text};
use crate::{Endpoint, Record, RefKind};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub course: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub total_marks: Option<f64>,
}

impl Record for Exam {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/exams/",
        page: "/exams",
        title: "Exams",
    };
    const COLUMNS: &'static [&'static str] = &["Name", "Course", "Date", "Total marks"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.date)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            ref_cell(self.course),
            self.date.clone(),
            self.total_marks.map_or_else(|| "-".to_owned(), |marks| marks.to_string()),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.date.as_str()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamField {
    Name,
    Course,
    Date,
    TotalMarks,
}

impl FormField for ExamField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec { name: "name", label: "Name", input: Input::Text },
            Self::Course => FieldSpec { name: "course", label: "Course", input: Input::Reference(RefKind::Course) },
            Self::Date => FieldSpec { name: "date", label: "Date", input: Input::Date },
            Self::TotalMarks => FieldSpec { name: "totalMarks", label: "Total marks", input: Input::Number },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExamDraft {
    pub id: Option<i64>,
    pub name: String,
    pub course: String,
    pub date: String,
    pub total_marks: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamPayload {
    pub name: String,
    pub course: i64,
    pub date: String,
    pub total_marks: Option<f64>,
}

impl Draft for ExamDraft {
    type Field = ExamField;
    type Record = Exam;
    type Payload = ExamPayload;

    const FIELDS: &'static [ExamField] = &[ExamField::Name, ExamField::Course, ExamField::Date, ExamField::TotalMarks];
    const REQUIRED: &'static [ExamField] = &[ExamField::Name, ExamField::Course, ExamField::Date];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: ExamField) -> &str {
        match field {
            ExamField::Name => &self.name,
            ExamField::Course => &self.course,
            ExamField::Date => &self.date,
            ExamField::TotalMarks => &self.total_marks,
        }
    }

    fn set_field(&mut self, field: ExamField, value: String) {
        match field {
            ExamField::Name => self.name = value,
            ExamField::Course => self.course = value,
            ExamField::Date => self.date = value,
            ExamField::TotalMarks => self.total_marks = value,
        }
    }

    fn from_record(record: &Exam) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            course: id_text(record.course),
            date: record.date.clone(),
            total_marks: number_text(record.total_marks),
        }
    }

    fn to_payload(&self) -> Result<ExamPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = ExamPayload {
            name: c.required_text("Name", &self.name),
            course: c.id("Course", &self.course),
            date: c.date("Date", &self.date),
            total_marks: c.optional_number("Total marks", &self.total_marks),
        };
        c.finish(payload)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: i64,
    pub exam: i64,
    pub student: i64,
    pub score: f64,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Record for ExamResult {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/exam-results/",
        page: "/exam-results",
        title: "Exam results",
    };
    const COLUMNS: &'static [&'static str] = &["Exam", "Student", "Score", "Remarks"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("Result #{}", self.id)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            ref_cell(Some(self.exam)),
            ref_cell(Some(self.student)),
            self.score.to_string(),
            opt_cell(self.remarks.as_deref()),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.remarks.as_deref().unwrap_or_default()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamResultField {
    Exam,
    Student,
    Score,
    Remarks,
}

impl FormField for ExamResultField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Exam => FieldSpec { name: "exam", label: "Exam", input: Input::Reference(RefKind::Exam) },
            Self::Student => FieldSpec { name: "student", label: "Student", input: Input::Reference(RefKind::Student) },
            Self::Score => FieldSpec { name: "score", label: "Score", input: Input::Number },
            Self::Remarks => FieldSpec { name: "remarks", label: "Remarks", input: Input::Text },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExamResultDraft {
    pub id: Option<i64>,
    pub exam: String,
    pub student: String,
    pub score: String,
    pub remarks: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamResultPayload {
    pub exam: i64,
    pub student: i64,
    pub score: f64,
    pub remarks: Option<String>,
}

impl Draft for ExamResultDraft {
    type Field = ExamResultField;
    type Record = ExamResult;
    type Payload = ExamResultPayload;

    const FIELDS: &'static [ExamResultField] = &[
        ExamResultField::Exam,
        ExamResultField::Student,
        ExamResultField::Score,
        ExamResultField::Remarks,
    ];
    const REQUIRED: &'static [ExamResultField] =
        &[ExamResultField::Exam, ExamResultField::Student, ExamResultField::Score];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: ExamResultField) -> &str {
        match field {
            ExamResultField::Exam => &self.exam,
            ExamResultField::Student => &self.student,
            ExamResultField::Score => &self.score,
            ExamResultField::Remarks => &self.remarks,
        }
    }

    fn set_field(&mut self, field: ExamResultField, value: String) {
        match field {
            ExamResultField::Exam => self.exam = value,
            ExamResultField::Student => self.student = value,
            ExamResultField::Score => self.score = value,
            ExamResultField::Remarks => self.remarks = value,
        }
    }

    fn from_record(record: &ExamResult) -> Self {
        Self {
            id: Some(record.id),
            exam: record.exam.to_string(),
            student: record.student.to_string(),
            score: record.score.to_string(),
            remarks: record.remarks.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<ExamResultPayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = ExamResultPayload {
            exam: c.id("Exam", &self.exam),
            student: c.id("Student", &self.student),
            score: c.number("Score", &self.score),
            remarks: c.optional_text(&self.remarks),
        };
        c.finish(payload)
    }
}
