#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use serde::{Deserialize, Serialize};

use super::ref_cell;
use crate::draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError};
use crate::{Endpoint, Record, RefKind};

pub const ATTENDANCE_STATUSES: &[&str] = &["present", "absent", "late", "excused"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub student: i64,
    pub class_instance: i64,
    pub date: String,
    pub status: String,
}

impl Record for Attendance {
    const ENDPOINT: Endpoint = Endpoint {
        collection: "/api/academics/attendances/",
        page: "/attendance",
        title: "Attendance",
    };
    const COLUMNS: &'static [&'static str] = &["Date", "Student", "Class", "Status"];

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} {}", self.date, self.status)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            ref_cell(Some(self.student)),
            ref_cell(Some(self.class_instance)),
            self.status.clone(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.date.as_str(), self.status.as_str()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttendanceField {
    Student,
    ClassInstance,
    Date,
    Status,
}

impl FormField for AttendanceField {
    fn spec(self) -> FieldSpec {
        match self {
            Self::Student => FieldSpec { name: "student", label: "Student", input: Input::Reference(RefKind::Student) },
            Self::ClassInstance => FieldSpec {
                name: "classInstance",
                label: "Class",
                input: Input::Reference(RefKind::Classroom),
            },
            Self::Date => FieldSpec { name: "date", label: "Date", input: Input::Date },
            Self::Status => FieldSpec { name: "status", label: "Status", input: Input::Choice(ATTENDANCE_STATUSES) },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub id: Option<i64>,
    pub student: String,
    pub class_instance: String,
    pub date: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendancePayload {
    pub student: i64,
    pub class_instance: i64,
    pub date: String,
    pub status: String,
}

impl Draft for AttendanceDraft {
    type Field = AttendanceField;
    type Record = Attendance;
    type Payload = AttendancePayload;

    const FIELDS: &'static [AttendanceField] = &[
        AttendanceField::Student,
        AttendanceField::ClassInstance,
        AttendanceField::Date,
        AttendanceField::Status,
    ];
    const REQUIRED: &'static [AttendanceField] = &[
        AttendanceField::Student,
        AttendanceField::ClassInstance,
        AttendanceField::Date,
        AttendanceField::Status,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn value(&self, field: AttendanceField) -> &str {
        match field {
            AttendanceField::Student => &self.student,
            AttendanceField::ClassInstance => &self.class_instance,
            AttendanceField::Date => &self.date,
            AttendanceField::Status => &self.status,
        }
    }

    fn set_field(&mut self, field: AttendanceField, value: String) {
        match field {
            AttendanceField::Student => self.student = value,
            AttendanceField::ClassInstance => self.class_instance = value,
            AttendanceField::Date => self.date = value,
            AttendanceField::Status => self.status = value,
        }
    }

    fn from_record(record: &Attendance) -> Self {
        Self {
            id: Some(record.id),
            student: record.student.to_string(),
            class_instance: record.class_instance.to_string(),
            date: record.date.clone(),
            status: record.status.clone(),
        }
    }

    fn to_payload(&self) -> Result<AttendancePayload, ValidationError> {
        let mut c = Coercer::new();
        let payload = AttendancePayload {
            student: c.id("Student", &self.student),
            class_instance: c.id("Class", &self.class_instance),
            date: c.date("Date", &self.date),
            status: c.choice("Status", &self.status, ATTENDANCE_STATUSES),
        };
        c.finish(payload)
    }
}
