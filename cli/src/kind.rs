//! The collections the CLI can address, named like their admin pages.

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

use clap::ValueEnum;
use records::{
    Attendance, Branch, Classroom, Course, Endpoint, Enrollment, Exam, ExamResult, Program, Record, Role, School,
    Student, Teacher, User,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Students,
    Teachers,
    Classrooms,
    Courses,
    Programs,
    Exams,
    ExamResults,
    Enrollments,
    Attendance,
    Schools,
    Branches,
    Users,
    Roles,
}

impl Kind {
    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Students => Student::ENDPOINT,
            Self::Teachers => Teacher::ENDPOINT,
            Self::Classrooms => Classroom::ENDPOINT,
            Self::Courses => Course::ENDPOINT,
            Self::Programs => Program::ENDPOINT,
            Self::Exams => Exam::ENDPOINT,
            Self::ExamResults => ExamResult::ENDPOINT,
            Self::Enrollments => Enrollment::ENDPOINT,
            Self::Attendance => Attendance::ENDPOINT,
            Self::Schools => School::ENDPOINT,
            Self::Branches => Branch::ENDPOINT,
            Self::Users => User::ENDPOINT,
            Self::Roles => Role::ENDPOINT,
        }
    }
}

/// Run `$body` with `$record` and `$draft` bound to the kind's record and
/// draft types.
#[macro_export]
macro_rules! with_kind {
    ($kind:expr, |$record:ident, $draft:ident| $body:expr) => {
        match $kind {
            $crate::kind::Kind::Students => {
                #[allow(dead_code)]
                type $record = records::Student;
                #[allow(dead_code)]
                type $draft = records::StudentDraft;
                $body
            }
            $crate::kind::Kind::Teachers => {
                #[allow(dead_code)]
                type $record = records::Teacher;
                #[allow(dead_code)]
                type $draft = records::TeacherDraft;
                $body
            }
            $crate::kind::Kind::Classrooms => {
                #[allow(dead_code)]
                type $record = records::Classroom;
                #[allow(dead_code)]
                type $draft = records::ClassroomDraft;
                $body
            }
            $crate::kind::Kind::Courses => {
                #[allow(dead_code)]
                type $record = records::Course;
                #[allow(dead_code)]
                type $draft = records::CourseDraft;
                $body
            }
            $crate::kind::Kind::Programs => {
                #[allow(dead_code)]
                type $record = records::Program;
                #[allow(dead_code)]
                type $draft = records::ProgramDraft;
                $body
            }
            $crate::kind::Kind::Exams => {
                #[allow(dead_code)]
                type $record = records::Exam;
                #[allow(dead_code)]
                type $draft = records::ExamDraft;
                $body
            }
            $crate::kind::Kind::ExamResults => {
                #[allow(dead_code)]
                type $record = records::ExamResult;
                #[allow(dead_code)]
                type $draft = records::ExamResultDraft;
                $body
            }
            $crate::kind::Kind::Enrollments => {
                #[allow(dead_code)]
                type $record = records::Enrollment;
                #[allow(dead_code)]
                type $draft = records::EnrollmentDraft;
                $body
            }
            $crate::kind::Kind::Attendance => {
                #[allow(dead_code)]
                type $record = records::Attendance;
                #[allow(dead_code)]
                type $draft = records::AttendanceDraft;
                $body
            }
            $crate::kind::Kind::Schools => {
                #[allow(dead_code)]
                type $record = records::School;
                #[allow(dead_code)]
                type $draft = records::SchoolDraft;
                $body
            }
            $crate::kind::Kind::Branches => {
                #[allow(dead_code)]
                type $record = records::Branch;
                #[allow(dead_code)]
                type $draft = records::BranchDraft;
                $body
            }
            $crate::kind::Kind::Users => {
                #[allow(dead_code)]
                type $record = records::User;
                #[allow(dead_code)]
                type $draft = records::UserDraft;
                $body
            }
            $crate::kind::Kind::Roles => {
                #[allow(dead_code)]
                type $record = records::Role;
                #[allow(dead_code)]
                type $draft = records::RoleDraft;
                $body
            }
        }
    };
}
