use super::*;

#[test]
fn segments_drop_the_leading_slash() {
    assert_eq!(segment::<Student>().0, "students");
    assert_eq!(segment::<ExamResult>().0, "exam-results");
    assert_eq!(segment::<Attendance>().0, "attendance");
}
