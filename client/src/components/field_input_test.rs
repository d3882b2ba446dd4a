use super::*;
use records::RefKind;

#[test]
fn plain_inputs_map_to_html_types() {
    assert_eq!(html_input_type(Input::Text), "text");
    assert_eq!(html_input_type(Input::Email), "email");
    assert_eq!(html_input_type(Input::Date), "date");
    assert_eq!(html_input_type(Input::Number), "number");
    assert_eq!(html_input_type(Input::Reference(RefKind::School)), "text");
}

#[test]
fn choice_label_capitalizes_first_letter() {
    assert_eq!(choice_label("late"), "Late");
    assert_eq!(choice_label("excused"), "Excused");
    assert_eq!(choice_label(""), "");
}
