use contact_form::{ContactForm, Field, Role};

fn type_label(form: &mut ContactForm, label: &str, text: &str) {
    assert!(form.view().by_label(label).is_some(), "no input labelled {label:?}");
    let field = Field::ALL
        .into_iter()
        .find(|field| field.label() == label)
        .unwrap_or_else(|| panic!("no field labelled {label:?}"));
    form.type_text(field, text);

    let view = form.view();
    let value = view.by_label(label).map(|node| node.value()).unwrap_or_default();
    assert!(value.ends_with(text), "{label:?} holds {value:?}");
}

fn click_submit(form: &mut ContactForm) {
    assert_eq!(form.view().by_role(Role::Button).len(), 1);
    form.submit();
}

#[test]
fn renders_without_errors() {
    let form = ContactForm::new();
    assert!(form.view().all_by_test_id("error").is_empty());
}

#[test]
fn renders_the_contact_form_header() {
    let form = ContactForm::new();
    let view = form.view();
    let header = view.query_text("contact form").expect("header");
    assert_eq!(header.role, Role::Heading);
    assert_eq!(header.text, "Contact Form");
}

#[test]
fn one_error_for_short_first_name() {
    let mut form = ContactForm::new();
    type_label(&mut form, "First Name*", "asdf");
    assert_eq!(form.view().all_by_test_id("error").len(), 1);
}

#[test]
fn three_errors_for_empty_submit() {
    let mut form = ContactForm::new();
    click_submit(&mut form);
    assert_eq!(form.view().all_by_test_id("error").len(), 3);
}

#[test]
fn one_error_when_email_is_missing() {
    let mut form = ContactForm::new();
    type_label(&mut form, "First Name*", "Matthew");
    type_label(&mut form, "Last Name*", "Phillips");
    click_submit(&mut form);
    assert_eq!(form.view().all_by_test_id("error").len(), 1);
}

#[test]
fn invalid_email_message() {
    let mut form = ContactForm::new();
    type_label(&mut form, "Email*", "asdf");

    let view = form.view();
    let error = view.by_test_id("error").expect("single error");
    assert_eq!(error.text, "error: email must be a valid email address.");
}

#[test]
fn last_name_required_message() {
    let mut form = ContactForm::new();
    type_label(&mut form, "First Name*", "Matthew");
    type_label(&mut form, "Email*", "matt@matt.com");
    click_submit(&mut form);

    let view = form.view();
    let error = view.by_test_id("error").expect("single error");
    assert_eq!(error.text, "error: lastName is a required field.");
}

#[test]
fn submitted_values_without_message() {
    let mut form = ContactForm::new();
    type_label(&mut form, "First Name*", "Matthew");
    type_label(&mut form, "Last Name*", "Phillips");
    type_label(&mut form, "Email*", "matt@matt.com");
    click_submit(&mut form);

    let view = form.view();
    assert!(view.query_text("matthew").is_some());
    assert!(view.query_text("phillips").is_some());
    assert!(view.query_text("matt@matt.com").is_some());
    assert!(view.query_by_test_id("messageDisplay").is_none());
}

#[test]
fn submitted_values_with_message() {
    let mut form = ContactForm::new();
    type_label(&mut form, "First Name*", "Matthew");
    type_label(&mut form, "Last Name*", "Phillips");
    type_label(&mut form, "Email*", "matt@matt.com");
    type_label(&mut form, "Message", "test message");
    click_submit(&mut form);

    let view = form.view();
    assert!(view.query_text("matthew").is_some());
    assert!(view.query_text("phillips").is_some());
    assert!(view.query_text("matt@matt.com").is_some());
    let message = view.query_text("test message").expect("message display");
    assert_eq!(message.test_id, Some("messageDisplay"));
}

#[test]
fn fixing_an_error_removes_it() {
    let mut form = ContactForm::new();
    type_label(&mut form, "First Name*", "Matt");
    assert_eq!(form.view().all_by_test_id("error").len(), 1);
    type_label(&mut form, "First Name*", "hew");
    assert_eq!(form.value(Field::FirstName), "Matthew");
    assert!(form.view().all_by_test_id("error").is_empty());
}

#[test]
fn rejected_resubmit_keeps_previous_summary() {
    let mut form = ContactForm::new();
    type_label(&mut form, "First Name*", "Matthew");
    type_label(&mut form, "Last Name*", "Phillips");
    type_label(&mut form, "Email*", "matt@matt.com");
    click_submit(&mut form);

    type_label(&mut form, "Email*", "@");
    click_submit(&mut form);

    let view = form.view();
    let error = view.by_test_id("error").expect("single error");
    assert_eq!(error.text, "error: email must be a valid email address.");
    let email = view.query_by_test_id("emailDisplay").expect("email display");
    assert!(email.has_text("matt@matt.com"));
    assert!(view.query_by_test_id("firstnameDisplay").is_some());
    assert!(view.query_by_test_id("lastnameDisplay").is_some());
}
