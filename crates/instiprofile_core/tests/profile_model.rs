use instiprofile_core::{
    ContactNumber, Degree, Department, Hostel, InstituteAddress, OutOfRangeKind, Program,
    RecordValidationError, SecondaryEmail, SentMessage,
};
use uuid::Uuid;

#[test]
fn address_display_combines_hostel_and_room() {
    let mut address = InstituteAddress::new(Uuid::new_v4());
    assert_eq!(address.to_string(), "");

    address.room = Some("A-214".to_string());
    assert_eq!(address.to_string(), "", "room alone is not displayed");

    address.hostel = Some(Hostel::H10A);
    assert_eq!(address.to_string(), "10A-A-214");

    address.room = Some(String::new());
    assert_eq!(address.to_string(), "10A", "empty room drops the separator");

    address.room = None;
    address.hostel = Some(Hostel::Tansa);
    assert_eq!(address.to_string(), "tansa");
}

#[test]
fn address_rejects_long_room_labels() {
    let mut address = InstituteAddress::new(Uuid::new_v4());
    address.room = Some("12345678".to_string());
    assert!(address.validate().is_ok());

    address.room = Some("123456789".to_string());
    assert_eq!(
        address.validate().unwrap_err(),
        RecordValidationError::FieldTooLong {
            field: "room",
            max_chars: 8,
            actual_chars: 9,
        }
    );
}

#[test]
fn program_display_uses_codes() {
    let mut program = Program::new(Uuid::new_v4(), Degree::Btech);
    assert_eq!(program.to_string(), "BTECH");

    program.department = Some(Department::Cse);
    assert_eq!(program.to_string(), "BTECH, CSE");
}

#[test]
fn program_checks_each_year_independently() {
    let mut program = Program::new(Uuid::new_v4(), Degree::Dd);
    program.join_year = Some(2020);
    program.graduation_year = Some(2025);
    assert!(program.validate(2024).is_ok());

    program.graduation_year = Some(2031);
    match program.validate(2024).unwrap_err() {
        RecordValidationError::OutOfRange(err) => {
            assert_eq!(err.kind, OutOfRangeKind::BeyondGraduationHorizon)
        }
        other => panic!("unexpected error: {other}"),
    }

    program.graduation_year = None;
    program.join_year = Some(1957);
    match program.validate(2024).unwrap_err() {
        RecordValidationError::OutOfRange(err) => {
            assert_eq!(err.kind, OutOfRangeKind::BeforeFounding)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn program_allows_graduation_before_join() {
    let mut program = Program::new(Uuid::new_v4(), Degree::Phd);
    program.join_year = Some(2022);
    program.graduation_year = Some(2010);
    assert!(program.validate(2024).is_ok());
}

#[test]
fn program_serializes_codes() {
    let account_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut program = Program::new(account_id, Degree::MtechPhdDual);
    program.department = Some(Department::Ixd);
    program.join_year = Some(2021);

    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["account_id"], account_id.to_string());
    assert_eq!(json["degree"], "MtechPhDDD");
    assert_eq!(json["department"], "IxD");
    assert_eq!(json["join_year"], 2021);
    assert!(json["graduation_year"].is_null());

    let decoded: Program = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, program);
}

#[test]
fn unknown_codes_fail_to_deserialize() {
    let err = serde_json::from_value::<Hostel>(serde_json::json!("17")).unwrap_err();
    assert!(err.to_string().contains("unknown variant"));
}

#[test]
fn department_choices_are_sorted_by_label() {
    let choices = Department::choices_by_label();
    assert_eq!(choices.len(), Department::all().len());
    assert_eq!(choices.first(), Some(&Department::Ae));
    assert!(choices
        .windows(2)
        .all(|pair| pair[0].label() <= pair[1].label()));
}

#[test]
fn contact_number_must_be_present_and_short() {
    let account_id = Uuid::new_v4();
    assert!(ContactNumber::new(account_id, "+91 22 2572 2545")
        .validate()
        .is_ok());

    assert_eq!(
        ContactNumber::new(account_id, "   ").validate().unwrap_err(),
        RecordValidationError::EmptyField("number")
    );
    assert!(matches!(
        ContactNumber::new(account_id, "+91 22 2572 25450").validate(),
        Err(RecordValidationError::FieldTooLong { field: "number", .. })
    ));
}

#[test]
fn secondary_email_requires_valid_address() {
    let account_id = Uuid::new_v4();
    assert!(SecondaryEmail::new(account_id, "alumni@example.org")
        .validate()
        .is_ok());
    assert_eq!(
        SecondaryEmail::new(account_id, "not an email")
            .validate()
            .unwrap_err(),
        RecordValidationError::InvalidEmail
    );
}

#[test]
fn records_reject_nil_owner() {
    let err = ContactNumber::new(Uuid::nil(), "12345").validate().unwrap_err();
    assert_eq!(err, RecordValidationError::NilId("account_id"));
}

#[test]
fn sent_message_defaults_to_success() {
    let message = SentMessage::new(Uuid::new_v4(), Uuid::new_v4(), "msg-1", 1_700_000_000_000);
    assert!(message.status);
    assert_eq!(message.error_message, None);
    assert_eq!(message.to_string(), "msg-1");

    let failed = message.failed("mailbox full");
    assert!(!failed.status);
    assert_eq!(failed.error_message.as_deref(), Some("mailbox full"));
    assert_eq!(failed.created_at, 1_700_000_000_000);
}

#[test]
fn sent_message_id_is_bounded() {
    let long_id = "m".repeat(257);
    let message = SentMessage::new(Uuid::new_v4(), Uuid::new_v4(), long_id, 0);
    assert!(matches!(
        message.validate(),
        Err(RecordValidationError::FieldTooLong {
            field: "message_id",
            max_chars: 256,
            actual_chars: 257,
        })
    ));
}
