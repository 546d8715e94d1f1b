use sqlchat::presentation::config::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_case_is_ignored() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("TEST".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_fails() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_locating_settings_file_then_suffix_is_lowercase() {
    assert_eq!(Environment::Prod.file_suffix(), "prod");
    assert_eq!(Environment::Local.to_string(), "Local");
}
