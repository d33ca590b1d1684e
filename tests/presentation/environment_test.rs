use parlance::presentation::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_maps_variants() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("Development".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("TEST".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_appsettings_prefix() {
    assert_eq!(Environment::Local.settings_file(), "appsettings.Local");
    assert_eq!(Environment::Prod.settings_file(), "appsettings.Prod");
    assert_eq!(Environment::Test.to_string(), "Test");
}
