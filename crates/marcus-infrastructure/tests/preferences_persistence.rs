use marcus_core::i18n::Language;
use marcus_core::preferences::PreferenceRepository;
use marcus_infrastructure::{MarcusPaths, TomlPreferenceRepository};
use tempfile::TempDir;

#[test]
fn preferences_survive_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    let paths = MarcusPaths::new(Some(temp_dir.path())).unwrap();

    {
        let repo = TomlPreferenceRepository::new(&paths);
        repo.save_user_name("Cato").unwrap();
        repo.save_language(Language::English).unwrap();
    }

    let reopened = TomlPreferenceRepository::new(&paths);
    let preferences = reopened.load().unwrap();
    assert_eq!(preferences.stored_user_name(), Some("Cato"));
    assert_eq!(preferences.resolved_language(), Language::English);

    let raw = std::fs::read_to_string(paths.preferences_file()).unwrap();
    assert!(raw.contains("user_name = \"Cato\""));
    assert!(raw.contains("language = \"EN\""));
}

#[test]
fn fresh_install_starts_without_a_name() {
    let temp_dir = TempDir::new().unwrap();
    let paths = MarcusPaths::new(Some(temp_dir.path())).unwrap();

    let preferences = TomlPreferenceRepository::new(&paths).load().unwrap();
    assert!(preferences.stored_user_name().is_none());
    assert_eq!(preferences.resolved_language(), Language::Indonesian);
    assert!(!paths.preferences_file().exists());
}
