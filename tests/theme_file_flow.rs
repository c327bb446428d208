use std::fs;
use std::path::PathBuf;

use m3_theme_editor::color::{lighten, HexColor};
use m3_theme_editor::storage::{FileStorage, THEME_STORAGE_KEY};
use m3_theme_editor::sync::{CssVariableSync, DARK_VIEW_SCOPE, LIGHT_SCOPE};
use m3_theme_editor::theme::{
    ColorToken, Preset, ThemeError, ThemeScope, ThemeStore, TokenKey, EXPORT_FILE_NAME,
};

fn fixture_root(label: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    let pid = std::process::id();
    std::env::temp_dir().join(format!("m3-theme-{label}-{pid}-{nanos}"))
}

fn hex(value: &str) -> HexColor {
    HexColor::parse(value).unwrap()
}

#[test]
fn committed_theme_survives_a_restart() {
    let root = fixture_root("restart");

    let mut first = ThemeStore::new(FileStorage::with_dir(root.clone()), CssVariableSync::default());
    first.apply_preset("orange");
    assert!(first.commit_token(ColorToken::Primary, "#112233"));
    assert!(root.join(format!("{THEME_STORAGE_KEY}.json")).exists());

    let mut second = ThemeStore::new(FileStorage::with_dir(root.clone()), CssVariableSync::default());
    assert!(second.load_saved_theme());

    let mut expected = Preset::Orange.mapping();
    expected.set(ColorToken::Primary.into(), hex("#112233"));
    assert_eq!(second.light(), &expected);

    let key = TokenKey::from(ColorToken::Primary);
    assert_eq!(
        second.sync().variable(DARK_VIEW_SCOPE, &key),
        Some(lighten(hex("#112233"), 60.0))
    );
    assert_eq!(second.sync().variable(LIGHT_SCOPE, &key), Some(hex("#112233")));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn exported_file_imports_into_a_fresh_store() {
    let root = fixture_root("export");
    let storage_dir = root.join("state");
    let export_dir = root.join("exports");

    let mut source = ThemeStore::new(FileStorage::with_dir(storage_dir.clone()), CssVariableSync::default());
    source.apply_preset("green");
    source.set_token(TokenKey::from_name("inverse-primary"), "#A0D0A0", ThemeScope::Both);
    let path = source.export_to_dir(&export_dir, EXPORT_FILE_NAME).unwrap();
    assert_eq!(path, export_dir.join("material-theme.json"));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("{\n  \"primary\": \"#4CAF50\",\n"));
    assert!(contents.trim_end().ends_with("\"inverse-primary\": \"#A0D0A0\"\n}"));

    let mut target = ThemeStore::new(FileStorage::with_dir(root.join("other")), CssVariableSync::default());
    assert!(target.import_from_path(&path).unwrap());
    assert_eq!(target.light(), source.light());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn importing_a_missing_file_is_a_read_error() {
    let root = fixture_root("missing");
    let mut store = ThemeStore::new(FileStorage::with_dir(root.clone()), CssVariableSync::default());
    let before = store.light().clone();

    let err = store
        .import_from_path(&root.join("nope.json"))
        .expect_err("missing file should fail");
    assert!(matches!(err, ThemeError::ReadFile { .. }));
    assert_eq!(store.light(), &before);
}
