//! The file-backed preference store, exercised in a temporary directory.

use std::fs;

use plates_rs::{
    inventory::Inventory,
    plate::Plate,
    preferences::{
        BARBELL_PLATES_KEY, CUSTOM_BAR_WEIGHT_KEY, DUMBBELL_HANDLE_WEIGHT_KEY, FileStore,
        KeyValueStore, Preferences,
    },
    unit::Unit,
};
use tempfile::TempDir;

#[test]
fn missing_directory_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("does-not-exist"));
    assert_eq!(Preferences::load(&store), Preferences::default());
}

#[test]
fn writes_one_file_per_key() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("plates"));
    Preferences::default().save_all(&mut store).unwrap();

    let mut files = fs::read_dir(store.dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect::<Vec<_>>();
    files.sort();
    assert_eq!(
        files,
        vec![
            "barbell-plates.json",
            "custom-bar-weight.json",
            "dumbbell-handle-weight.json",
            "dumbbell-plates.json",
        ]
    );
    assert_eq!(store.get(CUSTOM_BAR_WEIGHT_KEY).as_deref(), Some("20.0"));
}

#[test]
fn edited_inventory_survives_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path());

    let mut preferences = Preferences::load(&store);
    preferences.barbell_plates.add(1.25, Unit::Kg).unwrap();
    preferences.barbell_plates.set_quantity(0, 4).unwrap();
    preferences.save_barbell_plates(&mut store).unwrap();

    let reloaded = Preferences::load(&store);
    assert_eq!(reloaded.barbell_plates, preferences.barbell_plates);
    assert_eq!(reloaded.barbell_plates.plates()[0], Plate::new(25.0, 4));
    assert_eq!(reloaded.barbell_plates.len(), 7);
    assert_eq!(reloaded.dumbbell_plates, Inventory::default_dumbbell());
}

#[test]
fn corrupt_files_fall_back_per_key() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(format!("{BARBELL_PLATES_KEY}.json")), "[{]").unwrap();
    fs::write(dir.path().join(format!("{DUMBBELL_HANDLE_WEIGHT_KEY}.json")), "1.5").unwrap();

    let preferences = Preferences::load(&FileStore::new(dir.path()));
    assert_eq!(preferences.barbell_plates, Inventory::default_barbell());
    assert_eq!(preferences.dumbbell_handle_weight, 1.5);
}

#[test]
fn reads_values_written_by_other_tools() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(format!("{BARBELL_PLATES_KEY}.json")),
        r#"[{"weight":20,"quantity":1},{"weight":2.5,"quantity":3}]"#,
    )
    .unwrap();

    let preferences = Preferences::load(&FileStore::new(dir.path()));
    assert_eq!(
        preferences.barbell_plates.plates(),
        &[Plate::new(20.0, 1), Plate::new(2.5, 3)]
    );
}
