//! Named configuration store: presets, JSON export/import and file round trips.
use drum_spooling_toolbox::presets;
use drum_spooling_toolbox::store::{ConfigStore, StoreError};
use drum_spooling_toolbox::winch::WinchInputs;
use pretty_assertions::assert_eq;

#[test]
fn presets_are_loaded_by_name() {
    let store = ConfigStore::with_presets();
    assert_eq!(store.len(), presets::presets().len());
    for preset in presets::presets() {
        assert_eq!(store.get(preset.name), Some(&(preset.build)()));
    }
    assert!(presets::find_preset("ELECTRIC-WIRE-32MM").is_some());
}

#[test]
fn export_then_import_is_identical() {
    let mut store = ConfigStore::with_presets();
    store
        .insert(
            "deep tow",
            WinchInputs {
                cable_length_m: 6000.0,
                wraps_per_layer: 48.5,
                ..presets::hydraulic_umbilical()
            },
        )
        .expect("insert");

    let json = store.to_json().expect("export");
    let imported = ConfigStore::from_json(&json).expect("import");
    assert_eq!(imported, store);
    for (name, inputs) in store.iter() {
        assert_eq!(imported.get(name), Some(inputs));
    }
}

#[test]
fn export_shape_is_name_to_inputs() {
    let store = ConfigStore::with_presets();
    let value: serde_json::Value =
        serde_json::from_str(&store.to_json().expect("export")).expect("json");
    let obj = value.as_object().expect("object");
    let entry = &obj["hydraulic-umbilical-41mm"];
    assert_eq!(entry["winch_type"], "hydraulic");
    assert_eq!(entry["cable_dia_mm"], 41.0);
}

#[test]
fn file_entries_override_presets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("winch_configs.json");

    let mut saved = ConfigStore::new();
    saved
        .insert(
            "hydraulic-umbilical-41mm",
            WinchInputs {
                payload_weight_kg: 1.0,
                ..presets::hydraulic_umbilical()
            },
        )
        .expect("insert");
    saved
        .insert("mine", presets::electric_wire())
        .expect("insert");
    saved.save(&path).expect("save");

    let store = ConfigStore::load(&path).expect("load");
    assert_eq!(store.len(), presets::presets().len() + 1);
    assert_eq!(
        store
            .get("hydraulic-umbilical-41mm")
            .map(|i| i.payload_weight_kg),
        Some(1.0)
    );
    assert!(store.names().any(|n| n == "mine"));
}

#[test]
fn missing_file_gives_presets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ConfigStore::load(&dir.path().join("absent.json")).expect("load");
    assert_eq!(store, ConfigStore::with_presets());
}

#[test]
fn invalid_entries_are_refused() {
    let mut store = ConfigStore::new();
    assert!(matches!(
        store.insert("  ", presets::electric_wire()),
        Err(StoreError::EmptyName)
    ));
    let bad = WinchInputs {
        cable_dia_mm: f64::INFINITY,
        ..presets::electric_wire()
    };
    assert!(matches!(
        store.insert("bad", bad),
        Err(StoreError::Invalid { .. })
    ));
    assert!(store.is_empty());
    assert!(matches!(store.require("bad"), Err(StoreError::NotFound(_))));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        ConfigStore::from_json("{ not json"),
        Err(StoreError::Json(_))
    ));
}

#[test]
fn removed_entry_stays_removed_after_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("winch_configs.json");

    let mut store = ConfigStore::load(&path).expect("load");
    store
        .insert("spare drum", presets::electric_wire())
        .expect("insert");
    store.save(&path).expect("save");

    let mut store = ConfigStore::load(&path).expect("reload");
    assert!(store.get("spare drum").is_some());
    assert_eq!(store.remove("spare drum").ok(), Some(presets::electric_wire()));
    store.save(&path).expect("save");

    let store = ConfigStore::load(&path).expect("reload");
    assert_eq!(store.get("spare drum"), None);
    assert_eq!(store, ConfigStore::with_presets());
}

#[test]
fn built_in_presets_cannot_be_removed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("winch_configs.json");

    let mut store = ConfigStore::load(&path).expect("load");
    assert!(matches!(
        store.remove("electric-wire-32mm"),
        Err(StoreError::BuiltIn(name)) if name == "electric-wire-32mm"
    ));
    store.save(&path).expect("save");

    let store = ConfigStore::load(&path).expect("reload");
    assert!(store.get("electric-wire-32mm").is_some());
    assert!(matches!(
        ConfigStore::new().remove("nothing here"),
        Err(StoreError::NotFound(_))
    ));
}
