use autocatalog::favorites::store::default_path;
use autocatalog::{Catalog, Config, Favorites, JsonFileStore, Record};
use std::fs;
use tempfile::TempDir;

fn open_catalog(dir: &TempDir) -> Catalog {
    let store = JsonFileStore::new(default_path(dir.path()));
    Catalog::new(Favorites::load(Box::new(store)), Config::default())
}

#[test]
fn test_favorites_survive_a_restart() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    {
        let mut catalog = open_catalog(&dir);
        assert_eq!(catalog.toggle_favorite_at("car/toyota/supra/1998"), Some(true));
    }

    let catalog = open_catalog(&dir);
    let supra = Record::new("Toyota", "Supra", Some(1998.0), "coupe", "");
    assert!(catalog.is_favorite(&supra));
    assert_eq!(catalog.stats().favorites, 1);
}

#[test]
fn test_orphaned_keys_are_kept_after_import() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let mut catalog = open_catalog(&dir);
    catalog.toggle_favorite_at("car/bmw/m3/2016");

    catalog.import("brand,model,year,body,image_url\nLada,Niva,1977,suv,\n");
    assert_eq!(catalog.favorites().len(), 1);

    catalog.set_only_favorites(true);
    assert!(catalog.filtered_records().is_empty());

    let stored = fs::read_to_string(default_path(dir.path())).unwrap();
    assert_eq!(stored, r#"["bmw|m3|2016"]"#);
}

#[test]
fn test_corrupt_store_starts_empty_and_is_overwritten() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = default_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "this is not json").unwrap();

    let mut catalog = open_catalog(&dir);
    assert!(catalog.favorites().is_empty());

    catalog.toggle_favorite_at("car/audi/rs6/2020");
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"["audi|rs6|2020"]"#);
}
