use autocatalog::{Catalog, Config, Favorites, IssueKind, Record};

fn catalog() -> Catalog {
    Catalog::new(Favorites::in_memory(), Config::default())
}

#[test]
fn test_semicolon_file_with_aliases_imports() {
    let mut catalog = catalog();
    let report = catalog.import(
        "Marka;Type;Year;Category;Image\n\
         Škoda;Octavia;2019;wagon;https://img/octavia\n\
         Dacia;Duster;;suv;\n",
    );

    assert!(report.accepted);
    let missing: Vec<_> = report.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        missing,
        vec![
            "missing header column: \"brand\"",
            "missing header column: \"model\"",
            "missing header column: \"body\"",
            "missing header column: \"image_url\"",
        ]
    );
    assert_eq!(
        catalog.records()[0],
        Record::new("Škoda", "Octavia", Some(2019.0), "wagon", "https://img/octavia")
    );
    assert_eq!(catalog.records()[1].year, None);
}

#[test]
fn test_rows_with_missing_brand_are_kept_and_reported() {
    let mut catalog = catalog();
    let report = catalog.import(
        "brand,model,year,body,image_url\nBMW,M3,2016,sedan,http://x\n,X,abc,coupe,\n",
    );

    assert_eq!(report.record_count, 2);
    assert_eq!(catalog.records()[1].model, "X");
    assert_eq!(catalog.records()[1].year, None);
    assert!(report
        .errors
        .iter()
        .all(|e| e.line == 3 && e.kind == IssueKind::Field));
    assert_eq!(report.errors.len(), 2);
}

#[test]
fn test_header_only_import_is_a_noop_on_data() {
    let mut catalog = catalog();
    let before: Vec<Record> = catalog.records().to_vec();

    let report = catalog.import("brand,model\n");

    assert!(!report.accepted);
    assert_eq!(catalog.records(), before.as_slice());
    assert_eq!(catalog.errors().len(), 3);
}

#[test]
fn test_second_import_replaces_first_completely() {
    let mut catalog = catalog();
    catalog.import("brand,model,year,body,image_url\nA,1,,,\nB,2,,,\n");
    catalog.import("brand,model,year,body,image_url\nC,3,,,\n");

    let brands: Vec<_> = catalog.records().iter().map(|r| r.brand.as_str()).collect();
    assert_eq!(brands, vec!["C"]);
    assert!(catalog.errors().is_empty());
}

#[test]
fn test_facets_follow_the_imported_collection() {
    let mut catalog = catalog();
    catalog.import(
        "brand,model,year,body,image_url\n\
         Volvo,V70,2005,wagon,\n\
         volvo,S60,2010,sedan,\n\
         Alfa Romeo,Giulia,2017,sedan,\n",
    );

    let query = catalog.query();
    assert_eq!(query.distinct_brands(), vec!["all", "Alfa Romeo", "volvo", "Volvo"]);
    assert_eq!(query.distinct_bodies(), vec!["all", "sedan", "wagon"]);

    catalog.set_brand_filter("VOLVO");
    catalog.set_query("20");
    let models: Vec<_> = catalog
        .filtered_records()
        .into_iter()
        .map(|r| r.model.as_str())
        .collect();
    assert_eq!(models, vec!["V70", "S60"]);
}

#[test]
fn test_deep_link_survives_reimport_of_same_data() {
    let text = "brand,model,year,body,image_url\nLand Rover,Defender,1990,suv,\n";
    let mut catalog = catalog();
    catalog.import(text);
    let record = catalog.records()[0].clone();
    let address = catalog.open(&record);
    assert_eq!(address, "car/land%20rover/defender/1990");

    catalog.import(text);
    catalog.navigate(&format!("#/{}", address));
    assert_eq!(catalog.current_record(), Some(&record));
}
