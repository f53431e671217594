//! autocatalog - Vehicle Catalog Browser
//!
//! Imports a vehicle file and prints the filtered catalog, a record's detail
//! view or aggregate stats.

use anyhow::{Context, Result};
use autocatalog::input::read_import_file;
use autocatalog::router;
use autocatalog::{Catalog, CatalogEvent, Config, Favorites, JsonFileStore, Record};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; RUST_LOG controls verbosity
    env_logger::init();

    let matches = Command::new("autocatalog")
        .version(autocatalog::VERSION)
        .about("Import, validate and browse a vehicle catalog")
        .long_about(
            "autocatalog reads a CSV or semicolon-separated file with the columns \
             brand, model, year, body and image_url, reports every problem it finds \
             and lets you filter, search and bookmark the resulting records.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the catalog file (sample data is used when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("brand")
                .long("brand")
                .value_name("BRAND")
                .help("Only show records of this brand"),
        )
        .arg(
            Arg::new("body")
                .long("body")
                .value_name("BODY")
                .help("Only show records with this body style"),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .value_name("TEXT")
                .help("Free-text search over brand, model, body and year"),
        )
        .arg(
            Arg::new("only-favorites")
                .long("only-favorites")
                .action(ArgAction::SetTrue)
                .help("Only show favorited records"),
        )
        .arg(
            Arg::new("toggle")
                .long("toggle")
                .value_name("ADDRESS")
                .help("Toggle the favorite for the record at ADDRESS (car/<brand>/<model>[/<year>])"),
        )
        .arg(
            Arg::new("open")
                .long("open")
                .value_name("ADDRESS")
                .help("Show the detail view for the record at ADDRESS"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Print aggregate counts"),
        )
        .arg(
            Arg::new("favorites-file")
                .long("favorites-file")
                .value_name("PATH")
                .help("Where favorites are stored (defaults to the platform data directory)"),
        )
        .get_matches();

    let mut config = Config::load().unwrap_or_else(|e| {
        log::warn!("using default settings: {}", e);
        Config::default()
    });
    if let Some(path) = matches.get_one::<String>("favorites-file") {
        config.favorites_path = Some(PathBuf::from(path));
    }

    let favorites_path = config
        .resolve_favorites_path()
        .context("Cannot determine where to store favorites")?;
    let favorites = Favorites::load(Box::new(JsonFileStore::new(favorites_path)));
    let mut catalog = Catalog::new(favorites, config);

    if let Some(file) = matches.get_one::<String>("file") {
        let path = PathBuf::from(file);
        let text = read_import_file(&path)
            .await
            .with_context(|| format!("Cannot import {}", path.display()))?;
        if let Some(report) = catalog.apply(CatalogEvent::Import(text)) {
            if !report.accepted {
                eprintln!("No usable rows in {}; showing previous data", path.display());
            }
        }
        print_errors(&catalog);
    }

    apply_filters(&mut catalog, &matches);

    if let Some(address) = matches.get_one::<String>("toggle") {
        match catalog.toggle_favorite_at(address) {
            Some(true) => println!("Added {} to favorites", address),
            Some(false) => println!("Removed {} from favorites", address),
            None => anyhow::bail!("No record found at {}", address),
        }
    }

    if let Some(address) = matches.get_one::<String>("open") {
        catalog.apply(CatalogEvent::Navigate(address.clone()));
        print_detail(&catalog);
    } else {
        print_list(&catalog);
    }

    if matches.get_flag("stats") {
        println!();
        println!("{}", catalog.stats());
    }

    Ok(())
}

fn apply_filters(catalog: &mut Catalog, matches: &ArgMatches) {
    if let Some(brand) = matches.get_one::<String>("brand") {
        catalog.apply(CatalogEvent::SetBrandFilter(brand.clone()));
    }
    if let Some(body) = matches.get_one::<String>("body") {
        catalog.apply(CatalogEvent::SetBodyFilter(body.clone()));
    }
    if let Some(query) = matches.get_one::<String>("query") {
        catalog.apply(CatalogEvent::SetQuery(query.clone()));
    }
    catalog.apply(CatalogEvent::SetOnlyFavorites(matches.get_flag("only-favorites")));
}

fn print_errors(catalog: &Catalog) {
    let shown = catalog.displayed_errors();
    if shown.is_empty() {
        return;
    }
    eprintln!("Problems found ({}):", catalog.errors().len());
    for error in shown {
        eprintln!("  {}", error);
    }
    let hidden = catalog.errors().len() - shown.len();
    if hidden > 0 {
        eprintln!("  ... and {} more", hidden);
    }
}

fn print_list(catalog: &Catalog) {
    let records = catalog.filtered_records();
    if records.is_empty() {
        println!("No matching records");
        return;
    }
    for record in records {
        println!("{}", list_line(record, catalog.is_favorite(record)));
    }
}

fn list_line(record: &Record, favorite: bool) -> String {
    format!(
        "{} {:<30} {:>6}  {:<10} {}",
        if favorite { '*' } else { ' ' },
        record.title(),
        record.year_label().unwrap_or_else(|| "-".to_string()),
        record.body,
        router::encode(record)
    )
}

fn print_detail(catalog: &Catalog) {
    let Some(record) = catalog.current_record() else {
        match catalog.route().decoded_segments() {
            Some((brand, model, _)) => println!("No record found for {} {}.", brand, model),
            None => println!("No record found for this address."),
        }
        println!("Check that the same catalog file was imported.");
        return;
    };

    let favorite = if catalog.is_favorite(record) { " *" } else { "" };
    println!("{}{}", record.heading(), favorite);
    println!("  Brand: {}", or_dash(&record.brand));
    println!("  Model: {}", or_dash(&record.model));
    println!(
        "  Year:  {}",
        record.year_label().unwrap_or_else(|| "-".to_string())
    );
    println!("  Body:  {}", or_dash(&record.body));
    println!("  Image: {}", or_dash(&record.image_url));
    println!("  Link:  #/{}", router::encode(record));

    let similar = catalog.current_similar();
    if !similar.is_empty() {
        println!();
        println!("Similar models:");
        for other in similar {
            println!("{}", list_line(other, catalog.is_favorite(other)));
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!autocatalog::VERSION.is_empty());
    }

    #[test]
    fn test_list_line_marks_favorites_and_links() {
        let record = Record::new("BMW", "M3", Some(2016.0), "sedan", "");
        let line = list_line(&record, true);
        assert!(line.starts_with("* BMW M3"));
        assert!(line.ends_with("car/bmw/m3/2016"));
    }

    #[test]
    fn test_or_dash_fills_empty_values() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("sedan"), "sedan");
    }
}
