use super::*;

#[test]
fn parses_search_command() {
    let cli = Cli::try_parse_from([
        "locsearch", "search", "coffee", "--lat", "52.52", "--lon", "13.405",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Search {
            query,
            lat,
            lon,
            radius,
            lang,
            offline,
            all_fields,
        } => {
            assert_eq!(query, "coffee");
            assert!(!all_fields);
            assert!((lat - 52.52).abs() < f64::EPSILON);
            assert!((lon - 13.405).abs() < f64::EPSILON);
            assert_eq!(radius, 1500);
            assert!(lang.is_none());
            assert!(!offline);
        }
        other => panic!("expected search, got {other:?}"),
    }
}

#[test]
fn search_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "locsearch", "search", "pizza", "--lat", "-33.87", "--lon", "-151.21", "--radius", "500",
        "--lang", "es", "--offline",
    ])
    .expect("negative coordinates should parse");

    assert!(matches!(
        cli.command,
        Commands::Search {
            radius: 500,
            offline: true,
            ref lang,
            ..
        } if lang.as_deref() == Some("es")
    ));
}

#[test]
fn all_fields_flag_parses_for_search_and_get() {
    let cli = Cli::try_parse_from([
        "locsearch", "search", "tea", "--lat", "1", "--lon", "2", "--all-fields",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::Search { all_fields: true, .. }));

    let cli = Cli::try_parse_from(["locsearch", "get", "abc", "--all-fields"]).unwrap();
    assert!(matches!(cli.command, Commands::Get { all_fields: true, .. }));
}

#[test]
fn requested_fields_sends_full_selection_only_when_asked() {
    assert!(places::requested_fields(false).is_none());
    let fields = places::requested_fields(true).expect("all fields requested");
    assert_eq!(fields.len(), locsearch_foursquare::PLACE_FIELDS.len());
    assert_eq!(fields[0], "fsq_place_id");
    assert!(fields.iter().any(|f| f == "hours"));
}

#[test]
fn search_requires_coordinates() {
    assert!(Cli::try_parse_from(["locsearch", "search", "coffee"]).is_err());
}

#[test]
fn parses_refresh_command() {
    let cli = Cli::try_parse_from([
        "locsearch",
        "refresh",
        "place.json",
        "--last-updated",
        "1700000000000",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Refresh {
            last_updated: 1_700_000_000_000,
            ..
        }
    ));
}

#[test]
fn parses_key_commands() {
    let cli = Cli::try_parse_from(["locsearch", "set-key", "fsq3abc"]).unwrap();
    assert!(matches!(cli.command, Commands::SetKey { ref key } if key == "fsq3abc"));

    let cli = Cli::try_parse_from(["locsearch", "test-key", "fsq3abc"]).unwrap();
    assert!(matches!(cli.command, Commands::TestKey { ref key } if key == "fsq3abc"));

    let cli = Cli::try_parse_from(["locsearch", "status"]).unwrap();
    assert!(matches!(cli.command, Commands::Status));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["locsearch"]).is_err());
}

#[test]
fn read_location_parses_printed_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("place.json");
    let json = serde_json::json!({
        "id": "abc",
        "label": "Cafe",
        "address": { "city": "Berlin" },
        "latitude": 52.5,
        "longitude": 13.4,
        "attribution": { "text": "Foursquare", "url": "https://foursquare.com/v/abc" }
    });
    std::fs::write(&path, json.to_string()).unwrap();

    let location = places::read_location(&path).expect("location should parse");
    assert_eq!(location.id, "abc");
    assert_eq!(location.address.city.as_deref(), Some("Berlin"));
}

#[test]
fn read_location_reports_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("place.json");
    std::fs::write(&path, "[]").unwrap();
    assert!(places::read_location(&path).is_err());
}
