//! Catalog import behavior.

use std::io::Write;
use std::sync::Arc;

use playcove_core::game::GameService;
use playcove_infrastructure::InMemoryGameRepository;
use playcove_infrastructure::catalog::import_catalog_file;

const SAMPLE: &str = r#"[
  {
    "externalId": "api-001",
    "title": "Hollow Knight",
    "description": "Bugs and sorrow.",
    "coverUrl": "https://example.com/hk.jpg",
    "releaseDate": "2017-02-24",
    "platforms": ["PC", "Switch"],
    "genres": ["Metroidvania"]
  },
  {
    "externalId": "api-002",
    "title": "Celeste",
    "releaseDate": "not-a-date"
  }
]"#;

#[tokio::test]
async fn import_upserts_by_external_id() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");

    let games = GameService::new(Arc::new(InMemoryGameRepository::new()));

    let imported = import_catalog_file(file.path(), &games).await.unwrap();
    assert_eq!(imported, 2);

    let hollow_knight = games.find_by_title("Hollow Knight").await.unwrap().unwrap();
    assert_eq!(hollow_knight.external_id, "api-001");
    assert_eq!(hollow_knight.platforms, vec!["PC", "Switch"]);

    // The bad date is dropped, not fatal.
    let celeste = games.find_by_title("Celeste").await.unwrap().unwrap();
    assert!(celeste.release_date.is_none());

    // Re-import refreshes in place instead of duplicating.
    let reimported = import_catalog_file(file.path(), &games).await.unwrap();
    assert_eq!(reimported, 2);
    assert_eq!(games.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn missing_file_is_a_config_error() {
    let games = GameService::new(Arc::new(InMemoryGameRepository::new()));
    let err = import_catalog_file("/does/not/exist.json", &games)
        .await
        .unwrap_err();
    assert!(matches!(err, playcove_core::CoveError::Config(_)));
}
