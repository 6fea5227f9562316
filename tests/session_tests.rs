//! Session integration tests
//!
//! Loads sites from disk (config plus optional catalog) and drives a
//! session across sections.

use std::sync::Arc;
use velura::catalog::{CatalogLoader, ProductFilter, TimeOfDay};
use velura::config::ConfigLoader;
use velura::session::{Section, Session, SessionError};

mod common;
use common::fixtures;

#[test]
fn test_session_from_configured_site() {
    let site = fixtures::site_with_config(
        r#"
[routine]
default-time = "evening"
default-steps = ["1", "2", "8"]
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(site.path()).unwrap();
    let session = Session::new(common::catalog(), &config).unwrap();

    assert_eq!(session.time(), TimeOfDay::Evening);
    let routine: Vec<&str> = session
        .routine()
        .my_routine(session.time())
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(routine, ["Oil Cleanser", "Water Cleanser", "Face Oil"]);
}

#[test]
fn test_session_on_alternative_catalog() {
    let (site, config_path) = fixtures::site_with_catalog(fixtures::SMALL_CATALOG).unwrap();
    let mut config = ConfigLoader::load_path(&config_path).unwrap();
    config.routine.default_steps = vec!["a".to_string(), "b".to_string()];

    let catalog_path = config.catalog_path(site.path()).unwrap();
    let catalog = Arc::new(CatalogLoader::load(&catalog_path).unwrap());
    assert_eq!(catalog.version(), "small-1");

    let mut session = Session::new(catalog, &config).unwrap();
    assert_eq!(session.routine().estimated_minutes(TimeOfDay::Morning), 4);
    assert_eq!(session.routine().estimated_minutes(TimeOfDay::Evening), 2);

    let quiz = session.open_quiz();
    quiz.answer("sun", "lots").unwrap();
    let picks = quiz.recommendations();
    assert_eq!(picks.products, ["Daily Shield"]);
    assert_eq!(picks.ingredients, ["Zinc"]);
}

#[test]
fn test_builtin_defaults_do_not_fit_other_catalogs() {
    let (site, config_path) = fixtures::site_with_catalog(fixtures::SMALL_CATALOG).unwrap();
    let config = ConfigLoader::load_path(&config_path).unwrap();
    let catalog = CatalogLoader::load(&config.catalog_path(site.path()).unwrap()).unwrap();

    let err = Session::new(Arc::new(catalog), &config).unwrap_err();
    assert!(matches!(err, SessionError::Routine(_)));
}

#[test]
fn test_showcase_and_glossary_follow_navigation() {
    let mut session = common::session();
    session.set_product_filter(ProductFilter::category("Serum"));

    assert_eq!(session.visible_products().len(), 1);
    assert_eq!(session.visible_ingredients().len(), 4);

    for section in [Section::Routine, Section::Ingredients, Section::Products] {
        session.navigate(section);
        assert_eq!(session.visible_products().len(), 1);
        assert_eq!(session.visible_ingredients().len(), 6);
    }

    session.set_product_filter(ProductFilter::All);
    assert_eq!(session.visible_products().len(), 6);
}

#[test]
fn test_quiz_closed_until_opened() {
    let mut session = common::session();
    assert!(!session.is_quiz_open());
    assert_eq!(session.quiz_mut().unwrap_err(), SessionError::QuizClosed);

    session.open_quiz();
    assert!(session.is_quiz_open());
    session.quiz_mut().unwrap().answer("skinType", "dry").unwrap();
    assert_eq!(session.quiz().unwrap().progress().answered, 1);
}
