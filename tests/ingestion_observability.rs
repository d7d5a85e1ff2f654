use std::sync::{Arc, Mutex};

use swapi_entities::assembly::{assign_crew, AttachmentSlot};
use swapi_entities::entity::{Droid, Starship};
use swapi_entities::ingestion::{
    load_records_from_path, AttachmentCleared, CatalogObserver, CompositeObserver, FileObserver, LoadContext,
    LoadOptions, LoadStats, RecordFormat, Severity,
};
use swapi_entities::catalog::{InMemoryCatalog, ResourceKind};
use swapi_entities::CatalogError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    resources: Mutex<Vec<Option<ResourceKind>>>,
    failures: Mutex<Vec<Severity>>,
    alerts: Mutex<Vec<Severity>>,
    cleared: Mutex<Vec<AttachmentCleared>>,
}

impl CatalogObserver for RecordingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats.records);
        self.resources.lock().unwrap().push(ctx.resource);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: Severity, _error: &CatalogError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: Severity, _error: &CatalogError) {
        self.alerts.lock().unwrap().push(severity);
    }

    fn on_attachment_cleared(&self, event: &AttachmentCleared) {
        self.cleared.lock().unwrap().push(event.clone());
    }
}

#[test]
fn observer_receives_success_with_record_count() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    load_records_from_path("tests/fixtures/droids.json", &opts).unwrap();

    assert_eq!(obs.successes.lock().unwrap().clone(), vec![2]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        format: Some(RecordFormat::Csv),
        observer: Some(obs.clone()),
        alert_at_or_above: Severity::Critical,
        ..Default::default()
    };

    // Missing file -> Io error -> Critical
    let _ = load_records_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![Severity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![Severity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        format: Some(RecordFormat::Json),
        observer: Some(obs.clone()),
        alert_at_or_above: Severity::Critical,
        ..Default::default()
    };

    // Shape error -> Error severity (not Critical) -> should not alert
    let _ = load_records_from_path("tests/fixtures/planets.csv", &opts).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![Severity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_alert_threshold_alerts_on_errors() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        format: Some(RecordFormat::Json),
        observer: Some(obs.clone()),
        alert_at_or_above: Severity::Error,
        ..Default::default()
    };

    let _ = load_records_from_path("tests/fixtures/planets.csv", &opts).unwrap_err();

    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![Severity::Error]);
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![a.clone(), b.clone()]);
    let opts = LoadOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    load_records_from_path("tests/fixtures/starships.csv", &opts).unwrap();

    assert_eq!(a.successes.lock().unwrap().clone(), vec![2]);
    assert_eq!(b.successes.lock().unwrap().clone(), vec![2]);
}

#[test]
fn observer_hears_cleared_attachment() {
    let obs = RecordingObserver::default();
    let mut ship = Starship::new("s1", "Twilight", "G9 Rigger-class light freighter", "freighter");

    let outcome = assign_crew(&mut ship, Droid::new("d1", "R2-D2", "R2-series"), Some(&obs));

    assert!(!outcome.is_accepted());
    let cleared = obs.cleared.lock().unwrap().clone();
    assert_eq!(
        cleared,
        vec![AttachmentCleared {
            starship: "Twilight".to_string(),
            slot: AttachmentSlot::CrewMembers,
            found: "droid",
        }]
    );
}

#[test]
fn file_observer_appends_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("load.log");
    let opts = LoadOptions {
        observer: Some(Arc::new(FileObserver::new(&log))),
        alert_at_or_above: Severity::Error,
        ..Default::default()
    };

    load_records_from_path("tests/fixtures/planets.csv", &opts).unwrap();
    let _ = load_records_from_path("tests/fixtures/missing.json", &opts).unwrap_err();

    let text = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" loaded 5 records from tests/fixtures/planets.csv (csv)"));
    assert!(lines[1].contains(" [critical] could not load records from tests/fixtures/missing.json (json): io error"));
    assert!(lines[2].contains(" ALERT [critical] could not load records"));
}

#[test]
fn catalog_loads_report_their_collection() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let mut catalog = InMemoryCatalog::new();
    catalog
        .load_path(ResourceKind::Planets, "tests/fixtures/planets.csv", &opts)
        .unwrap();
    load_records_from_path("tests/fixtures/droids.json", &opts).unwrap();

    assert_eq!(obs.resources.lock().unwrap().clone(), vec![Some(ResourceKind::Planets), None]);
    assert_eq!(obs.successes.lock().unwrap().clone(), vec![5, 2]);
}

#[test]
fn malformed_json_document_is_an_error_not_critical() {
    let obs = Arc::new(RecordingObserver::default());
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    std::io::Write::write_all(&mut file, br#"{"name": "Hoth", "climate": }"#).unwrap();
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Severity::Critical,
        ..Default::default()
    };

    let err = load_records_from_path(file.path(), &opts).unwrap_err();

    assert!(matches!(err, CatalogError::Json(_)));
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![Severity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}
