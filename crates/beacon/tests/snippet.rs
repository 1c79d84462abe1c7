use beacon::domain::config::AppConfig;
use beacon::kernel::registry::SliceRegistry;
use beacon::{features, init, snippet};

fn configured(id: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.ga4.measurement_id = Some(id.to_owned());
    config
}

#[test]
fn built_in_features_are_listed() {
    assert!(features::is_enabled("ga4"));
    assert!(features::is_enabled("livewire"));
    assert!(!features::is_enabled("metrics"));
}

#[test]
fn snippet_is_empty_without_configuration() {
    let registry = init(&AppConfig::default()).expect("init should succeed");

    assert_eq!(snippet(&registry), "");
}

#[test]
fn snippet_is_empty_without_the_ga4_slice() {
    let registry = SliceRegistry::default();

    assert_eq!(snippet(&registry), "");
}

#[test]
fn configured_host_gets_the_tracking_markup() {
    let registry = init(&configured("G-FACADE1")).expect("init should succeed");

    let html = snippet(&registry);

    assert!(html.contains("gtag/js?id=G-FACADE1"));
    assert!(html.contains("gtag('config', \"G-FACADE1\", { send_page_view: false });"));
    assert!(!html.contains("livewire:navigated"));
}

#[test]
fn livewire_marker_enables_the_navigation_block() {
    let registry = init(&configured("G-FACADE2")).expect("init should succeed");
    registry.register(features::livewire::init().expect("livewire init should succeed"));

    let html = snippet(&registry);

    assert!(html.contains("gtag/js?id=G-FACADE2"));
    assert!(html.contains("document.addEventListener('livewire:navigated'"));
}

#[test]
fn marker_registered_between_renders_changes_the_output() {
    let registry = init(&configured("G-FACADE3")).expect("init should succeed");

    let before = snippet(&registry);
    registry.register(features::livewire::init().expect("livewire init should succeed"));
    let after = snippet(&registry);

    assert!(!before.contains("livewire:navigated"));
    assert!(after.contains("livewire:navigated"));
    assert!(after.starts_with(&before));
}
