use beacon_ga4::{Ga4, RegistryProbe, StaticProbe, init};
use beacon_kernel::domain::config::AnalyticsConfig;
use beacon_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use beacon_kernel::registry::SliceRegistry;
use std::any::Any;
use std::sync::Arc;

/// Stand-in for a frontend marker slice the probe watches.
#[derive(Debug)]
struct Shell;

impl FeatureSlice for Shell {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn analytics(id: &str) -> AnalyticsConfig {
    AnalyticsConfig { measurement_id: Some(id.to_owned()) }
}

#[test]
fn init_creates_slice() {
    let slice = init(&AnalyticsConfig::default(), Box::new(StaticProbe::ABSENT))
        .expect("init should succeed");

    assert_eq!(slice.id, std::any::TypeId::of::<Ga4>());
}

#[test]
fn registered_slice_renders_through_the_registry() {
    let registry = SliceRegistry::default();
    let slice = init(&analytics("G-REG42"), Box::new(StaticProbe::ABSENT))
        .expect("init should succeed");
    registry.register(slice);

    let html = registry.with_slice(|ga4: &Ga4| ga4.render()).expect("slice should be registered");

    assert!(html.contains("gtag/js?id=G-REG42"));
    assert!(html.contains("send_page_view: false"));
}

#[test]
fn unconfigured_slice_renders_nothing() {
    let registry = SliceRegistry::default();
    let slice = init(&AnalyticsConfig::default(), Box::new(StaticProbe::ABSENT))
        .expect("init should succeed");
    registry.register(slice);

    let html = registry.with_slice(|ga4: &Ga4| ga4.render()).expect("slice should be registered");

    assert_eq!(html, "");
}

#[test]
fn registry_probe_is_reevaluated_on_every_render() {
    let registry = Arc::new(SliceRegistry::default());
    let probe = RegistryProbe::watching::<Shell>(Arc::clone(&registry));
    let slice = init(&analytics("G-LATE1"), Box::new(probe)).expect("init should succeed");
    registry.register(slice);

    let before = registry.with_slice(|ga4: &Ga4| ga4.render()).expect("slice registered");
    assert!(before.contains("gtag/js?id=G-LATE1"));
    assert!(!before.contains("livewire:navigated"));

    // The shell shows up after startup; the very next render must see it.
    registry.register(InitializedSlice::new(Shell));

    let after = registry.with_slice(|ga4: &Ga4| ga4.render()).expect("slice registered");
    assert!(after.contains("gtag/js?id=G-LATE1"));
    assert!(after.contains("document.addEventListener('livewire:navigated'"));
}
