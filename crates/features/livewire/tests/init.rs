use beacon_livewire::{Livewire, init};

#[test]
fn init_creates_slice() {
    let slice = init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Livewire>());
}
