// A marker declares one canary per named slot. The declaration reads
// like an ordinary struct; the attribute rewrites every field into a
// phantom so the marker never occupies storage.

use tcon::tcon;

/// Canaries for a map from int keys to string values.
#[tcon]
#[derive(Debug)]
pub struct MapCon {
    pub int_canary: *mut i32,
    pub str_canary: *mut String,
}

fn main() {
    let a = MapCon::new();
    let b = a;
    // Copy: the original stays usable.
    let _still = a;
    let _cloned = b.clone();
    let _defaulted: MapCon = Default::default();

    assert_eq!(std::mem::size_of::<MapCon>(), 0);
}
