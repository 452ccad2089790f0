#![no_main]
use libfuzzer_sys::fuzz_target;

use lattice_region::math::{IntVector3, Region3i};

/// Regions with more points than this are not iterated.
const ITERATION_LIMIT: usize = 4096;

fuzz_target!(|input: (Region3i, Region3i, IntVector3)| {
    let (a, b, point) = input;

    let intersection = a.intersect(b);
    assert!(a.encompasses_region(intersection));
    assert!(b.encompasses_region(intersection));
    assert_eq!(intersection, b.intersect(a));
    assert_eq!(
        intersection.encompasses(point),
        a.encompasses(point) && b.encompasses(point)
    );

    if !a.is_empty() {
        let nearest = a.nearest_point_to(point);
        assert!(a.encompasses(nearest));
        if a.encompasses(point) {
            assert_eq!(nearest, point);
        }
    }

    if let Some(volume) = a.volume().filter(|&v| v <= ITERATION_LIMIT) {
        let mut count = 0;
        for p in a {
            assert!(a.encompasses(p));
            count += 1;
        }
        assert_eq!(count, volume);
        assert_eq!(a.iter().size_hint(), (volume, Some(volume)));
    }
});
