#![no_main]

use libfuzzer_sys::fuzz_target;
use splitrs::{find_split_point, AnchorSet};

fuzz_target!(|lines: Vec<String>| {
    let anchors = AnchorSet::default();
    let split = find_split_point(&lines, &anchors);

    // Verify: the cut index never leaves the buffer
    assert!(split <= lines.len());

    // Verify: a non-empty buffer never yields an empty committed prefix
    if !lines.is_empty() {
        assert!(split >= 1);
    }

    if split < lines.len() {
        // Verify: the cut lands immediately after an anchor line
        assert!(anchors.qualifies(&lines[split - 1]));

        // Verify: the cut is the rightmost one - nothing after it qualifies
        assert!(lines[split..].iter().all(|line| !anchors.qualifies(line)));
    } else if !lines.is_empty() && !anchors.qualifies(lines.last().unwrap()) {
        // Verify: a full-buffer cut without a qualifying last line means the
        // threshold fallback fired - no line anywhere qualifies
        assert!(lines.iter().all(|line| !anchors.qualifies(line)));
    }
});
