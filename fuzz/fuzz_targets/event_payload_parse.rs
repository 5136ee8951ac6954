#![no_main]

use labeler_github::{EventKind, LabelerEvent};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    for event_name in ["issues", "pull_request_target", "push"] {
        if let Ok(event) = LabelerEvent::from_payload(event_name, None, &payload) {
            assert_eq!(event.kind, EventKind::parse(event_name));
        }
    }
});
