//! Verify normalization and photo list building against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Results are compared as serialized JSON values, so field ordering in the
//! vector files does not matter.

use wordbook_core::{build_photo_list, normalize, LookupError, Photo};

fn cases(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

#[test]
fn normalize_test_vectors() {
    for case in cases(include_str!("../../test-vectors/normalize.json")) {
        let name = case["name"].as_str().unwrap();
        let result = normalize(case["input"].clone());

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "MissingWord" => {
                    assert!(matches!(err, LookupError::MissingWord), "{name}: expected MissingWord")
                }
                "MalformedResponse" => assert!(
                    matches!(err, LookupError::MalformedResponse(_)),
                    "{name}: expected MalformedResponse, got {err:?}"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let result = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            let actual = serde_json::to_value(&result).unwrap();
            assert_eq!(actual, case["expected_result"], "{name}: normalized result");
        }
    }
}

#[test]
fn photo_test_vectors() {
    for case in cases(include_str!("../../test-vectors/photos.json")) {
        let name = case["name"].as_str().unwrap();
        let photos = build_photo_list(&case["input"]);
        let expected: Vec<Photo> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(photos, expected, "{name}: photo list");
    }
}
