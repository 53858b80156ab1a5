//! LCS canonical decoding conformance suite.
//!
//! Runs every vector from vectors/conformance_vectors.json against
//! vectors/conformance_expected.json.  Each vector is also a separate test
//! function for granular reporting.

use std::collections::{BTreeMap, HashMap};

use base64::Engine;
use serde::Deserialize;

use lcs_canon::{from_bytes, DecodeError, Deserializer, LcsDeserializer};

// ── Load conformance data ────────────────────────────────────

#[derive(Deserialize, Debug)]
struct VectorsFile {
    vectors: Vec<Vector>,
}

#[derive(Deserialize, Debug, Clone)]
struct Vector {
    test_id: String,
    input_b64: String,
    mode: String,
}

#[derive(Deserialize, Debug)]
struct ExpectedFile {
    expected: HashMap<String, Expected>,
}

#[derive(Deserialize, Debug, Clone)]
struct Expected {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    err: Option<String>,
}

#[derive(Debug, PartialEq)]
enum TestResult {
    Value(String),
    Err(String),
}

/// Run one decoder operation over the whole input, then require EOF.
fn decode_whole<T>(
    raw: &[u8],
    op: impl FnOnce(&mut LcsDeserializer<'_>) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
    let mut de = LcsDeserializer::new(raw);
    let value = op(&mut de)?;
    de.finish()?;
    Ok(value)
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Recursive list type; each level spends one unit of the depth budget.
struct Nest(Vec<Nest>);

impl lcs_canon::Deserialize for Nest {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self, DecodeError> {
        Ok(Nest(<Vec<Nest> as lcs_canon::Deserialize>::deserialize(de)?))
    }
}

impl Nest {
    fn depth(&self) -> usize {
        let mut depth = 1;
        let mut level = &self.0;
        while let Some(inner) = level.first() {
            depth += 1;
            level = &inner.0;
        }
        depth
    }
}

fn run_vector(vec: &Vector) -> TestResult {
    let raw = base64::engine::general_purpose::STANDARD
        .decode(&vec.input_b64)
        .expect("base64 decode failed");

    let result: Result<String, DecodeError> = match vec.mode.as_str() {
        "uleb128_u32" => {
            decode_whole(&raw, |de| de.deserialize_uleb128_as_u32()).map(|v| v.to_string())
        }
        "len" => decode_whole(&raw, |de| de.deserialize_len()).map(|v| v.to_string()),
        "variant_index" => {
            decode_whole(&raw, |de| de.deserialize_variant_index()).map(|v| v.to_string())
        }
        "bool" => from_bytes::<bool>(&raw).map(|v| v.to_string()),
        "option_u8" => from_bytes::<Option<u8>>(&raw)
            .map(|v| v.map_or_else(|| "none".to_string(), |v| v.to_string())),
        "string" => from_bytes::<String>(&raw),
        "map_string_u8" => from_bytes::<BTreeMap<String, u8>>(&raw)
            .map(|m| join(m.iter().map(|(k, v)| format!("{k}={v}")))),
        "vec_u8" => from_bytes::<Vec<u8>>(&raw).map(|v| join(v)),
        "vec_unit" => from_bytes::<Vec<()>>(&raw).map(|v| v.len().to_string()),
        "nested_vec" => from_bytes::<Nest>(&raw).map(|n| n.depth().to_string()),
        other => panic!("unknown mode: {}", other),
    };

    match result {
        Ok(value) => TestResult::Value(value),
        Err(e) => TestResult::Err(e.code().to_string()),
    }
}

fn expected_to_result(exp: &Expected) -> TestResult {
    if let Some(ref value) = exp.value {
        TestResult::Value(value.clone())
    } else if let Some(ref err) = exp.err {
        TestResult::Err(err.clone())
    } else {
        panic!("expected must have either value or err");
    }
}

// ── Load test data once ───────────────────────────────────────

fn load_vectors() -> (Vec<Vector>, HashMap<String, Expected>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let vec_json = include_str!("vectors/conformance_vectors.json");
    let exp_json = include_str!("vectors/conformance_expected.json");

    let vectors: VectorsFile = serde_json::from_str(vec_json).expect("failed to parse vectors");
    let expected: ExpectedFile =
        serde_json::from_str(exp_json).expect("failed to parse expected");

    (vectors.vectors, expected.expected)
}

// ── Test runner ──────────────────────────────────────────────

#[test]
fn conformance_all_vectors() {
    let (vectors, expected) = load_vectors();

    let mut passed = 0;
    let mut failed = 0;
    let mut failures: Vec<(String, TestResult, TestResult)> = Vec::new();

    for vec in &vectors {
        let exp = expected
            .get(&vec.test_id)
            .unwrap_or_else(|| panic!("no expected for {}", vec.test_id));
        let got = run_vector(vec);
        let want = expected_to_result(exp);

        if got == want {
            passed += 1;
        } else {
            failed += 1;
            failures.push((vec.test_id.clone(), got, want));
        }
    }

    let total = passed + failed;
    eprintln!("CONFORMANCE (LCS): {}/{} PASS", passed, total);
    for (tid, got, want) in &failures {
        eprintln!("  FAIL {}: got={:?} expected={:?}", tid, got, want);
    }

    assert_eq!(failed, 0, "{} conformance tests failed", failed);
}

// ── Individual vector tests (for granular CI reporting) ──────

macro_rules! conformance_test {
    ($name:ident) => {
        #[test]
        #[allow(non_snake_case)]
        fn $name() {
            let (vectors, expected) = load_vectors();
            let test_id = stringify!($name)
                .strip_prefix("test_")
                .unwrap_or(stringify!($name));

            let vec = vectors
                .iter()
                .find(|v| v.test_id == test_id)
                .unwrap_or_else(|| panic!("vector {} not found", test_id));
            let exp = expected
                .get(test_id)
                .unwrap_or_else(|| panic!("expected {} not found", test_id));

            let got = run_vector(vec);
            let want = expected_to_result(exp);
            assert_eq!(got, want, "{}: got={:?} expected={:?}", test_id, got, want);
        }
    };
}

conformance_test!(test_ULEB_ZERO);
conformance_test!(test_ULEB_ONE);
conformance_test!(test_ULEB_127);
conformance_test!(test_ULEB_128);
conformance_test!(test_ULEB_300);
conformance_test!(test_ULEB_16384);
conformance_test!(test_ULEB_MAX);
conformance_test!(test_ULEB_ZERO_PADDED);
conformance_test!(test_ULEB_ONE_PADDED);
conformance_test!(test_ULEB_128_PADDED);
conformance_test!(test_ULEB_MAX_PLUS_ONE);
conformance_test!(test_ULEB_SIX_BYTES);
conformance_test!(test_ULEB_UNTERMINATED_FIFTH);
conformance_test!(test_ULEB_TRUNCATED);
conformance_test!(test_ULEB_EMPTY);
conformance_test!(test_ULEB_TRAILING);
conformance_test!(test_LEN_ZERO);
conformance_test!(test_LEN_FIVE);
conformance_test!(test_LEN_NEG_ONE);
conformance_test!(test_LEN_I64_MIN);
conformance_test!(test_LEN_TRUNCATED);
conformance_test!(test_TAG_ZERO);
conformance_test!(test_TAG_129);
conformance_test!(test_TAG_PADDED);
conformance_test!(test_TAG_OVERFLOW);
conformance_test!(test_BOOL_FALSE);
conformance_test!(test_BOOL_TRUE);
conformance_test!(test_BOOL_BAD_PAYLOAD);
conformance_test!(test_BOOL_BAD_PAYLOAD_FF);
conformance_test!(test_OPTION_NONE);
conformance_test!(test_OPTION_SOME);
conformance_test!(test_OPTION_BAD_TAG);
conformance_test!(test_STRING_HELLO);
conformance_test!(test_STRING_EMPTY);
conformance_test!(test_STRING_BAD_UTF8);
conformance_test!(test_STRING_TRUNCATED);
conformance_test!(test_STRING_NEG_LEN);
conformance_test!(test_MAP_EMPTY);
conformance_test!(test_MAP_SORTED);
conformance_test!(test_MAP_UNSORTED);
conformance_test!(test_MAP_DUP_KEY);
conformance_test!(test_MAP_SERIALIZED_ORDER);
conformance_test!(test_MAP_TEXT_ORDER_BAD);
conformance_test!(test_MAP_TRUNCATED_VALUE);
conformance_test!(test_VEC_EMPTY);
conformance_test!(test_VEC_THREE);
conformance_test!(test_VEC_TRAILING);
conformance_test!(test_VEC_UNIT_AT_INPUT_SIZE);
conformance_test!(test_VEC_UNIT_HUGE_LEN);
conformance_test!(test_DEPTH_500_OK);
conformance_test!(test_DEPTH_501_BAD);
conformance_test!(test_DEPTH_501_TRUNCATED_BAD);
