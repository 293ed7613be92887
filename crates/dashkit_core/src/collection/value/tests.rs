use serde_json::json;

use crate::collection::{Callable, Key, Value};

#[test]
fn to_string_matches_library_conversion() {
	assert_eq!(Value::Null.to_string(), "");
	assert_eq!(Value::Undefined.to_string(), "");
	assert_eq!(Value::from(-0.0).to_string(), "-0");
	assert_eq!(Value::from(json!([1, 2, 3])).to_string(), "1,2,3");
	assert_eq!(Value::from(json!([1, null, [2, 3]])).to_string(), "1,,2,3");
	assert_eq!(Value::from(true).to_string(), "true");
	assert_eq!(Value::from(json!({"a": 1})).to_string(), "[object Object]");
}

#[test]
fn number_formatting_covers_special_and_exponent_forms() {
	assert_eq!(Value::from(3.0).to_string(), "3");
	assert_eq!(Value::from(1.5).to_string(), "1.5");
	assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
	assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
	assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
	assert_eq!(Value::from(1e21).to_string(), "1e+21");
	assert_eq!(Value::from(1.5e-7).to_string(), "1.5e-7");
	assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
}

#[test]
fn truthiness_follows_falsy_set() {
	for falsy in [Value::Undefined, Value::Null, Value::from(false), Value::from(0), Value::from(-0.0), Value::from(f64::NAN), Value::from("")] {
		assert!(!falsy.is_truthy(), "{falsy:?} should be falsy");
	}
	for truthy in [Value::from(true), Value::from(1), Value::from("yes"), Value::from(json!([])), Value::from(json!({}))] {
		assert!(truthy.is_truthy(), "{truthy:?} should be truthy");
	}
}

#[test]
fn json_projection_keeps_order_and_drops_undefined_to_null() {
	let value = Value::Array(vec![Value::from(json!({"b": 1, "a": 2.5})), Value::Undefined, Value::from(f64::NAN)]);
	let rendered = serde_json::to_string(&value).expect("value serializes");
	assert_eq!(rendered, r#"[{"b":1,"a":2.5},null,null]"#);
}

#[test]
fn callables_compare_by_identity() {
	let first = Callable::new("id", 1, |args| args.first().cloned().unwrap_or_default());
	let twin = Callable::new("id", 1, |args| args.first().cloned().unwrap_or_default());
	assert_eq!(first, first.clone());
	assert_ne!(first, twin);
	assert_eq!(first.call(&[Value::from(7)]), Value::from(7));
	assert_eq!(Value::from(first).to_string(), "function id() { [native code] }");
}

#[test]
fn keys_convert_to_values() {
	assert_eq!(Value::from(&Key::Index(2)), Value::from(2));
	assert_eq!(Value::from(&Key::name("a")), Value::from("a"));
}

#[test]
fn integers_at_the_i64_boundary_serialize_exactly() {
	let two_pow_63 = Value::from(9_223_372_036_854_775_808.0);
	assert_eq!(serde_json::to_string(&two_pow_63).expect("value serializes"), "9223372036854775808");

	let parsed = crate::collection::from_json_str("9223372036854775808").expect("json parses");
	assert_eq!(serde_json::to_string(&parsed).expect("value serializes"), "9223372036854775808");

	let min = Value::from(-9_223_372_036_854_775_808.0);
	assert_eq!(serde_json::to_string(&min).expect("value serializes"), "-9223372036854775808");
	assert_eq!(serde_json::to_string(&Value::from(9_007_199_254_740_993_i64)).expect("value serializes"), "9007199254740992");
}
