//! End-to-end keyword translation and localized formatting.

use piyathon_fmt::{to_localized, to_standard, KeywordTable, Pipeline};
use rstest::rstest;

const MIXED_LOCALIZED: &str = include_str!("fixtures/mixed.pi");
const MIXED_STANDARD: &str = include_str!("fixtures/mixed.py");
const BADLY_FORMATTED: &str = include_str!("fixtures/badly_formatted.pi");

fn table() -> &'static KeywordTable {
    KeywordTable::builtin()
}

#[rstest]
#[case("ถ้า x > 0:\n    พิมพ์(\"Hello\")", "if x > 0:\n    print(\"Hello\")")]
#[case("พิมพ์(\"ถ้า และ หรือ\")", "print(\"ถ้า และ หรือ\")")]
#[case("ค่า = จริง และ ไม่ เท็จ", "ค่า = True and not False")]
#[case("สำหรับ i ใน ช่วง(10):", "for i in range(10):")]
#[case("x = [ความยาว(a),ผลรวม(b)]", "x = [len(a),sum(b)]")]
#[case("# ถ้า และ หรือ", "# ถ้า และ หรือ")]
#[case("ถ้าx = obj.พิมพ์", "ถ้าx = obj.พิมพ์")]
#[case("", "")]
fn test_translation_both_ways(#[case] localized: &str, #[case] standard: &str) {
    assert_eq!(to_standard(localized, table()), standard);
    assert_eq!(to_localized(standard, table()), localized);
}

#[test]
fn test_mixed_document_to_standard() {
    assert_eq!(to_standard(MIXED_LOCALIZED, table()), MIXED_STANDARD);
}

#[test]
fn test_mixed_document_round_trip() {
    let standard = to_standard(MIXED_LOCALIZED, table());
    assert_eq!(to_localized(&standard, table()), MIXED_LOCALIZED);
}

#[test]
fn test_mixed_document_keeps_docstring_bytes() {
    let docstring = "\"\"\"\n    ถ้า in docstring\n    multiple lines\n    \"\"\"";
    assert!(MIXED_LOCALIZED.contains(docstring));
    assert!(to_standard(MIXED_LOCALIZED, table()).contains(docstring));
    assert!(to_localized(MIXED_STANDARD, table()).contains(docstring));
}

#[test]
fn test_badly_formatted_document() {
    let pipeline = Pipeline::new(table());
    let formatted = pipeline.format_localized(BADLY_FORMATTED).unwrap();
    assert_eq!(
        formatted,
        "ถ้า x > 0:\n    พิมพ์(\"Hello\")  # Badly formatted code\n    สำหรับ i ใน ช่วง(10):\n        พิมพ์(i)\n"
    );
}

#[test]
fn test_formatting_a_formatted_document_is_a_no_op() {
    let pipeline = Pipeline::new(table());
    assert_eq!(
        pipeline.format_localized(MIXED_LOCALIZED).unwrap(),
        MIXED_LOCALIZED
    );
}

#[test]
fn test_custom_table_from_yaml() {
    let table = KeywordTable::from_yaml_str(
        "keywords:\n  - localized: ถ้า\n    standard: if\n  - localized: พิมพ์\n    standard: print\n",
    )
    .unwrap();
    assert_eq!(
        to_standard("ถ้า x:\n    พิมพ์(จริง)", &table),
        "if x:\n    print(จริง)"
    );
}
