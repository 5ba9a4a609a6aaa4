//! Persisting an extracted index as JSON and reading it back.
#![cfg(feature = "interchange")]

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use identdex::base::{LocationRef, SourceSpan};
use identdex::hir::{BindingKind, IdentifierIndex, IdentifierRecord, Namespace};
use smol_str::SmolStr;

fn sample() -> IdentifierIndex {
    let span = |line, start, end| SourceSpan::on_line("src/Main.hs", line, start, end);
    IdentifierIndex::from_pairs([
        (
            span(2, 1, 4),
            IdentifierRecord {
                name: SmolStr::new("main"),
                owning_module: Some(SmolStr::new("Main")),
                owning_package: Some(SmolStr::new("main")),
                namespace: Namespace::Value,
                resolved_type: Some("IO ()".to_string()),
                definition: LocationRef::Precise(span(2, 1, 4)),
                binding: BindingKind::Binding,
            },
        ),
        (
            span(2, 8, 15),
            IdentifierRecord {
                name: SmolStr::new("putStrLn"),
                owning_module: Some(SmolStr::new("System.IO")),
                owning_package: Some(SmolStr::new("base")),
                namespace: Namespace::Value,
                resolved_type: Some("String -> IO ()".to_string()),
                definition: LocationRef::opaque("no location info"),
                binding: BindingKind::Reference,
            },
        ),
        (
            SourceSpan::new("src/Main.hs", 1, 1, 3, 9),
            IdentifierRecord {
                name: SmolStr::new("a"),
                owning_module: None,
                owning_package: None,
                namespace: Namespace::TypeVariable,
                resolved_type: None,
                definition: LocationRef::Precise(span(1, 12, 12)),
                binding: BindingKind::Binding,
            },
        ),
    ])
}

#[test]
fn test_json_string_roundtrip() {
    let index = sample();
    let json = index.to_json().unwrap();
    assert_eq!(IdentifierIndex::from_json(&json).unwrap(), index);
}

#[test]
fn test_serialized_form_is_ordered_pairs() {
    let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
    let pairs = value.as_array().unwrap();

    assert_eq!(pairs.len(), 3);
    assert!(pairs.iter().all(|p| p.as_array().map(Vec::len) == Some(2)));
    assert_eq!(pairs[0][0]["start_line"], 1);
    assert_eq!(pairs[0][1]["name"], "a");
    assert_eq!(pairs[2][1]["name"], "putStrLn");
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Main.idx.json");
    let index = sample();

    let mut writer = BufWriter::new(File::create(&path).unwrap());
    index.write_json(&mut writer).unwrap();
    writer.flush().unwrap();

    let restored = IdentifierIndex::read_json(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(restored, index);
    assert_eq!(restored.lookup_at(2, 10).len(), 2);
    assert_eq!(restored.innermost_at(2, 10).unwrap().1.name, "putStrLn");
}

#[test]
fn test_duplicate_spans_in_input_keep_last() {
    let json = r#"[
        [{"file":"A.hs","start_line":1,"start_col":1,"end_line":1,"end_col":1},
         {"name":"x","owning_module":null,"owning_package":null,"namespace":"Value",
          "resolved_type":null,"definition":{"Opaque":"d"},"binding":"Binding"}],
        [{"file":"A.hs","start_line":1,"start_col":1,"end_line":1,"end_col":1},
         {"name":"y","owning_module":null,"owning_package":null,"namespace":"Value",
          "resolved_type":null,"definition":{"Opaque":"d"},"binding":"Reference"}]
    ]"#;

    let index = IdentifierIndex::from_json(json).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.records().next().unwrap().name, "y");
}
