//! Integration tests for tagpack
//!
//! These tests exercise the full encode/decode path through a stream.

use tagpack::{
    Argument, Array, DecodeConfig, ElementType, Error, MemoryStream, Struct, StructBuilder, Text,
    TypeTag, Value, WireRead, decode, decode_with, encoded_len, from_bytes, to_bytes,
};

fn roundtrip(arg: &Argument) -> Argument {
    let mut stream = MemoryStream::new();
    arg.write(&mut stream).unwrap();
    let decoded = decode(&mut stream).unwrap();
    assert!(stream.is_empty(), "decoder left {} bytes", stream.len());
    decoded
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn roundtrip_int32() {
    let decoded = roundtrip(&Argument::new("Base", 555i32));
    assert_eq!(decoded.type_tag(), TypeTag::Int32);
    assert_eq!(decoded.name(), "Base");
    assert_eq!(*decoded.get::<i32>().unwrap(), 555);

    let decoded = roundtrip(&Argument::new("min", i32::MIN));
    assert_eq!(*decoded.get::<i32>().unwrap(), i32::MIN);
}

#[test]
fn roundtrip_uint64() {
    let decoded = roundtrip(&Argument::new("Base", 10u64));
    assert_eq!(decoded.type_tag(), TypeTag::Uint64);
    assert_eq!(*decoded.get::<u64>().unwrap(), 10);

    let decoded = roundtrip(&Argument::new("max", u64::MAX));
    assert_eq!(*decoded.get::<u64>().unwrap(), u64::MAX);
}

#[test]
fn roundtrip_float64() {
    let decoded = roundtrip(&Argument::new("Base", 555.0));
    assert_eq!(decoded.type_tag(), TypeTag::Float64);
    assert_eq!(*decoded.get::<f64>().unwrap(), 555.0);

    let decoded = roundtrip(&Argument::new("pi", std::f64::consts::PI));
    assert_eq!(*decoded.get::<f64>().unwrap(), std::f64::consts::PI);
}

#[test]
fn roundtrip_string() {
    let decoded = roundtrip(&Argument::new("Base", "meme string"));
    assert_eq!(decoded.type_tag(), TypeTag::String);
    assert_eq!(decoded.get::<str>().unwrap(), "meme string");

    let decoded = roundtrip(&Argument::new("utf8", "hello 世界"));
    assert_eq!(decoded.get::<str>().unwrap(), "hello 世界");

    let decoded = roundtrip(&Argument::new("", ""));
    assert_eq!(decoded.name(), "");
    assert_eq!(decoded.get::<str>().unwrap(), "");
}

#[test]
fn roundtrip_blob() {
    let content: Vec<u8> = (0..=255).collect();
    let decoded = roundtrip(&Argument::new("payload", content.clone()));
    assert_eq!(decoded.type_tag(), TypeTag::Blob);
    assert_eq!(decoded.get::<[u8]>().unwrap(), content.as_slice());

    let decoded = roundtrip(&Argument::new("empty", Vec::<u8>::new()));
    assert!(decoded.get::<[u8]>().unwrap().is_empty());
}

// =============================================================================
// Arrays
// =============================================================================

#[test]
fn roundtrip_array_int32() {
    let decoded = roundtrip(&Argument::new("arr_arg", vec![13i32, 14, 88]));
    assert_eq!(decoded.type_tag(), TypeTag::Array);
    assert_eq!(decoded.name(), "arr_arg");

    let arr = decoded.get::<Array>().unwrap();
    assert_eq!(arr.element_type(), ElementType::Int32);
    assert_eq!(decoded.get::<[i32]>().unwrap(), &[13, 14, 88]);
}

#[test]
fn roundtrip_array_each_element_type() {
    let decoded = roundtrip(&Argument::new("u", vec![1u64, u64::MAX, 0]));
    assert_eq!(decoded.get::<[u64]>().unwrap(), &[1, u64::MAX, 0]);

    let decoded = roundtrip(&Argument::new("f", vec![0.5, -1.25]));
    assert_eq!(decoded.get::<[f64]>().unwrap(), &[0.5, -1.25]);

    let names = vec!["alpha".to_string(), String::new(), "gamma".to_string()];
    let decoded = roundtrip(&Argument::new("s", names.clone()));
    let expected: Vec<Text> = names.iter().map(|n| Text::from(n.as_str())).collect();
    assert_eq!(decoded.get::<[Text]>().unwrap(), expected.as_slice());
}

#[test]
fn roundtrip_array_of_structs() {
    let rows: Vec<Struct> = (0..3i32)
        .map(|i| {
            Struct::from(vec![
                Argument::new("id", i),
                Argument::new("label", format!("row{i}")),
            ])
        })
        .collect();
    let decoded = roundtrip(&Argument::new("rows", rows.clone()));

    let decoded_rows = decoded.get::<[Struct]>().unwrap();
    assert_eq!(decoded_rows, rows.as_slice());
    assert_eq!(decoded_rows[2].field::<str>("label").unwrap(), "row2");
}

#[test]
fn roundtrip_empty_array() {
    let decoded = roundtrip(&Argument::new("none", Array::empty(ElementType::String)));
    let arr = decoded.get::<Array>().unwrap();
    assert!(arr.is_empty());
    assert_eq!(arr.element_type(), ElementType::String);
}

#[test]
fn roundtrip_non_utf8_strings() {
    let raw = Text::from(vec![0xE9u8, 0x41, 0xFF]);
    let root = StructBuilder::create()
        .with(vec![0xFFu8], 1i32)
        .with("s", raw.clone())
        .with("list", Array::from(vec![raw.clone(), Text::from("ok")]))
        .build(vec![0xC0u8, 0x80]);

    let decoded = roundtrip(&root);
    assert_eq!(decoded, root);
    assert_eq!(decoded.name().as_bytes(), &[0xC0, 0x80]);

    let s = decoded.get::<Struct>().unwrap();
    assert_eq!(*s.field::<i32>([0xFFu8]).unwrap(), 1);
    assert_eq!(s.field::<Text>("s").unwrap(), &raw);
    assert!(matches!(s.field::<str>("s").unwrap_err(), Error::InvalidUtf8));
    assert_eq!(s.field::<[Text]>("list").unwrap()[1], "ok");
}

// =============================================================================
// Structs
// =============================================================================

#[test]
fn roundtrip_builder_scenario() {
    let root = StructBuilder::create()
        .with("a", 1i32)
        .add(StructBuilder::create().with("x", "hi").build("b"))
        .build("root");

    let decoded = roundtrip(&root);
    assert_eq!(decoded.name(), "root");

    let s = decoded.get::<Struct>().unwrap();
    assert_eq!(*s.field::<i32>("a").unwrap(), 1);
    let b = s.field::<Struct>("b").unwrap();
    assert_eq!(b.field::<str>("x").unwrap(), "hi");
}

#[test]
fn roundtrip_mixed_struct_preserves_order() {
    let root = StructBuilder::create()
        .with("count", 3u64)
        .with("ratio", 0.75)
        .with("title", "config")
        .with("raw", vec![1u8, 2, 3])
        .with("samples", vec![5i32, 6])
        .add(
            StructBuilder::create()
                .with("inner", -4i32)
                .with("tags", vec!["a".to_string()])
                .build("nested"),
        )
        .with("dup", 1i32)
        .with("dup", 2i32)
        .build("root");

    let decoded = roundtrip(&root);
    assert_eq!(decoded, root);

    let s = decoded.get::<Struct>().unwrap();
    let shape: Vec<(&str, TypeTag)> = s
        .iter()
        .map(|f| (f.name().to_str().unwrap(), f.type_tag()))
        .collect();
    assert_eq!(
        shape,
        vec![
            ("count", TypeTag::Uint64),
            ("ratio", TypeTag::Float64),
            ("title", TypeTag::String),
            ("raw", TypeTag::Blob),
            ("samples", TypeTag::Array),
            ("nested", TypeTag::Struct),
            ("dup", TypeTag::Int32),
            ("dup", TypeTag::Int32),
        ]
    );
    assert_eq!(*s.field::<i32>("dup").unwrap(), 1);
}

#[test]
fn lookup_nested_path() {
    let root = StructBuilder::create()
        .add(
            StructBuilder::create()
                .add(StructBuilder::create().with("rate", 16000u64).build("audio"))
                .build("model"),
        )
        .build("root");
    let decoded = roundtrip(&root);

    let s = decoded.get::<Struct>().unwrap();
    let rate = s.lookup("model.audio.rate").unwrap();
    assert_eq!(*rate.get::<u64>().unwrap(), 16000);
}

#[test]
fn release_after_decode() {
    let root = StructBuilder::create()
        .with("keep", 1i32)
        .with("take", "moved")
        .with("take", "second")
        .build("root");

    let Value::Struct(mut s) = roundtrip(&root).into_value() else {
        panic!("expected struct");
    };
    let taken = s.release("take").unwrap();
    assert_eq!(taken.get::<str>().unwrap(), "moved");
    assert_eq!(s.field::<str>("take").unwrap(), "second");

    s.release("take").unwrap();
    assert!(matches!(
        s.field::<str>("take").unwrap_err(),
        Error::FieldNotFound { .. }
    ));
    assert!(matches!(
        s.release("take").unwrap_err(),
        Error::FieldNotFound { .. }
    ));
    assert_eq!(s.len(), 1);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn wrong_type_is_reported() {
    let decoded = roundtrip(&Argument::new("n", 1i32));
    assert!(matches!(
        decoded.get::<f64>().unwrap_err(),
        Error::TypeMismatch {
            actual: TypeTag::Int32,
            ..
        }
    ));
    assert!(decoded.get::<[i32]>().is_err());
}

#[test]
fn unknown_tags_fail_cleanly() {
    for tag in [6u8, 8, 0x7F, 0xFF] {
        let err = from_bytes(&[tag, 0, 0]).unwrap_err();
        assert!(matches!(err, Error::UnknownTypeTag(t) if t == tag));
    }
}

#[test]
fn truncated_nested_value() {
    let root = StructBuilder::create()
        .with("samples", vec![1.0, 2.0, 3.0])
        .build("root");
    let bytes = to_bytes(&root).unwrap();

    let err = from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(matches!(err, Error::TruncatedStream));
}

#[test]
fn decode_limits() {
    let rows = vec![Struct::new(); 5];
    let bytes = to_bytes(&Argument::new("rows", rows)).unwrap();

    let cfg = DecodeConfig {
        max_items: 4,
        ..DecodeConfig::default()
    };
    let err = decode_with(&mut bytes.as_slice(), &cfg).unwrap_err();
    assert!(matches!(
        err,
        Error::LimitExceeded {
            what: "array elements",
            ..
        }
    ));
    assert!(decode(&mut bytes.as_slice()).is_ok());
}

#[test]
fn encode_and_decode_agree_on_depth() {
    let wrap = |arg: Argument, levels: usize| {
        (0..levels).fold(arg, |inner, i| {
            StructBuilder::create().add(inner).build(format!("l{i}"))
        })
    };
    let max = DecodeConfig::DEFAULT_MAX_DEPTH;

    let deepest = wrap(Argument::new("leaf", 1i32), max);
    assert_eq!(roundtrip(&deepest), deepest);

    let too_deep = wrap(Argument::new("leaf", 1i32), max + 1);
    assert!(matches!(
        to_bytes(&too_deep).unwrap_err(),
        Error::LimitExceeded { what: "depth", .. }
    ));

    // arrays are not a level; their struct elements are
    let rows = Argument::new("rows", vec![Struct::new()]);
    assert!(to_bytes(&wrap(rows.clone(), max - 1)).is_ok());
    assert!(to_bytes(&wrap(rows, max)).is_err());
}

#[test]
fn read_replaces_previous_contents() {
    let mut stream = MemoryStream::new();
    StructBuilder::create()
        .with("new", 2i32)
        .build("fresh")
        .write(&mut stream)
        .unwrap();
    assert_eq!(stream.read_fixed::<u8>().unwrap(), TypeTag::Struct as u8);

    let mut arg = StructBuilder::create().with("old", 1i32).build("stale");
    arg.read(&mut stream).unwrap();

    let names: Vec<&Text> = arg.get::<Struct>().unwrap().iter().map(Argument::name).collect();
    assert_eq!(names, vec!["new"]);
}

// =============================================================================
// Byte helpers
// =============================================================================

#[test]
fn encoded_len_agrees_with_bytes() {
    let root = StructBuilder::create()
        .with("name", "x")
        .with("values", vec![1u64, 2])
        .with("blob", vec![0u8; 33])
        .build("root");

    let bytes = to_bytes(&root).unwrap();
    assert_eq!(bytes.len(), encoded_len(&root));
    assert_eq!(from_bytes(&bytes).unwrap(), root);
}

#[test]
fn io_cursor_as_stream() {
    let mut cursor = std::io::Cursor::new(Vec::new());
    Argument::new("c", 9u64).write(&mut cursor).unwrap();
    cursor.set_position(0);

    let decoded = decode(&mut cursor).unwrap();
    assert_eq!(*decoded.get::<u64>().unwrap(), 9);
}
