use checker_demo::{ClassFile, InspectEngine, MemorySink};
use std::io::Cursor;
use tempfile::TempDir;

fn push_u16(bytes: &mut Vec<u8>, value: u16) {
    bytes.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(bytes: &mut Vec<u8>, value: u32) {
    bytes.extend_from_slice(&value.to_be_bytes());
}

fn push_utf8(bytes: &mut Vec<u8>, s: &str) {
    bytes.push(1u8);
    push_u16(bytes, s.len() as u16);
    bytes.extend_from_slice(s.as_bytes());
}

// A class shaped like the demo fixture: a greeter field, an empty method
// with a Code attribute, one interface, a SourceFile class attribute.
fn demo_class_bytes() -> Vec<u8> {
    let mut bytes = vec![];
    push_u32(&mut bytes, 0xCAFE_BABE);
    push_u16(&mut bytes, 0); // minor
    push_u16(&mut bytes, 52); // major

    push_u16(&mut bytes, 13); // constant_pool_count
    bytes.push(7u8); // 1: Class -> 2
    push_u16(&mut bytes, 2);
    push_utf8(&mut bytes, "ClassFileCheck"); // 2
    bytes.push(7u8); // 3: Class -> 4
    push_u16(&mut bytes, 4);
    push_utf8(&mut bytes, "BaseCheckClass"); // 4
    bytes.push(7u8); // 5: Class -> 6
    push_u16(&mut bytes, 6);
    push_utf8(&mut bytes, "java/io/Serializable"); // 6
    push_utf8(&mut bytes, "serialVersionUID"); // 7
    push_utf8(&mut bytes, "J"); // 8
    push_utf8(&mut bytes, "add"); // 9
    push_utf8(&mut bytes, "()I"); // 10
    push_utf8(&mut bytes, "Code"); // 11
    push_utf8(&mut bytes, "SourceFile"); // 12

    push_u16(&mut bytes, 0x0021); // access_flags
    push_u16(&mut bytes, 1); // this_class
    push_u16(&mut bytes, 3); // super_class
    push_u16(&mut bytes, 1); // interfaces_count
    push_u16(&mut bytes, 5);

    push_u16(&mut bytes, 1); // fields_count
    push_u16(&mut bytes, 0x001A); // private static final
    push_u16(&mut bytes, 7);
    push_u16(&mut bytes, 8);
    push_u16(&mut bytes, 0);

    push_u16(&mut bytes, 1); // methods_count
    push_u16(&mut bytes, 0x0004); // protected
    push_u16(&mut bytes, 9);
    push_u16(&mut bytes, 10);
    push_u16(&mut bytes, 1); // one method attribute: Code
    push_u16(&mut bytes, 11);
    push_u32(&mut bytes, 15); // attribute_length
    push_u16(&mut bytes, 1); // max_stack
    push_u16(&mut bytes, 1); // max_locals
    push_u32(&mut bytes, 3); // code_length
    bytes.extend_from_slice(&[0x10, 0x0B, 0xAC]); // bipush 11; ireturn
    push_u16(&mut bytes, 0); // exception_table_length
    push_u16(&mut bytes, 0); // nested attributes_count

    push_u16(&mut bytes, 1); // class attributes_count
    push_u16(&mut bytes, 12); // SourceFile
    push_u32(&mut bytes, 2);
    push_u16(&mut bytes, 2);

    bytes
}

#[test]
fn test_inspect_engine_summarizes_class_file() {
    let temp_dir = TempDir::new().unwrap();
    let class_path = temp_dir.path().join("ClassFileCheck.class");
    std::fs::write(&class_path, demo_class_bytes()).unwrap();

    let engine = InspectEngine::new(class_path);
    let sink = engine.run(MemorySink::new()).unwrap();

    assert_eq!(
        sink.lines(),
        [
            "class file version 52.0",
            "class: ClassFileCheck extends BaseCheckClass",
            "implements: java/io/Serializable",
            "constant pool entries: 12",
            "field: private static final serialVersionUID J",
            "method: protected add ()I",
            "class attribute: SourceFile",
        ]
    );
}

#[test]
fn test_method_code_attribute_is_materialized() {
    let class = ClassFile::read(&mut Cursor::new(demo_class_bytes())).unwrap();

    assert_eq!(class.methods.len(), 1);
    let attributes = &class.methods[0].attributes;
    assert_eq!(attributes.len(), 1);
    match &attributes[0] {
        checker_demo::core::classfile::Attribute::Code(code) => {
            assert_eq!(code.max_stack, 1);
            assert_eq!(code.max_locals, 1);
            assert_eq!(code.code, [0x10, 0x0B, 0xAC]);
            assert!(code.exception_table.is_empty());
            assert!(code.attributes.is_empty());
        }
        other => panic!("expected a Code attribute, got {:?}", other),
    }
}

#[test]
fn test_missing_class_file_surfaces_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let engine = InspectEngine::new(temp_dir.path().join("nope.class"));
    assert!(engine.run(MemorySink::new()).is_err());
}
