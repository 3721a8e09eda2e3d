use crate::utils::error::{CheckerError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

const TAG_UTF8: u8 = 1;
const TAG_INTEGER: u8 = 3;
const TAG_FLOAT: u8 = 4;
const TAG_LONG: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_CLASS: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_FIELDREF: u8 = 9;
const TAG_METHODREF: u8 = 10;
const TAG_INTERFACE_METHODREF: u8 = 11;
const TAG_NAME_AND_TYPE: u8 = 12;
const TAG_METHOD_HANDLE: u8 = 15;
const TAG_METHOD_TYPE: u8 = 16;
const TAG_INVOKE_DYNAMIC: u8 = 18;

#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Utf8(String),
    Integer(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    Class {
        name_index: u16,
    },
    String {
        string_index: u16,
    },
    FieldRef {
        class_index: u16,
        name_and_type_index: u16,
    },
    MethodRef {
        class_index: u16,
        name_and_type_index: u16,
    },
    InterfaceMethodRef {
        class_index: u16,
        name_and_type_index: u16,
    },
    NameAndType {
        name_index: u16,
        descriptor_index: u16,
    },
    MethodHandle {
        reference_kind: u8,
        reference_index: u16,
    },
    MethodType {
        descriptor_index: u16,
    },
    InvokeDynamic {
        bootstrap_method_attr_index: u16,
        name_and_type_index: u16,
    },
}

/// The class file's constant pool. Slots are 1-based; Long and Double
/// entries occupy two slots, the second of which is unusable.
#[derive(Debug, Clone)]
pub struct ConstantPool {
    entries: Vec<Option<Constant>>,
}

impl ConstantPool {
    pub fn read<R: Read>(reader: &mut R, count: u16) -> Result<Self> {
        let mut entries: Vec<Option<Constant>> = vec![None; count as usize];

        let mut index: usize = 1;
        while index < count as usize {
            let tag = reader.read_u8()?;
            let constant = match tag {
                TAG_UTF8 => {
                    let length = reader.read_u16::<BigEndian>()?;
                    let mut bytes = vec![0u8; length as usize];
                    reader.read_exact(&mut bytes)?;
                    let utf_str = std::str::from_utf8(&bytes).map_err(|e| {
                        CheckerError::malformed_class_file(format!(
                            "invalid UTF-8 in constant pool slot {index}: {e}"
                        ))
                    })?;
                    Constant::Utf8(utf_str.to_string())
                }
                TAG_INTEGER => Constant::Integer(reader.read_i32::<BigEndian>()?),
                TAG_FLOAT => Constant::Float(f32::from_bits(reader.read_u32::<BigEndian>()?)),
                TAG_LONG => {
                    let high = reader.read_u32::<BigEndian>()?;
                    let low = reader.read_u32::<BigEndian>()?;
                    Constant::Long((((high as u64) << 32) | low as u64) as i64)
                }
                TAG_DOUBLE => {
                    let high = reader.read_u32::<BigEndian>()?;
                    let low = reader.read_u32::<BigEndian>()?;
                    Constant::Double(f64::from_bits(((high as u64) << 32) | low as u64))
                }
                TAG_CLASS => Constant::Class {
                    name_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_STRING => Constant::String {
                    string_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_FIELDREF => Constant::FieldRef {
                    class_index: reader.read_u16::<BigEndian>()?,
                    name_and_type_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_METHODREF => Constant::MethodRef {
                    class_index: reader.read_u16::<BigEndian>()?,
                    name_and_type_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_INTERFACE_METHODREF => Constant::InterfaceMethodRef {
                    class_index: reader.read_u16::<BigEndian>()?,
                    name_and_type_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_NAME_AND_TYPE => Constant::NameAndType {
                    name_index: reader.read_u16::<BigEndian>()?,
                    descriptor_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_METHOD_HANDLE => Constant::MethodHandle {
                    reference_kind: reader.read_u8()?,
                    reference_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_METHOD_TYPE => Constant::MethodType {
                    descriptor_index: reader.read_u16::<BigEndian>()?,
                },
                TAG_INVOKE_DYNAMIC => Constant::InvokeDynamic {
                    bootstrap_method_attr_index: reader.read_u16::<BigEndian>()?,
                    name_and_type_index: reader.read_u16::<BigEndian>()?,
                },
                _ => {
                    return Err(CheckerError::malformed_class_file(format!(
                        "unknown constant pool tag {tag} at slot {index}"
                    )))
                }
            };

            tracing::debug!("constant pool slot {}: {:?}", index, constant);

            let wide = matches!(constant, Constant::Long(_) | Constant::Double(_));
            entries[index] = Some(constant);
            index += if wide { 2 } else { 1 };
        }

        Ok(Self { entries })
    }

    /// Number of slots declared by the header, excluding slot 0.
    pub fn entry_count(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn get(&self, index: u16) -> Option<&Constant> {
        self.entries.get(index as usize).and_then(Option::as_ref)
    }

    pub fn utf8(&self, index: u16) -> Result<&str> {
        match self.get(index) {
            Some(Constant::Utf8(s)) => Ok(s),
            _ => Err(CheckerError::malformed_class_file(format!(
                "constant pool slot {index} is not a Utf8 entry"
            ))),
        }
    }

    pub fn class_name(&self, index: u16) -> Result<&str> {
        match self.get(index) {
            Some(Constant::Class { name_index }) => self.utf8(*name_index),
            _ => Err(CheckerError::malformed_class_file(format!(
                "constant pool slot {index} is not a Class entry"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn push_u16(bytes: &mut Vec<u8>, value: u16) {
        bytes.extend_from_slice(&value.to_be_bytes());
    }

    fn push_utf8(bytes: &mut Vec<u8>, s: &str) {
        bytes.push(TAG_UTF8);
        push_u16(bytes, s.len() as u16);
        bytes.extend_from_slice(s.as_bytes());
    }

    #[test]
    fn test_reads_class_and_utf8_entries() {
        let mut bytes = vec![];
        bytes.push(TAG_CLASS);
        push_u16(&mut bytes, 2);
        push_utf8(&mut bytes, "Demo");

        let pool = ConstantPool::read(&mut Cursor::new(bytes), 3).unwrap();
        assert_eq!(pool.entry_count(), 2);
        assert_eq!(pool.get(1), Some(&Constant::Class { name_index: 2 }));
        assert_eq!(pool.utf8(2).unwrap(), "Demo");
        assert_eq!(pool.class_name(1).unwrap(), "Demo");
    }

    #[test]
    fn test_long_occupies_two_slots() {
        let mut bytes = vec![];
        bytes.push(TAG_LONG);
        bytes.extend_from_slice(&(-2i64).to_be_bytes());
        push_utf8(&mut bytes, "after");

        let pool = ConstantPool::read(&mut Cursor::new(bytes), 4).unwrap();
        assert_eq!(pool.get(1), Some(&Constant::Long(-2)));
        assert_eq!(pool.get(2), None);
        assert_eq!(pool.utf8(3).unwrap(), "after");
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let bytes = vec![2u8, 0, 0];
        let result = ConstantPool::read(&mut Cursor::new(bytes), 2);
        assert!(matches!(
            result,
            Err(CheckerError::MalformedClassFile { .. })
        ));
    }

    #[test]
    fn test_truncated_pool_surfaces_io_error() {
        let bytes = vec![TAG_CLASS, 0];
        let result = ConstantPool::read(&mut Cursor::new(bytes), 2);
        assert!(matches!(result, Err(CheckerError::IoError(_))));
    }

    #[test]
    fn test_dangling_lookup_is_rejected() {
        let mut bytes = vec![];
        push_utf8(&mut bytes, "only");
        let pool = ConstantPool::read(&mut Cursor::new(bytes), 2).unwrap();
        assert!(pool.utf8(9).is_err());
        assert!(pool.class_name(1).is_err());
    }
}
