use crate::core::classfile::constant_pool::ConstantPool;
use crate::utils::error::{CheckerError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

const CONSTANT_VALUE: &str = "ConstantValue";
const CODE: &str = "Code";
const INNER_CLASSES: &str = "InnerClasses";
const SYNTHETIC: &str = "Synthetic";
const SIGNATURE: &str = "Signature";
const SOURCE_FILE: &str = "SourceFile";
const LINE_NUMBER_TABLE: &str = "LineNumberTable";
const DEPRECATED: &str = "Deprecated";
const RUNTIME_VISIBLE_ANNOTATIONS: &str = "RuntimeVisibleAnnotations";
const BOOTSTRAP_METHODS: &str = "BootstrapMethods";

#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    ConstantValue {
        constantvalue_index: u16,
    },
    Code(CodeAttribute),
    InnerClasses(Vec<InnerClass>),
    Synthetic,
    Signature {
        signature_index: u16,
    },
    SourceFile {
        sourcefile_index: u16,
    },
    LineNumberTable(Vec<LineNumberEntry>),
    Deprecated,
    RuntimeVisibleAnnotations(Vec<Annotation>),
    BootstrapMethods(Vec<BootstrapMethod>),
    /// Any attribute kind this reader does not materialize; the raw payload
    /// is kept so the stream stays positioned correctly.
    Unknown {
        name: String,
        info: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeAttribute {
    pub max_stack: u16,
    pub max_locals: u16,
    pub code: Vec<u8>,
    pub exception_table: Vec<ExceptionTableEntry>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionTableEntry {
    pub start_pc: u16,
    pub end_pc: u16,
    pub handler_pc: u16,
    pub catch_type: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InnerClass {
    pub inner_class_info_index: u16,
    pub outer_class_info_index: u16,
    pub inner_name_index: u16,
    pub inner_class_access_flags: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineNumberEntry {
    pub start_pc: u16,
    pub line_number: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapMethod {
    pub bootstrap_method_ref: u16,
    pub bootstrap_arguments: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub type_index: u16,
    pub element_value_pairs: Vec<ElementValuePair>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementValuePair {
    pub element_name_index: u16,
    pub value: ElementValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    Const {
        tag: u8,
        const_value_index: u16,
    },
    EnumConst {
        type_name_index: u16,
        const_name_index: u16,
    },
    ClassInfo {
        class_info_index: u16,
    },
}

impl Attribute {
    /// Reads a `u16` count followed by that many attributes.
    pub fn read_list<R: Read>(reader: &mut R, pool: &ConstantPool) -> Result<Vec<Attribute>> {
        let count = reader.read_u16::<BigEndian>()?;
        let mut attributes = Vec::with_capacity(count as usize);
        for _ in 0..count {
            attributes.push(Self::read(reader, pool)?);
        }
        Ok(attributes)
    }

    fn read<R: Read>(reader: &mut R, pool: &ConstantPool) -> Result<Attribute> {
        let name_index = reader.read_u16::<BigEndian>()?;
        let length = reader.read_u32::<BigEndian>()?;
        let name = pool.utf8(name_index)?;
        tracing::debug!("attribute {} ({} bytes)", name, length);

        let attribute = match name {
            CONSTANT_VALUE => Attribute::ConstantValue {
                constantvalue_index: reader.read_u16::<BigEndian>()?,
            },
            CODE => {
                let max_stack = reader.read_u16::<BigEndian>()?;
                let max_locals = reader.read_u16::<BigEndian>()?;
                let code_length = reader.read_u32::<BigEndian>()?;
                let mut code = vec![0u8; code_length as usize];
                reader.read_exact(&mut code)?;

                let exception_table_length = reader.read_u16::<BigEndian>()?;
                let mut exception_table = Vec::with_capacity(exception_table_length as usize);
                for _ in 0..exception_table_length {
                    exception_table.push(ExceptionTableEntry {
                        start_pc: reader.read_u16::<BigEndian>()?,
                        end_pc: reader.read_u16::<BigEndian>()?,
                        handler_pc: reader.read_u16::<BigEndian>()?,
                        catch_type: reader.read_u16::<BigEndian>()?,
                    });
                }

                let attributes = Self::read_list(reader, pool)?;
                Attribute::Code(CodeAttribute {
                    max_stack,
                    max_locals,
                    code,
                    exception_table,
                    attributes,
                })
            }
            INNER_CLASSES => {
                let number_of_classes = reader.read_u16::<BigEndian>()?;
                let mut classes = Vec::with_capacity(number_of_classes as usize);
                for _ in 0..number_of_classes {
                    classes.push(InnerClass {
                        inner_class_info_index: reader.read_u16::<BigEndian>()?,
                        outer_class_info_index: reader.read_u16::<BigEndian>()?,
                        inner_name_index: reader.read_u16::<BigEndian>()?,
                        inner_class_access_flags: reader.read_u16::<BigEndian>()?,
                    });
                }
                Attribute::InnerClasses(classes)
            }
            SYNTHETIC => Attribute::Synthetic,
            SIGNATURE => Attribute::Signature {
                signature_index: reader.read_u16::<BigEndian>()?,
            },
            SOURCE_FILE => Attribute::SourceFile {
                sourcefile_index: reader.read_u16::<BigEndian>()?,
            },
            LINE_NUMBER_TABLE => {
                let table_length = reader.read_u16::<BigEndian>()?;
                let mut table = Vec::with_capacity(table_length as usize);
                for _ in 0..table_length {
                    table.push(LineNumberEntry {
                        start_pc: reader.read_u16::<BigEndian>()?,
                        line_number: reader.read_u16::<BigEndian>()?,
                    });
                }
                Attribute::LineNumberTable(table)
            }
            DEPRECATED => Attribute::Deprecated,
            RUNTIME_VISIBLE_ANNOTATIONS => {
                let num_annotations = reader.read_u16::<BigEndian>()?;
                let mut annotations = Vec::with_capacity(num_annotations as usize);
                for _ in 0..num_annotations {
                    annotations.push(read_annotation(reader)?);
                }
                Attribute::RuntimeVisibleAnnotations(annotations)
            }
            BOOTSTRAP_METHODS => {
                let num_methods = reader.read_u16::<BigEndian>()?;
                let mut methods = Vec::with_capacity(num_methods as usize);
                for _ in 0..num_methods {
                    let bootstrap_method_ref = reader.read_u16::<BigEndian>()?;
                    let num_arguments = reader.read_u16::<BigEndian>()?;
                    let mut bootstrap_arguments = Vec::with_capacity(num_arguments as usize);
                    for _ in 0..num_arguments {
                        bootstrap_arguments.push(reader.read_u16::<BigEndian>()?);
                    }
                    methods.push(BootstrapMethod {
                        bootstrap_method_ref,
                        bootstrap_arguments,
                    });
                }
                Attribute::BootstrapMethods(methods)
            }
            _ => {
                let mut info = vec![0u8; length as usize];
                reader.read_exact(&mut info)?;
                Attribute::Unknown {
                    name: name.to_string(),
                    info,
                }
            }
        };

        Ok(attribute)
    }

    pub fn name(&self) -> &str {
        match self {
            Attribute::ConstantValue { .. } => CONSTANT_VALUE,
            Attribute::Code(_) => CODE,
            Attribute::InnerClasses(_) => INNER_CLASSES,
            Attribute::Synthetic => SYNTHETIC,
            Attribute::Signature { .. } => SIGNATURE,
            Attribute::SourceFile { .. } => SOURCE_FILE,
            Attribute::LineNumberTable(_) => LINE_NUMBER_TABLE,
            Attribute::Deprecated => DEPRECATED,
            Attribute::RuntimeVisibleAnnotations(_) => RUNTIME_VISIBLE_ANNOTATIONS,
            Attribute::BootstrapMethods(_) => BOOTSTRAP_METHODS,
            Attribute::Unknown { name, .. } => name,
        }
    }
}

fn read_annotation<R: Read>(reader: &mut R) -> Result<Annotation> {
    let type_index = reader.read_u16::<BigEndian>()?;
    let num_pairs = reader.read_u16::<BigEndian>()?;
    let mut element_value_pairs = Vec::with_capacity(num_pairs as usize);

    for _ in 0..num_pairs {
        let element_name_index = reader.read_u16::<BigEndian>()?;
        let tag = reader.read_u8()?;

        let value = match tag as char {
            's' | 'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z' => ElementValue::Const {
                tag,
                const_value_index: reader.read_u16::<BigEndian>()?,
            },
            'e' => ElementValue::EnumConst {
                type_name_index: reader.read_u16::<BigEndian>()?,
                const_name_index: reader.read_u16::<BigEndian>()?,
            },
            'c' => ElementValue::ClassInfo {
                class_info_index: reader.read_u16::<BigEndian>()?,
            },
            other => {
                return Err(CheckerError::malformed_class_file(format!(
                    "unsupported annotation element tag '{other}'"
                )))
            }
        };

        element_value_pairs.push(ElementValuePair {
            element_name_index,
            value,
        });
    }

    Ok(Annotation {
        type_index,
        element_value_pairs,
    })
}
