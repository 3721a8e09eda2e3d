pub mod attributes;
pub mod constant_pool;
pub mod members;

use crate::utils::error::{CheckerError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

pub use attributes::Attribute;
pub use constant_pool::{Constant, ConstantPool};
pub use members::MemberInfo;

pub const CLASS_MAGIC: u32 = 0xCAFE_BABE;

/// A parsed JVM class file: header, constant pool, class info, interfaces,
/// members, and top-level attributes, in stream order.
#[derive(Debug, Clone)]
pub struct ClassFile {
    pub minor_version: u16,
    pub major_version: u16,
    pub constant_pool: ConstantPool,
    pub access_flags: u16,
    pub this_class: u16,
    pub super_class: u16,
    pub interfaces: Vec<u16>,
    pub fields: Vec<MemberInfo>,
    pub methods: Vec<MemberInfo>,
    pub attributes: Vec<Attribute>,
}

impl ClassFile {
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let magic = reader.read_u32::<BigEndian>()?;
        if magic != CLASS_MAGIC {
            return Err(CheckerError::malformed_class_file(format!(
                "bad magic number 0x{magic:08X}"
            )));
        }

        let minor_version = reader.read_u16::<BigEndian>()?;
        let major_version = reader.read_u16::<BigEndian>()?;
        tracing::debug!("class file version {}.{}", major_version, minor_version);

        let constant_pool_count = reader.read_u16::<BigEndian>()?;
        let constant_pool = ConstantPool::read(reader, constant_pool_count)?;

        let access_flags = reader.read_u16::<BigEndian>()?;
        let this_class = reader.read_u16::<BigEndian>()?;
        let super_class = reader.read_u16::<BigEndian>()?;

        let interfaces_count = reader.read_u16::<BigEndian>()?;
        let mut interfaces = Vec::with_capacity(interfaces_count as usize);
        for _ in 0..interfaces_count {
            interfaces.push(reader.read_u16::<BigEndian>()?);
        }

        let fields = MemberInfo::read_list(reader, &constant_pool)?;
        let methods = MemberInfo::read_list(reader, &constant_pool)?;
        let attributes = Attribute::read_list(reader, &constant_pool)?;

        Ok(Self {
            minor_version,
            major_version,
            constant_pool,
            access_flags,
            this_class,
            super_class,
            interfaces,
            fields,
            methods,
            attributes,
        })
    }

    pub fn class_name(&self) -> Result<&str> {
        self.constant_pool.class_name(self.this_class)
    }

    /// `None` when `super_class` is 0, which only `java/lang/Object` carries.
    pub fn super_class_name(&self) -> Result<Option<&str>> {
        if self.super_class == 0 {
            return Ok(None);
        }
        self.constant_pool.class_name(self.super_class).map(Some)
    }

    pub fn interface_names(&self) -> Result<Vec<&str>> {
        self.interfaces
            .iter()
            .map(|index| self.constant_pool.class_name(*index))
            .collect()
    }
}
