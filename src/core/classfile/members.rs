use crate::core::classfile::attributes::Attribute;
use crate::core::classfile::constant_pool::ConstantPool;
use crate::utils::error::Result;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_VOLATILE: u16 = 0x0040;
pub const ACC_TRANSIENT: u16 = 0x0080;
pub const ACC_SYNTHETIC: u16 = 0x1000;
pub const ACC_ENUM: u16 = 0x4000;

/// Fields and methods share one record shape in the class file format.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub access_flags: u16,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes: Vec<Attribute>,
}

impl MemberInfo {
    /// Reads a `u16` count followed by that many member records.
    pub fn read_list<R: Read>(reader: &mut R, pool: &ConstantPool) -> Result<Vec<MemberInfo>> {
        let count = reader.read_u16::<BigEndian>()?;
        let mut members = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let access_flags = reader.read_u16::<BigEndian>()?;
            let name_index = reader.read_u16::<BigEndian>()?;
            let descriptor_index = reader.read_u16::<BigEndian>()?;
            let attributes = Attribute::read_list(reader, pool)?;

            tracing::debug!(
                "member {} {}",
                pool.utf8(name_index).unwrap_or("<unresolved>"),
                pool.utf8(descriptor_index).unwrap_or("<unresolved>")
            );

            members.push(MemberInfo {
                access_flags,
                name_index,
                descriptor_index,
                attributes,
            });
        }
        Ok(members)
    }

    pub fn name<'a>(&self, pool: &'a ConstantPool) -> Result<&'a str> {
        pool.utf8(self.name_index)
    }

    pub fn descriptor<'a>(&self, pool: &'a ConstantPool) -> Result<&'a str> {
        pool.utf8(self.descriptor_index)
    }
}

pub fn access_flag_names(flags: u16) -> String {
    let known = [
        (ACC_PUBLIC, "public"),
        (ACC_PRIVATE, "private"),
        (ACC_PROTECTED, "protected"),
        (ACC_STATIC, "static"),
        (ACC_FINAL, "final"),
        (ACC_VOLATILE, "volatile"),
        (ACC_TRANSIENT, "transient"),
        (ACC_SYNTHETIC, "synthetic"),
        (ACC_ENUM, "enum"),
    ];

    known
        .iter()
        .filter(|(flag, _)| flags & flag != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}
