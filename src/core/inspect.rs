use crate::core::classfile::members::access_flag_names;
use crate::core::classfile::ClassFile;
use crate::core::{MessageSink, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Parses a class file and prints its structural summary through the sink.
pub struct InspectEngine {
    path: PathBuf,
}

impl InspectEngine {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn run<S: MessageSink>(&self, mut sink: S) -> Result<S> {
        tracing::debug!("Reading class file: {}", self.path.display());
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);

        let class = ClassFile::read(&mut reader)?;
        write_summary(&class, &mut sink)?;
        Ok(sink)
    }
}

pub fn write_summary<S: MessageSink>(class: &ClassFile, sink: &mut S) -> Result<()> {
    sink.write_line(&format!(
        "class file version {}.{}",
        class.major_version, class.minor_version
    ))?;

    let this_name = class.class_name()?;
    match class.super_class_name()? {
        Some(super_name) => {
            sink.write_line(&format!("class: {} extends {}", this_name, super_name))?
        }
        None => sink.write_line(&format!("class: {}", this_name))?,
    }

    for interface in class.interface_names()? {
        sink.write_line(&format!("implements: {}", interface))?;
    }

    sink.write_line(&format!(
        "constant pool entries: {}",
        class.constant_pool.entry_count()
    ))?;

    let pool = &class.constant_pool;
    for field in &class.fields {
        sink.write_line(&member_line("field", field.access_flags, field.name(pool)?, field.descriptor(pool)?))?;
    }
    for method in &class.methods {
        sink.write_line(&member_line(
            "method",
            method.access_flags,
            method.name(pool)?,
            method.descriptor(pool)?,
        ))?;
    }

    for attribute in &class.attributes {
        sink.write_line(&format!("class attribute: {}", attribute.name()))?;
    }

    Ok(())
}

fn member_line(kind: &str, access_flags: u16, name: &str, descriptor: &str) -> String {
    let flags = access_flag_names(access_flags);
    if flags.is_empty() {
        format!("{}: {} {}", kind, name, descriptor)
    } else {
        format!("{}: {} {} {}", kind, flags, name, descriptor)
    }
}
