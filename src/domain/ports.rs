use crate::utils::error::Result;

/// Destination for the demo's output lines. Console in production, an
/// in-memory buffer in tests.
pub trait MessageSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn message(&self) -> &str;
}

/// Default numeric operations. `add` is a placeholder meant to be overridden;
/// `base_add` is the real sum and wraps on overflow.
pub trait BaseChecker {
    fn add(&self) -> i32 {
        0
    }

    fn base_add(&self, x: i32, y: i32) -> i32 {
        x.wrapping_add(y)
    }
}
