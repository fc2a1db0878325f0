mod file;
mod memory;

pub use file::FileDataSource;
pub use memory::MemoryDataSource;
