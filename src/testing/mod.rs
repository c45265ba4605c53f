
pub use memory_filesystem::MemoryFilesystem;
