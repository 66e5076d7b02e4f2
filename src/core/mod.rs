pub mod concat;

pub use concat::{concat_files, copy_stream};
