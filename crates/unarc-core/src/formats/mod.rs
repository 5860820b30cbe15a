//! Archive format implementations.

pub mod common;
pub mod detect;
pub mod tar;
pub mod traits;
pub mod zip;

pub use tar::TarGzArchive;
pub use traits::ArchiveFormat;
pub use zip::ZipArchive;
