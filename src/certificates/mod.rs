// Certificates module - lineage listing and SAN inspection

mod inspector;
mod store;

pub use inspector::CertificateInspector;
pub use store::CertificateStore;
