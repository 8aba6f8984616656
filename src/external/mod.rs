// External tool integrations - openssl and certbot wrappers

mod certbot;
mod openssl_x509;

pub use certbot::Certbot;
pub use openssl_x509::OpensslX509;
