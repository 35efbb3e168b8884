//! TLS configuration and certificate loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;

#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("Certificate file not found: {}", .0.display())]
    CertificateNotFound(PathBuf),

    #[error("Private key file not found: {}", .0.display())]
    PrivateKeyNotFound(PathBuf),

    #[error("No PEM certificate in {}", .0.display())]
    NoCertificate(PathBuf),

    #[error("No PEM private key in {}", .0.display())]
    NoPrivateKey(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check that `cert_path` holds at least one certificate and `key_path` a
/// private key, so a bad deployment fails with a readable message.
pub fn check_pem_files(cert_path: &Path, key_path: &Path) -> Result<(), TlsError> {
    if !cert_path.exists() {
        return Err(TlsError::CertificateNotFound(cert_path.to_path_buf()));
    }
    if !key_path.exists() {
        return Err(TlsError::PrivateKeyNotFound(key_path.to_path_buf()));
    }

    let mut reader = BufReader::new(open(cert_path)?);
    let mut certs = 0;
    for cert in rustls_pemfile::certs(&mut reader) {
        cert.map_err(|source| read_error(cert_path, source))?;
        certs += 1;
    }
    if certs == 0 {
        return Err(TlsError::NoCertificate(cert_path.to_path_buf()));
    }

    let mut reader = BufReader::new(open(key_path)?);
    match rustls_pemfile::private_key(&mut reader) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(TlsError::NoPrivateKey(key_path.to_path_buf())),
        Err(source) => Err(read_error(key_path, source)),
    }
}

/// Load TLS configuration from certificate and key files.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, TlsError> {
    check_pem_files(cert_path, key_path)?;

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|source| read_error(cert_path, source))
}

fn open(path: &Path) -> Result<File, TlsError> {
    File::open(path).map_err(|source| read_error(path, source))
}

fn read_error(path: &Path, source: std::io::Error) -> TlsError {
    TlsError::Read {
        path: path.to_path_buf(),
        source,
    }
}
