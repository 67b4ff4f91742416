use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};
use tripsplit_application::{LedgerError, PaymentRecord, PaymentRecorder};

/// Appends recorded payments to a JSON-lines file.
pub struct JsonLinesPaymentLog {
    path: PathBuf,
}

impl JsonLinesPaymentLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PaymentRecorder for JsonLinesPaymentLog {
    fn record(&self, payment: &PaymentRecord) -> Result<(), LedgerError> {
        let mut line = serde_json::to_string(payment)
            .map_err(|err| LedgerError::Malformed(err.to_string()))?;
        line.push('\n');

        // A single append per record keeps lines whole.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;
        file.write_all(line.as_bytes())
            .map_err(|err| self.io_error(err))?;

        tracing::debug!(path = %self.path.display(), group = %payment.group, "Appended payment");
        Ok(())
    }
}
