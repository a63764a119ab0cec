use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::share::{ShareError, ShareMessage, ShareSink};

#[derive(Serialize)]
struct OutboxRecord<'a> {
    shared_at: String,
    subject: &'a str,
    body: &'a str,
}

/// Appends each shared summary as one JSON line to an outbox file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn io_error(&self, source: std::io::Error) -> ShareError {
        ShareError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ShareSink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn share(&mut self, message: &ShareMessage) -> Result<(), ShareError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let record = OutboxRecord {
            shared_at: chrono::Utc::now().to_rfc3339(),
            subject: &message.subject,
            body: &message.body,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }
}
