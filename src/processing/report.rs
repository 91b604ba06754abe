use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Summary of a single conceal run, written as JSON on request.
#[derive(Debug, Clone, Serialize)]
pub struct ConcealReport {
    pub input_path: String,
    pub output_path: String,
    pub output_format: String,
    pub width: u32,
    pub height: u32,
    pub mode: String,
    pub message_length: usize,
    /// Byte slots available, terminator included.
    pub capacity: usize,
    pub pixels_consumed: usize,
    pub verified: bool,
    pub created_at: String, // RFC 3339, local time
}

impl ConcealReport {
    /// Fraction of the byte slots used by the message and its terminator.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.message_length + 1) as f64 / self.capacity as f64
    }

    pub fn export_to_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let output = serde_json::json!({
            "report": self,
            "utilization": self.utilization(),
        });

        let json_string = serde_json::to_string_pretty(&output)?;
        let mut file = File::create(path)?;
        file.write_all(json_string.as_bytes())?;

        Ok(())
    }
}
