use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Global metrics instance
pub static METRICS: Lazy<Mutex<Metrics>> = Lazy::new(|| Mutex::new(Metrics::new()));

/// Session metrics tracker
#[derive(Debug, Default)]
pub struct Metrics {
    pub uploads_attempted: u64,
    pub uploads_successful: u64,
    pub uploads_failed: u64,
    pub uploads_cleared: u64,
    pub total_records_parsed: u64,
    pub charts_rendered: u64,
    pub processing_times: HashMap<String, Duration>,
    pub start_time: Option<Instant>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_upload_attempt(&mut self) {
        self.uploads_attempted += 1;
    }

    pub fn record_upload_success(&mut self, records: u64) {
        self.uploads_successful += 1;
        self.total_records_parsed += records;
    }

    pub fn record_upload_failure(&mut self) {
        self.uploads_failed += 1;
    }

    pub fn record_upload_cleared(&mut self) {
        self.uploads_cleared += 1;
    }

    pub fn record_chart_render(&mut self) {
        self.charts_rendered += 1;
    }

    pub fn record_processing_time(&mut self, operation: String, duration: Duration) {
        self.processing_times.insert(operation, duration);
    }

    pub fn get_total_duration(&self) -> Duration {
        self.start_time
            .map(|start| start.elapsed())
            .unwrap_or_default()
    }

    pub fn print_summary(&self) {
        let duration = self.get_total_duration();
        println!("\n========== Session Metrics Summary ==========");
        println!("Total Duration: {:.2?}", duration);
        println!("Uploads Attempted: {}", self.uploads_attempted);
        println!("Uploads Successful: {}", self.uploads_successful);
        println!("Uploads Failed: {}", self.uploads_failed);
        println!("Uploads Cleared: {}", self.uploads_cleared);
        println!("Records Parsed: {}", self.total_records_parsed);
        println!("Charts Rendered: {}", self.charts_rendered);

        if !self.processing_times.is_empty() {
            println!("\nProcessing Times:");
            for (op, duration) in &self.processing_times {
                println!("  {}: {:.2?}", op, duration);
            }
        }
        println!("=============================================\n");
    }
}

/// Helper macro to time an operation
#[macro_export]
macro_rules! time_operation {
    ($name:expr, $op:expr) => {{
        let start = std::time::Instant::now();
        let result = $op;
        let duration = start.elapsed();
        $crate::metrics::METRICS
            .lock()
            .record_processing_time($name.to_string(), duration);
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_counters() {
        let mut metrics = Metrics::new();
        metrics.record_upload_attempt();
        metrics.record_upload_success(10);
        metrics.record_upload_attempt();
        metrics.record_upload_failure();
        metrics.record_upload_cleared();

        assert_eq!(metrics.uploads_attempted, 2);
        assert_eq!(metrics.uploads_successful, 1);
        assert_eq!(metrics.uploads_failed, 1);
        assert_eq!(metrics.uploads_cleared, 1);
        assert_eq!(metrics.total_records_parsed, 10);
    }
}
