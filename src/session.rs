//! Per-session state: the two most recent uploads plus the bucket selection.
//! Each upload event replaces its slot wholesale; nothing is merged and no
//! history is kept.

use crate::buckets::BucketSelection;
use crate::charts::environment::{self, EnvironmentCharts};
use crate::charts::{particles, ChartSpec};
use crate::config::DashboardConfig;
use crate::data_models::DataTable;
use crate::errors::{ChartError, UploadError};
use crate::metrics::METRICS;
use crate::parsers::csv_parser::parse_table;
use crate::upload::decode_upload;
use chrono::{DateTime, Utc};
use log::info;

pub const DATALOGGER_SLOT: &str = "datalogger";
pub const PARTICLE_COUNTER_SLOT: &str = "particle counter";

/// One upload widget firing: a new payload, or `None` when cleared.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    Datalogger(Option<String>),
    ParticleCounter(Option<String>),
}

#[derive(Debug, Default)]
pub struct SessionState {
    datalogger: Option<DataTable>,
    particle_counter: Option<DataTable>,
    selection: BucketSelection,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an upload event. A failed decode or parse leaves the slot's
    /// previous value untouched.
    pub fn apply(&mut self, event: UploadEvent) -> Result<(), UploadError> {
        match event {
            UploadEvent::Datalogger(payload) => {
                self.datalogger = ingest(payload.as_deref(), DATALOGGER_SLOT)?;
            }
            UploadEvent::ParticleCounter(payload) => {
                self.particle_counter = ingest(payload.as_deref(), PARTICLE_COUNTER_SLOT)?;
            }
        }
        Ok(())
    }

    pub fn datalogger(&self) -> Option<&DataTable> {
        self.datalogger.as_ref()
    }

    pub fn particle_counter(&self) -> Option<&DataTable> {
        self.particle_counter.as_ref()
    }

    pub fn selection(&self) -> &BucketSelection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: BucketSelection) {
        self.selection = selection;
    }

    /// Temperature and humidity descriptors for the current state.
    pub fn environment_charts(
        &self,
        config: &DashboardConfig,
        now: DateTime<Utc>,
    ) -> Result<EnvironmentCharts, ChartError> {
        let charts = environment::render(self.datalogger.as_ref(), config, now)?;
        let mut metrics = METRICS.lock();
        metrics.record_chart_render();
        metrics.record_chart_render();
        Ok(charts)
    }

    /// Particle descriptor for the current state and selection.
    pub fn particle_chart(
        &self,
        config: &DashboardConfig,
        now: DateTime<Utc>,
    ) -> Result<ChartSpec, ChartError> {
        let chart = particles::render(self.particle_counter.as_ref(), &self.selection, config, now)?;
        METRICS.lock().record_chart_render();
        Ok(chart)
    }
}

fn ingest(payload: Option<&str>, slot: &'static str) -> Result<Option<DataTable>, UploadError> {
    let Some(payload) = payload else {
        info!("{} upload cleared", slot);
        METRICS.lock().record_upload_cleared();
        return Ok(None);
    };

    METRICS.lock().record_upload_attempt();
    let text = match decode_upload(payload) {
        Ok(text) => text,
        Err(e) => {
            METRICS.lock().record_upload_failure();
            return Err(UploadError::Decode { slot, source: e });
        }
    };
    let table = match parse_table(&text) {
        Ok(table) => table,
        Err(e) => {
            METRICS.lock().record_upload_failure();
            return Err(UploadError::Parse { slot, source: e });
        }
    };

    let records = table.as_ref().map(|t| t.len()).unwrap_or(0);
    METRICS.lock().record_upload_success(records as u64);
    info!("Stored {} upload with {} records", slot, records);
    Ok(table)
}
