//! D3.js implementation of [`ChartBackend`].

use crate::js_bridge;
use fwd_data::{ChartBackend, LineChart};

/// Line charts drawn by `renderLineChart` into one container element.
///
/// Handles are render generations; destroying one clears the container and
/// retires any render of that generation still waiting for D3.
pub struct D3LineChart {
    container_id: String,
    config_json: String,
    next_generation: u64,
}

impl D3LineChart {
    pub fn new(container_id: &str, config: serde_json::Value) -> Self {
        Self {
            container_id: container_id.to_string(),
            config_json: config.to_string(),
            next_generation: 0,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl ChartBackend for D3LineChart {
    type Handle = u64;

    fn create(&mut self, chart: &LineChart) -> u64 {
        self.next_generation += 1;
        let data_json = serde_json::to_string(chart).unwrap_or_default();
        log::debug!(
            "[FWD] chart: render #{} with {} points",
            self.next_generation,
            chart.points.len()
        );
        js_bridge::render_line_chart(
            &self.container_id,
            &data_json,
            &self.config_json,
            self.next_generation,
        );
        self.next_generation
    }

    fn destroy(&mut self, handle: u64) {
        log::debug!("[FWD] chart: destroy #{}", handle);
        js_bridge::destroy_line_chart(&self.container_id);
    }
}
