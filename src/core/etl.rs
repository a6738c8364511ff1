use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting conversion...");

        // Extract
        tracing::info!("Reading records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Read {} records", records.len());
        self.monitor.log_stats("Extract");

        // Transform
        tracing::info!("Mapping fields...");
        let result = self.pipeline.transform(records)?;
        tracing::info!("Mapped {} rows", result.rows.len());
        self.monitor.log_stats("Transform");

        // Load
        tracing::info!("Writing CSV...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
