// Chart widget state - one buffer per series, owned by the render tick
use crate::domain::series::SeriesBuffer;
use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Bar chart values, replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl BarSeries {
    fn labelled(prefix: &str, values: &[f64]) -> Self {
        Self {
            labels: (0..values.len()).map(|i| format!("{}{}", prefix, i)).collect(),
            values: values.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetState {
    pub cpu: SeriesBuffer,
    pub memory: SeriesBuffer,
    pub net_sent_mb: SeriesBuffer,
    pub net_recv_mb: SeriesBuffer,
    pub cpu_cores: BarSeries,
    pub gpu: BarSeries,
}

impl WidgetState {
    pub fn new(capacity: usize) -> Self {
        Self {
            cpu: SeriesBuffer::new(capacity),
            memory: SeriesBuffer::new(capacity),
            net_sent_mb: SeriesBuffer::new(capacity),
            net_recv_mb: SeriesBuffer::new(capacity),
            cpu_cores: BarSeries::default(),
            gpu: BarSeries::default(),
        }
    }

    /// Append one sample to every line chart. Network totals are raw byte
    /// counts and are stored in MB.
    pub fn push_sample(&mut self, cpu_percent: f64, mem_percent: f64, sent_bytes: u64, recv_bytes: u64) {
        self.cpu.push(cpu_percent);
        self.memory.push(mem_percent);
        self.net_sent_mb.push(sent_bytes as f64 / BYTES_PER_MB);
        self.net_recv_mb.push(recv_bytes as f64 / BYTES_PER_MB);
    }

    pub fn set_core_usage(&mut self, per_core: &[f64]) {
        self.cpu_cores = BarSeries::labelled("C", per_core);
    }

    pub fn set_gpu_utilization(&mut self, utilization: &[f64]) {
        self.gpu = BarSeries::labelled("GPU ", utilization);
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(crate::domain::series::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_series_stay_aligned() {
        let mut state = WidgetState::new(30);
        for i in 0..40u64 {
            state.push_sample(i as f64, 50.0, i * 1024 * 1024, 2 * i * 1024 * 1024);
        }

        assert_eq!(state.cpu.len(), 30);
        assert_eq!(state.net_sent_mb.len(), state.net_recv_mb.len());
        assert_eq!(state.net_sent_mb.latest(), Some(39.0));
        assert_eq!(state.net_recv_mb.latest(), Some(78.0));
        assert_eq!(state.cpu.values().first(), Some(&10.0));
    }

    #[test]
    fn test_bar_labels() {
        let mut state = WidgetState::default();
        state.set_core_usage(&[10.0, 20.0, 30.0]);
        state.set_gpu_utilization(&[99.0]);

        assert_eq!(state.cpu_cores.labels, vec!["C0", "C1", "C2"]);
        assert_eq!(state.gpu.labels, vec!["GPU 0"]);

        state.set_core_usage(&[5.0]);
        assert_eq!(state.cpu_cores.values, vec![5.0]);
    }
}
