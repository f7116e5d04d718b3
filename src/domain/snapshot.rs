// Snapshot domain model - typed view of the backend JSON contract
//
// Every section and field is optional or defaulted. A section the backend
// failed to collect (it sends `{"error": "..."}`) or one with the wrong shape
// deserialises to `None` instead of failing the whole snapshot, and a single
// null or mistyped field degrades to `None`/default on its own.
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deserialise a value, turning any shape mismatch into `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`] for fields with a natural default: a `null` or mistyped
/// value reads as `T::default()` and leaves its sibling fields intact.
pub fn lenient_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Unit enablement as text. systemd reports `"enabled"`/`"disabled"`, some
/// collectors send a bare boolean.
pub fn flag_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Bool(true) => "enabled".to_string(),
        serde_json::Value::Bool(false) => "disabled".to_string(),
        _ => String::new(),
    })
}

/// A loosely typed scalar. The backend reports PIDs and ports as numbers in
/// some sections and as strings in others.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

/// One response from `GET /api/all`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "lenient")]
    pub system: Option<SystemInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub cpu: Option<CpuInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub memory: Option<MemoryInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub disk: Option<DiskInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub network: Option<NetworkInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub server_status: Option<ServerStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub services: Option<ServicesInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub processes: Option<ProcessesInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub security: Option<SecurityInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub docker: Option<DockerInfo>,
}

impl Snapshot {
    /// The root partition, or the first one when `/` is not mounted separately.
    pub fn root_partition(&self) -> Option<&Partition> {
        let partitions = &self.disk.as_ref()?.partitions;
        partitions
            .iter()
            .find(|p| p.mountpoint == "/")
            .or_else(|| partitions.first())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    #[serde(deserialize_with = "lenient")]
    pub hostname: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub os: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub kernel: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub uptime: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CpuInfo {
    #[serde(deserialize_with = "lenient")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub cores: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub threads: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub frequency: Option<Frequency>,
    #[serde(deserialize_with = "lenient")]
    pub cache_size: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub temperature: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub load_average: Option<LoadAverage>,
    #[serde(deserialize_with = "lenient")]
    pub usage_total: Option<f64>,
    #[serde(deserialize_with = "lenient_default")]
    pub per_core_usage: Vec<f64>,
    #[serde(deserialize_with = "lenient_default")]
    pub usage_per_core: Vec<f64>,
}

impl CpuInfo {
    /// Per-core usage under whichever key the backend used.
    pub fn core_usage(&self) -> &[f64] {
        if self.per_core_usage.is_empty() {
            &self.usage_per_core
        } else {
            &self.per_core_usage
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Frequency {
    #[serde(deserialize_with = "lenient_default")]
    pub current: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoadAverage {
    #[serde(rename = "1min", deserialize_with = "lenient_default")]
    pub one: f64,
    #[serde(rename = "5min", deserialize_with = "lenient_default")]
    pub five: f64,
    #[serde(rename = "15min", deserialize_with = "lenient_default")]
    pub fifteen: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemoryInfo {
    #[serde(deserialize_with = "lenient")]
    pub ram: Option<RamInfo>,
    #[serde(deserialize_with = "lenient")]
    pub swap: Option<SwapInfo>,
    #[serde(deserialize_with = "lenient_default")]
    pub zram: Vec<ZramDevice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RamInfo {
    #[serde(deserialize_with = "lenient_default")]
    pub total: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub used: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub free: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub available: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub buffers: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub cached: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub percent: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SwapInfo {
    #[serde(deserialize_with = "lenient_default")]
    pub total: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub used: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ZramDevice {
    #[serde(deserialize_with = "lenient_default")]
    pub device: String,
    #[serde(deserialize_with = "lenient_default")]
    pub disksize: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiskInfo {
    #[serde(deserialize_with = "lenient_default")]
    pub partitions: Vec<Partition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Partition {
    #[serde(deserialize_with = "lenient_default")]
    pub mountpoint: String,
    #[serde(deserialize_with = "lenient_default")]
    pub device: String,
    #[serde(deserialize_with = "lenient_default")]
    pub fstype: String,
    #[serde(deserialize_with = "lenient_default")]
    pub total: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub used: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub free: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub percent: f64,
    #[serde(deserialize_with = "lenient_default")]
    pub read_count: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub write_count: u64,
    #[serde(deserialize_with = "lenient")]
    pub smart_status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkInfo {
    #[serde(deserialize_with = "lenient_default")]
    pub interfaces: Vec<Interface>,
    #[serde(deserialize_with = "lenient")]
    pub connections: Option<Connections>,
    #[serde(deserialize_with = "lenient")]
    pub public_ip: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub firewall: Option<Firewall>,
}

impl NetworkInfo {
    /// Total bytes (sent, received) across every interface except loopback.
    pub fn non_loopback_totals(&self) -> (u64, u64) {
        self.interfaces
            .iter()
            .filter(|iface| iface.name != "lo")
            .fold((0, 0), |(sent, recv), iface| {
                (sent + iface.bytes_sent, recv + iface.bytes_recv)
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Interface {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub status: String,
    #[serde(deserialize_with = "lenient")]
    pub ip: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub mac: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub link_speed: Option<String>,
    #[serde(deserialize_with = "lenient_default")]
    pub bytes_sent: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub bytes_recv: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub packets_sent: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub packets_recv: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub errin: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub errout: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Connections {
    #[serde(deserialize_with = "lenient_default")]
    pub total: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub established: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Firewall {
    #[serde(deserialize_with = "lenient")]
    pub ufw_status: Option<String>,
    #[serde(deserialize_with = "lenient_default")]
    pub open_ports: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerStatus {
    #[serde(deserialize_with = "lenient_default")]
    pub online: bool,
    #[serde(deserialize_with = "lenient_default")]
    pub services: Vec<RunningService>,
    #[serde(deserialize_with = "lenient_default")]
    pub listening_ports: Vec<ListeningPort>,
    #[serde(deserialize_with = "lenient_default")]
    pub alerts: Vec<Alert>,
    #[serde(deserialize_with = "lenient_default")]
    pub top_processes: Vec<TopProcess>,
    #[serde(deserialize_with = "lenient_default")]
    pub connections: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub open_ports: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunningService {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub pid: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListeningPort {
    #[serde(deserialize_with = "lenient")]
    pub port: Option<Scalar>,
    #[serde(deserialize_with = "lenient_default")]
    pub process: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(deserialize_with = "lenient_default")]
    pub level: String,
    #[serde(deserialize_with = "lenient_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopProcess {
    #[serde(deserialize_with = "lenient")]
    pub pid: Option<Scalar>,
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub cpu: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicesInfo {
    #[serde(deserialize_with = "lenient")]
    pub services: Option<Vec<ServiceEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceEntry {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub status: String,
    #[serde(deserialize_with = "flag_text")]
    pub enabled: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProcessesInfo {
    #[serde(deserialize_with = "lenient")]
    pub top_cpu: Option<Vec<ProcessEntry>>,
    #[serde(deserialize_with = "lenient")]
    pub top_memory: Option<Vec<ProcessEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProcessEntry {
    #[serde(deserialize_with = "lenient")]
    pub pid: Option<Scalar>,
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub cpu_percent: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub memory_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityInfo {
    #[serde(deserialize_with = "lenient_default")]
    pub logged_users: Vec<LoggedUser>,
    #[serde(deserialize_with = "lenient_default")]
    pub failed_logins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggedUser {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub terminal: Option<String>,
    #[serde(deserialize_with = "lenient_default")]
    pub started: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DockerInfo {
    #[serde(deserialize_with = "lenient_default")]
    pub installed: bool,
    #[serde(deserialize_with = "lenient_default")]
    pub containers: Vec<Container>,
    #[serde(deserialize_with = "lenient_default")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Container {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub image: String,
    #[serde(deserialize_with = "lenient_default")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub size: String,
}

/// `GET /api/logs`: named log streams, each a list of lines.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LogBundle {
    streams: serde_json::Map<String, serde_json::Value>,
}

impl LogBundle {
    /// Lines of the named stream. A missing stream, or one that is not an
    /// array, reads as empty; non-string entries are skipped.
    pub fn lines(&self, kind: &str) -> Vec<String> {
        self.streams
            .get(kind)
            .and_then(|v| v.as_array())
            .map(|lines| {
                lines
                    .iter()
                    .filter_map(|l| l.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoragePartition {
    #[serde(deserialize_with = "lenient_default")]
    pub device: String,
    #[serde(deserialize_with = "lenient_default")]
    pub mountpoint: String,
    #[serde(deserialize_with = "lenient_default")]
    pub fstype: String,
    #[serde(deserialize_with = "lenient_default")]
    pub percent: f64,
    #[serde(deserialize_with = "lenient_default")]
    pub total_human: String,
    #[serde(deserialize_with = "lenient_default")]
    pub used_human: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LargeFile {
    #[serde(deserialize_with = "lenient_default")]
    pub path: String,
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub size: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub size_human: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrafficInterface {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub status: String,
    #[serde(deserialize_with = "lenient_default")]
    pub bytes_sent_human: String,
    #[serde(deserialize_with = "lenient_default")]
    pub bytes_recv_human: String,
    #[serde(deserialize_with = "lenient_default")]
    pub upload_rate_human: String,
    #[serde(deserialize_with = "lenient_default")]
    pub download_rate_human: String,
    #[serde(deserialize_with = "lenient_default")]
    pub packets_sent_rate: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub packets_recv_rate: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub errors_in: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub errors_out: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub drops_in: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub drops_out: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct K8sAvailability {
    #[serde(deserialize_with = "lenient_default")]
    pub available: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pod {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub namespace: String,
    #[serde(deserialize_with = "lenient_default")]
    pub status: String,
    #[serde(deserialize_with = "lenient_default")]
    pub restarts: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct K8sService {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub namespace: String,
    #[serde(rename = "type", deserialize_with = "lenient_default")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_default")]
    pub ports: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub namespace: String,
    #[serde(deserialize_with = "lenient_default")]
    pub replicas: u64,
    #[serde(deserialize_with = "lenient_default")]
    pub ready: u64,
}

/// Everything the Kubernetes page shows, fetched in one pass.
#[derive(Debug, Clone, Default)]
pub struct K8sOverview {
    pub available: bool,
    pub pods: Vec<Pod>,
    pub services: Vec<K8sService>,
    pub deployments: Vec<Deployment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GpuReport {
    #[serde(deserialize_with = "lenient_default")]
    pub available: bool,
    #[serde(deserialize_with = "lenient_default")]
    pub count: u32,
    #[serde(deserialize_with = "lenient_default")]
    pub gpus: Vec<Gpu>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Gpu {
    #[serde(deserialize_with = "lenient_default")]
    pub vendor: String,
    #[serde(deserialize_with = "lenient_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_default")]
    pub utilization: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_snapshot_deserializes() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "cpu": {"usage_total": 12.5},
            "memory": {"error": "permission denied"},
            "disk": "garbage"
        }))
        .unwrap();

        assert_eq!(snapshot.cpu.unwrap().usage_total, Some(12.5));
        // An error section still parses, with every field absent
        assert!(snapshot.memory.unwrap().ram.is_none());
        assert!(snapshot.disk.is_none());
        assert!(snapshot.system.is_none());
    }

    #[test]
    fn test_bad_field_degrades_alone() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "cpu": {"usage_total": 85, "cores": "4", "per_core_usage": null},
            "memory": {"ram": {"percent": 45, "total": null, "used": "lots"}},
            "network": {"interfaces": [{"name": "eth0", "bytes_sent": -1, "bytes_recv": 20}]}
        }))
        .unwrap();

        let cpu = snapshot.cpu.unwrap();
        assert_eq!(cpu.usage_total, Some(85.0));
        assert_eq!(cpu.cores, None);
        assert!(cpu.core_usage().is_empty());

        let ram = snapshot.memory.unwrap().ram.unwrap();
        assert_eq!(ram.percent, 45.0);
        assert_eq!((ram.total, ram.used), (0, 0));

        let network = snapshot.network.unwrap();
        assert_eq!(network.interfaces[0].name, "eth0");
        assert_eq!(network.non_loopback_totals(), (0, 20));
    }

    #[test]
    fn test_service_enabled_accepts_bool_or_text() {
        let services: ServicesInfo = serde_json::from_value(json!({"services": [
            {"name": "nginx", "status": "active", "enabled": true},
            {"name": "cron", "status": "active", "enabled": false},
            {"name": "sshd", "status": "active", "enabled": "static"},
            {"name": "odd", "status": "active", "enabled": 3}
        ]}))
        .unwrap();

        let enabled: Vec<&str> = services
            .services
            .as_deref()
            .unwrap()
            .iter()
            .map(|s| s.enabled.as_str())
            .collect();
        assert_eq!(enabled, vec!["enabled", "disabled", "static", ""]);
    }

    #[test]
    fn test_root_partition_prefers_slash() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "disk": {"partitions": [
                {"mountpoint": "/boot", "percent": 10.0},
                {"mountpoint": "/", "percent": 55.0}
            ]}
        }))
        .unwrap();
        assert_eq!(snapshot.root_partition().unwrap().mountpoint, "/");

        let snapshot: Snapshot = serde_json::from_value(json!({
            "disk": {"partitions": [{"mountpoint": "/data", "percent": 10.0}]}
        }))
        .unwrap();
        assert_eq!(snapshot.root_partition().unwrap().mountpoint, "/data");
    }

    #[test]
    fn test_non_loopback_totals() {
        let network: NetworkInfo = serde_json::from_value(json!({
            "interfaces": [
                {"name": "lo", "bytes_sent": 1000, "bytes_recv": 1000},
                {"name": "eth0", "bytes_sent": 10, "bytes_recv": 20},
                {"name": "wlan0", "bytes_sent": 5, "bytes_recv": 7}
            ]
        }))
        .unwrap();
        assert_eq!(network.non_loopback_totals(), (15, 27));
    }

    #[test]
    fn test_scalar_display() {
        let pids: Vec<Scalar> = serde_json::from_value(json!([42, "1337", 1.5])).unwrap();
        let shown: Vec<String> = pids.iter().map(|p| p.to_string()).collect();
        assert_eq!(shown, vec!["42", "1337", "1.5"]);
    }

    #[test]
    fn test_log_bundle_lines() {
        let logs: LogBundle = serde_json::from_value(json!({
            "syslog": ["a", "b", 3],
            "auth": "not a list"
        }))
        .unwrap();
        assert_eq!(logs.lines("syslog"), vec!["a", "b"]);
        assert!(logs.lines("auth").is_empty());
        assert!(logs.lines("kern").is_empty());
    }

    #[test]
    fn test_core_usage_reads_either_key() {
        let cpu: CpuInfo =
            serde_json::from_value(json!({"usage_per_core": [1.0, 2.0]})).unwrap();
        assert_eq!(cpu.core_usage(), &[1.0, 2.0]);

        let cpu: CpuInfo = serde_json::from_value(json!({
            "per_core_usage": [3.0],
            "usage_per_core": [1.0, 2.0]
        }))
        .unwrap();
        assert_eq!(cpu.core_usage(), &[3.0]);
    }
}
