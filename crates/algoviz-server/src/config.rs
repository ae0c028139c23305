//! Server configuration read from the environment.
//!
//! Every step of a trace holds a full snapshot of the visible state, so a
//! trace is much larger than its input (cubic in the array length for the
//! quadratic sorts). The limits below bound that.
//!
//! - `ALGOVIZ_PORT`: listen port (default 3000)
//! - `ALGOVIZ_MAX_INPUT_LEN`: largest accepted array length or vertex count
//!   (default 128)
//! - `ALGOVIZ_MAX_EDGES`: largest accepted graph edge count (default 2048)
//! - `ALGOVIZ_MAX_TRACE_CELLS`: largest projected trace size in snapshot
//!   cells, see `TraceRequest::projected_cells` (default 4Mi)
//! - `ALGOVIZ_MAX_CACHED`: how many traces to keep for replay (default 1024)
//! - `ALGOVIZ_MAX_CACHED_CELLS`: total snapshot cells across kept traces
//!   (default 32Mi)

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub max_input_len: usize,
    pub max_edges: usize,
    pub max_trace_cells: u64,
    pub max_cached: usize,
    pub max_cached_cells: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 3000,
            max_input_len: 128,
            max_edges: 2048,
            max_trace_cells: 1 << 22,
            max_cached: 1024,
            max_cached_cells: 1 << 25,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment, falling back to defaults for unset or
    /// unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();
        let read = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        ServerConfig {
            port: read("ALGOVIZ_PORT")
                .and_then(|v| u16::try_from(v).ok())
                .unwrap_or(defaults.port),
            max_input_len: read("ALGOVIZ_MAX_INPUT_LEN")
                .map(|v| v as usize)
                .unwrap_or(defaults.max_input_len),
            max_edges: read("ALGOVIZ_MAX_EDGES")
                .map(|v| v as usize)
                .unwrap_or(defaults.max_edges),
            max_trace_cells: read("ALGOVIZ_MAX_TRACE_CELLS").unwrap_or(defaults.max_trace_cells),
            max_cached: read("ALGOVIZ_MAX_CACHED")
                .map(|v| v as usize)
                .unwrap_or(defaults.max_cached),
            max_cached_cells: read("ALGOVIZ_MAX_CACHED_CELLS")
                .unwrap_or(defaults.max_cached_cells),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_bad_values_use_defaults() {
        let config = ServerConfig::from_lookup(|key| match key {
            "ALGOVIZ_PORT" => Some("not-a-port".into()),
            "ALGOVIZ_MAX_INPUT_LEN" => Some(" 64 ".into()),
            _ => None,
        });
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_input_len, 64);
        assert_eq!(config.max_cached, 1024);
        assert_eq!(config.max_trace_cells, 1 << 22);
    }

    #[test]
    fn default_length_cap_fits_the_trace_budget() {
        // A worst-case sort at the length cap must not be refused by the
        // cell budget, or the length cap would be meaningless.
        let config = ServerConfig::default();
        let n = config.max_input_len as u64;
        assert!(n * (n * n + 3 * n + 1) <= config.max_trace_cells);
    }

    #[test]
    fn port_out_of_range_is_ignored() {
        let config = ServerConfig::from_lookup(|key| {
            (key == "ALGOVIZ_PORT").then(|| "70000".to_string())
        });
        assert_eq!(config.port, 3000);
    }
}
