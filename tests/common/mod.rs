#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use trustfetch::core::{ConfigProvider, FailurePolicy};
use trustfetch::utils::logger::{build_dispatch, default_filter, LogOptions};
use trustfetch::LogReporter;

#[derive(Clone, Default)]
pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(&self.buf.lock().unwrap())
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    pub fn messages(&self, message: &str) -> Vec<serde_json::Value> {
        self.json_lines()
            .into_iter()
            .filter(|line| line["fields"]["message"] == message)
            .collect()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn capturing_reporter(quiet: bool) -> (Arc<LogReporter>, CaptureWriter) {
    let writer = CaptureWriter::default();
    let dispatch = build_dispatch(LogOptions::default(), default_filter(false), writer.clone());
    (Arc::new(LogReporter::new(dispatch, quiet)), writer)
}

/// Writes a fresh self-signed root to `<dir>/security/ca.pem`.
pub fn write_root_certificate(dir: &Path) {
    let security = dir.join("security");
    std::fs::create_dir_all(&security).unwrap();
    let root = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    std::fs::write(security.join("ca.pem"), root.cert.pem()).unwrap();
}

pub struct TestConfig {
    pub urls: Vec<String>,
    pub quiet: bool,
    pub insecure: bool,
    pub policy: FailurePolicy,
}

impl TestConfig {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            quiet: true,
            insecure: false,
            policy: FailurePolicy::FailFast,
        }
    }
}

impl ConfigProvider for TestConfig {
    fn urls(&self) -> &[String] {
        &self.urls
    }

    fn quiet(&self) -> bool {
        self.quiet
    }

    fn insecure(&self) -> bool {
        self.insecure
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }
}
