//! Load and assembly events.
//!
//! A [`CatalogObserver`] hears about every file load (records read, or the error and its
//! [`Severity`]) and about starship slots that assembly had to clear. Three implementations
//! ship with the crate: [`StdErrObserver`], [`FileObserver`], and [`CompositeObserver`] to
//! combine them.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::assembly::AttachmentSlot;
use crate::catalog::ResourceKind;
use crate::error::CatalogError;

use super::unified::RecordFormat;

/// How bad a failed load is. Ordered, so it doubles as an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    /// The file was read but its contents could not be used.
    Error,
    /// The file could not be read at all.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        })
    }
}

/// The file being loaded.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub path: PathBuf,
    pub format: RecordFormat,
    /// Collection the records are destined for, when the caller said so.
    pub resource: Option<ResourceKind>,
}

/// `"planets from data/planets.csv (csv)"`, or `"records from ..."` when the collection is unknown.
impl fmt::Display for LoadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = self.resource.map_or("records", ResourceKind::as_str);
        write!(f, "{what} from {} ({})", self.path.display(), self.format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub records: usize,
}

/// A starship slot was cleared because the offered value had the wrong type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentCleared {
    pub starship: String,
    pub slot: AttachmentSlot,
    /// Kind of value that was offered instead (`"droid"`, `"passengers"`, `"none"`, ...).
    pub found: &'static str,
}

impl fmt::Display for AttachmentCleared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} cleared, offered {}",
            self.starship, self.slot, self.found
        )
    }
}

/// Receives load outcomes and assembly diagnostics. Every method defaults to doing nothing.
pub trait CatalogObserver: Send + Sync {
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    fn on_failure(&self, _ctx: &LoadContext, _severity: Severity, _error: &CatalogError) {}

    /// A failure at or above [`super::LoadOptions::alert_at_or_above`]. Called after
    /// [`Self::on_failure`]; forwards to it unless overridden.
    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &CatalogError) {
        self.on_failure(ctx, severity, error)
    }

    fn on_attachment_cleared(&self, _event: &AttachmentCleared) {}
}

/// Forwards every event to each inner observer, in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn CatalogObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn CatalogObserver>>) -> Self {
        Self { observers }
    }

    fn each(&self, f: impl Fn(&dyn CatalogObserver)) {
        self.observers.iter().for_each(|o| f(o.as_ref()));
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CatalogObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: Severity, error: &CatalogError) {
        self.each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &CatalogError) {
        self.each(|o| o.on_alert(ctx, severity, error));
    }

    fn on_attachment_cleared(&self, event: &AttachmentCleared) {
        self.each(|o| o.on_attachment_cleared(event));
    }
}

fn loaded_line(ctx: &LoadContext, stats: LoadStats) -> String {
    let what = ctx.resource.map_or("records", ResourceKind::as_str);
    format!(
        "loaded {} {what} from {} ({})",
        stats.records,
        ctx.path.display(),
        ctx.format
    )
}

fn failed_line(ctx: &LoadContext, severity: Severity, error: &CatalogError) -> String {
    format!("[{severity}] could not load {ctx}: {error}")
}

/// Writes one line per event to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl CatalogObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!("[catalog] {}", loaded_line(ctx, stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: Severity, error: &CatalogError) {
        eprintln!("[catalog]{}", failed_line(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &CatalogError) {
        eprintln!("[catalog][ALERT]{}", failed_line(ctx, severity, error));
    }

    fn on_attachment_cleared(&self, event: &AttachmentCleared) {
        eprintln!("[assembly][warning] {event}");
    }
}

/// Appends timestamped event lines to a log file.
///
/// Logging is best-effort: a log file that cannot be opened or written is skipped silently.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, line: impl fmt::Display) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {line}", unix_ts());
        }
    }
}

impl CatalogObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append(loaded_line(ctx, stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: Severity, error: &CatalogError) {
        self.append(failed_line(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &CatalogError) {
        self.append(format_args!("ALERT {}", failed_line(ctx, severity, error)));
    }

    fn on_attachment_cleared(&self, event: &AttachmentCleared) {
        self.append(format_args!("[assembly] {event}"));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
