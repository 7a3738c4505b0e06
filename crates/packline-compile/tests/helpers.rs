//! Shared test utilities for packline-compile tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use futures::stream::{self, BoxStream, StreamExt};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use packline_compile::{
    Artifact, BuildConfiguration, CompileStats, DependencyLister, Engine, EngineError,
    EngineReport, EngineResult, EntrySpec, Loader, StyleEmit,
};

/// Dependency lister returning a fixed set of installed modules.
pub struct FixedDeps(pub Vec<String>);

impl DependencyLister for FixedDeps {
    fn list(&self) -> io::Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// An environment with nothing installed.
pub fn no_deps() -> FixedDeps {
    FixedDeps(Vec::new())
}

/// Engine stub that renders one artifact per entry through the configured
/// filename pattern and, like a real engine, emits the aggregated
/// stylesheet artifact when the configuration asks for extraction.
///
/// Records every configuration it receives so tests can assert the engine
/// was (or was not) invoked.
#[derive(Default)]
pub struct StubEngine {
    pub seen: Mutex<Vec<Arc<BuildConfiguration>>>,
}

impl Engine for StubEngine {
    fn compile(
        &self,
        configuration: Arc<BuildConfiguration>,
        entries: Vec<EntrySpec>,
    ) -> BoxStream<'static, EngineResult> {
        self.seen.lock().unwrap().push(Arc::clone(&configuration));

        let mut artifacts: Vec<Artifact> = entries
            .iter()
            .map(|entry| {
                Artifact::new(
                    configuration.output.render_filename(&entry.name),
                    format!("bundle:{}", entry.import).into_bytes(),
                )
            })
            .collect();
        if let Some(filename) = extract_target(&configuration) {
            artifacts.push(Artifact::new(filename, b"/* aggregated styles */".to_vec()));
        }

        let stats = CompileStats::new()
            .with("modules", entries.len() as u64)
            .with("chunks", 1_u64)
            .with("time", "12ms");

        let report: EngineResult = Ok(EngineReport { stats, artifacts });
        stream::once(async move { report }).boxed()
    }
}

fn extract_target(configuration: &BuildConfiguration) -> Option<String> {
    configuration
        .module
        .rules
        .iter()
        .find_map(|rule| match &rule.loader {
            Loader::Styles(style) => match &style.emit {
                StyleEmit::Extract { filename } => Some(filename.clone()),
                StyleEmit::LocalsOnly => None,
            },
            _ => None,
        })
}

/// Engine stub that always reports one failed cycle.
pub struct FailingEngine {
    pub message: Option<String>,
}

impl FailingEngine {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }
}

impl Engine for FailingEngine {
    fn compile(
        &self,
        _configuration: Arc<BuildConfiguration>,
        _entries: Vec<EntrySpec>,
    ) -> BoxStream<'static, EngineResult> {
        let cycle: EngineResult = Err(EngineError {
            message: self.message.clone(),
        });
        stream::once(async move { cycle }).boxed()
    }
}

/// Engine stub emitting one successful report per rebuild cycle, the way a
/// watching engine re-invokes its completion callback.
pub struct WatchEngine {
    pub cycles: usize,
}

impl Engine for WatchEngine {
    fn compile(
        &self,
        configuration: Arc<BuildConfiguration>,
        entries: Vec<EntrySpec>,
    ) -> BoxStream<'static, EngineResult> {
        let reports: Vec<EngineResult> = (0..self.cycles)
            .map(|cycle| {
                let artifacts = entries
                    .iter()
                    .map(|entry| {
                        Artifact::new(
                            configuration.output.render_filename(&entry.name),
                            format!("rebuild:{cycle}").into_bytes(),
                        )
                    })
                    .collect();
                Ok(EngineReport {
                    stats: CompileStats::new().with("rebuild", cycle as u64),
                    artifacts,
                })
            })
            .collect();
        stream::iter(reports).boxed()
    }
}

/// Captures INFO-level log lines emitted on the current thread.
///
/// Keep the guard alive for the duration of the compile run; the collected
/// lines are the full formatted messages.
pub fn capture_logs() -> (tracing::subscriber::DefaultGuard, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        lines: Arc::clone(&lines),
    });
    (tracing::subscriber::set_default(subscriber), lines)
}

struct CaptureLayer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != tracing::Level::INFO {
            return;
        }
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        self.lines.lock().unwrap().push(message);
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            use std::fmt::Write as _;
            let _ = write!(self.0, "{value:?}");
        }
    }
}
