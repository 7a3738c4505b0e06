//! Drives the engine and adapts its completion cycles into the pipeline.

use std::sync::Arc;

use futures::future::ready;
use futures::stream::{self, Stream, StreamExt};
use tracing::info;

use packline_config::{BuildConfiguration, CompileOptions, DependencyLister, build_configuration};

use crate::artifact::{Artifact, InputFile};
use crate::engine::{Engine, EntrySpec};
use crate::{Error, Result};

/// Prefix identifying this layer in the success summary.
pub const LOG_PREFIX: &str = "[packline-compile]";

/// Builds the pipe stage for one compile invocation.
///
/// Validation and configuration building happen here, synchronously: a
/// missing `target` fails before the engine is ever touched. Every call
/// produces an independent configuration, so concurrent invocations share
/// nothing mutable.
pub fn compile(
    options: &CompileOptions,
    engine: Arc<dyn Engine>,
    deps: &dyn DependencyLister,
) -> Result<CompileStage> {
    let configuration = build_configuration(options, deps)?;
    Ok(CompileStage {
        configuration: Arc::new(configuration),
        engine,
        suppress_summary: options.suppress_summary(),
    })
}

/// A composable two-stage pipe unit: names incoming entry files, runs the
/// engine, and passes produced artifacts through unchanged.
pub struct CompileStage {
    configuration: Arc<BuildConfiguration>,
    engine: Arc<dyn Engine>,
    suppress_summary: bool,
}

impl std::fmt::Debug for CompileStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompileStage")
            .field("configuration", &self.configuration)
            .field("engine", &"<dyn Engine>")
            .field("suppress_summary", &self.suppress_summary)
            .finish()
    }
}

impl CompileStage {
    /// The configuration this stage hands to the engine.
    pub fn configuration(&self) -> &BuildConfiguration {
        &self.configuration
    }

    /// Consumes the input stream and yields artifacts (or stream-level
    /// errors) downstream.
    ///
    /// Engine failures surface as `Err` items; they never panic and never
    /// escape the stream. Each successful completion cycle logs exactly
    /// one summary line unless the caller asked for silence.
    pub fn run<S>(self, input: S) -> impl Stream<Item = Result<Artifact>> + Send
    where
        S: Stream<Item = InputFile> + Send + 'static,
    {
        let CompileStage {
            configuration,
            engine,
            suppress_summary,
        } = self;
        let exclude = configuration.stats.exclude.clone();

        stream::once(async move {
            let files: Vec<InputFile> = input.collect().await;
            let entries: Vec<EntrySpec> = files.iter().map(EntrySpec::from_input).collect();

            engine
                .compile(configuration, entries)
                .flat_map(move |cycle| match cycle {
                    Err(error) => {
                        stream::once(ready(Err(Error::from_engine(error)))).left_stream()
                    }
                    Ok(report) => {
                        if !suppress_summary {
                            info!("{} {}", LOG_PREFIX, report.stats.render(&exclude));
                        }
                        stream::iter(report.artifacts.into_iter().map(Ok)).right_stream()
                    }
                })
        })
        .flatten()
    }
}
