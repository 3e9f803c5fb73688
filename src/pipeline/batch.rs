use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use rayon::prelude::*;

use crate::creature::{CreatureDef, catalog};
use crate::encode::codec::{self, EncodeOpts};
use crate::encode::sink::ArtifactSink;
use crate::foundation::error::{FailureKind, SpriteError, SpriteResult};
use crate::foundation::rng::{SpriteRng, time_seed};
use crate::pipeline::cancel::CancelToken;
use crate::pipeline::report::{BatchReport, CreatureOutcome, GenerationResult};
use crate::render::raster::{RasterOpts, rasterize};
use crate::scene::document::{SceneDocument, SceneOpts};
use crate::validate::budget::BudgetCheck;

/// What a batch does after a creature fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    FailFast,
    /// Record the failure and continue with the next creature.
    KeepGoing,
}

/// Options for a generation batch.
#[derive(Clone, Debug, Default)]
pub struct BatchOpts {
    /// Scene layout.
    pub scene: SceneOpts,
    /// Render and resample sizes.
    pub raster: RasterOpts,
    /// Output container and effort.
    pub encode: EncodeOpts,
    /// Base seed; `None` derives one from the clock and logs it.
    pub seed: Option<u64>,
    /// Failure handling.
    pub failure_policy: FailurePolicy,
    /// Run creatures on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Pool size when `parallel`; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Wall-clock budget for raster + encode of one artifact.
    pub timeout: Option<Duration>,
}

impl BatchOpts {
    /// Validate every nested option set.
    pub fn validate(&self) -> SpriteResult<()> {
        self.scene.validate()?;
        self.raster.validate()?;
        if self.threads == Some(0) {
            return Err(SpriteError::validation("threads must be >= 1 when set"));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(SpriteError::validation("timeout must be non-zero when set"));
        }
        Ok(())
    }
}

/// Compose, assemble, rasterize, encode and persist one creature.
///
/// The creature's RNG stream depends only on `base_seed` and its id. Cancellation is checked
/// before each stage. Errors come back attributed to the creature.
#[tracing::instrument(level = "info", skip_all, fields(creature = def.id))]
pub fn generate_one(
    def: &CreatureDef,
    opts: &BatchOpts,
    base_seed: u64,
    sink: &dyn ArtifactSink,
    cancel: &CancelToken,
) -> SpriteResult<GenerationResult> {
    run_stages(def, opts, base_seed, sink, cancel).map_err(|e| e.for_creature(def.id))
}

fn run_stages(
    def: &CreatureDef,
    opts: &BatchOpts,
    base_seed: u64,
    sink: &dyn ArtifactSink,
    cancel: &CancelToken,
) -> SpriteResult<GenerationResult> {
    cancel.check("compose")?;
    let mut rng = SpriteRng::for_creature(base_seed, def.id);
    let parts = def.build_parts(&mut rng)?;
    tracing::debug!(fragments = parts.len(), "composed");

    cancel.check("assemble")?;
    let svg = SceneDocument::assemble(def, parts, &opts.scene)?.to_svg();
    tracing::debug!(svg_bytes = svg.len(), "assembled");

    cancel.check("rasterize")?;
    let bytes = render_bytes(svg, opts.raster, opts.encode, opts.timeout)?;

    cancel.check("persist")?;
    let file_name = opts.encode.file_name(def.id);
    let info = sink.persist(&file_name, &bytes)?;
    let check = BudgetCheck::new(file_name, info.size_bytes);
    if !check.passed {
        tracing::warn!(size_bytes = check.size_bytes, "artifact below size budget");
    }

    Ok(GenerationResult {
        creature_id: def.id.to_owned(),
        file_name: check.file_name,
        location: info.location,
        size_bytes: check.size_bytes,
        passed_size_gate: check.passed,
    })
}

/// Raster + encode, optionally on a worker thread bounded by `timeout`.
///
/// A worker that overruns is detached; its result is dropped when it finishes.
fn render_bytes(
    svg: String,
    raster: RasterOpts,
    encode: EncodeOpts,
    timeout: Option<Duration>,
) -> SpriteResult<Vec<u8>> {
    let work = move || -> SpriteResult<Vec<u8>> {
        let img = rasterize(&svg, &raster)?;
        codec::encode(&img, &encode)
    };
    let Some(limit) = timeout else {
        return work();
    };

    let (tx, rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("sprite-raster".to_owned())
        .spawn(move || {
            let _ = tx.send(work());
        })
        .map_err(|e| {
            SpriteError::Other(anyhow::Error::new(e).context("failed to spawn raster worker"))
        })?;

    match rx.recv_timeout(limit) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(SpriteError::Timeout(limit)),
        Err(RecvTimeoutError::Disconnected) => Err(SpriteError::encoding(
            "raster worker exited without a result",
        )),
    }
}

/// Generate every creature in `defs`, reporting each outcome through `progress` in input order.
///
/// Under [`FailurePolicy::FailFast`] the first failure (in input order) is returned as `Err`;
/// outcomes before it have already been reported. In a parallel run, siblings after it that
/// finished before the stop was observed are reported too, since their artifacts were persisted. Under [`FailurePolicy::KeepGoing`] failures
/// are collected into the report. Cancellation stops the batch before the next stage.
#[tracing::instrument(level = "info", skip_all, fields(creatures = defs.len(), parallel = opts.parallel))]
pub fn run_batch(
    defs: &[CreatureDef],
    opts: &BatchOpts,
    sink: &dyn ArtifactSink,
    cancel: &CancelToken,
    progress: &mut dyn FnMut(&CreatureOutcome),
) -> SpriteResult<BatchReport> {
    opts.validate()?;
    catalog::validate(defs)?;
    if defs.is_empty() {
        return Err(SpriteError::validation("no creatures selected"));
    }

    let base_seed = opts.seed.unwrap_or_else(time_seed);
    tracing::info!(base_seed, "starting batch; rerun with this seed to reproduce");

    let mut report = BatchReport {
        base_seed,
        ..BatchReport::default()
    };

    if !opts.parallel {
        for def in defs {
            let result = generate_one(def, opts, base_seed, sink, cancel);
            if !record(&mut report, def, result, opts.failure_policy, progress)? {
                break;
            }
        }
        report.cancelled = cancel.is_cancelled();
        return Ok(report);
    }

    let pool = build_thread_pool(opts.threads)?;
    // A fail-fast error stops the siblings without touching the caller's token.
    let stop = cancel.child();
    let mut results = pool.install(|| {
        defs.par_iter()
            .map(|def| {
                let result = generate_one(def, opts, base_seed, sink, &stop);
                if result.is_err() && opts.failure_policy == FailurePolicy::FailFast {
                    stop.cancel();
                }
                result
            })
            .collect::<Vec<_>>()
    });

    if opts.failure_policy == FailurePolicy::FailFast
        && let Some(first) = results.iter().position(Result::is_err)
    {
        let rest = results.split_off(first);
        for (def, result) in defs.iter().zip(results) {
            record(&mut report, def, result, opts.failure_policy, progress)?;
        }
        let mut errors = Vec::new();
        for result in rest {
            match result {
                Ok(generated) => progress(&CreatureOutcome::Generated(generated)),
                Err(e) => errors.push(e),
            }
        }
        return Err(root_cause(errors));
    }

    for (def, result) in defs.iter().zip(results) {
        if !record(&mut report, def, result, opts.failure_policy, progress)? {
            break;
        }
    }
    report.cancelled = cancel.is_cancelled();
    Ok(report)
}

/// Push one outcome. Returns `Ok(false)` when the batch should stop.
fn record(
    report: &mut BatchReport,
    def: &CreatureDef,
    result: SpriteResult<GenerationResult>,
    policy: FailurePolicy,
    progress: &mut dyn FnMut(&CreatureOutcome),
) -> SpriteResult<bool> {
    match result {
        Ok(generated) => {
            let outcome = CreatureOutcome::Generated(generated);
            progress(&outcome);
            report.outcomes.push(outcome);
            Ok(true)
        }
        Err(error) if policy == FailurePolicy::FailFast => Err(error),
        Err(error) => {
            tracing::warn!(creature = def.id, error = %error, "creature failed; continuing");
            let cancelled = matches!(error.kind(), FailureKind::Cancelled);
            let outcome = CreatureOutcome::Failed {
                creature_id: def.id.to_owned(),
                error,
            };
            progress(&outcome);
            report.outcomes.push(outcome);
            Ok(!cancelled)
        }
    }
}

/// In a parallel fail-fast run, siblings of the failing creature may report `Cancelled` only
/// because it stopped them. Prefer the first non-cancellation error in input order.
fn root_cause(errors: Vec<SpriteError>) -> SpriteError {
    let mut fallback = None;
    for e in errors {
        if e.kind() != FailureKind::Cancelled {
            return e;
        }
        fallback.get_or_insert(e);
    }
    fallback.unwrap_or(SpriteError::Cancelled("batch"))
}

fn build_thread_pool(threads: Option<usize>) -> SpriteResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(SpriteError::validation("threads must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("sprite-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SpriteError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
