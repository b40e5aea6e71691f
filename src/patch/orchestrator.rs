//! The patch pipeline: select, split, match, patch, join, persist.

use tracing::info;

use super::descriptor::ResourceDescriptor;
use super::patcher::patch_document;
use crate::error::{Error, Result};
use crate::manifest::ManifestDocuments;
use crate::release::{select_revision, ReleaseStore};

/// Options for one patch invocation, built from parsed caller input.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    pub release_name: String,
    pub descriptor: ResourceDescriptor,
    /// The api version to set on every matched document.
    pub to: String,
    /// Revision of the release to patch; unset means the latest.
    pub revision: Option<u32>,
    pub dry_run: bool,
}

/// Outcome of a patch invocation. Both variants are successes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched {
        name: String,
        version: u32,
        documents_patched: usize,
    },
    NothingToPatch,
}

/// Runs the patch pipeline against one release.
///
/// Selects a release record, splits its manifest, patches every document
/// matching the descriptor, and persists the rejoined manifest. The store
/// write happens only if at least one document changed, and never in
/// dry-run mode. Matching no
/// documents is a success ([`PatchOutcome::NothingToPatch`]), not an error.
///
/// Known limitation: select-then-update is read-modify-write without
/// locking or an optimistic-concurrency check. Two concurrent invocations
/// against the same release can race, and the later update silently wins;
/// callers needing stronger guarantees must coordinate externally or use a
/// store with version-checked writes.
pub fn patch_release(
    store: &mut dyn ReleaseStore,
    opts: &PatchOptions,
) -> Result<PatchOutcome> {
    if opts.descriptor.kind.trim().is_empty() {
        return Err(Error::invalid_input("kind must not be empty"));
    }
    if opts.to.trim().is_empty() {
        return Err(Error::invalid_input("target api version must not be empty"));
    }
    if opts.dry_run {
        info!("dry-run mode: the following actions will not be executed");
    }

    let mut record = select_revision(store, &opts.release_name, opts.revision)?;
    info!(
        release = %record.name,
        revision = record.version,
        "processing release"
    );

    let mut documents = ManifestDocuments::split(&record.manifest);
    let mut patched = 0;
    for entry in documents.iter_mut() {
        let Some(mut document) = opts.descriptor.matches_text(&entry.content) else {
            continue;
        };
        entry.content = patch_document(&mut document, &opts.to)?.trim_end().to_string();
        patched += 1;
    }

    if patched == 0 {
        info!(release = %record.name, "nothing to patch");
        return Ok(PatchOutcome::NothingToPatch);
    }

    record.manifest = documents.join();
    if !opts.dry_run {
        store.update(record.clone())?;
    }
    info!(
        release = %record.name,
        revision = record.version,
        documents = patched,
        "patched successfully"
    );

    Ok(PatchOutcome::Patched {
        name: record.name,
        version: record.version,
        documents_patched: patched,
    })
}
