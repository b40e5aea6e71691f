//! Building a synthetic release from exported live resources.

use tracing::{debug, info};

use super::live::LiveResources;
use crate::document::{Document, ObjectMeta};
use crate::error::{Error, Result};
use crate::manifest::{ManifestDocuments, Provenance};
use crate::release::{ReleaseRecord, ReleaseStore, Status};

/// Options for one adopt invocation, built from parsed caller input.
#[derive(Debug, Clone)]
pub struct AdoptOptions {
    pub release_name: String,
    /// Chart reference recorded on the synthetic release.
    pub chart: String,
    pub namespace: String,
    /// Names of the resources to adopt, exported in the order given.
    pub resource_names: Vec<String>,
    pub dry_run: bool,
}

/// Outcome of an adopt invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdoptOutcome {
    Created { name: String, version: u32 },
    /// The manifest that would have been attached; nothing was created.
    DryRun { manifest: String },
}

/// Exports each requested resource and assembles the synthetic manifest.
///
/// Resources are exported in the order given. A resource whose serialized
/// form is empty after trimming is skipped silently; a resource that fails
/// to resolve aborts the whole invocation. The provenance label is
/// `Kind/Name` when both are recoverable from the exported form, else the
/// requested name.
pub fn build_manifest(
    live: &dyn LiveResources,
    names: &[String],
    namespace: &str,
) -> Result<ManifestDocuments> {
    let mut documents = ManifestDocuments::new();

    for name in names {
        let content = live.fetch(name, namespace)?;
        if content.trim().is_empty() {
            debug!(resource = %name, "exported form is empty, skipping");
            continue;
        }
        let label = export_label(name, &content);
        documents.push(Provenance::Exported(label), content.trim_end().to_string());
    }

    Ok(documents)
}

fn export_label(requested: &str, content: &str) -> String {
    if let Ok(document) = Document::from_yaml(content) {
        if let (Some(kind), Some(name)) = (document.kind(), document.name()) {
            if !kind.is_empty() && !name.is_empty() {
                return format!("{}/{}", kind, name);
            }
        }
    }
    requested.to_string()
}

/// Builds a synthetic release record from live resources and persists it.
///
/// The record is created at version 1 with status `Unknown`; once the
/// manifest is attached the status is promoted to `Deployed` and the record
/// is written to the store. In dry-run mode the assembled manifest is
/// returned and nothing is created. Any discovery error aborts the
/// invocation before a record exists, so a partial release is never left
/// behind.
pub fn adopt_release(
    store: &mut dyn ReleaseStore,
    live: &dyn LiveResources,
    opts: &AdoptOptions,
) -> Result<AdoptOutcome> {
    if opts.release_name.trim().is_empty() || opts.chart.trim().is_empty() {
        return Err(Error::invalid_input(
            "name of release and the chart have to be defined",
        ));
    }
    if opts.resource_names.is_empty() {
        return Err(Error::invalid_input("at least one resource name is required"));
    }
    if opts.dry_run {
        info!("dry-run mode: the following actions will not be executed");
    }

    let documents = build_manifest(live, &opts.resource_names, &opts.namespace)?;
    let manifest = documents.join();

    if opts.dry_run {
        return Ok(AdoptOutcome::DryRun { manifest });
    }

    let mut record = ReleaseRecord::new(&opts.release_name, &opts.namespace, 1);
    record.chart = Some(opts.chart.clone());
    record.manifest = manifest;
    record.set_status(Status::Deployed, "Adoption complete");
    store.create(record)?;

    info!(
        release = %opts.release_name,
        documents = documents.len(),
        "adoption complete"
    );
    Ok(AdoptOutcome::Created {
        name: opts.release_name.clone(),
        version: 1,
    })
}
