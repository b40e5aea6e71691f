//! # Manifest Patch
//!
//! A library for rewriting the stored manifest of a deployed application
//! release, and for synthesizing a release record from resources that are
//! already present in a target environment.
//!
//! The core pipeline selects one historical release record, splits its
//! manifest into addressable per-resource documents, rewrites the
//! `apiVersion` field on every document matching a resource descriptor, and
//! deterministically reassembles the documents into a single manifest blob
//! while preserving document order and provenance. The adopt workflow reuses
//! the same document-assembly logic in reverse, building a synthetic manifest
//! from live resources.
//!
//! ## Modules
//!
//! - [`manifest`] - Splitting and joining of multi-document manifest blobs
//! - [`document`] - Typed view over a single serialized resource document
//! - [`patch`] - Resource matching, field patching, and the patch pipeline
//! - [`release`] - Release records, the backing-store contract, and revision
//!   selection
//! - [`adopt`] - Live-resource export and the adopt workflow

pub mod adopt;
pub mod document;
pub mod error;
pub mod manifest;
pub mod patch;
pub mod release;

pub use adopt::{
    adopt_release, build_manifest, AdoptOptions, AdoptOutcome, DirResources, DiscoveryError,
    LiveResources,
};
pub use document::{Document, Metadata, ObjectMeta};
pub use error::{Error, Result};
pub use manifest::{ManifestDocuments, ManifestEntry, Provenance};
pub use patch::{patch_document, patch_release, PatchOptions, PatchOutcome, ResourceDescriptor};
pub use release::{
    select_revision, FileStore, MemoryStore, ReleaseInfo, ReleaseRecord, ReleaseStore, Status,
    StoreError,
};
