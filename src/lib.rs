//! `igvsession` is a crate for generating [IGV] session files that display
//! phased genomic data.
//!
//! A session file is a small XML document telling the viewer which remote
//! files to load, how to arrange them into panels and tracks, and where to
//! start browsing. This crate generates two kinds of sessions from nothing
//! more than a few identifiers and the naming conventions of the file server
//! hosting the data (see [`naming`]):
//!
//! - [`individual::build()`] creates a session for a single individual, with
//!   founder-phased methylation signal and haplotype blocks for each parent
//!   and, optionally, the read-backed phased alignments.
//! - [`cohort::build()`] creates a session for several samples at once,
//!   sharing one methylation panel and one feature panel across all of them
//!   alongside the cohort-wide variant calls.
//!
//! Both return a typed [`Session`](session::Session), which is serialized
//! with [`Session::to_xml()`](session::Session::to_xml()). Neither builder
//! reads, validates, or fetches any genomic data: identifiers and loci are
//! written into the document exactly as given.
//!
//! ```
//! use igvsession::individual;
//!
//! let session = individual::build(
//!     "200081",
//!     "chr14:100826000-100827000",
//!     &individual::Options::default(),
//! )?;
//!
//! let xml = session.to_xml()?;
//! assert!(xml.contains("<PanelLayout dividerFractions=\"0.15,0.75\"/>"));
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! If you need a session layout that neither builder produces, you can
//! assemble one yourself from [resources](session::Resource),
//! [panels](session::Panel), and [tracks](session::Track) using the
//! [`session::Builder`].
//!
//! [IGV]: https://igv.org

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod cohort;
pub mod individual;
pub mod locus;
pub mod naming;
pub mod output;
pub mod session;
pub mod xml;

pub use session::Session;
