// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for the site. Each spec focuses on
//! a single page/endpoint and encodes *where the ground truth lives in the
//! HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** for remote pages (the per-translation booklist,
//!   the `/passage/` chapter pages).
//! - **Selector choice** (`core::html` cached selectors) and the shaping of
//!   results into plain structs (`ChapterLink`, `verse::Fragment`).
//!
//! ## What does **not** live here
//! - **Networking** – callers fetch; specs take the document as a string.
//! - **Caching/persistence** – that’s `chapters::load` and the runner.
//! - **Output formatting** – `tsv` owns the record format.
//!
//! ## Conventions
//! - The booklist spec extracts tolerantly: a malformed anchor is skipped.
//! - The passage spec extracts strictly: one bad verse tag rejects the
//!   whole chapter, because verse grouping is sequence-dependent.
//! - Specs are testable **offline** against synthetic fixtures.
pub mod booklist;
pub mod passage;
