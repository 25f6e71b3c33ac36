//! Single-pass color region segmentation.
//!
//! The segmenter partitions an image into connected regions of similar
//! color in one top-to-bottom, left-to-right scan — no backtracking, no
//! multi-pass relaxation. Each region carries running (incremental)
//! statistics:
//!
//! - `avg`: per-channel running mean of its member pixels.
//! - `sqr_dev`: a variance-like running statistic, updated one sample at a
//!   time and never recomputed from scratch.
//!
//! For each pixel the already-scanned top-left, top and left neighbors are
//! consulted. The top-left neighbor's region is taken as the initial
//! candidate whenever it passes the similarity test, regardless of fit
//! quality; the top and left regions then compete on Euclidean distance to
//! their running means. A pixel no region accepts founds a new region.
//!
//! The similarity test is self-adaptive: the acceptance radius shrinks as a
//! region's internal variance grows, so tightly toned regions become
//! stricter and loosely toned regions more permissive. See
//! [`Region::check_if_similar`] for the exact rule and its known
//! near-zero-mean artefact.
//!
//! Regions are never merged once created: two regions of identical color
//! that are not 4-adjacent through already-scanned cells remain separate.
//! That limitation is part of the contract.
//!
//! Regions live in an arena (`Vec<Region>`) addressed by `u32` handles; a
//! flat grid of handles records each pixel's owning region for the
//! adjacency checks of subsequent pixels. The grid holds identities only,
//! never ownership.

mod region;
mod segmenter;

pub use region::Region;
pub use segmenter::segment_regions;
