//! Category matchers, one per finding kind.
//!
//! Each matcher is built once from the knowledge base, keeps only the events
//! relevant to its category, and answers with the matching events. No match is
//! an empty list, never an error.

pub mod variant;
pub mod copy_number;
pub mod disruption;
pub mod fusion;
pub mod virus;
pub mod signature;

pub use copy_number::CopyNumberMatcher;
pub use disruption::{BreakendMatcher, HomozygousDisruptionMatcher};
pub use fusion::{is_fusion_pair_match, FusionMatcher};
pub use signature::{SignatureMatcher, TumorSignatureMatchers};
pub use variant::{is_mutation_type_match, VariantMatcher};
pub use virus::VirusMatcher;
