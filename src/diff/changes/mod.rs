//! Differencer implementations.
//!
//! One [`ArtifactDiffer`](crate::diff::traits::ArtifactDiffer) per artifact
//! type: endpoints, asset categories and design-token screens.

mod assets;
mod endpoints;
mod tokens;

pub use assets::AssetDiff;
pub use endpoints::EndpointDiff;
pub use tokens::TokenDiff;
