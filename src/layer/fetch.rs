//! Clone/checkout driver
//!
//! The resolver never touches the network; actual git work is delegated to
//! a [`LayerFetcher`] supplied by the embedding tool. This module defines
//! that seam and the driver that walks a resolved manifest through it.

use crate::error::LayersetResult;
use crate::layer::resolve::{Manifest, ResolvedLayer};
use tracing::{debug, info};

/// Abstract clone/checkout collaborator.
///
/// Implementations receive layers that are guaranteed well-formed: the URL
/// is present and the selector already parsed. Given a layer, clone its
/// repository into `layer.directory` and check out per `layer.selector`.
/// Failures should be reported as [`LayersetError::Clone`](crate::LayersetError::Clone).
pub trait LayerFetcher {
    /// Clone one layer's repository and check out the selected version
    fn clone_and_checkout(&self, layer: &ResolvedLayer) -> LayersetResult<()>;
}

/// Fetch every layer of a resolved manifest, in declaration order.
///
/// Layers without a URL are assumed to already exist in their checkout
/// directory and are skipped. The first fetcher error aborts the run.
pub fn fetch_layers(manifest: &Manifest, fetcher: &dyn LayerFetcher) -> LayersetResult<()> {
    for layer in &manifest.layers {
        if layer.url.is_none() {
            debug!(layer = %layer.name, "No clone source, assuming layer is present locally");
            continue;
        }
        info!(layer = %layer.name, directory = %layer.directory.display(), "Fetching layer");
        fetcher.clone_and_checkout(layer)?;
    }
    Ok(())
}
