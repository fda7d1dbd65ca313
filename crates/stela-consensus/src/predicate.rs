// Consensus-critical. Changes require spec update + tests.
//! Block-hit predicate.
//!
//! The accept/reject decision for a candidate block: a block qualifies
//! exactly when its hit is strictly below its target. Ties reject.

use crate::config::ChainConfig;
use crate::error::ConsensusError;
use crate::hit::calculate_hit;
use crate::target::{calculate_target, calculate_target_between, BlockTarget};
use stela_core::{BlockHeader, Difficulty, GenerationHash, Height, Importance, SignerPublicKey, TimeSpan};

/// Capability for resolving a signer's importance at a height.
///
/// The implementation is external to this crate (typically a historical
/// account-state ledger). It must be deterministic for a given
/// `(signer, height)` pair and safe to call concurrently and re-entrantly
/// from multiple threads.
pub trait ImportanceLookup {
    /// Importance of `signer` at `height`.
    fn importance(&self, signer: &SignerPublicKey, height: Height) -> Importance;
}

impl<F> ImportanceLookup for F
where
    F: Fn(&SignerPublicKey, Height) -> Importance + Send + Sync,
{
    fn importance(&self, signer: &SignerPublicKey, height: Height) -> Importance {
        self(signer, height)
    }
}

/// Derived scoring inputs for a hit check when the parent header itself is
/// not at hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockHitContext {
    /// Candidate block signer.
    pub signer: SignerPublicKey,
    /// Candidate block height.
    pub height: Height,
    /// Time elapsed since the parent block.
    pub elapsed_time: TimeSpan,
    /// Candidate block difficulty.
    pub difficulty: Difficulty,
    /// Candidate block generation hash.
    pub generation_hash: GenerationHash,
}

/// Stateless accept/reject decision for candidate blocks.
///
/// Constructed once per chain configuration; every call is independent and
/// side-effect-free apart from invoking the importance lookup.
pub struct BlockHitPredicate<L> {
    config: ChainConfig,
    importance_lookup: L,
}

impl<L: ImportanceLookup> BlockHitPredicate<L> {
    /// Constructs a predicate over a validated configuration.
    pub fn new(config: ChainConfig, importance_lookup: L) -> Result<Self, ConsensusError> {
        config.validate()?;
        Ok(Self {
            config,
            importance_lookup,
        })
    }

    /// Returns `true` when `block`'s hit is strictly below its target.
    pub fn hits(
        &self,
        parent: &BlockHeader,
        block: &BlockHeader,
        generation_hash: &GenerationHash,
    ) -> bool {
        let importance = self.importance_lookup.importance(&block.signer, block.height);
        let hit = calculate_hit(generation_hash);
        let target = calculate_target_between(parent, block, importance, &self.config);
        BlockTarget::from(hit) < target
    }

    /// Hit check from pre-extracted block values.
    pub fn hits_context(&self, context: &BlockHitContext) -> bool {
        let importance = self
            .importance_lookup
            .importance(&context.signer, context.height);
        let hit = calculate_hit(&context.generation_hash);
        let target = calculate_target(
            context.elapsed_time,
            context.difficulty,
            importance,
            &self.config,
        );
        BlockTarget::from(hit) < target
    }
}
