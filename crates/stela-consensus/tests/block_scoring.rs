use stela_consensus::{
    calculate_hit, calculate_score, calculate_target_between, BlockHitContext, BlockHitPredicate,
    BlockTarget, ChainConfig, ImportanceLookup, validate_header_sanity,
};
use stela_core::{
    derive_generation_hash, BlockHash, BlockHeader, Difficulty, GenerationHash, Height, Importance,
    SignerPublicKey, TimeSpan, Timestamp, PROTOCOL_VERSION,
};

const SIGNER: SignerPublicKey = SignerPublicKey([0x42; 32]);

fn config() -> ChainConfig {
    ChainConfig {
        block_generation_target_time: TimeSpan::from_secs(60),
        block_time_smoothing_factor: 0,
        total_chain_importance: Importance(9_000_000_000),
    }
}

fn header(timestamp: u64, height: u64, difficulty: u64) -> BlockHeader {
    BlockHeader {
        version: PROTOCOL_VERSION,
        prev: BlockHash::zero(),
        height: Height(height),
        timestamp: Timestamp(timestamp),
        difficulty: Difficulty(difficulty),
        signer: SIGNER,
    }
}

struct FixedLedger {
    importance: Importance,
}

impl ImportanceLookup for FixedLedger {
    fn importance(&self, _signer: &SignerPublicKey, _height: Height) -> Importance {
        self.importance
    }
}

#[test]
fn predicate_agrees_with_constituents_over_a_derived_chain() {
    let predicate = BlockHitPredicate::new(
        config(),
        FixedLedger {
            importance: Importance(500_000_000),
        },
    )
    .expect("valid config");

    // Walk a short chain of derived generation hashes, the way block
    // production chains per-block randomness.
    let mut generation_hash: GenerationHash = derive_generation_hash(&BlockHash::zero(), &SIGNER);
    let mut parent = header(1_700_000_000, 1, 80_000_000_000);

    for step in 1u64..=8 {
        let block = header(
            parent.timestamp.secs() + 15 * step,
            parent.height.value() + 1,
            80_000_000_000,
        );
        validate_header_sanity(&block).expect("sane header");

        let importance = Importance(500_000_000);
        let expected = BlockTarget::from(calculate_hit(&generation_hash))
            < calculate_target_between(&parent, &block, importance, &config());
        assert_eq!(
            predicate.hits(&parent, &block, &generation_hash),
            expected,
            "predicate must match its constituent calls at step {step}"
        );

        let context = BlockHitContext {
            signer: block.signer,
            height: block.height,
            elapsed_time: TimeSpan::between(parent.timestamp, block.timestamp),
            difficulty: block.difficulty,
            generation_hash,
        };
        assert_eq!(
            predicate.hits(&parent, &block, &generation_hash),
            predicate.hits_context(&context)
        );

        generation_hash = derive_generation_hash(&generation_hash, &SIGNER);
        parent = block;
    }
}

#[test]
fn richer_signer_hits_where_poorer_does_not() {
    // Pick a mid-range hash and a difficulty window where only the richer
    // signer's target clears the hit.
    let parent = header(1_700_000_000, 1, 75_000_000_000_000);
    let block = header(1_700_000_060, 2, 75_000_000_000_000);
    let hash: GenerationHash = "0123456789abcdef000000000000000000000000000000000000000000000000"
        .parse()
        .expect("hash literal");

    let hit = BlockTarget::from(calculate_hit(&hash));
    let poor = calculate_target_between(&parent, &block, Importance(1), &config());
    let rich = calculate_target_between(&parent, &block, Importance(8_999_999_998), &config());
    assert!(hit >= poor, "poor signer must miss this fixture");
    assert!(hit < rich, "rich signer must hit this fixture");

    let poor_predicate = BlockHitPredicate::new(config(), FixedLedger {
        importance: Importance(1),
    })
    .expect("valid config");
    let rich_predicate = BlockHitPredicate::new(config(), FixedLedger {
        importance: Importance(8_999_999_998),
    })
    .expect("valid config");
    assert!(!poor_predicate.hits(&parent, &block, &hash));
    assert!(rich_predicate.hits(&parent, &block, &hash));
}

#[test]
fn score_and_target_agree_on_non_causal_rejection() {
    let parent = header(1_700_000_060, 1, 100);
    let stale = header(1_700_000_060, 2, 100);
    let earlier = header(1_700_000_000, 2, 100);

    for candidate in [&stale, &earlier] {
        assert_eq!(calculate_score(&parent, candidate), 0);
        assert_eq!(
            calculate_target_between(&parent, candidate, Importance(1000), &config()),
            BlockTarget::from(0u64)
        );
    }
}
