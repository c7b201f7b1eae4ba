//! # Checkpoint Flows
//!
//! ## Flow Tested:
//!
//! 1. **Consensus (2)**: assigns a Core to a metachain and registers the committee
//! 2. **Committee (1)**: members enter, commit, reveal and the round is decided
//! 3. **Committee (1) → Consensus (2)**: the decision is registered; the first
//!    committed checkpoint moves the Core from genesis to active
//! 4. **Consensus (2) → Core → Reputation**: validators log out

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        init_test_logging, metachain, random_hash, Ballot, CommitteeFixture, CONSENSUS,
    };
    use mc_01_committee::{
        CommitteeApi, CommitteeConfig, CommitteeEvent, CommitteeStatus, RevealOutcome,
        COMMITTEE_REVEAL_PHASE_TIMEOUT,
    };
    use mc_02_consensus::{
        ConsensusApi, ConsensusError, ConsensusService, CoreGateway, CoreLifetime,
        InMemoryReputation, LocalCore,
    };
    use shared_types::{Address, ErrorKind};
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Network {
        consensus: ConsensusService,
        core: Arc<LocalCore>,
        reputation: Arc<InMemoryReputation>,
    }

    fn core_address() -> Address {
        Address::repeat_byte(0xC0)
    }

    /// Consensus with one Core at genesis, recorded both in the registry and in the Core.
    fn genesis_network() -> Network {
        init_test_logging();
        let reputation = Arc::new(InMemoryReputation::new());
        let consensus = ConsensusService::with_reputation(reputation.clone());
        let core = Arc::new(
            LocalCore::with_lifetime_path(core_address(), &[CoreLifetime::Genesis]).unwrap(),
        );
        consensus.set_assignment(metachain(1), core.clone()).unwrap();
        consensus
            .set_core_lifetime(core_address(), CoreLifetime::Genesis)
            .unwrap();
        Network {
            consensus,
            core,
            reputation,
        }
    }

    /// Run a full round where member `i` votes `votes[i]`.
    fn decided_round(
        network: &Network,
        proposal: [u8; 32],
        votes: &[[u8; 32]],
    ) -> CommitteeFixture {
        let fixture =
            CommitteeFixture::new(votes.len(), proposal, CommitteeConfig::default()).unwrap();
        network
            .consensus
            .register_committee(metachain(1), proposal, fixture.service.address())
            .unwrap();

        let ballots: Vec<Ballot> = votes.iter().copied().map(Ballot::random_salt).collect();
        fixture.open_commit_phase().unwrap();
        fixture.commit_all(&ballots).unwrap();
        for (member, ballot) in fixture.members.iter().zip(&ballots) {
            fixture
                .service
                .reveal_vote(*member, ballot.vote, ballot.salt)
                .unwrap();
        }
        fixture
    }

    fn drained_decision(fixture: &CommitteeFixture) -> mc_01_committee::CommitteeDecision {
        fixture
            .service
            .take_events()
            .into_iter()
            .find_map(|event| match event {
                CommitteeEvent::Decided(decision) => Some(decision),
                CommitteeEvent::PhaseChanged(_) => None,
            })
            .expect("round produced no decision")
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_first_checkpoint_activates_core_and_logout_flows() {
        let network = genesis_network();
        let proposal = random_hash();
        let fixture = decided_round(&network, proposal, &[proposal; 5]);
        assert_eq!(fixture.service.status(), CommitteeStatus::Committed);

        let decision = drained_decision(&fixture);
        assert_eq!(decision.decision, Some(proposal));
        assert_eq!(decision.revealers, fixture.service.members_by_distance());

        network
            .consensus
            .register_committee_decision(decision.clone())
            .await
            .unwrap();
        assert_eq!(
            network.consensus.core_lifetime(&core_address()),
            CoreLifetime::Active
        );
        assert_eq!(network.core.lifetime().await, CoreLifetime::Active);
        assert_eq!(network.consensus.committee_decision(&proposal), Some(decision));

        let leaving = fixture.members[0];
        network.core.join(leaving).unwrap();
        network
            .consensus
            .logout(metachain(1), core_address(), leaving)
            .await
            .unwrap();
        assert!(network.core.is_logged_out(&leaving));
        assert!(network.reputation.is_logged_out(&leaving));
    }

    #[tokio::test]
    async fn test_invalid_round_keeps_core_in_genesis() {
        let network = genesis_network();
        let proposal = random_hash();
        let other = random_hash();
        let fixture = decided_round(&network, proposal, &[proposal, proposal, other, other]);
        assert_eq!(fixture.service.status(), CommitteeStatus::Invalid);

        let decision = drained_decision(&fixture);
        assert_eq!(decision.decision, None);
        network
            .consensus
            .register_committee_decision(decision)
            .await
            .unwrap();

        assert_eq!(
            network.consensus.core_lifetime(&core_address()),
            CoreLifetime::Genesis
        );
        assert_eq!(network.core.lifetime().await, CoreLifetime::Genesis);

        // Genesis cores still accept logouts.
        network
            .consensus
            .logout(metachain(1), core_address(), fixture.members[1])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_late_reveals_fall_back_to_timeout_finalize() {
        let network = genesis_network();
        let proposal = random_hash();
        let fixture =
            CommitteeFixture::new(5, proposal, CommitteeConfig::default()).unwrap();
        network
            .consensus
            .register_committee(metachain(1), proposal, fixture.service.address())
            .unwrap();

        let ballots: Vec<Ballot> = (0..5).map(|_| Ballot::random_salt(proposal)).collect();
        fixture.open_commit_phase().unwrap();
        fixture.commit_all(&ballots).unwrap();

        // Three of five reveal in time.
        for (member, ballot) in fixture.members.iter().zip(&ballots).take(3) {
            let outcome = fixture
                .service
                .reveal_vote(*member, ballot.vote, ballot.salt)
                .unwrap();
            assert!(matches!(outcome, RevealOutcome::Recorded { .. }));
        }
        fixture.clock.advance(COMMITTEE_REVEAL_PHASE_TIMEOUT);

        let late = fixture
            .service
            .reveal_vote(fixture.members[3], ballots[3].vote, ballots[3].salt)
            .unwrap_err();
        assert_eq!(late.kind(), ErrorKind::InvalidState);

        let decision = fixture.service.finalize().unwrap();
        assert!(decision.is_committed());
        assert_eq!(decision.revealed, 3);

        network
            .consensus
            .register_committee_decision(decision)
            .await
            .unwrap();
        assert_eq!(
            network.consensus.core_lifetime(&core_address()),
            CoreLifetime::Active
        );
    }

    #[tokio::test]
    async fn test_decision_from_foreign_committee_rejected() {
        let network = genesis_network();
        let proposal = random_hash();
        let fixture = decided_round(&network, proposal, &[proposal; 3]);
        let mut forged = drained_decision(&fixture);
        forged.committee = Address::repeat_byte(0xEE);

        let err = network
            .consensus
            .register_committee_decision(forged)
            .await
            .unwrap_err();
        assert!(matches!(err, ConsensusError::CommitteeNotRegistered { .. }));
        assert_eq!(
            network.consensus.core_lifetime(&core_address()),
            CoreLifetime::Genesis
        );
    }

    #[tokio::test]
    async fn test_corrupted_core_blocks_logout_until_restored() {
        let network = genesis_network();
        let validator = Address::repeat_byte(0x42);
        network
            .consensus
            .set_core_lifetime(core_address(), CoreLifetime::Corrupted)
            .unwrap();

        let err = network
            .consensus
            .logout(metachain(1), core_address(), validator)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(!network.core.is_logged_out(&validator));
        assert!(!network.reputation.is_logged_out(&validator));

        network
            .consensus
            .set_core_lifetime(core_address(), CoreLifetime::Active)
            .unwrap();
        network
            .consensus
            .logout(metachain(1), core_address(), validator)
            .await
            .unwrap();
        assert!(network.reputation.is_logged_out(&validator));
    }

    #[tokio::test]
    async fn test_committee_refuses_members_from_other_callers() {
        init_test_logging();
        let fixture =
            CommitteeFixture::new(3, random_hash(), CommitteeConfig::default()).unwrap();
        let err = fixture
            .service
            .enter_member(Address::repeat_byte(0x01), fixture.members[0])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        fixture
            .service
            .enter_member(CONSENSUS, fixture.members[0])
            .unwrap();
        assert_eq!(fixture.service.snapshot().members, vec![fixture.members[0]]);
    }
}
