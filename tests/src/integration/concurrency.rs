//! # Concurrency
//!
//! Many callers hitting one committee or one registry at the same time:
//! membership is never lost or duplicated, phase transitions happen once,
//! and concurrent logouts across metachains all land.

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        init_test_logging, metachain, random_hash, validator, Ballot, CommitteeFixture, CONSENSUS,
    };
    use mc_01_committee::{
        CommitteeApi, CommitteeConfig, CommitteeStatus, COMMITTEE_ACTIVATION_DELAY,
        COMMITTEE_COMMIT_PHASE_TIMEOUT,
    };
    use mc_02_consensus::{
        ConsensusApi, ConsensusService, CoreLifetime, InMemoryReputation, LocalCore,
    };
    use shared_types::{Address, ErrorKind};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_entry_then_full_round() {
        init_test_logging();
        let proposal = random_hash();
        let fixture =
            Arc::new(CommitteeFixture::new(24, proposal, CommitteeConfig::default()).unwrap());

        // 48 candidates race for 24 seats.
        let handles: Vec<_> = (1..=48u16)
            .map(|n| {
                let fixture = fixture.clone();
                thread::spawn(move || fixture.service.enter_member(CONSENSUS, validator(n)))
            })
            .collect();
        let rejected: Vec<_> = handles
            .into_iter()
            .filter_map(|handle| handle.join().unwrap().err())
            .collect();

        assert_eq!(rejected.len(), 24);
        assert!(rejected
            .iter()
            .all(|err| err.kind() == ErrorKind::CapacityExceeded));

        let seated = fixture.service.snapshot().members;
        let unique: HashSet<_> = seated.iter().copied().collect();
        assert_eq!(seated.len(), 24);
        assert_eq!(unique.len(), 24);

        // Drive the round with whoever got a seat.
        fixture.service.cooldown_committee().unwrap();
        fixture.clock.advance(COMMITTEE_ACTIVATION_DELAY);
        fixture.service.activate_committee().unwrap();

        let ballots: Vec<(Address, Ballot)> = seated
            .iter()
            .map(|member| (*member, Ballot::random_salt(proposal)))
            .collect();
        let commits: Vec<_> = ballots
            .iter()
            .map(|(member, ballot)| {
                let fixture = fixture.clone();
                let (member, sealed) = (*member, ballot.sealed());
                thread::spawn(move || fixture.service.submit_commit(member, sealed))
            })
            .collect();
        for handle in commits {
            handle.join().unwrap().unwrap();
        }

        fixture.clock.advance(COMMITTEE_COMMIT_PHASE_TIMEOUT);
        let pokes: Vec<_> = (0..8)
            .map(|_| {
                let fixture = fixture.clone();
                thread::spawn(move || fixture.service.close_commit_phase())
            })
            .collect();
        let advanced = pokes
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|result| matches!(result, Ok(transition) if transition.is_advanced()))
            .count();
        assert_eq!(advanced, 1);

        let reveals: Vec<_> = ballots
            .iter()
            .map(|(member, ballot)| {
                let fixture = fixture.clone();
                let (member, ballot) = (*member, *ballot);
                thread::spawn(move || {
                    fixture
                        .service
                        .reveal_vote(member, ballot.vote, ballot.salt)
                })
            })
            .collect();
        for handle in reveals {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(fixture.service.status(), CommitteeStatus::Committed);
        let decision = fixture.service.decision().unwrap();
        assert_eq!(decision.revealed, 24);
        assert_eq!(decision.decision, Some(proposal));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_logouts_across_metachains() {
        init_test_logging();
        let reputation = Arc::new(InMemoryReputation::new());
        let consensus = Arc::new(ConsensusService::with_reputation(reputation.clone()));

        let mut cores = Vec::new();
        for n in 1..=4u8 {
            let core = Arc::new(
                LocalCore::with_lifetime_path(
                    Address::repeat_byte(0xC0 + n),
                    &[CoreLifetime::Genesis, CoreLifetime::Active],
                )
                .unwrap(),
            );
            consensus.set_assignment(metachain(n), core.clone()).unwrap();
            consensus
                .set_core_lifetime(Address::repeat_byte(0xC0 + n), CoreLifetime::Active)
                .unwrap();
            cores.push(core);
        }

        let mut tasks = Vec::new();
        for n in 1..=4u8 {
            for v in 0..16u16 {
                let consensus = consensus.clone();
                let who = validator(u16::from(n) * 100 + v);
                tasks.push(tokio::spawn(async move {
                    consensus
                        .logout(metachain(n), Address::repeat_byte(0xC0 + n), who)
                        .await
                        .map(|()| who)
                }));
            }
        }

        let mut logged_out = HashSet::new();
        for task in tasks {
            logged_out.insert(task.await.unwrap().unwrap());
        }
        assert_eq!(logged_out.len(), 64);
        assert!(logged_out.iter().all(|who| reputation.is_logged_out(who)));
        for core in &cores {
            assert_eq!(core.logged_out().len(), 16);
        }
    }
}
