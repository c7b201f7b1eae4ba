//! Shared builders for integration tests and benchmarks.

use mc_01_committee::{
    seal_vote, CommitteeApi, CommitteeConfig, CommitteeResult, CommitteeService, CommitteeSetup,
    ManualClock, COMMITTEE_ACTIVATION_DELAY, COMMITTEE_COMMIT_PHASE_TIMEOUT,
};
use rand::Rng;
use shared_types::{Address, Hash, MetachainId};
use std::sync::{Arc, Once};

/// Address the test Consensus uses when driving committee membership.
pub const CONSENSUS: Address = Address([0xCC; 20]);

static LOGGING: Once = Once::new();

/// Install a quiet subscriber once per test binary.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let config = mc_telemetry::TelemetryConfig {
            log_level: "warn".to_string(),
            console_output: false,
            ..mc_telemetry::TelemetryConfig::default()
        };
        // Another harness may already own the global subscriber.
        let _ = mc_telemetry::init_tracing(&config);
    });
}

pub fn validator(n: u16) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0x10;
    bytes[18..].copy_from_slice(&n.to_be_bytes());
    Address::new(bytes)
}

pub fn metachain(n: u8) -> MetachainId {
    MetachainId::new([n; 32])
}

pub fn random_hash() -> Hash {
    rand::thread_rng().gen()
}

/// A vote and the salt that seals it.
#[derive(Clone, Copy, Debug)]
pub struct Ballot {
    pub vote: Hash,
    pub salt: Hash,
}

impl Ballot {
    pub fn random_salt(vote: Hash) -> Self {
        Self {
            vote,
            salt: random_hash(),
        }
    }

    pub fn sealed(&self) -> Hash {
        seal_vote(&self.vote, &self.salt)
    }
}

/// Committee service with its clock.
pub struct CommitteeFixture {
    pub service: CommitteeService<ManualClock>,
    pub clock: Arc<ManualClock>,
    pub members: Vec<Address>,
}

impl CommitteeFixture {
    /// Committee of `size` seats for `proposal`, nobody entered yet.
    pub fn new(size: usize, proposal: Hash, config: CommitteeConfig) -> CommitteeResult<Self> {
        let clock = Arc::new(ManualClock::new(1_000));
        let service = CommitteeService::new(
            CommitteeSetup {
                address: Address::repeat_byte(0xCE),
                consensus: CONSENSUS,
                size,
                dislocation: random_hash(),
                proposal,
            },
            config,
            clock.clone(),
        )?;
        Ok(Self {
            service,
            clock,
            members: (1..=size as u16).map(validator).collect(),
        })
    }

    /// Enter every member, cool down and activate.
    pub fn open_commit_phase(&self) -> CommitteeResult<()> {
        for member in &self.members {
            self.service.enter_member(CONSENSUS, *member)?;
        }
        self.service.cooldown_committee()?;
        self.clock.advance(COMMITTEE_ACTIVATION_DELAY);
        self.service.activate_committee()?;
        Ok(())
    }

    /// Commit one ballot per member, then move past the commit timeout.
    pub fn commit_all(&self, ballots: &[Ballot]) -> CommitteeResult<()> {
        for (member, ballot) in self.members.iter().zip(ballots) {
            self.service.submit_commit(*member, ballot.sealed())?;
        }
        self.clock.advance(COMMITTEE_COMMIT_PHASE_TIMEOUT);
        self.service.close_commit_phase()?;
        Ok(())
    }
}
