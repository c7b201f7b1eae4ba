//! # Committee Benchmarks
//!
//! | Operation | Expectation |
//! |-----------|-------------|
//! | `MemberList::insert` / `contains` | O(1) |
//! | `members_by_distance` | O(n log n) |
//! | Full commit-reveal round | linear in committee size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mc_01_committee::{CommitteeApi, CommitteeConfig, MemberList};
use mc_tests::fixtures::{random_hash, validator, Ballot, CommitteeFixture};

const SIZES: [usize; 3] = [16, 128, 1024];

fn bench_member_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("member_list");
    for size in SIZES {
        let members: Vec<_> = (1..=size as u16).map(validator).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &members, |b, members| {
            b.iter(|| {
                let mut list = MemberList::with_capacity(members.len());
                for member in members {
                    list.insert(*member);
                }
                black_box(list.len())
            })
        });

        let mut list = MemberList::with_capacity(size);
        for member in &members {
            list.insert(*member);
        }
        let (dislocation, proposal) = (random_hash(), random_hash());
        group.bench_with_input(BenchmarkId::new("rank", size), &list, |b, list| {
            b.iter(|| black_box(list.ranked_by_distance(&dislocation, &proposal)))
        });
    }
    group.finish();
}

fn bench_full_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("committee_round");
    group.sample_size(20);
    for size in [16usize, 128] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("commit_reveal", size), |b| {
            b.iter(|| {
                let proposal = random_hash();
                let fixture =
                    CommitteeFixture::new(size, proposal, CommitteeConfig::default()).unwrap();
                let ballots: Vec<_> = (0..size).map(|_| Ballot::random_salt(proposal)).collect();
                fixture.open_commit_phase().unwrap();
                fixture.commit_all(&ballots).unwrap();
                for (member, ballot) in fixture.members.iter().zip(&ballots) {
                    fixture
                        .service
                        .reveal_vote(*member, ballot.vote, ballot.salt)
                        .unwrap();
                }
                black_box(fixture.service.status())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_member_list, bench_full_round);
criterion_main!(benches);
