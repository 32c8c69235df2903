use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

use league_core::constants::{REQUIRED_MEETINGS, SEASON_WEEKS, WEEK_POINTS};
use league_core::{
    allocate_points, double_round_robin, weekly_sums, DeficitMatrix, ScheduleCompleter, TeamId,
};

fn league_roster() -> Vec<TeamId> {
    (1..=10).map(TeamId).collect()
}

fn fixed_history(teams: &[TeamId], weeks: usize) -> Vec<(TeamId, TeamId)> {
    double_round_robin(teams, weeks)
        .unwrap()
        .iter()
        .flat_map(|w| w.pairings.iter().map(|p| (p.team_a, p.team_b)))
        .collect()
}

fn bench_double_round_robin(c: &mut Criterion) {
    let teams = league_roster();

    c.bench_function("double_round_robin_10_teams", |b| {
        b.iter(|| double_round_robin(black_box(&teams), SEASON_WEEKS).unwrap())
    });
}

fn bench_deficit_matrix(c: &mut Criterion) {
    let teams = league_roster();
    let history = fixed_history(&teams, 14);

    c.bench_function("deficit_matrix_14_fixed_weeks", |b| {
        b.iter(|| {
            DeficitMatrix::from_history(black_box(&teams), black_box(&history), REQUIRED_MEETINGS)
                .unwrap()
        })
    });
}

fn bench_complete_final_weeks(c: &mut Criterion) {
    let teams = league_roster();
    let history = fixed_history(&teams, 14);
    let deficits = DeficitMatrix::from_history(&teams, &history, REQUIRED_MEETINGS).unwrap();

    c.bench_function("complete_final_4_weeks", |b| {
        b.iter(|| {
            ScheduleCompleter::new(black_box(&teams), deficits.clone())
                .unwrap()
                .complete(4)
                .unwrap()
        })
    });
}

fn bench_allocate_points(c: &mut Criterion) {
    let teams = league_roster();
    let weeks = double_round_robin(&teams, SEASON_WEEKS).unwrap();

    let mut scores = HashMap::new();
    for (i, &team) in teams.iter().enumerate() {
        // A couple of equal scores so the tie path is exercised.
        scores.insert(team, ((i / 2) * 10) as f64);
    }
    let sums = weekly_sums(&weeks[0], &scores);

    c.bench_function("allocate_points_week", |b| {
        b.iter(|| allocate_points(black_box(&sums), black_box(&WEEK_POINTS)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_double_round_robin,
    bench_deficit_matrix,
    bench_complete_final_weeks,
    bench_allocate_points,
);
criterion_main!(benches);
