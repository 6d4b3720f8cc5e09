// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for portal navigation and notification handling.
//!
//! Measures the performance of:
//! - Page activation by id and by name
//! - A full sign-in journey including validation and notification

use criterion::{criterion_group, criterion_main, Criterion};
use medsync::forms::Edit;
use medsync::navigation::{Section, ViewId};
use medsync::notifications::ManualClock;
use medsync::portal::Portal;
use medsync::session::Role;
use std::hint::black_box;

fn bench_activate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("activate_cycle", |b| {
        let mut portal = Portal::with_clock(ManualClock::new());
        b.iter(|| {
            for view in ViewId::ALL {
                portal.navigate(black_box(view));
            }
            black_box(portal.go_back());
        });
    });

    group.bench_function("activate_by_name", |b| {
        let mut portal = Portal::with_clock(ManualClock::new());
        b.iter(|| {
            for view in ViewId::ALL {
                black_box(portal.navigate_by_name(black_box(view.name())));
            }
            black_box(portal.navigate_by_name("unknown-page"));
        });
    });

    group.finish();
}

fn bench_sign_in_journey(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("register_and_browse", |b| {
        b.iter(|| {
            let mut portal = Portal::with_clock(ManualClock::new());
            portal.select_role(Role::Ngo);
            for edit in [
                Edit::RegisterName("Relief".into()),
                Edit::RegisterEmail("hq@relief.org".into()),
                Edit::RegisterPhone("555".into()),
                Edit::RegisterPassword("pw".into()),
            ] {
                portal.edit(edit);
            }
            portal.register();
            for section in [Section::Inventory, Section::Requests, Section::Allocations] {
                portal.show_section(Role::Ngo, section);
            }
            portal.logout();
            black_box(portal);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_activate, bench_sign_in_journey);
criterion_main!(benches);
