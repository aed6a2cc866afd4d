use super::*;

fn positions(pool: &ParticlePool) -> Vec<(f32, f32)> {
    pool.iter().map(|p| (p.x, p.y)).collect()
}

fn ages(pool: &ParticlePool) -> Vec<f32> {
    pool.iter().map(|p| p.age).collect()
}

#[test]
fn new_pool_is_zeroed_and_empty() {
    let pool = ParticlePool::new(8);
    assert_eq!(pool.capacity(), 8);
    assert_eq!(pool.len(), 0);
    assert_eq!(pool.as_slice().len(), 8 * STRIDE);
    assert!(pool.as_slice().iter().all(|v| *v == 0.0));
    assert_eq!(pool.head(), 0);
    assert_eq!(pool.tail(), 0);
    assert!(!pool.is_wrapped());
}

#[test]
fn zero_capacity_pool_drops_everything() {
    let mut pool = ParticlePool::new(0);
    assert!(!pool.emit(1.0, 2.0));
    assert!(pool.is_empty());

    let mut visited = 0;
    let retirement = pool.update(1.0, |_| {
        visited += 1;
        true
    });
    assert!(retirement.is_empty());
    pool.render(|_| visited += 1);
    assert_eq!(visited, 0);
}

#[test]
fn emit_writes_position_with_zero_age() {
    let mut pool = ParticlePool::new(2);
    assert!(pool.emit(3.5, -1.0));
    assert_eq!(pool.get(0), Some(Particle { x: 3.5, y: -1.0, age: 0.0 }));
    assert_eq!(&pool.as_slice()[..STRIDE], &[3.5, -1.0, 0.0]);
    assert_eq!(pool.tail(), 1);
}

#[test]
fn emit_beyond_capacity_is_dropped_without_overwrite() {
    let mut pool = ParticlePool::new(3);
    for i in 0..3 {
        assert!(pool.emit(i as f32, 0.0));
    }
    assert!(pool.is_full());
    assert!(pool.is_wrapped());

    assert!(!pool.emit(99.0, 99.0));
    assert_eq!(pool.len(), 3);
    assert_eq!(positions(&pool), vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
}

#[test]
fn single_slot_pool_keeps_first_emit() {
    let mut pool = ParticlePool::new(1);
    assert!(pool.emit(1.0, 1.0));
    assert!(!pool.emit(2.0, 2.0));

    let mut drawn = Vec::new();
    pool.render(|p| drawn.push(p));
    assert_eq!(drawn, vec![Particle { x: 1.0, y: 1.0, age: 0.0 }]);
}

#[test]
fn update_ages_before_calling_retire() {
    let mut pool = ParticlePool::new(4);
    pool.emit(0.0, 0.0);
    pool.emit(1.0, 0.0);

    let mut seen = Vec::new();
    pool.update(0.25, |p| {
        seen.push(p.age);
        false
    });
    assert_eq!(seen, vec![0.25, 0.25]);
    assert_eq!(ages(&pool), vec![0.25, 0.25]);
}

#[test]
fn update_with_zero_elapsed_and_no_retire_changes_nothing() {
    let mut pool = ParticlePool::new(4);
    pool.emit(0.0, 0.0);
    pool.update(0.5, |_| false);
    pool.emit(1.0, 0.0);
    let before = pool.clone();

    let retirement = pool.update(0.0, |_| false);
    assert!(retirement.is_empty());
    assert_eq!(ages(&pool), ages(&before));
    assert_eq!(pool.len(), before.len());
}

#[test]
fn retirement_stops_at_first_survivor() {
    let mut pool = ParticlePool::new(5);
    for i in 0..5 {
        pool.emit(i as f32, 0.0);
    }

    // Retire 0 and 1, keep 2, ask to retire 3 as well: 3 must survive.
    let retirement = pool.update(0.0, |p| p.x != 2.0);
    assert_eq!(retirement.count(), 2);
    assert_eq!(retirement.slots().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(retirement.head(), 2);
    assert_eq!(
        positions(&pool),
        vec![(2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]
    );
}

#[test]
fn retire_sees_every_live_particle_once() {
    let mut pool = ParticlePool::new(4);
    for i in 0..4 {
        pool.emit(i as f32, 0.0);
    }
    let mut calls = Vec::new();
    pool.update(1.0, |p| {
        calls.push(p.x);
        true
    });
    assert_eq!(calls, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn retiring_everything_restores_canonical_empty_state() {
    let mut pool = ParticlePool::new(3);
    pool.emit(0.0, 0.0);
    pool.emit(1.0, 0.0);
    pool.update(0.0, |p| p.x == 0.0);
    assert_eq!(pool.head(), 1);

    let retirement = pool.update(1.0, |_| true);
    assert_eq!(retirement.count(), 1);
    assert!(pool.is_empty());
    assert_eq!(pool.head(), 0);
    assert_eq!(pool.tail(), 0);
    assert!(!pool.is_wrapped());
    assert!(pool.emit(5.0, 5.0));
    assert_eq!(pool.get(0).map(|p| p.x), Some(5.0));
}

#[test]
fn wraparound_keeps_emission_order() {
    let mut pool = ParticlePool::new(3);
    pool.emit(1.0, 0.0);
    pool.emit(2.0, 0.0);
    pool.emit(3.0, 0.0);

    pool.update(1.0, |p| p.x < 3.0);
    assert_eq!(pool.len(), 1);

    assert!(pool.emit(4.0, 0.0));
    assert!(pool.emit(5.0, 0.0));
    assert_eq!(pool.len(), 3);
    assert!(pool.is_wrapped());
    assert_eq!(pool.head(), 2);
    assert_eq!(pool.tail(), 2);

    let mut order = Vec::new();
    pool.render(|p| order.push((p.x, p.age)));
    assert_eq!(order, vec![(3.0, 1.0), (4.0, 0.0), (5.0, 0.0)]);
}

#[test]
fn render_is_repeatable() {
    let mut pool = ParticlePool::new(4);
    for i in 0..4 {
        pool.emit(i as f32, i as f32);
    }
    pool.update(0.5, |p| p.x == 0.0);
    pool.emit(9.0, 9.0);

    let mut first = Vec::new();
    pool.render(|p| first.push(p));
    let mut second = Vec::new();
    pool.render(|p| second.push(p));
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn clear_resets_and_accepts_new_emits() {
    let mut pool = ParticlePool::new(2);
    pool.emit(1.0, 1.0);
    pool.emit(2.0, 2.0);
    pool.clear();
    assert!(pool.is_empty());
    assert!(!pool.is_wrapped());
    assert!(pool.emit(3.0, 3.0));
    assert_eq!(positions(&pool), vec![(3.0, 3.0)]);
}

#[test]
fn iter_reports_exact_len() {
    let mut pool = ParticlePool::new(4);
    for i in 0..4 {
        pool.emit(i as f32, 0.0);
    }
    pool.update(0.0, |p| p.x < 2.0);
    pool.emit(4.0, 0.0);
    let iter = pool.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!((&pool).into_iter().count(), 3);
}

#[test]
fn oversized_capacity_is_refused_before_allocating() {
    let capacity = usize::MAX / STRIDE + 1;
    let err = ParticlePool::try_new(capacity).unwrap_err();
    assert!(matches!(
        err,
        PoolError::CapacityTooLarge { capacity: c, max: MAX_CAPACITY } if c == capacity
    ));
    assert!(ParticlePool::try_new(MAX_CAPACITY + 1).is_err());
}

#[test]
fn max_capacity_storage_size_does_not_wrap() {
    assert_eq!(MAX_CAPACITY.checked_mul(STRIDE).map(|len| len / STRIDE), Some(MAX_CAPACITY));
    assert!(MAX_CAPACITY * STRIDE * std::mem::size_of::<f32>() <= isize::MAX as usize);
}

#[test]
fn try_new_matches_new_for_normal_capacities() {
    let pool = ParticlePool::try_new(5).expect("small capacity should be accepted");
    assert_eq!(pool.capacity(), 5);
    assert_eq!(pool.as_slice().len(), 5 * STRIDE);
}
