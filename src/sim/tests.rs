use super::*;

#[test]
fn count_is_floor_of_area_ratio() {
    assert_eq!(MoteField::mote_count(0, 0), 0);
    assert_eq!(MoteField::mote_count(100, 100), 0);
    assert_eq!(MoteField::mote_count(350, 100), 1);
    assert_eq!(MoteField::mote_count(1920, 1080), 59);
    assert_eq!(MoteField::mote_count(3840, 2160), 236);
}

#[test]
fn population_matches_count_exactly() {
    let field = MoteField::new(1920, 1080);
    assert_eq!(field.motes().len(), MoteField::mote_count(1920, 1080));

    let tiny = MoteField::new(10, 10);
    assert!(tiny.motes().is_empty());
}

#[test]
fn spawn_bands_hold() {
    let field = MoteField::new(1920, 1080);
    let motes = field.motes();
    for i in 0..motes.len() {
        assert!(motes.x[i] >= 0.0 && motes.x[i] < 1920.0);
        assert!(motes.y[i] >= 0.0 && motes.y[i] < 1080.0);
        assert!(motes.r[i] >= 0.3 && motes.r[i] < 1.5);
        assert!(motes.a[i] >= 0.15 && motes.a[i] < 0.5);
        assert!(motes.vx[i].abs() <= 0.075);
        assert!(motes.vy[i].abs() <= 0.075);
    }
}

#[test]
fn step_keeps_motes_in_bounds() {
    let mut field = MoteField::new(1400, 1000);
    assert_eq!(field.motes().len(), 40);

    for _ in 0..10_000 {
        field.step();
    }

    let motes = field.motes();
    for i in 0..motes.len() {
        assert!(motes.x[i] >= 0.0 && motes.x[i] < 1400.0, "x[{i}] = {}", motes.x[i]);
        assert!(motes.y[i] >= 0.0 && motes.y[i] < 1000.0, "y[{i}] = {}", motes.y[i]);
    }
}

#[test]
fn wraparound_reenters_from_the_far_edge() {
    let mut motes = Motes::new();
    motes.x.push(0.03);
    motes.y.push(50.0);
    motes.r.push(1.0);
    motes.a.push(0.3);
    motes.vx.push(-0.07);
    motes.vy.push(0.0);

    motes.step(200.0, 100.0);
    assert!((motes.x[0] - 199.96).abs() < 1e-3);

    motes.x[0] = 199.99;
    motes.vx[0] = 0.02;
    motes.step(200.0, 100.0);
    assert!(motes.x[0] >= 0.0 && motes.x[0] < 0.02);
}

#[test]
fn resize_regenerates_wholesale() {
    let mut field = MoteField::new(1920, 1080);
    assert_eq!(field.motes().len(), 59);

    field.resize(800, 600);
    assert_eq!(field.motes().len(), 13);
    let motes = field.motes();
    for i in 0..motes.len() {
        assert!(motes.x[i] < 800.0);
        assert!(motes.y[i] < 600.0);
    }

    field.resize(10, 10);
    assert!(field.motes().is_empty());
}

#[test]
fn same_seed_same_field() {
    let a = MoteField::new(1280, 720);
    let b = MoteField::new(1280, 720);
    assert_eq!(a.motes().x, b.motes().x);
    assert_eq!(a.motes().y, b.motes().y);
    assert_eq!(a.motes().r, b.motes().r);
}

#[test]
fn rand_stays_in_unit_interval() {
    let mut rng = 0xDEADBEEF_u32;
    for _ in 0..100_000 {
        let v = MoteField::rand(&mut rng);
        assert!((0.0..1.0).contains(&v));
    }
}
