use srbo_grid::solver::SolverError;
use srbo_grid::{GridConfig, GridError, GridModel, Morse, PlotData, io, presets};

fn h2(nrep: usize, natt: usize) -> GridConfig {
    GridConfig::new(1.4, 0.1744, 0.37, nrep, natt)
}

fn configurations() -> Vec<GridConfig> {
    let mut configs = vec![
        h2(1, 1),
        h2(3, 7),
        h2(5, 10),
        h2(8, 8),
        h2(10, 20),
        h2(20, 10),
        h2(5, 10).with_rmin(0.8).with_rmax(6.0),
        h2(5, 10).with_vfact(3.0).with_vthrs(0.01),
    ];
    configs.extend(presets().iter().map(|m| m.config(10, 20)));
    configs
}

fn models() -> Vec<GridModel> {
    configurations()
        .iter()
        .map(|c| GridModel::new(c).unwrap())
        .collect()
}

/// Deterministic, well-spread fractions in (0, 1).
fn spread(n: usize) -> impl Iterator<Item = f64> {
    let phi = (5f64.sqrt() - 1.0) / 2.0;
    (1..=n).map(move |k| (k as f64 * phi).fract())
}

#[test]
fn grid_is_strictly_ascending_with_npoints_entries() {
    for model in models() {
        let grid = model.bond_length_grid().unwrap();
        assert_eq!(grid.len(), model.nrep() + model.natt() + 1);
        assert!(grid.points().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn grid_spans_resolved_boundaries() {
    for model in models() {
        let grid = model.bond_length_grid().unwrap();
        assert!((grid.first() - model.rmin()).abs() <= 1e-9 * model.rmin().abs());
        assert!((grid.last() - model.rmax()).abs() <= 1e-9 * model.rmax().abs());
    }
}

#[test]
fn equilibrium_point_sits_at_re() {
    for model in models() {
        let grid = model.bond_length_grid().unwrap();
        assert!(
            (grid.equilibrium() - model.re()).abs() < 1e-6,
            "{} vs {}",
            grid.equilibrium(),
            model.re()
        );
    }
}

#[test]
fn transforms_round_trip_inside_boundaries() {
    let model = GridModel::new(&h2(5, 10)).unwrap();
    let width = model.rmax() - model.rmin();
    for t in spread(100) {
        let r = model.rmin() + t * width;
        let back = model.to_bond_length(model.to_bond_order(r)).unwrap();
        assert!((back - r).abs() < 1e-10, "{r} -> {back}");
    }
}

#[test]
fn bond_order_spans_match_point_ratio() {
    for model in models() {
        let n_min = model.to_bond_order(model.rmin());
        let n_max = model.to_bond_order(model.rmax());
        let attractive = 1.0 - n_max;
        let repulsive = n_min - 1.0;
        assert!((attractive / repulsive - model.ratio()).abs() < 1e-9);
        assert_eq!(model.ratio(), model.natt() as f64 / model.nrep() as f64);
    }
}

#[test]
fn explicit_rmin_is_reproduced_from_derived_vfact() {
    let explicit = GridModel::new(&h2(5, 10).with_rmin(0.8)).unwrap();
    let derived = GridModel::new(&h2(5, 10).with_vfact(explicit.vfact())).unwrap();
    assert!((derived.rmin() - 0.8).abs() < 1e-12);
    assert!((derived.beta() - explicit.beta()).abs() < 1e-10);

    let explicit = GridModel::new(&h2(5, 10).with_rmax(6.0)).unwrap();
    let derived = GridModel::new(&h2(5, 10).with_vthrs(explicit.vthrs())).unwrap();
    assert!((derived.rmax() - 6.0).abs() < 1e-10);
}

#[test]
fn invalid_inputs_are_rejected() {
    let zero_de = GridConfig { de: 0.0, ..h2(5, 10) };
    assert!(matches!(
        GridModel::new(&zero_de),
        Err(GridError::InvalidParameter { name: "de", .. })
    ));

    assert!(matches!(
        GridModel::new(&h2(0, 10)),
        Err(GridError::InvalidParameter { name: "nrep", .. })
    ));

    assert!(matches!(
        GridModel::new(&h2(5, 10).with_vthrs(1.5)),
        Err(GridError::InvalidParameter { name: "vthrs", .. })
    ));

    let model = GridModel::new(&h2(5, 10)).unwrap();
    assert!(matches!(
        model.to_bond_length(0.0),
        Err(GridError::InvalidParameter { name: "n", .. })
    ));
}

#[test]
fn unbracketed_ratio_is_a_calibration_error() {
    for config in [h2(1, 50), h2(50, 1)] {
        assert!(matches!(
            GridModel::new(&config),
            Err(GridError::Calibration(SolverError::NoSignChange { .. }))
        ));
    }
}

#[test]
fn h2_reference_scenario() {
    let model = GridModel::new(&h2(5, 10)).unwrap();

    assert!((model.alpha() - 1.031).abs() < 5e-3);
    assert_eq!(model.npoints(), 16);
    assert!(model.beta() > 0.001 && model.beta() < 2.0);
    assert!(model.rmin() < model.re() && model.re() < model.rmax());

    let grid = model.bond_length_grid().unwrap();
    assert_eq!(grid.len(), 16);
    assert!(grid.points().windows(2).all(|w| w[0] < w[1]));
    assert!(grid.first() >= model.rmin() - 1e-9);
    assert!(grid.last() <= model.rmax() + 1e-9);
}

#[test]
fn morse_is_zero_at_minimum_and_approaches_de() {
    let morse = Morse::from_force_constant(1.4, 0.1744, 0.37);
    assert_eq!(morse.energy(1.4), 0.0);

    let tail: Vec<f64> = (1..=60).map(|i| morse.energy(1.4 + 0.25 * i as f64)).collect();
    assert!(tail.windows(2).all(|w| w[0] <= w[1]));
    assert!(tail.iter().all(|&v| v < morse.de));
    assert!(morse.de - tail[59] < 1e-6);
}

#[test]
fn boundary_update_does_not_recalibrate_beta() {
    let mut model = GridModel::new(&h2(5, 10)).unwrap();
    let beta = model.beta();

    model.update_boundaries(Some(0.8), Some(6.0)).unwrap();
    assert_eq!(model.beta(), beta);

    // a fresh model on the same boundaries calibrates differently
    let fresh = GridModel::new(&h2(5, 10).with_rmin(0.8).with_rmax(6.0)).unwrap();
    assert!((fresh.beta() - beta).abs() > 0.1);

    // so the stale spacing no longer lands a point on Re
    let grid = model.bond_length_grid().unwrap();
    assert!((grid.first() - 0.8).abs() < 1e-12);
    assert!((grid.equilibrium() - model.re()).abs() > 1e-3);
}

#[test]
fn saved_grid_loads_back_identically() {
    let grid = GridModel::new(&h2(5, 10))
        .unwrap()
        .bond_length_grid()
        .unwrap();
    let dir = std::env::temp_dir();

    for ext in ["npy", "txt"] {
        let path = dir.join(format!("srbo-grid-{}-roundtrip.{ext}", std::process::id()));
        io::save(&path, grid.points()).unwrap();
        let loaded = io::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, grid.points(), "{ext}");
    }
}

#[test]
fn plot_data_covers_grid_partitions() {
    let model = GridModel::new(&h2(5, 10)).unwrap();
    let grid = model.bond_length_grid().unwrap();
    let data = PlotData::new(model.morse(), &grid, PlotData::DEFAULT_SAMPLES);

    assert_eq!(data.curve.len(), 100);
    assert_eq!(data.repulsive.len(), 5);
    assert_eq!(data.attractive.len(), 10);
    assert_eq!(data.curve[0][0], grid.first());
    assert_eq!(data.curve[99][0], grid.last());
    assert!(data.equilibrium[1].abs() < 1e-12);

    let mut buffer = Vec::new();
    io::write_plot_data(&mut buffer, &data).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap().matches("\n\n\n").count(), 3);
}
