use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::correction::{ccor, ccor2, dnet, g0, sg0};
use super::profile::{densm, densu};
use super::spline::{spline, splini, splint};
use super::*;

const EPS: f64 = 1.0e-14;

/// Reference point: day 172, 400 km, 60N 70W, quiet geomagnetic
/// conditions.
fn reference_input() -> Input {
    Input {
        doy: 172,
        sec: 29000.0,
        alt: 400.0,
        g_lat: 60.0,
        g_long: -70.0,
        lst: 16.0,
        f107a: 150.0,
        f107: 150.0,
        ap: 4.0,
        ap_history: None,
    }
}

/// The altitude sweep of the documented evaluation grid plus the
/// conditions variations, all derived from the reference point.
fn evaluation_grid() -> Vec<Input> {
    let mut cases = Vec::new();
    for alt in [100.0, 400.0, 1000.0, 0.0, 10.0, 30.0, 50.0, 70.0] {
        cases.push(Input {
            alt,
            ..reference_input()
        });
    }
    cases.push(Input {
        doy: 81,
        ..reference_input()
    });
    cases.push(Input {
        sec: 75000.0,
        alt: 1000.0,
        ..reference_input()
    });
    cases.push(Input {
        g_lat: 0.0,
        ..reference_input()
    });
    cases.push(Input {
        g_long: 0.0,
        ..reference_input()
    });
    cases.push(Input {
        lst: 4.0,
        ..reference_input()
    });
    cases.push(Input {
        f107a: 70.0,
        ..reference_input()
    });
    cases.push(Input {
        f107: 180.0,
        ..reference_input()
    });
    cases.push(Input {
        ap: 40.0,
        ..reference_input()
    });
    cases
}

#[test]
fn ccor_collapses_to_pure_exponential_below_transition() {
    assert_relative_eq!(ccor(1000.0, 15.0, 1.0, 2000.0), 15.0_f64.exp(), epsilon = EPS);
}

#[test]
fn ccor_saturates_to_unity_above_transition() {
    assert_abs_diff_eq!(ccor(3000.0, 15.0, 1.0, 2000.0), 1.0, epsilon = EPS);
}

#[test]
fn ccor_blends_between_saturation_branches() {
    let mid = ccor(2000.0, -1.0, 10.0, 2000.0);
    // logistic at the transition altitude halves the exponent
    assert_relative_eq!(mid, (-0.5_f64).exp(), epsilon = EPS);
}

#[test]
fn ccor2_matches_one_sided_form_for_equal_scales() {
    let one = ccor(150.0, -0.5, 8.0, 110.0);
    let two = ccor2(150.0, -0.5, 8.0, 110.0, 8.0);
    assert_relative_eq!(one, two, epsilon = EPS);
    assert_abs_diff_eq!(ccor2(3000.0, 15.0, 1.0, 2000.0, 12.0), 1.0, epsilon = EPS);
    assert_relative_eq!(
        ccor2(1000.0, 15.0, 1.0, 2000.0, 12.0),
        15.0_f64.exp(),
        epsilon = EPS
    );
}

#[test]
fn dnet_degenerate_branches_return_inputs_unchanged() {
    assert_eq!(dnet(-1.0, 0.0, 1.0, 1.0, 1.0), -1.0);
    assert_eq!(dnet(0.0, -2.0, 1.0, 1.0, 1.0), -2.0);
    assert_eq!(dnet(0.0, 0.0, 1.0, 1.0, 1.0), 1.0);
    assert_eq!(dnet(1.0, 100.0, 1.0, 1.0, 1.0), 100.0);
}

#[test]
fn dnet_blend_stays_between_branches() {
    // same-scale densities blend to something above both in log space
    let blended = dnet(1.0e8, 2.0e8, 10.0, 28.95, 4.0);
    assert!(blended >= 1.0e8);
    assert!(blended.is_finite());
}

#[test]
fn quiet_geomagnetic_conditions_yield_zero_activity_response() {
    // Ap = 4 is the quiet baseline; the bounded response and the
    // history-weighted sum must both vanish there
    assert_abs_diff_eq!(g0(4.0, 0.03, 1.41), 0.0, epsilon = EPS);
    assert_abs_diff_eq!(sg0(0.5, 0.03, 1.41, &[4.0; 7]), 0.0, epsilon = EPS);
}

#[test]
fn ap_history_requires_exactly_seven_entries() {
    for n in [0, 1, 6, 8, 9] {
        let values = vec![4.0; n];
        match ApHistory::new(&values) {
            Err(MsisError::ApHistoryLength(len)) => assert_eq!(len, n),
            other => panic!("expected length error for {n} entries, got {other:?}"),
        }
    }

    let values = [4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let history = ApHistory::new(&values).unwrap();
    for (stored, given) in history.values().iter().zip(&values) {
        assert_eq!(stored, given);
    }
}

#[test]
fn splint_reproduces_knot_values() {
    let x = [0.0, 1.0, 2.5, 4.0, 5.0];
    let y = [1.0, -0.5, 2.0, 0.25, 3.0];
    let y2 = spline(&x, &y, 1.0e30, 1.0e30);
    for (xi, yi) in x.iter().zip(&y) {
        assert_relative_eq!(splint(&x, &y, &y2, *xi), *yi, epsilon = 1.0e-12);
    }
}

#[test]
fn spline_is_exact_for_linear_data() {
    let x = [0.0, 1.0, 2.0, 4.0];
    let y = [0.0, 2.0, 4.0, 8.0];
    let y2 = spline(&x, &y, 1.0e30, 1.0e30);
    for y2k in &y2 {
        assert_abs_diff_eq!(*y2k, 0.0, epsilon = 1.0e-12);
    }
    assert_relative_eq!(splint(&x, &y, &y2, 3.0), 6.0, epsilon = 1.0e-12);
    // integral of 2x from 0 to 3 is x^2
    assert_relative_eq!(splini(&x, &y, &y2, 3.0), 9.0, epsilon = 1.0e-12);
}

#[test]
fn clamped_spline_honors_end_slopes() {
    // quadratic x^2 with exact end slopes is reproduced exactly
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];
    let y2 = spline(&x, &y, 0.0, 6.0);
    for y2k in &y2 {
        assert_relative_eq!(*y2k, 2.0, epsilon = 1.0e-12);
    }
    assert_relative_eq!(splint(&x, &y, &y2, 1.5), 2.25, epsilon = 1.0e-12);
}

fn profile_nodes() -> ([f64; 5], [f64; 5], [f64; 2]) {
    let zn1 = [120.0, 110.0, 100.0, 90.0, 72.5];
    let tn1 = [0.0, 242.0, 195.0, 185.0, 210.0];
    let tgn1 = [0.0, -2.5];
    (zn1, tn1, tgn1)
}

#[test]
fn densu_temperature_only_mode_returns_zero_density() {
    let (zn1, mut tn1, mut tgn1) = profile_nodes();
    let (gsurf, re) = glatf(45.0);
    let (density, temperature) = densu(
        100.0, 1.0, 1027.0, 386.0, 0.0, 0.0, 120.0, 0.026, &zn1, &mut tn1, &mut tgn1, gsurf, re,
    );
    assert_eq!(density, 0.0);
    assert!(temperature > 150.0 && temperature < 400.0);
}

#[test]
fn densu_reproduces_boundary_density_at_lower_boundary() {
    let (zn1, mut tn1, mut tgn1) = profile_nodes();
    let (gsurf, re) = glatf(45.0);
    let dlb = 3.0e11;
    let (density, temperature) = densu(
        120.0, dlb, 1027.0, 386.0, 28.0, 0.0, 120.0, 0.026, &zn1, &mut tn1, &mut tgn1, gsurf, re,
    );
    assert_relative_eq!(density, dlb, max_relative = 1.0e-12);
    assert_relative_eq!(temperature, 386.0, max_relative = 1.0e-12);
}

#[test]
fn densu_decreases_with_altitude_above_boundary() {
    let (zn1, mut tn1, mut tgn1) = profile_nodes();
    let (gsurf, re) = glatf(45.0);
    let mut previous = f64::INFINITY;
    for alt in [150.0, 200.0, 300.0, 400.0, 600.0] {
        let (density, _) = densu(
            alt, 3.0e11, 1027.0, 386.0, 28.0, 0.0, 120.0, 0.026, &zn1, &mut tn1, &mut tgn1,
            gsurf, re,
        );
        assert!(density > 0.0);
        assert!(density < previous, "density must fall with altitude");
        previous = density;
    }
}

fn lower_atmosphere_nodes() -> ([f64; 5], [f64; 5], [f64; 2], [f64; 4], [f64; 4], [f64; 2]) {
    let zn3 = [32.5, 20.0, 15.0, 10.0, 0.0];
    let tn3 = [227.0, 217.0, 217.0, 224.0, 288.0];
    let tgn3 = [1.7, -6.5];
    let zn2 = [72.5, 55.0, 45.0, 32.5];
    let tn2 = [210.0, 261.0, 265.0, 227.0];
    let tgn2 = [-2.5, 1.7];
    (zn3, tn3, tgn3, zn2, tn2, tgn2)
}

#[test]
fn densm_temperature_only_mode_returns_zero_density() {
    let (zn3, tn3, tgn3, zn2, tn2, tgn2) = lower_atmosphere_nodes();
    let (gsurf, re) = glatf(45.0);
    for alt in [0.0, 15.0, 40.0, 60.0, 72.5] {
        let (density, temperature) = densm(
            alt, 1.0, 0.0, &zn3, &tn3, &tgn3, &zn2, &tn2, &tgn2, gsurf, re,
        );
        assert_eq!(density, 0.0);
        assert!(temperature > 150.0 && temperature < 350.0);
    }
}

#[test]
fn densm_round_trips_boundary_density_at_top_node() {
    let (zn3, tn3, tgn3, zn2, tn2, tgn2) = lower_atmosphere_nodes();
    let (gsurf, re) = glatf(45.0);
    let (density, temperature) = densm(
        72.5, 1.0, 1.0, &zn3, &tn3, &tgn3, &zn2, &tn2, &tgn2, gsurf, re,
    );
    assert_relative_eq!(density, 1.0, max_relative = 1.0e-12);
    assert_relative_eq!(temperature, tn2[0], max_relative = 1.0e-12);
}

#[test]
fn densm_grows_downward() {
    let (zn3, tn3, tgn3, zn2, tn2, tgn2) = lower_atmosphere_nodes();
    let (gsurf, re) = glatf(45.0);
    let mut previous = 0.0;
    for alt in [72.5, 60.0, 40.0, 20.0, 0.0] {
        let (density, _) = densm(
            alt, 1.0, 28.95, &zn3, &tn3, &tgn3, &zn2, &tn2, &tgn2, gsurf, re,
        );
        assert!(density >= previous);
        previous = density;
    }
}

#[test]
fn gtd7d_is_idempotent_for_identical_inputs() {
    let switches = Switches::all_on();
    let input = reference_input();
    let first = gtd7d(&input, &switches);
    let second = gtd7d(&input, &switches);
    assert_eq!(first, second);
}

#[test]
fn evaluation_grid_yields_physical_outputs() {
    let switches = Switches::all_on();
    for input in evaluation_grid() {
        let output = gtd7d(&input, &switches);
        for i in 0..9 {
            assert!(
                output.density(i).is_finite() && output.density(i) >= 0.0,
                "density slot {i} must be finite and non-negative at {} km",
                input.alt
            );
        }
        let t = output.temperatures();
        assert!(t[0] > 100.0 && t[0] < 3000.0);
        assert!(t[1] > 100.0 && t[1] < 3000.0);
    }
}

#[test]
fn total_mass_density_falls_through_the_thermosphere() {
    let switches = Switches::all_on();
    let mut previous = f64::INFINITY;
    for alt in [100.0, 150.0, 200.0, 300.0, 400.0, 500.0] {
        let input = Input {
            alt,
            ..reference_input()
        };
        let rho = gtd7d(&input, &switches).total_mass_density();
        assert!(rho > 0.0);
        assert!(rho < previous, "total density must fall with altitude");
        previous = rho;
    }
}

#[test]
fn sea_level_density_has_the_right_scale() {
    let switches = Switches::all_on();
    let input = Input {
        alt: 0.0,
        ..reference_input()
    };
    let output = gtd7d(&input, &switches);
    let rho = output.total_mass_density();
    // g/cm^3 at the surface
    assert!(rho > 1.0e-5 && rho < 1.0e-1, "surface density {rho}");
    assert!(output.temperature() > 200.0 && output.temperature() < 330.0);
}

#[test]
fn si_units_switch_rescales_densities() {
    let mut switches = Switches::all_on();
    let input = reference_input();
    let cgs = gtd7d(&input, &switches);
    switches.set(0, 1);
    let si = gtd7d(&input, &switches);
    for species in [
        Species::Helium,
        Species::AtomicOxygen,
        Species::MolecularNitrogen,
        Species::MolecularOxygen,
        Species::Argon,
        Species::Hydrogen,
        Species::AtomicNitrogen,
        Species::AnomalousOxygen,
    ] {
        assert_relative_eq!(
            si.species_density(species),
            cgs.species_density(species) * 1.0e6,
            max_relative = 1.0e-12
        );
    }
    assert_relative_eq!(
        si.total_mass_density(),
        cgs.total_mass_density() * 1.0e3,
        max_relative = 1.0e-12
    );
}

#[test]
fn ap_history_mode_consults_the_history() {
    let mut switches = Switches::all_on();
    switches.set(9, -1);

    let history = ApHistory::new(&[40.0, 40.0, 40.0, 40.0, 40.0, 40.0, 40.0]).unwrap();
    let stormy = Input {
        ap_history: Some(history),
        ..reference_input()
    };
    let quiet = reference_input();

    let with_history = gtd7d(&stormy, &switches);
    let quiet_daily = gtd7d(&quiet, &switches);
    assert_ne!(
        with_history.total_mass_density(),
        quiet_daily.total_mass_density(),
        "storm history must perturb the densities"
    );
}

#[test]
fn history_switch_without_history_falls_back_to_daily_ap() {
    let mut history_switches = Switches::all_on();
    history_switches.set(9, -1);

    // a scalar-only input must evaluate in either switch mode
    let input = reference_input();
    let fallback = gtd7d(&input, &history_switches);
    let daily = gtd7d(&input, &Switches::all_on());
    assert_eq!(fallback, daily);
    assert!(fallback.total_mass_density().is_finite());
}

#[test]
fn gtd7d_folds_anomalous_oxygen_into_total_mass() {
    let switches = Switches::all_on();
    let input = Input {
        alt: 600.0,
        ..reference_input()
    };
    let plain = gtd7(&input, &switches);
    let drag = gtd7d(&input, &switches);

    let expected =
        plain.total_mass_density() + 1.66e-24 * 16.0 * plain.species_density(Species::AnomalousOxygen);
    assert_relative_eq!(drag.total_mass_density(), expected, max_relative = 1.0e-12);
    assert!(drag.total_mass_density() >= plain.total_mass_density());
}

#[test]
fn below_mesopause_photochemical_species_vanish() {
    let switches = Switches::all_on();
    let input = Input {
        alt: 50.0,
        ..reference_input()
    };
    let output = gtd7(&input, &switches);
    assert_eq!(output.species_density(Species::AtomicOxygen), 0.0);
    assert_eq!(output.species_density(Species::Hydrogen), 0.0);
    assert_eq!(output.species_density(Species::AtomicNitrogen), 0.0);
    assert_eq!(output.species_density(Species::AnomalousOxygen), 0.0);
    assert!(output.species_density(Species::MolecularNitrogen) > 0.0);
}

#[test]
fn switch_zero_disables_every_variation() {
    // with all variation switches off the model is spherically symmetric
    let switches = Switches::from_array([0; 24]);
    let polar = Input {
        g_lat: 80.0,
        ..reference_input()
    };
    let equatorial = Input {
        g_lat: 0.0,
        ..reference_input()
    };
    let a = gtd7d(&polar, &switches);
    let b = gtd7d(&equatorial, &switches);
    assert_relative_eq!(
        a.total_mass_density(),
        b.total_mass_density(),
        max_relative = 1.0e-12
    );
}
