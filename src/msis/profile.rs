//! Temperature/density profile evaluators.
//!
//! Both evaluators share the same machinery: the temperature profile is a
//! Bates closed form above the inflection node and an inverse-temperature
//! cubic spline over the altitude nodes below it, and density follows from
//! hydrostatic (barometric) integration of the inverse temperature.

use smallvec::SmallVec;

use super::correction::{zeta, RGAS};
use super::spline::{spline, splini, splint};

/// Thermospheric density and temperature at altitude.
///
/// Integrates from the lower boundary `zlb` with boundary density `dlb`,
/// boundary temperature `tlb`, asymptotic (exospheric) temperature `tinf`
/// and shape parameter `s2`, for a species of mass `xm` with thermal
/// diffusion exponent `alpha`. Below the first node of `zn1` the profile
/// switches to the spline over the `tn1` node temperatures; `tn1[0]` and
/// `tgn1[0]` are overwritten with the Bates value and gradient at that
/// node so the two branches join smoothly. Returns `(density,
/// temperature)`; with `xm == 0` the density slot is 0 and only the
/// temperature is meaningful.
#[allow(clippy::too_many_arguments)]
pub(crate) fn densu(
    alt: f64,
    dlb: f64,
    tinf: f64,
    tlb: f64,
    xm: f64,
    alpha: f64,
    zlb: f64,
    s2: f64,
    zn1: &[f64; 5],
    tn1: &mut [f64; 5],
    tgn1: &mut [f64; 2],
    gsurf: f64,
    re: f64,
) -> (f64, f64) {
    let mn = zn1.len();

    // Bates profile from the joining altitude upward
    let za = zn1[0];
    let z = alt.max(za);
    let zg2 = zeta(z, zlb, re);
    let tt = tinf - (tinf - tlb) * (-s2 * zg2).exp();
    let ta = tt;
    let mut tz = tt;

    // spline scratch, filled only when the spline branch is taken
    let mut xs: SmallVec<[f64; 8]> = SmallVec::new();
    let mut ys: SmallVec<[f64; 8]> = SmallVec::new();
    let mut y2out: SmallVec<[f64; 8]> = SmallVec::new();
    let mut x = 0.0;
    let mut zgdif = 0.0;

    if alt < za {
        // gradient of the Bates profile at za, used to clamp the spline
        let dta = (tinf - ta) * s2 * ((re + zlb) / (re + za)).powi(2);
        tgn1[0] = dta;
        tn1[0] = ta;
        let z = alt.max(zn1[mn - 1]);

        let z1 = zn1[0];
        let z2 = zn1[mn - 1];
        let t1 = tn1[0];
        let t2 = tn1[mn - 1];
        let zg = zeta(z, z1, re);
        zgdif = zeta(z2, z1, re);

        // inverse temperature over geopotential fractions
        for k in 0..mn {
            xs.push(zeta(zn1[k], z1, re) / zgdif);
            ys.push(1.0 / tn1[k]);
        }
        let yd1 = -tgn1[0] / (t1 * t1) * zgdif;
        let yd2 = -tgn1[1] / (t2 * t2) * zgdif * ((re + z2) / (re + z1)).powi(2);
        y2out = spline(&xs, &ys, yd1, yd2);
        x = zg / zgdif;
        let y = splint(&xs, &ys, &y2out, x);

        tz = 1.0 / y;
    }

    if xm == 0.0 {
        return (0.0, tz);
    }

    // density above the joining altitude
    let glb = gsurf / (1.0 + zlb / re).powi(2);
    let gamma = xm * glb / (s2 * RGAS * tinf);
    let mut expl = (-s2 * gamma * zg2).exp();
    if expl > 50.0 || tt <= 0.0 {
        expl = 50.0;
    }
    let densa = dlb * (tlb / tt).powf(1.0 + alpha + gamma) * expl;
    if alt >= za {
        return (densa, tz);
    }

    // density below, from the spline integral of inverse temperature
    let z1 = zn1[0];
    let t1 = tn1[0];
    let glb = gsurf / (1.0 + z1 / re).powi(2);
    let gamm = xm * glb * zgdif / RGAS;
    let yi = splini(&xs, &ys, &y2out, x);
    let mut expl = gamm * yi;
    if expl > 50.0 || tz <= 0.0 {
        expl = 50.0;
    }
    let dens = densa * (t1 / tz).powf(1.0 + alpha) * (-expl).exp();
    (dens, tz)
}

/// One spline regime of [`densm`]: temperature at `z` and, for `xm != 0`,
/// the hydrostatic density ratio across the regime.
fn densm_regime(
    z: f64,
    d0: f64,
    xm: f64,
    zn: &[f64],
    tn: &[f64],
    tgn: &[f64; 2],
    gsurf: f64,
    re: f64,
) -> (f64, f64) {
    let mn = zn.len();
    let z1 = zn[0];
    let z2 = zn[mn - 1];
    let t1 = tn[0];
    let t2 = tn[mn - 1];
    let zg = zeta(z, z1, re);
    let zgdif = zeta(z2, z1, re);

    let mut xs: SmallVec<[f64; 8]> = SmallVec::new();
    let mut ys: SmallVec<[f64; 8]> = SmallVec::new();
    for k in 0..mn {
        xs.push(zeta(zn[k], z1, re) / zgdif);
        ys.push(1.0 / tn[k]);
    }
    let yd1 = -tgn[0] / (t1 * t1) * zgdif;
    let yd2 = -tgn[1] / (t2 * t2) * zgdif * ((re + z2) / (re + z1)).powi(2);
    let y2out = spline(&xs, &ys, yd1, yd2);
    let x = zg / zgdif;
    let y = splint(&xs, &ys, &y2out, x);

    let tz = 1.0 / y;
    let mut dens = d0;
    if xm != 0.0 {
        let glb = gsurf / (1.0 + z1 / re).powi(2);
        let gamm = xm * glb * zgdif / RGAS;
        let yi = splini(&xs, &ys, &y2out, x);
        let mut expl = gamm * yi;
        if expl > 50.0 || tz <= 0.0 {
            expl = 50.0;
        }
        dens = d0 * (t1 / tz) * (-expl).exp();
    }
    (dens, tz)
}

/// Density and temperature below the thermospheric inflection.
///
/// Applies the spline-profile machinery over the two lower altitude
/// regimes in turn: `zn2`/`tn2` (mesosphere and upper stratosphere) and,
/// below `zn3[0]`, `zn3`/`tn3` (lower stratosphere and troposphere).
/// `d0` is the boundary density at `zn2[0]`. Returns `(density,
/// temperature)`; with `xm == 0` the density slot is 0 (temperature-only
/// mode), and at `alt == zn2[0]` the density round-trips `d0` unchanged.
#[allow(clippy::too_many_arguments)]
pub(crate) fn densm(
    alt: f64,
    d0: f64,
    xm: f64,
    zn3: &[f64; 5],
    tn3: &[f64; 5],
    tgn3: &[f64; 2],
    zn2: &[f64; 4],
    tn2: &[f64; 4],
    tgn2: &[f64; 2],
    gsurf: f64,
    re: f64,
) -> (f64, f64) {
    if alt > zn2[0] {
        return (if xm == 0.0 { 0.0 } else { d0 }, tn2[0]);
    }

    let z = alt.max(zn2[zn2.len() - 1]);
    let (dens, tz) = densm_regime(z, d0, xm, zn2, tn2, tgn2, gsurf, re);
    if alt > zn3[0] {
        return (if xm == 0.0 { 0.0 } else { dens }, tz);
    }

    // below the lowest node the profile extrapolates without a guard
    let (dens, tz) = densm_regime(alt, dens, xm, zn3, tn3, tgn3, gsurf, re);
    (if xm == 0.0 { 0.0 } else { dens }, tz)
}
