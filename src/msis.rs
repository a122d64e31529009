//! NRLMSISE-00 thermosphere/atmosphere model.
//!
//! Empirical density and temperature model of the Earth's atmosphere
//! from the ground through the exosphere, driven by solar flux (F10.7)
//! and geomagnetic activity (Ap) indices. One evaluation is a bounded
//! sequence of closed-form and spline computations over a caller-built
//! [`Input`] and a shared [`Switches`] vector; all intermediate state is
//! local to the call, so one switch set may be shared across threads.

mod correction;
mod data;
mod globe;
mod profile;
mod spline;

#[cfg(test)]
mod tests;

use crate::error::MsisError;
use correction::{ccor, ccor2, dnet, scalh};
use data::{PAVGM, PD, PDL, PDM, PMA, PS, PT, PTL, PTM};
use globe::{glob7, glob7s, DGTR, DR};
use profile::{densm, densu};

/// amu in grams; converts summed number densities to mass density
const AMU: f64 = 1.66e-24;

/// 3-hour geomagnetic activity history for one evaluation point.
///
/// The seven slots are the daily Ap, the current 3-hour index, the three
/// preceding 3-hour indices, and the 12-to-33-hour and 36-to-57-hour
/// averages, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ApHistory([f64; 7]);

impl ApHistory {
    /// Build a history from a slice of exactly 7 values.
    ///
    /// Any other length fails with [`MsisError::ApHistoryLength`].
    pub fn new(values: &[f64]) -> Result<Self, MsisError> {
        let values: [f64; 7] = values
            .try_into()
            .map_err(|_| MsisError::ApHistoryLength(values.len()))?;
        Ok(Self(values))
    }

    /// The seven stored values.
    pub fn values(&self) -> &[f64; 7] {
        &self.0
    }
}

/// One evaluation point.
///
/// Built once, evaluated, discarded; nothing in the model mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// Day of year, 1..=366.
    pub doy: i32,
    /// Seconds of day (UT).
    pub sec: f64,
    /// Geodetic altitude in km.
    pub alt: f64,
    /// Geodetic latitude in degrees.
    pub g_lat: f64,
    /// Geodetic longitude in degrees.
    pub g_long: f64,
    /// Local apparent solar time in hours.
    pub lst: f64,
    /// 81-day average F10.7 solar flux, centered on the day.
    pub f107a: f64,
    /// Daily F10.7 solar flux for the previous day.
    pub f107: f64,
    /// Daily Ap geomagnetic index.
    pub ap: f64,
    /// Optional 3-hour Ap history, consulted instead of the daily index
    /// when switch 9 is set to -1.
    pub ap_history: Option<ApHistory>,
}

/// The 24 model switches.
///
/// Each switch is -1, 0 or 1 and turns one group of variations on or
/// off. Switch 0 selects the output units (0 for cm^-3 and g/cm^3, 1 for
/// m^-3 and kg/m^3); switch 9 set to -1 selects the 3-hour Ap history
/// formulation for inputs that carry one. Configured once and shared
/// across evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switches {
    raw: [i32; 24],
}

impl Switches {
    /// All variations on, output in cm^-3 and g/cm^3.
    pub fn all_on() -> Self {
        let mut raw = [1; 24];
        raw[0] = 0;
        Self { raw }
    }

    /// Switches from a raw array.
    pub fn from_array(raw: [i32; 24]) -> Self {
        Self { raw }
    }

    /// Set one switch.
    pub fn set(&mut self, index: usize, value: i32) {
        self.raw[index] = value;
    }

    /// Expand to the per-term weight vectors consulted by the expansion
    /// functions.
    fn state(&self) -> SwitchState {
        let mut sw = [0.0; 24];
        let mut swc = [0.0; 24];
        for i in 0..24 {
            if i != 9 {
                sw[i] = if self.raw[i] == 1 { 1.0 } else { 0.0 };
                swc[i] = if self.raw[i] > 0 { 1.0 } else { 0.0 };
            } else {
                sw[i] = f64::from(self.raw[i]);
                swc[i] = f64::from(self.raw[i]);
            }
        }
        SwitchState {
            raw: self.raw,
            sw,
            swc,
        }
    }
}

/// Expanded switch weights. `sw` gates whole terms, `swc` gates the
/// cross-term couplings inside them.
#[derive(Debug)]
pub(crate) struct SwitchState {
    raw: [i32; 24],
    sw: [f64; 24],
    swc: [f64; 24],
}

/// Atmospheric constituents resolved by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    /// He
    Helium,
    /// O
    AtomicOxygen,
    /// N2
    MolecularNitrogen,
    /// O2
    MolecularOxygen,
    /// Ar
    Argon,
    /// H
    Hydrogen,
    /// N
    AtomicNitrogen,
    /// Hot thermal-tail O above the exobase
    AnomalousOxygen,
}

impl Species {
    /// Slot of this species in the density array.
    pub fn index(self) -> usize {
        match self {
            Species::Helium => 0,
            Species::AtomicOxygen => 1,
            Species::MolecularNitrogen => 2,
            Species::MolecularOxygen => 3,
            Species::Argon => 4,
            Species::Hydrogen => 6,
            Species::AtomicNitrogen => 7,
            Species::AnomalousOxygen => 8,
        }
    }
}

/// One model evaluation result.
///
/// Densities are number densities per species, with slot 5 holding the
/// total mass density; units follow switch 0 (cm^-3 and g/cm^3 by
/// default). Temperatures are Kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    d: [f64; 9],
    t: [f64; 2],
}

/// Slot of the total mass density in the density array.
pub const TOTAL_MASS: usize = 5;

impl Output {
    /// Density array slot `i`, 0..=8.
    pub fn density(&self, i: usize) -> f64 {
        self.d[i]
    }

    /// Number density of `species`.
    pub fn species_density(&self, species: Species) -> f64 {
        self.d[species.index()]
    }

    /// Total mass density.
    pub fn total_mass_density(&self) -> f64 {
        self.d[TOTAL_MASS]
    }

    /// All nine density slots.
    pub fn densities(&self) -> &[f64; 9] {
        &self.d
    }

    /// Exospheric temperature and temperature at altitude, in Kelvin.
    pub fn temperatures(&self) -> &[f64; 2] {
        &self.t
    }

    /// Temperature at the evaluated altitude.
    pub fn temperature(&self) -> f64 {
        self.t[1]
    }
}

/// Per-evaluation scratch shared between the drivers, the expansion
/// functions and the profile evaluators. Everything lives on the stack of
/// one evaluation; the model holds no state across calls.
#[derive(Debug)]
pub(crate) struct EvalState {
    gsurf: f64,
    re: f64,
    plg: [[f64; 9]; 4],
    ctloc: f64,
    stloc: f64,
    c2tloc: f64,
    s2tloc: f64,
    c3tloc: f64,
    s3tloc: f64,
    apdf: f64,
    apt: f64,
    history_mode: bool,
    dm28: f64,
    tn1: [f64; 5],
    tgn1: [f64; 2],
}

impl EvalState {
    fn new(xlat: f64) -> Self {
        let (gsurf, re) = glatf(xlat);
        Self {
            gsurf,
            re,
            plg: [[0.0; 9]; 4],
            ctloc: 0.0,
            stloc: 0.0,
            c2tloc: 0.0,
            s2tloc: 0.0,
            c3tloc: 0.0,
            s3tloc: 0.0,
            apdf: 0.0,
            apt: 0.0,
            history_mode: false,
            dm28: 0.0,
            tn1: [0.0; 5],
            tgn1: [0.0; 2],
        }
    }
}

/// Latitude-dependent surface gravity (cm/s^2) and effective Earth
/// radius (km).
fn glatf(lat: f64) -> (f64, f64) {
    let c2 = (2.0 * DGTR * lat).cos();
    let gv = 980.616 * (1.0 - 0.0026373 * c2);
    let reff = 2.0 * gv / (3.085462e-6 + 2.27e-9 * c2) * 1.0e-5;
    (gv, reff)
}

/// Profile parameters for the minor constituents that get the
/// diffusive/mixed blend in the thermosphere. N2 is handled separately
/// as the major species, anomalous O by its own closed form.
#[derive(Debug)]
struct MinorProfile {
    species: Species,
    /// Molecular mass in amu.
    mass: f64,
    /// Thermal diffusion exponent.
    alpha: f64,
    /// Mixing corrections only apply below this altitude (km).
    altl: f64,
    /// Whether the mixing gate excludes `altl` itself.
    strict: bool,
    pd_row: usize,
    pdm_row: usize,
}

const MINOR_PROFILES: [MinorProfile; 6] = [
    MinorProfile {
        species: Species::Helium,
        mass: 4.0,
        alpha: -0.38,
        altl: 200.0,
        strict: true,
        pd_row: 0,
        pdm_row: 0,
    },
    MinorProfile {
        species: Species::AtomicOxygen,
        mass: 16.0,
        alpha: 0.0,
        altl: 300.0,
        strict: false,
        pd_row: 1,
        pdm_row: 1,
    },
    MinorProfile {
        species: Species::MolecularOxygen,
        mass: 32.0,
        alpha: 0.0,
        altl: 250.0,
        strict: false,
        pd_row: 4,
        pdm_row: 3,
    },
    MinorProfile {
        species: Species::Argon,
        mass: 40.0,
        alpha: 0.0,
        altl: 240.0,
        strict: false,
        pd_row: 5,
        pdm_row: 4,
    },
    MinorProfile {
        species: Species::Hydrogen,
        mass: 1.0,
        alpha: -0.38,
        altl: 450.0,
        strict: false,
        pd_row: 6,
        pdm_row: 5,
    },
    MinorProfile {
        species: Species::AtomicNitrogen,
        mass: 14.0,
        alpha: 0.0,
        altl: 320.0,
        strict: false,
        pd_row: 7,
        pdm_row: 6,
    },
];

/// Thermospheric portion of the model, valid from 72.5 km upward.
///
/// `alt` is the altitude actually evaluated; the driver clamps it to the
/// 72.5 km boundary when probing below.
fn gts7(input: &Input, alt: f64, sw: &SwitchState, es: &mut EvalState) -> Output {
    let za = PDL[1][15];
    let zn1: [f64; 5] = [za, 110.0, 100.0, 90.0, 72.5];
    let alpha_n2 = 0.0;
    let alpha_anom = 0.0;

    let mut d = [0.0_f64; 9];
    let mut t = [0.0_f64; 2];

    // exospheric temperature; horizontal variations only matter above
    // the Bates joining altitude
    let tinf = if alt > zn1[0] {
        PTM[0] * PT[0] * (1.0 + sw.sw[16] * glob7(&PT, input, sw, es))
    } else {
        PTM[0] * PT[0]
    };
    t[0] = tinf;

    // temperature gradient and temperature at the lower boundary
    let g0 = if alt > zn1[4] {
        PTM[3] * PS[0] * (1.0 + sw.sw[19] * glob7(&PS, input, sw, es))
    } else {
        PTM[3] * PS[0]
    };
    let tlb = PTM[1] * (1.0 + sw.sw[17] * glob7(&PD[3], input, sw, es)) * PD[3][0];
    let s = g0 / (tinf - tlb);

    // lower thermosphere temperature nodes; their variations are
    // insignificant for density above 300 km
    if alt < 300.0 {
        es.tn1[1] = PTM[6] * PTL[0][0] / (1.0 - sw.sw[18] * glob7s(&PTL[0], input, sw, es));
        es.tn1[2] = PTM[2] * PTL[1][0] / (1.0 - sw.sw[18] * glob7s(&PTL[1], input, sw, es));
        es.tn1[3] = PTM[7] * PTL[2][0] / (1.0 - sw.sw[18] * glob7s(&PTL[2], input, sw, es));
        es.tn1[4] =
            PTM[4] * PTL[3][0] / (1.0 - sw.sw[18] * sw.sw[20] * glob7s(&PTL[3], input, sw, es));
        es.tgn1[1] = PTM[8]
            * PMA[8][0]
            * (1.0 + sw.sw[18] * sw.sw[20] * glob7s(&PMA[8], input, sw, es))
            * es.tn1[4]
            * es.tn1[4]
            / (PTM[4] * PTL[3][0]).powi(2);
    } else {
        es.tn1[1] = PTM[6] * PTL[0][0];
        es.tn1[2] = PTM[2] * PTL[1][0];
        es.tn1[3] = PTM[7] * PTL[2][0];
        es.tn1[4] = PTM[4] * PTL[3][0];
        es.tgn1[1] =
            PTM[8] * PMA[8][0] * es.tn1[4] * es.tn1[4] / (PTM[4] * PTL[3][0]).powi(2);
    }

    // N2, the major species: diffusive profile from the lower boundary,
    // blended into the fully mixed profile below the turbopause
    let g28 = sw.sw[21] * glob7(&PD[2], input, sw, es);
    let day = f64::from(input.doy);
    let zhf = PDL[1][24]
        * (1.0 + sw.sw[5] * PDL[0][24] * (DGTR * input.g_lat).sin() * (DR * (day - PT[13])).cos());
    let xmm = PDM[2][4];
    let z = alt;

    let db28 = PDM[2][0] * g28.exp() * PD[2][0];
    let (d28, tz28) = densu(
        z, db28, tinf, tlb, 28.0, alpha_n2, PTM[5], s, &zn1, &mut es.tn1, &mut es.tgn1, es.gsurf,
        es.re,
    );
    d[2] = d28;
    t[1] = tz28;

    // turbopause parameters shared by every mixed profile
    let zh28 = PDM[2][2] * zhf;
    let zhm28 = PDM[2][3] * PDL[1][5];
    let xmd = 28.0 - xmm;
    let (b28, _) = densu(
        zh28,
        db28,
        tinf,
        tlb,
        xmd,
        alpha_n2 - 1.0,
        PTM[5],
        s,
        &zn1,
        &mut es.tn1,
        &mut es.tgn1,
        es.gsurf,
        es.re,
    );
    if sw.sw[15] != 0.0 && z <= 160.0 {
        let (dm28, _) = densu(
            z, b28, tinf, tlb, xmm, alpha_n2, PTM[5], s, &zn1, &mut es.tn1, &mut es.tgn1,
            es.gsurf, es.re,
        );
        es.dm28 = dm28;
        d[2] = dnet(d[2], dm28, zhm28, xmm, 28.0);
    }

    for minor in &MINOR_PROFILES {
        let g = sw.sw[21] * glob7(&PD[minor.pd_row], input, sw, es);
        let db = PDM[minor.pdm_row][0] * g.exp() * PD[minor.pd_row][0];
        let (diffusive, _) = densu(
            z,
            db,
            tinf,
            tlb,
            minor.mass,
            minor.alpha,
            PTM[5],
            s,
            &zn1,
            &mut es.tn1,
            &mut es.tgn1,
            es.gsurf,
            es.re,
        );
        let i = minor.species.index();
        d[i] = diffusive;

        let in_mix = if minor.strict {
            z < minor.altl
        } else {
            z <= minor.altl
        };
        if sw.sw[15] != 0.0 && in_mix {
            // mixed profile anchored at this species' turbopause, blended
            // with the diffusive branch
            let zh = PDM[minor.pdm_row][2];
            let (b, _) = densu(
                zh,
                db,
                tinf,
                tlb,
                minor.mass - xmm,
                minor.alpha - 1.0,
                PTM[5],
                s,
                &zn1,
                &mut es.tn1,
                &mut es.tgn1,
                es.gsurf,
                es.re,
            );
            let (dm, _) = densu(
                z, b, tinf, tlb, xmm, 0.0, PTM[5], s, &zn1, &mut es.tn1, &mut es.tgn1, es.gsurf,
                es.re,
            );
            d[i] = dnet(d[i], dm, zhm28, xmm, minor.mass);

            let pdm = &PDM[minor.pdm_row];
            match minor.species {
                Species::Helium => {
                    // correction to the specified mixing ratio at ground
                    let rl = (b28 * pdm[1] / b).ln();
                    let zc = pdm[4] * PDL[1][0];
                    let hc = pdm[5] * PDL[1][1];
                    d[i] *= ccor(z, rl, hc, zc);
                }
                Species::AtomicOxygen => {
                    let rl =
                        pdm[1] * PDL[1][16] * (1.0 + sw.sw[1] * PDL[0][23] * (input.f107a - 150.0));
                    let hc = pdm[5] * PDL[1][3];
                    let zc = pdm[4] * PDL[1][2];
                    let hc2 = pdm[5] * PDL[1][4];
                    d[i] *= ccor2(z, rl, hc, zc, hc2);
                    // chemistry correction
                    let hcc = pdm[7] * PDL[1][13];
                    let zcc = pdm[6] * PDL[1][12];
                    let rc = pdm[3] * PDL[1][14];
                    d[i] *= ccor(z, rc, hcc, zcc);
                }
                Species::MolecularOxygen => {
                    let rl = (b28 * pdm[1] / b).ln();
                    let hc = pdm[5] * PDL[1][7];
                    let zc = pdm[4] * PDL[1][6];
                    d[i] *= ccor(z, rl, hc, zc);
                }
                Species::Argon => {
                    let rl = (b28 * pdm[1] / b).ln();
                    let hc = pdm[5] * PDL[1][9];
                    let zc = pdm[4] * PDL[1][8];
                    d[i] *= ccor(z, rl, hc, zc);
                }
                Species::Hydrogen => {
                    let rl = (b28 * pdm[1] * PDL[1][17].abs() / b).ln();
                    let hc = pdm[5] * PDL[1][11];
                    let zc = pdm[4] * PDL[1][10];
                    d[i] *= ccor(z, rl, hc, zc);
                    let hcc = pdm[7] * PDL[1][19];
                    let zcc = pdm[6] * PDL[1][18];
                    let rc = pdm[3] * PDL[1][20];
                    d[i] *= ccor(z, rc, hcc, zcc);
                }
                Species::AtomicNitrogen => {
                    let rl = (b28 * pdm[1] * PDL[0][2].abs() / b).ln();
                    let hc = pdm[5] * PDL[0][1];
                    let zc = pdm[4] * PDL[0][0];
                    d[i] *= ccor(z, rl, hc, zc);
                    let hcc = pdm[7] * PDL[0][4];
                    let zcc = pdm[6] * PDL[0][3];
                    let rc = pdm[3] * PDL[0][5];
                    d[i] *= ccor(z, rc, hcc, zcc);
                }
                _ => {}
            }
        }

        // O2 departure from diffusive equilibrium above the lower
        // boundary, applied at every altitude
        if minor.species == Species::MolecularOxygen && sw.sw[15] != 0.0 {
            let pdm = &PDM[minor.pdm_row];
            let hcc = pdm[7] * PDL[1][22];
            let hcc2 = pdm[7] * PDL[0][22];
            let zcc = pdm[6] * PDL[1][21];
            let rc = pdm[3] * PDL[1][23] * (1.0 + sw.sw[1] * PDL[0][23] * (input.f107a - 150.0));
            d[i] *= ccor2(z, rc, hcc, zcc, hcc2);
        }
    }

    // anomalous oxygen: isothermal tail above its own reference altitude
    let g16h = sw.sw[21] * glob7(&PD[8], input, sw, es);
    let db16h = PDM[7][0] * g16h.exp() * PD[8][0];
    let tho = PDM[7][9] * PDL[0][6];
    let (dd, _) = densu(
        z, db16h, tho, tho, 16.0, alpha_anom, PTM[5], s, &zn1, &mut es.tn1, &mut es.tgn1,
        es.gsurf, es.re,
    );
    let zsht = PDM[7][5];
    let zmho = PDM[7][4];
    let zsho = scalh(zmho, 16.0, tho, es.gsurf, es.re);
    d[8] = dd * (-zsht / zsho * ((-(z - zmho) / zsht).exp() - 1.0)).exp();

    d[5] = AMU
        * (4.0 * d[0] + 16.0 * d[1] + 28.0 * d[2] + 32.0 * d[3] + 40.0 * d[4] + d[6]
            + 14.0 * d[7]);

    // temperature at altitude, from the full profile
    let (_, tz) = densu(
        alt.abs(),
        1.0,
        tinf,
        tlb,
        0.0,
        0.0,
        PTM[5],
        s,
        &zn1,
        &mut es.tn1,
        &mut es.tgn1,
        es.gsurf,
        es.re,
    );
    t[1] = tz;

    if sw.sw[0] != 0.0 {
        for density in d.iter_mut() {
            *density *= 1.0e6;
        }
        d[5] /= 1000.0;
    }

    Output { d, t }
}

/// Evaluate the model at one point.
///
/// Above 72.5 km this is the thermospheric evaluation; below, the
/// thermospheric composition at 72.5 km is carried down through the
/// middle/lower atmosphere temperature profile, with a linear transition
/// to full mixing below 62.5 km. Total mass density (slot 5) sums the
/// seven resolved species without anomalous oxygen; see [`gtd7d`] for the
/// drag-effective variant.
pub fn gtd7(input: &Input, switches: &Switches) -> Output {
    let zn3: [f64; 5] = [32.5, 20.0, 15.0, 10.0, 0.0];
    let zn2: [f64; 4] = [72.5, 55.0, 45.0, 32.5];
    let zmix = 62.5;

    let sw = switches.state();

    // latitude variation of gravity is its own switch
    let xlat = if sw.sw[2] == 0.0 { 45.0 } else { input.g_lat };
    let mut es = EvalState::new(xlat);
    let xmm = PDM[2][4];

    let altt = input.alt.max(zn2[0]);
    let soutput = gts7(input, altt, &sw, &mut es);
    if input.alt >= zn2[0] {
        return soutput;
    }
    let dm28m = if sw.sw[0] != 0.0 {
        es.dm28 * 1.0e6
    } else {
        es.dm28
    };

    let mut d = [0.0_f64; 9];
    let mut t = soutput.t;

    // mesosphere/upper stratosphere temperature nodes; inverse
    // temperature is a linear function of the spherical harmonics
    let mut tn2 = [0.0_f64; 4];
    let mut tgn2 = [0.0_f64; 2];
    tgn2[0] = es.tgn1[1];
    tn2[0] = es.tn1[4];
    tn2[1] = PMA[0][0] * PAVGM[0] / (1.0 - sw.sw[20] * glob7s(&PMA[0], input, &sw, &es));
    tn2[2] = PMA[1][0] * PAVGM[1] / (1.0 - sw.sw[20] * glob7s(&PMA[1], input, &sw, &es));
    tn2[3] = PMA[2][0] * PAVGM[2] / (1.0 - sw.sw[20] * sw.sw[22] * glob7s(&PMA[2], input, &sw, &es));
    tgn2[1] = PAVGM[8]
        * PMA[9][0]
        * (1.0 + sw.sw[20] * sw.sw[22] * glob7s(&PMA[9], input, &sw, &es))
        * tn2[3]
        * tn2[3]
        / (PMA[2][0] * PAVGM[2]).powi(2);

    let mut tn3 = [0.0_f64; 5];
    let mut tgn3 = [0.0_f64; 2];
    tn3[0] = tn2[3];
    if input.alt <= zn3[0] {
        // lower stratosphere and troposphere nodes
        tgn3[0] = tgn2[1];
        tn3[1] = PMA[3][0] * PAVGM[3] / (1.0 - sw.sw[22] * glob7s(&PMA[3], input, &sw, &es));
        tn3[2] = PMA[4][0] * PAVGM[4] / (1.0 - sw.sw[22] * glob7s(&PMA[4], input, &sw, &es));
        tn3[3] = PMA[5][0] * PAVGM[5] / (1.0 - sw.sw[22] * glob7s(&PMA[5], input, &sw, &es));
        tn3[4] = PMA[6][0] * PAVGM[6] / (1.0 - sw.sw[22] * glob7s(&PMA[6], input, &sw, &es));
        tgn3[1] = PMA[7][0]
            * PAVGM[7]
            * (1.0 + sw.sw[22] * glob7s(&PMA[7], input, &sw, &es))
            * tn3[4]
            * tn3[4]
            / (PMA[6][0] * PAVGM[6]).powi(2);
    }

    // linear transition to full mixing below the turbopause
    let dmc = if input.alt > zmix {
        1.0 - (zn2[0] - input.alt) / (zn2[0] - zmix)
    } else {
        0.0
    };
    let dz28 = soutput.d[2];

    // N2 carries the mass profile; the others follow their ground-level
    // mixing ratios with the thermospheric departure faded in above zmix
    let dmr = soutput.d[2] / dm28m - 1.0;
    let (dn2, _) = densm(
        input.alt, dm28m, xmm, &zn3, &tn3, &tgn3, &zn2, &tn2, &tgn2, es.gsurf, es.re,
    );
    d[2] = dn2 * (1.0 + dmr * dmc);

    let dmr = soutput.d[0] / (dz28 * PDM[0][1]) - 1.0;
    d[0] = d[2] * PDM[0][1] * (1.0 + dmr * dmc);

    // atomic species are photochemical below the mesopause
    d[1] = 0.0;
    d[8] = 0.0;

    let dmr = soutput.d[3] / (dz28 * PDM[3][1]) - 1.0;
    d[3] = d[2] * PDM[3][1] * (1.0 + dmr * dmc);

    let dmr = soutput.d[4] / (dz28 * PDM[4][1]) - 1.0;
    d[4] = d[2] * PDM[4][1] * (1.0 + dmr * dmc);

    d[6] = 0.0;
    d[7] = 0.0;

    d[5] = AMU
        * (4.0 * d[0] + 16.0 * d[1] + 28.0 * d[2] + 32.0 * d[3] + 40.0 * d[4] + d[6]
            + 14.0 * d[7]);
    if sw.sw[0] != 0.0 {
        d[5] /= 1000.0;
    }

    let (_, tz) = densm(
        input.alt, 1.0, 0.0, &zn3, &tn3, &tgn3, &zn2, &tn2, &tgn2, es.gsurf, es.re,
    );
    t[1] = tz;

    Output { d, t }
}

/// Evaluate the model with the drag-effective total mass density.
///
/// Identical to [`gtd7`] except that anomalous oxygen participates in the
/// total mass density, which is what drag force models want above about
/// 500 km.
pub fn gtd7d(input: &Input, switches: &Switches) -> Output {
    let mut output = gtd7(input, switches);
    output.d[5] = AMU
        * (4.0 * output.d[0]
            + 16.0 * output.d[1]
            + 28.0 * output.d[2]
            + 32.0 * output.d[3]
            + 40.0 * output.d[4]
            + output.d[6]
            + 14.0 * output.d[7]
            + 16.0 * output.d[8]);
    if switches.raw[0] == 1 {
        output.d[5] /= 1000.0;
    }
    output
}
