//! Horizontal and temporal expansion functions.
//!
//! `glob7` evaluates the full thermospheric expansion G(L) for one
//! coefficient table: associated Legendre polynomials in geodetic
//! latitude crossed with solar-flux, annual/semiannual, local-solar-time,
//! geomagnetic-activity, longitudinal and UT harmonics, each term gated
//! by the switch vector. `glob7s` is the reduced lower-atmosphere
//! variant; it reuses the Legendre, local-time and activity state cached
//! by `glob7`, which therefore must run first in every evaluation (the
//! drivers guarantee this).

use super::correction::sg0;
use super::{EvalState, Input, SwitchState};

/// deg to rad
pub(crate) const DGTR: f64 = 1.74533e-2;
/// day-of-year to annual phase, rad
pub(crate) const DR: f64 = 1.72142e-2;
/// hours to local-time phase, rad
const HR: f64 = 0.2618;
/// seconds-of-day to UT phase, rad
const SR: f64 = 7.2722e-5;

/// Fill the associated Legendre cache for latitude `g_lat` and, when any
/// tide switch is active, the local-solar-time harmonics for `lst`.
fn fill_latitude_time(input: &Input, sw: &SwitchState, es: &mut EvalState) {
    let c = (input.g_lat * DGTR).sin();
    let s = (input.g_lat * DGTR).cos();
    let c2 = c * c;
    let c4 = c2 * c2;
    let s2 = s * s;

    let plg = &mut es.plg;
    plg[0][1] = c;
    plg[0][2] = 0.5 * (3.0 * c2 - 1.0);
    plg[0][3] = 0.5 * (5.0 * c * c2 - 3.0 * c);
    plg[0][4] = (35.0 * c4 - 30.0 * c2 + 3.0) / 8.0;
    plg[0][5] = (63.0 * c2 * c2 * c - 70.0 * c2 * c + 15.0 * c) / 8.0;
    plg[0][6] = (11.0 * c * plg[0][5] - 5.0 * plg[0][4]) / 6.0;
    plg[1][1] = s;
    plg[1][2] = 3.0 * c * s;
    plg[1][3] = 1.5 * (5.0 * c2 - 1.0) * s;
    plg[1][4] = 2.5 * (7.0 * c2 * c - 3.0 * c) * s;
    plg[1][5] = 1.875 * (21.0 * c4 - 14.0 * c2 + 1.0) * s;
    plg[1][6] = (11.0 * c * plg[1][5] - 6.0 * plg[1][4]) / 5.0;
    plg[2][2] = 3.0 * s2;
    plg[2][3] = 15.0 * s2 * c;
    plg[2][4] = 7.5 * (7.0 * c2 - 1.0) * s2;
    plg[2][5] = 3.0 * c * plg[2][4] - 2.0 * plg[2][3];
    plg[2][6] = (11.0 * c * plg[2][5] - 7.0 * plg[2][4]) / 4.0;
    plg[2][7] = (13.0 * c * plg[2][6] - 8.0 * plg[2][5]) / 5.0;
    plg[3][3] = 15.0 * s2 * s;
    plg[3][4] = 105.0 * s2 * s * c;
    plg[3][5] = (9.0 * c * plg[3][4] - 7.0 * plg[3][3]) / 2.0;
    plg[3][6] = (11.0 * c * plg[3][5] - 8.0 * plg[3][4]) / 3.0;

    if !(sw.sw[7] == 0.0 && sw.sw[8] == 0.0 && sw.sw[14] == 0.0) {
        let tloc = input.lst;
        es.stloc = (HR * tloc).sin();
        es.ctloc = (HR * tloc).cos();
        es.s2tloc = (2.0 * HR * tloc).sin();
        es.c2tloc = (2.0 * HR * tloc).cos();
        es.s3tloc = (3.0 * HR * tloc).sin();
        es.c3tloc = (3.0 * HR * tloc).cos();
    }
}

/// Thermospheric expansion G(L) for the coefficient table `p`.
pub(crate) fn glob7(p: &[f64; 150], input: &Input, sw: &SwitchState, es: &mut EvalState) -> f64 {
    let mut t = [0.0_f64; 14];

    fill_latitude_time(input, sw, es);

    let day = f64::from(input.doy);
    let tloc = input.lst;
    let cd32 = (DR * (day - p[31])).cos();
    let cd18 = (2.0 * DR * (day - p[17])).cos();
    let cd14 = (DR * (day - p[13])).cos();
    let cd39 = (2.0 * DR * (day - p[38])).cos();

    let plg = &es.plg;

    // solar flux
    let df = input.f107 - input.f107a;
    let dfa = input.f107a - 150.0;
    t[0] = p[19] * df * (1.0 + p[59] * dfa) + p[20] * df * df + p[21] * dfa + p[29] * dfa * dfa;
    let f1 = 1.0 + (p[47] * dfa + p[19] * df + p[20] * df * df) * sw.swc[1];
    let f2 = 1.0 + (p[49] * dfa + p[19] * df + p[20] * df * df) * sw.swc[1];

    // time independent
    t[1] = p[1] * plg[0][2]
        + p[2] * plg[0][4]
        + p[22] * plg[0][6]
        + p[14] * plg[0][2] * dfa * sw.swc[1]
        + p[26] * plg[0][1];

    // symmetrical annual
    t[2] = p[18] * cd32;

    // symmetrical semiannual
    t[3] = (p[15] + p[16] * plg[0][2]) * cd18;

    // asymmetrical annual
    t[4] = f1 * (p[9] * plg[0][1] + p[10] * plg[0][3]) * cd14;

    // asymmetrical semiannual
    t[5] = p[37] * plg[0][1] * cd39;

    // diurnal
    if sw.sw[7] != 0.0 {
        let t71 = p[11] * plg[1][2] * cd14 * sw.swc[5];
        let t72 = p[12] * plg[1][2] * cd14 * sw.swc[5];
        t[6] = f2
            * ((p[3] * plg[1][1] + p[4] * plg[1][3] + p[27] * plg[1][5] + t71) * es.ctloc
                + (p[6] * plg[1][1] + p[7] * plg[1][3] + p[28] * plg[1][5] + t72) * es.stloc);
    }

    // semidiurnal
    if sw.sw[8] != 0.0 {
        let t81 = (p[23] * plg[2][3] + p[35] * plg[2][5]) * cd14 * sw.swc[5];
        let t82 = (p[33] * plg[2][3] + p[36] * plg[2][5]) * cd14 * sw.swc[5];
        t[7] = f2
            * ((p[5] * plg[2][2] + p[41] * plg[2][4] + t81) * es.c2tloc
                + (p[8] * plg[2][2] + p[42] * plg[2][4] + t82) * es.s2tloc);
    }

    // terdiurnal
    if sw.sw[14] != 0.0 {
        t[13] = f2
            * ((p[39] * plg[3][3] + (p[93] * plg[3][4] + p[46] * plg[3][6]) * cd14 * sw.swc[5])
                * es.s3tloc
                + (p[40] * plg[3][3] + (p[94] * plg[3][4] + p[48] * plg[3][6]) * cd14 * sw.swc[5])
                    * es.c3tloc);
    }

    // geomagnetic activity
    es.history_mode = sw.raw[9] == -1 && input.ap_history.is_some();
    if es.history_mode {
        if let Some(history) = &input.ap_history {
            if p[51] != 0.0 {
                let mut exp1 = (-10800.0 * p[51].abs()
                    / (1.0 + p[138] * (45.0 - input.g_lat.abs())))
                .exp();
                if exp1 > 0.99999 {
                    exp1 = 0.99999;
                }
                let p24 = p[24].max(1.0e-4);
                es.apt = sg0(exp1, p24, p[25], history.values());
                if sw.sw[9] != 0.0 {
                    t[8] = es.apt
                        * (p[50]
                            + p[96] * plg[0][2]
                            + p[54] * plg[0][4]
                            + (p[125] * plg[0][1] + p[126] * plg[0][3] + p[127] * plg[0][5])
                                * cd14
                                * sw.swc[5]
                            + (p[128] * plg[1][1] + p[129] * plg[1][3] + p[130] * plg[1][5])
                                * sw.swc[7]
                                * (HR * (tloc - p[131])).cos());
                }
            }
        }
    } else {
        let apd = input.ap - 4.0;
        let p44 = if p[43] < 0.0 { 1.0e-5 } else { p[43] };
        let p45 = p[44];
        es.apdf = apd + (p45 - 1.0) * (apd + ((-p44 * apd).exp() - 1.0) / p44);
        if sw.sw[9] != 0.0 {
            t[8] = es.apdf
                * (p[32]
                    + p[45] * plg[0][2]
                    + p[34] * plg[0][4]
                    + (p[100] * plg[0][1] + p[101] * plg[0][3] + p[102] * plg[0][5])
                        * cd14
                        * sw.swc[5]
                    + (p[121] * plg[1][1] + p[122] * plg[1][3] + p[123] * plg[1][5])
                        * sw.swc[7]
                        * (HR * (tloc - p[124])).cos());
        }
    }

    if input.g_long > -1000.0 {
        // longitudinal
        if sw.sw[11] != 0.0 {
            t[10] = (1.0 + p[80] * dfa * sw.swc[1])
                * ((p[64] * plg[1][2]
                    + p[65] * plg[1][4]
                    + p[66] * plg[1][6]
                    + p[103] * plg[1][1]
                    + p[104] * plg[1][3]
                    + p[105] * plg[1][5]
                    + sw.swc[5]
                        * (p[109] * plg[1][1] + p[110] * plg[1][3] + p[111] * plg[1][5])
                        * cd14)
                    * (DGTR * input.g_long).cos()
                    + (p[90] * plg[1][2]
                        + p[91] * plg[1][4]
                        + p[92] * plg[1][6]
                        + p[106] * plg[1][1]
                        + p[107] * plg[1][3]
                        + p[108] * plg[1][5]
                        + sw.swc[5]
                            * (p[112] * plg[1][1] + p[113] * plg[1][3] + p[114] * plg[1][5])
                            * cd14)
                        * (DGTR * input.g_long).sin());
        }

        // ut and mixed ut/longitude
        if sw.sw[12] != 0.0 {
            t[11] = (1.0 + p[95] * plg[0][1])
                * (1.0 + p[81] * dfa * sw.swc[1])
                * (1.0 + p[119] * plg[0][1] * sw.swc[5] * cd14)
                * ((p[68] * plg[0][1] + p[69] * plg[0][3] + p[70] * plg[0][5])
                    * (SR * (input.sec - p[71])).cos());
            t[11] += sw.swc[11]
                * (p[76] * plg[2][3] + p[77] * plg[2][5] + p[78] * plg[2][7])
                * (SR * (input.sec - p[79]) + 2.0 * DGTR * input.g_long).cos()
                * (1.0 + p[137] * dfa * sw.swc[1]);
        }

        // ut/longitude coupled with magnetic activity
        if sw.sw[13] != 0.0 {
            if es.history_mode {
                if p[51] != 0.0 {
                    t[12] = es.apt
                        * sw.swc[11]
                        * (1.0 + p[132] * plg[0][1])
                        * ((p[52] * plg[1][2] + p[98] * plg[1][4] + p[67] * plg[1][6])
                            * (DGTR * (input.g_long - p[97])).cos())
                        + es.apt
                            * sw.swc[11]
                            * sw.swc[5]
                            * (p[133] * plg[1][1] + p[134] * plg[1][3] + p[135] * plg[1][5])
                            * cd14
                            * (DGTR * (input.g_long - p[136])).cos()
                        + es.apt
                            * sw.swc[12]
                            * (p[55] * plg[0][1] + p[56] * plg[0][3] + p[57] * plg[0][5])
                            * (SR * (input.sec - p[58])).cos();
                }
            } else {
                t[12] = es.apdf
                    * sw.swc[11]
                    * (1.0 + p[120] * plg[0][1])
                    * ((p[60] * plg[1][2] + p[61] * plg[1][4] + p[62] * plg[1][6])
                        * (DGTR * (input.g_long - p[63])).cos())
                    + es.apdf
                        * sw.swc[11]
                        * sw.swc[5]
                        * (p[115] * plg[1][1] + p[116] * plg[1][3] + p[117] * plg[1][5])
                        * cd14
                        * (DGTR * (input.g_long - p[118])).cos()
                    + es.apdf
                        * sw.swc[12]
                        * (p[83] * plg[0][1] + p[84] * plg[0][3] + p[85] * plg[0][5])
                        * (SR * (input.sec - p[75])).cos();
            }
        }
    }

    let mut tinf = p[30];
    for (i, term) in t.iter().enumerate() {
        tinf += sw.sw[i + 1].abs() * term;
    }
    tinf
}

/// Lower-atmosphere expansion for the coefficient table `p`.
///
/// Reads the Legendre/local-time/activity cache left by [`glob7`].
pub(crate) fn glob7s(p: &[f64; 100], input: &Input, sw: &SwitchState, es: &EvalState) -> f64 {
    let mut t = [0.0_f64; 14];

    let day = f64::from(input.doy);
    let cd32 = (DR * (day - p[31])).cos();
    let cd18 = (2.0 * DR * (day - p[17])).cos();
    let cd14 = (DR * (day - p[13])).cos();
    let cd39 = (2.0 * DR * (day - p[38])).cos();
    let dfa = input.f107a - 150.0;

    let plg = &es.plg;

    // solar flux
    t[0] = p[21] * dfa;

    // time independent
    t[1] = p[1] * plg[0][2]
        + p[2] * plg[0][4]
        + p[22] * plg[0][6]
        + p[26] * plg[0][1]
        + p[14] * plg[0][3]
        + p[59] * plg[0][5];

    // symmetrical annual
    t[2] = (p[18] + p[47] * plg[0][2] + p[29] * plg[0][4]) * cd32;

    // symmetrical semiannual
    t[3] = (p[15] + p[16] * plg[0][2] + p[30] * plg[0][4]) * cd18;

    // asymmetrical annual
    t[4] = (p[9] * plg[0][1] + p[10] * plg[0][3] + p[20] * plg[0][5]) * cd14;

    // asymmetrical semiannual
    t[5] = p[37] * plg[0][1] * cd39;

    // diurnal
    if sw.sw[7] != 0.0 {
        let t71 = p[11] * plg[1][2] * cd14 * sw.swc[5];
        let t72 = p[12] * plg[1][2] * cd14 * sw.swc[5];
        t[6] = (p[3] * plg[1][1] + p[4] * plg[1][3] + t71) * es.ctloc
            + (p[6] * plg[1][1] + p[7] * plg[1][3] + t72) * es.stloc;
    }

    // semidiurnal
    if sw.sw[8] != 0.0 {
        let t81 = (p[23] * plg[2][3] + p[35] * plg[2][5]) * cd14 * sw.swc[5];
        let t82 = (p[33] * plg[2][3] + p[36] * plg[2][5]) * cd14 * sw.swc[5];
        t[7] = (p[5] * plg[2][2] + p[41] * plg[2][4] + t81) * es.c2tloc
            + (p[8] * plg[2][2] + p[42] * plg[2][4] + t82) * es.s2tloc;
    }

    // terdiurnal
    if sw.sw[14] != 0.0 {
        t[13] = p[39] * plg[3][3] * es.s3tloc + p[40] * plg[3][3] * es.c3tloc;
    }

    // geomagnetic activity
    if sw.sw[9] != 0.0 {
        if es.history_mode {
            t[8] = p[50] * es.apt + p[96] * plg[0][2] * es.apt * sw.swc[2];
        } else {
            t[8] = es.apdf * (p[32] + p[45] * plg[0][2] * sw.swc[2]);
        }
    }

    // longitudinal
    if !(sw.sw[10] == 0.0 || sw.sw[11] == 0.0 || input.g_long <= -1000.0) {
        t[10] = (1.0
            + plg[0][1]
                * (p[80] * sw.swc[5] * (DR * (day - p[81])).cos()
                    + p[85] * sw.swc[6] * (2.0 * DR * (day - p[86])).cos())
            + p[83] * sw.swc[3] * (DR * (day - p[84])).cos()
            + p[87] * sw.swc[4] * (2.0 * DR * (day - p[88])).cos())
            * ((p[64] * plg[1][2]
                + p[65] * plg[1][4]
                + p[66] * plg[1][6]
                + p[74] * plg[1][1]
                + p[75] * plg[1][3]
                + p[76] * plg[1][5])
                * (DGTR * input.g_long).cos()
                + (p[90] * plg[1][2]
                    + p[91] * plg[1][4]
                    + p[92] * plg[1][6]
                    + p[77] * plg[1][1]
                    + p[78] * plg[1][3]
                    + p[79] * plg[1][5])
                    * (DGTR * input.g_long).sin());
    }

    let mut tt = 0.0;
    for (i, term) in t.iter().enumerate() {
        tt += sw.sw[i + 1].abs() * term;
    }
    tt
}
