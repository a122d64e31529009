//! Chapman-layer corrections, density blending, and the 3-hour Ap
//! weighting used by the geomagnetic activity terms.

/// Universal gas constant scaled for amu masses and km altitudes.
pub(crate) const RGAS: f64 = 831.4;

/// Chemistry/dissociation correction factor.
///
/// `alt` is the altitude in km, `r` the log of the full correction, `h1`
/// the transition scale length, and `zh` the transition altitude. The
/// factor tends to `exp(r)` well below the transition and to 1 well above
/// it; the exponent argument is saturated at +-70 so the logistic never
/// overflows.
pub(crate) fn ccor(alt: f64, r: f64, h1: f64, zh: f64) -> f64 {
    let e = (alt - zh) / h1;
    if e > 70.0 {
        return 1.0;
    }
    if e < -70.0 {
        return r.exp();
    }
    (r / (1.0 + e.exp())).exp()
}

/// Chemistry/dissociation correction factor with two scale lengths.
///
/// Variant of [`ccor`] blending logistic slopes `h1` and `h2` around the
/// same transition altitude `zh`; the sign of `h2` selects which side of
/// the transition is sharpened.
pub(crate) fn ccor2(alt: f64, r: f64, h1: f64, zh: f64, h2: f64) -> f64 {
    let e1 = (alt - zh) / h1;
    let e2 = (alt - zh) / h2;
    if e1 > 70.0 || e2 > 70.0 {
        return 1.0;
    }
    if e1 < -70.0 && e2 < -70.0 {
        return r.exp();
    }
    (r / (1.0 + 0.5 * (e1.exp() + e2.exp()))).exp()
}

/// Blend a diffusive-equilibrium density into a fully-mixed density.
///
/// `dd` is the diffusive (major) branch, `dm` the mixed (minor) branch,
/// `zhm` the transition scale height, `xmm` the mean molecular mass and
/// `xm` the species mass. The blend happens in log space; the degenerate
/// branches (either density non-positive, or the log weight saturating
/// beyond +-10) return one input unchanged, and downstream chemistry
/// relies on exactly that.
pub(crate) fn dnet(dd: f64, dm: f64, zhm: f64, xmm: f64, xm: f64) -> f64 {
    let a = zhm / (xmm - xm);
    if !(dm > 0.0 && dd > 0.0) {
        if dd == 0.0 && dm == 0.0 {
            return 1.0;
        }
        if dm == 0.0 {
            return dd;
        }
        if dd == 0.0 {
            return dm;
        }
    }
    let ylog = a * (dm / dd).ln();
    if ylog < -10.0 {
        return dd;
    }
    if ylog > 10.0 {
        return dm;
    }
    dd * (1.0 + ylog.exp()).powf(1.0 / a)
}

/// Pressure scale height in km for a species of mass `xm` at altitude
/// `alt` and temperature `temp`, with surface gravity `gsurf` and
/// effective radius `re` from the latitude-dependent gravity field.
pub(crate) fn scalh(alt: f64, xm: f64, temp: f64, gsurf: f64, re: f64) -> f64 {
    let g = gsurf / (1.0 + alt / re).powi(2);
    RGAS * temp / (g * xm)
}

/// Geopotential altitude difference between `zz` and `zl` for effective
/// radius `re`.
pub(crate) fn zeta(zz: f64, zl: f64, re: f64) -> f64 {
    (zz - zl) * (re + zl) / (re + zz)
}

/// Bounded response to one 3-hour Ap value.
///
/// `p24` and `p25` are the activity-response coefficients of the expansion
/// table in use (already guarded against degenerate values by the caller).
pub(crate) fn g0(a: f64, p24: f64, p25: f64) -> f64 {
    let abs_p24 = p24.abs();
    (a - 4.0) + (p25 - 1.0) * (a - 4.0 + ((-abs_p24 * (a - 4.0)).exp() - 1.0) / abs_p24)
}

/// Normalisation of the exponential history weighting.
pub(crate) fn sumex(ex: f64) -> f64 {
    1.0 + (1.0 - ex.powi(19)) / (1.0 - ex) * ex.sqrt()
}

/// Exponentially-weighted geomagnetic activity from a 7-point Ap history.
///
/// `ex` is the per-3-hour decay factor, `ap` the history `{daily, current,
/// -3h, -6h, -9h, 12-33h mean, 36-57h mean}`; only the six trailing slots
/// participate, with the two block means spread over their spans.
pub(crate) fn sg0(ex: f64, p24: f64, p25: f64, ap: &[f64; 7]) -> f64 {
    let ex8 = ex.powi(8);
    let ex12 = ex.powi(12);
    (g0(ap[1], p24, p25)
        + g0(ap[2], p24, p25) * ex
        + g0(ap[3], p24, p25) * ex * ex
        + g0(ap[4], p24, p25) * ex.powi(3)
        + (g0(ap[5], p24, p25) * ex.powi(4) + g0(ap[6], p24, p25) * ex12) * (1.0 - ex8)
            / (1.0 - ex))
        / sumex(ex)
}
