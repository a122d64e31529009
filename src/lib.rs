//! NRLMSISE-00 atmosphere computation
//!
//! NOTE: this module is intended for the interface between Rust and Python. The
//! real work happens in the other modules, and they do not use `pyo3`, its
//! only used here.

pub mod error;
pub mod msis;

use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Duration,
};

use error::MsisError;
use log::{debug, info};
use msis::{gtd7d, ApHistory, Input, Switches};
use ndarray::{Array2, ArrayView1, Axis};
use numpy::prelude::*;
use numpy::{PyArray2, PyReadonlyArray1, PyReadonlyArray2, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rayon::prelude::*;

impl From<MsisError> for PyErr {
    fn from(e: MsisError) -> Self {
        match e {
            MsisError::ApHistoryLength(_) => PyValueError::new_err(e.to_string()),
            MsisError::InconsistentInputs => PyValueError::new_err(e.to_string()),
            MsisError::NotContiguous => PyValueError::new_err(e.to_string()),
            MsisError::Cancelled => PyValueError::new_err(e.to_string()),
        }
    }
}

/// Atmosphere state at the evaluated points.
///
/// This is just a container of two numpy arrays: per-species number
/// densities dimensioned as (`num_points`, 9) and temperatures
/// dimensioned as (`num_points`, 2).
#[pyclass]
struct AtmoDensities {
    densities: Array2<f64>,
    temperatures: Array2<f64>,
}

/// Implement all the "getters" for the Python properties
#[pymethods]
impl AtmoDensities {
    #[getter]
    fn densities<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.densities.to_pyarray(py)
    }

    #[getter]
    fn temperatures<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.temperatures.to_pyarray(py)
    }
}

impl AtmoDensities {
    fn new(num_points: usize) -> Self {
        Self {
            densities: Array2::zeros([num_points, 9]),
            temperatures: Array2::zeros([num_points, 2]),
        }
    }
}

/// Compute atmospheric densities and temperatures for a batch of points.
///
/// All per-point inputs are 1d numpy arrays with shape (`num_points`, ):
///
/// `day_of_year`: day of year, 1 through 366
///
/// `seconds`: seconds of day, UT
///
/// `altitude_km`: geodetic altitude in km
///
/// `latitude`: geodetic latitude in degrees
///
/// `longitude`: geodetic longitude in degrees
///
/// `local_solar_time`: local apparent solar time in hours
///
/// `f107_average`: 81-day average F10.7 solar flux, centered on the day
///
/// `f107_daily`: daily F10.7 solar flux for the previous day
///
/// `ap_daily`: daily Ap geomagnetic index
///
/// `ap_history` is optional and has shape (`num_points`, 7): the daily
/// Ap, the current and three preceding 3-hour indices, and the two
/// longer-period averages. It is consulted instead of `ap_daily` when
/// switch 9 is -1.
///
/// `switches` has shape (24, ) and is applied to every point; switch 0
/// selects the output units (0 for cm^-3 and g/cm^3, 1 for m^-3 and
/// kg/m^3).
///
/// The returned densities are dimensioned as (`num_points`, 9), with
/// slot 5 holding the drag-effective total mass density, and the
/// temperatures as (`num_points`, 2).
///
/// The number of worker threads is controlled by `num_threads`. It must be a
/// positive integer, or `None` to automatically choose the number of threads.
#[pyfunction]
#[pyo3(signature = (day_of_year, seconds, altitude_km, latitude, longitude, local_solar_time, f107_average, f107_daily, ap_daily, ap_history, switches, num_threads))]
#[allow(clippy::too_many_arguments)]
fn compute_density(
    py: Python<'_>,
    day_of_year: PyReadonlyArray1<'_, i32>,
    seconds: PyReadonlyArray1<'_, f64>,
    altitude_km: PyReadonlyArray1<'_, f64>,
    latitude: PyReadonlyArray1<'_, f64>,
    longitude: PyReadonlyArray1<'_, f64>,
    local_solar_time: PyReadonlyArray1<'_, f64>,
    f107_average: PyReadonlyArray1<'_, f64>,
    f107_daily: PyReadonlyArray1<'_, f64>,
    ap_daily: PyReadonlyArray1<'_, f64>,
    ap_history: Option<PyReadonlyArray2<'_, f64>>,
    switches: PyReadonlyArray1<'_, i64>,
    num_threads: Option<usize>,
) -> PyResult<AtmoDensities> {
    let num_points = day_of_year.len();

    // Check shapes of all inputs
    {
        let one_dim_points = &[
            seconds.len(),
            altitude_km.len(),
            latitude.len(),
            longitude.len(),
            local_solar_time.len(),
            f107_average.len(),
            f107_daily.len(),
            ap_daily.len(),
        ];
        if one_dim_points.iter().any(|&d| d != num_points) {
            return Err(MsisError::InconsistentInputs.into());
        }
        if let Some(history) = &ap_history {
            let dims = history.dims();
            if dims[0] != num_points {
                return Err(MsisError::InconsistentInputs.into());
            }
            if dims[1] != 7 {
                return Err(MsisError::ApHistoryLength(dims[1]).into());
            }
        }
        if switches.len() != 24 {
            return Err(MsisError::InconsistentInputs.into());
        }
    }
    debug!("input shapes are consistent");

    let switches = {
        let mut raw = [0_i32; 24];
        for (raw, value) in raw.iter_mut().zip(switches.as_slice()?) {
            *raw = *value as i32;
        }
        Switches::from_array(raw)
    };

    // Ensure everything is converted and contiguous
    let day_of_year = day_of_year.as_slice()?;
    let seconds = seconds.as_slice()?;
    let altitude_km = altitude_km.as_slice()?;
    let latitude = latitude.as_slice()?;
    let longitude = longitude.as_slice()?;
    let local_solar_time = local_solar_time.as_slice()?;
    let f107_average = f107_average.as_slice()?;
    let f107_daily = f107_daily.as_slice()?;
    let ap_daily = ap_daily.as_slice()?;
    let ap_history = ap_history.as_ref().map(|history| history.as_array());

    let mut results = Vec::new();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    // These atomics keep track of how many points have finished and whether
    // it's time to cancel the computation or not
    let num_completed = AtomicUsize::new(0);
    let cancelled = AtomicBool::new(false);

    info!("Processing NRLMSISE-00 for {num_points} evaluation points");

    pool.in_place_scope(|s| -> Result<(), PyErr> {
        s.spawn(|_| {
            (0..num_points)
                .into_par_iter()
                .map(|point| -> Result<_, MsisError> {
                    if cancelled.load(Ordering::Relaxed) {
                        return Err(MsisError::Cancelled);
                    }

                    let history = match &ap_history {
                        Some(view) => {
                            let row = view.index_axis(Axis(0), point);
                            let row = row.as_slice().ok_or(MsisError::NotContiguous)?;
                            Some(ApHistory::new(row)?)
                        }
                        None => None,
                    };

                    let input = Input {
                        doy: day_of_year[point],
                        sec: seconds[point],
                        alt: altitude_km[point],
                        g_lat: latitude[point],
                        g_long: longitude[point],
                        lst: local_solar_time[point],
                        f107a: f107_average[point],
                        f107: f107_daily[point],
                        ap: ap_daily[point],
                        ap_history: history,
                    };

                    Ok(gtd7d(&input, &switches))
                })
                .inspect(|_| {
                    num_completed.fetch_add(1, Ordering::Relaxed);
                })
                .collect_into_vec(&mut results);
        });

        // The work is done in the thread pool, but back here in the main
        // thread, handle progress reporting and checking for early
        // cancellation
        while !cancelled.load(Ordering::Relaxed) {
            if let Err(e) = py.check_signals() {
                cancelled.store(true, Ordering::Relaxed);
                return Err(e);
            }

            let num_completed = num_completed.load(Ordering::Relaxed);
            let progress = num_completed as f64 / num_points as f64 * 100.;
            info!("Completed {num_completed}/{num_points} points ({progress:0.2}%)");

            // All finished without cancelling early
            if num_completed == num_points {
                break;
            }

            py.allow_threads(|| {
                std::thread::sleep(Duration::from_secs(5));
            });
        }

        Ok(())
    })?;

    // Copy the intermediate results to the output arrays
    debug!("copying model output");
    let mut output = AtmoDensities::new(num_points);
    results
        .into_iter()
        .enumerate()
        .try_for_each(|(index, result)| -> Result<_, MsisError> {
            let model_output = result?;

            let rhs = ArrayView1::from(model_output.densities().as_slice());
            output.densities.index_axis_mut(Axis(0), index).assign(&rhs);

            let rhs = ArrayView1::from(model_output.temperatures().as_slice());
            output
                .temperatures
                .index_axis_mut(Axis(0), index)
                .assign(&rhs);

            Ok(())
        })?;

    Ok(output)
}

/// A Python module implemented in Rust.
#[pymodule]
fn msis_atmos(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(compute_density, m)?)?;
    m.add_class::<AtmoDensities>()?;
    Ok(())
}
