use ndarray::Array2;
use numpy::{PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod oscillation;

use oscillation::{
    simulate_states, simulate_track, ForceParameters, IntegrationParameters, JointState,
    ModelError, TransitionProbabilities,
};

fn to_py_err(err: ModelError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Simulate the discrete sister-state trajectory.
///
/// This is the entry point from Python for the Markov layer. Each call
/// builds its own seeded generator, so a fixed seed reproduces the
/// trajectory exactly and distinct seeds give independent runs.
///
/// # Arguments
/// * `p` - Hold probabilities (p_coherent, p_incoherent), each in [0, 1]
/// * `sigma` - Initial ±1 sign pair for the two sisters
/// * `seed` - RNG seed for this run
/// * `t_max` - Total simulated time
/// * `dt` - Time step
///
/// # Returns
/// * (n_steps, 2) array of ±1 signs, one row per step on the grid
///   0, dt, … < t_max
#[pyfunction]
#[pyo3(signature = (p, sigma, seed, t_max=600.0, dt=2.0))]
fn simulate_sister_states<'py>(
    py: Python<'py>,
    p: [f64; 2],
    sigma: [f64; 2],
    seed: u64,
    t_max: f64,
    dt: f64,
) -> PyResult<&'py PyArray2<f64>> {
    let probs = TransitionProbabilities::new(p[0], p[1]).map_err(to_py_err)?;
    let initial = JointState::from_signs(sigma[0], sigma[1]).map_err(to_py_err)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let states = simulate_states(&probs, initial, t_max, dt, &mut rng).map_err(to_py_err)?;

    let mut flat = Vec::with_capacity(states.len() * 2);
    for state in &states {
        flat.extend_from_slice(&state.signs());
    }
    let array = Array2::from_shape_vec((states.len(), 2), flat)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(PyArray2::from_owned_array(py, array))
}

/// Integrate sister positions along a discrete state trajectory.
///
/// Rows of `states` that are not a ±1 sign pair are rejected with
/// `ValueError` rather than silently skipped.
///
/// # Arguments
/// * `states` - (n, 2) array of ±1 signs, typically from
///   `simulate_sister_states`
/// * `v` - Poleward bias speed pair (v1, v2)
/// * `dt` - Time step
/// * `s` - Noise standard deviation, non-negative
/// * `seed` - RNG seed for this run
/// * `rest_length` - Rest inter-sister separation of the spring
/// * `stiffness` - Spring stiffness
/// * `damping` - Linear damping coefficient
///
/// # Returns
/// * (n, 5) array [x1, x2, separation, state label, center], one row per
///   trajectory element, row 0 fixed at [0.5, -0.5, 0.0, 1.0, 0.0]
#[pyfunction]
#[pyo3(signature = (states, v, dt, s, seed, rest_length=0.8, stiffness=0.025, damping=0.01))]
#[allow(clippy::too_many_arguments)]
fn simulate_oscillations<'py>(
    py: Python<'py>,
    states: PyReadonlyArray2<f64>,
    v: [f64; 2],
    dt: f64,
    s: f64,
    seed: u64,
    rest_length: f64,
    stiffness: f64,
    damping: f64,
) -> PyResult<&'py PyArray2<f64>> {
    let signs = states.as_array();
    if signs.ncols() != 2 {
        return Err(PyValueError::new_err(format!(
            "expected an (n, 2) state array, got {} columns",
            signs.ncols()
        )));
    }

    let trajectory: Vec<JointState> = signs
        .rows()
        .into_iter()
        .map(|row| JointState::from_signs(row[0], row[1]))
        .collect::<Result<_, _>>()
        .map_err(to_py_err)?;

    let params = IntegrationParameters::new(v, s, dt).map_err(to_py_err)?;
    let force = ForceParameters::new(rest_length, stiffness, damping);

    let mut rng = StdRng::seed_from_u64(seed);
    let track = simulate_track(&trajectory, &params, &force, &mut rng).map_err(to_py_err)?;

    let mut flat = Vec::with_capacity(track.len() * 5);
    for point in &track {
        flat.extend_from_slice(&point.as_row());
    }
    let array = Array2::from_shape_vec((track.len(), 5), flat)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(PyArray2::from_owned_array(py, array))
}

/// Deterministic restoring force at the given sister positions.
///
/// # Arguments
/// * `x` - Position pair (x1, x2)
/// * `rest_length` - Rest inter-sister separation of the spring
/// * `stiffness` - Spring stiffness
/// * `damping` - Linear damping coefficient
///
/// # Returns
/// * Length-2 force array
#[pyfunction]
#[pyo3(signature = (x, rest_length=0.8, stiffness=0.025, damping=0.01))]
fn deterministic_force<'py>(
    py: Python<'py>,
    x: [f64; 2],
    rest_length: f64,
    stiffness: f64,
    damping: f64,
) -> &'py PyArray1<f64> {
    let force = ForceParameters::new(rest_length, stiffness, damping);
    PyArray1::from_vec(py, force.evaluate(x).to_vec())
}

/// Python module definition
#[pymodule]
fn kinetochore_rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_sister_states, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_oscillations, m)?)?;
    m.add_function(wrap_pyfunction!(deterministic_force, m)?)?;
    Ok(())
}
