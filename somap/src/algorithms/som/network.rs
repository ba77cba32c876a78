#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/network_test.rs"]
mod network_test;

use super::*;
use crate::algorithms::math::Vector;
use crate::utils::{Environment, Float, InvalidArgument, SomResult};
use std::ops::Range;
use std::sync::Arc;

/// A rectangular Self-Organizing Map with clamped boundaries trained sequentially.
pub struct Network {
    width: usize,
    height: usize,
    dimension: usize,
    iterations: usize,
    learning_rate: Float,
    matrix_radius: Float,
    time_constant: Float,
    /// Neurons in row-major order: index is `x * height + y`.
    neurons: Vec<Neuron>,
    environment: Arc<Environment>,
    telemetry_mode: TelemetryMode,
}

/// A rectangular window of grid indices around the best matching unit, half-open on both axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadiusWindow {
    /// First x index.
    pub x_start: usize,
    /// Exclusive end of x indices.
    pub x_end: usize,
    /// First y index.
    pub y_start: usize,
    /// Exclusive end of y indices.
    pub y_end: usize,
}

impl RadiusWindow {
    /// Returns range of y indices.
    pub fn y_range(&self) -> Range<usize> {
        self.y_start..self.y_end
    }
}

/// Summarizes a finished training run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Amount of full passes over input which were completed.
    pub iterations: usize,
    /// True if training was stopped by the quota before the iteration budget was spent.
    pub is_interrupted: bool,
    /// Training duration in milliseconds.
    pub duration_ms: u128,
}

impl Network {
    /// Creates a new instance of `Network` with randomly initialized weights.
    pub fn new(config: NetworkConfig, environment: Arc<Environment>) -> SomResult<Self> {
        config.validate()?;

        let NetworkConfig { width, height, input_dimension, iterations, learning_rate, .. } = config;
        let matrix_radius = config.matrix_radius();
        let time_constant = iterations as Float / matrix_radius.ln();

        let random = environment.random.as_ref();
        let neurons = (0..width)
            .flat_map(|x| (0..height).map(move |y| Coordinate(x, y)))
            .map(|coordinate| Neuron::new(input_dimension, random).with_coordinate(coordinate))
            .collect();

        Ok(Self {
            width,
            height,
            dimension: input_dimension,
            iterations,
            learning_rate,
            matrix_radius,
            time_constant,
            neurons,
            environment,
            telemetry_mode: TelemetryMode::None,
        })
    }

    /// Creates a new instance of `Network` using default environment and radius policy.
    pub fn with_defaults(
        width: usize,
        height: usize,
        input_dimension: usize,
        iterations: usize,
        learning_rate: Float,
    ) -> SomResult<Self> {
        Self::new(
            NetworkConfig::new(width, height, input_dimension, iterations, learning_rate),
            Arc::new(Environment::default()),
        )
    }

    /// Sets telemetry mode used during training.
    pub fn with_telemetry(mut self, telemetry_mode: TelemetryMode) -> Self {
        self.telemetry_mode = telemetry_mode;
        self
    }

    /// Returns amount of neurons along x axis.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns amount of neurons along y axis.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns input (and weight) dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns iteration budget of a single training run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns initial neighborhood radius.
    pub fn matrix_radius(&self) -> Float {
        self.matrix_radius
    }

    /// Returns time constant of the radius decay.
    pub fn time_constant(&self) -> Float {
        self.time_constant
    }

    /// Returns a neuron at given coordinate.
    pub fn get_neuron(&self, x: usize, y: usize) -> SomResult<&Neuron> {
        self.check_coordinate(x, y)?;
        Ok(&self.neurons[Coordinate(x, y).to_index(self.height)])
    }

    /// Returns a mutable neuron at given coordinate.
    pub fn get_neuron_mut(&mut self, x: usize, y: usize) -> SomResult<&mut Neuron> {
        self.check_coordinate(x, y)?;
        Ok(&mut self.neurons[Coordinate(x, y).to_index(self.height)])
    }

    /// Iterates over neurons in row-major order.
    pub fn neurons(&self) -> impl Iterator<Item = &Neuron> + '_ {
        self.neurons.iter()
    }

    /// Returns neighborhood radius at given iteration.
    pub fn neighborhood_radius(&self, iteration: usize) -> Float {
        self.matrix_radius * (-(iteration as Float) / self.time_constant).exp()
    }

    /// Returns learning rate applied during given iteration.
    pub fn learning_rate_at(&self, iteration: usize) -> Float {
        self.learning_rate * (-(iteration as Float) / self.iterations as Float).exp()
    }

    /// Returns grid window which has to be scanned around the best matching unit.
    pub fn radius_indexes(&self, bmu: Coordinate, radius: Float) -> RadiusWindow {
        let span = (radius * 2.).floor() as usize + 1;
        let start = |value: usize| (value as Float - radius - 1.).floor().max(0.) as usize;

        let x_start = start(bmu.0);
        let y_start = start(bmu.1);

        RadiusWindow {
            x_start,
            x_end: (x_start + span).min(self.width),
            y_start,
            y_end: (y_start + span).min(self.height),
        }
    }

    /// Finds the best matching unit within the map for the given input.
    pub fn find_bmu(&self, input: &[Float]) -> SomResult<&Neuron> {
        self.check_input(input)?;
        let index = self.find_bmu_index(input)?;

        Ok(&self.neurons[index])
    }

    /// Returns the mean squared distance between inputs and their best matching units.
    pub fn quantization_error(&self, inputs: &[Vector]) -> SomResult<Float> {
        if inputs.is_empty() {
            return Err("cannot estimate quantization error without inputs".into());
        }

        let total = inputs.iter().try_fold(Float::default(), |acc, input| {
            let bmu = self.find_bmu(input)?;
            Ok::<_, InvalidArgument>(acc + bmu.distance(input)?)
        })?;

        Ok(total / inputs.len() as Float)
    }

    /// Trains network on the input sequence running the whole iteration budget unless
    /// the environment quota is reached. Schedules restart from the first iteration on each call.
    pub fn train(&mut self, inputs: &[Vector]) -> SomResult<TrainingSummary> {
        if let Some((idx, input)) = inputs.iter().enumerate().find(|(_, input)| input.len() != self.dimension) {
            return Err(InvalidArgument::size_mismatch(&format!("input #{idx}"), self.dimension, input.len()));
        }

        let environment = self.environment.clone();

        environment.parallelism.execute(|| self.train_checked(inputs))
    }

    fn train_checked(&mut self, inputs: &[Vector]) -> SomResult<TrainingSummary> {
        let telemetry = Telemetry::new(self.telemetry_mode, self.environment.logger.clone());
        telemetry.on_start(self, inputs.len());

        self.neurons.iter_mut().for_each(Neuron::reset_hits);

        let mut iteration = 0;
        let mut learning_rate = self.learning_rate;
        let mut is_interrupted = false;

        while iteration < self.iterations {
            let radius = self.neighborhood_radius(iteration);
            telemetry.on_iteration(iteration, self.iterations, radius, learning_rate);

            for input in inputs {
                let bmu_index = self.find_bmu_index(input)?;
                let bmu = &mut self.neurons[bmu_index];
                bmu.new_hit();

                let coordinate = bmu.coordinate();
                self.update_neighborhood(coordinate, input, radius, learning_rate);
            }

            iteration += 1;
            // NOTE rate is decayed with the already incremented iteration, radius is not
            learning_rate = self.learning_rate * (-(iteration as Float) / self.iterations as Float).exp();

            if iteration < self.iterations && self.environment.is_quota_reached() {
                is_interrupted = true;
                break;
            }
        }

        let summary = TrainingSummary { iterations: iteration, is_interrupted, duration_ms: telemetry.elapsed_millis() };
        telemetry.on_end(&summary);

        Ok(summary)
    }

    fn find_bmu_index(&self, input: &[Float]) -> SomResult<usize> {
        let distances = self.environment.parallelism.collect(self.neurons.as_slice(), |neuron| neuron.distance(input));
        let distances = distances.into_iter().collect::<SomResult<Vec<_>>>()?;

        find_best_index(distances).ok_or_else(|| "network has no neurons".into())
    }

    fn update_neighborhood(&mut self, bmu: Coordinate, input: &[Float], radius: Float, learning_rate: Float) {
        let window = self.radius_indexes(bmu, radius);
        let radius_squared = radius.powi(2);
        let y_range = window.y_range();

        let columns = &mut self.neurons[window.x_start * self.height..window.x_end * self.height];

        self.environment.parallelism.foreach_chunk_mut(columns, self.height, |column| {
            column[y_range.clone()].iter_mut().for_each(|neuron| {
                let distance = bmu.planar_distance(&neuron.coordinate());
                if distance <= radius_squared {
                    neuron.adjust(input, learning_rate, distance_drop(distance, radius));
                }
            });
        });
    }

    fn check_coordinate(&self, x: usize, y: usize) -> SomResult<()> {
        if x >= self.width {
            return Err(InvalidArgument::out_of_range("neuron x", x, self.width));
        }

        if y >= self.height {
            return Err(InvalidArgument::out_of_range("neuron y", y, self.height));
        }

        Ok(())
    }

    fn check_input(&self, input: &[Float]) -> SomResult<()> {
        if input.len() != self.dimension {
            return Err(InvalidArgument::size_mismatch("input", self.dimension, input.len()));
        }

        Ok(())
    }
}

/// Returns a weight of the update applied to a neuron at given squared grid distance from
/// the best matching unit: `exp(-distance^2 / radius^2)`.
///
/// NOTE `distance` is already squared, so it is squared twice in total.
pub fn distance_drop(distance: Float, radius: Float) -> Float {
    (-(distance.powi(2) / radius.powi(2))).exp()
}

/// Returns an index of the smallest distance in the sequence ordered as the grid scan.
/// Only strictly smaller distance replaces the current best one, so the first found wins a tie.
pub fn find_best_index<I>(distances: I) -> Option<usize>
where
    I: IntoIterator<Item = Float>,
{
    let mut distances = distances.into_iter().enumerate();
    let (_, first) = distances.next()?;

    let (best_index, _) = distances.fold((0, first), |(best_index, best), (index, distance)| {
        if distance < best { (index, distance) } else { (best_index, best) }
    });

    Some(best_index)
}
