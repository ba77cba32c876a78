use super::*;
use crate::helpers::algorithms::som::*;
use crate::helpers::utils::*;
use crate::utils::{DefaultRandom, Parallelism, Random, round_to};

fn create_random_inputs(amount: usize, dimension: usize, seed: u64) -> Vec<Vector> {
    let random = DefaultRandom::new_repeatable(seed);

    (0..amount).map(|_| (0..dimension).map(|_| random.uniform_real(0., 1.)).collect()).collect()
}

#[test]
fn can_create_network_with_given_shape() {
    let network = create_test_network(create_test_config(6, 4, 2, 100), 0);

    assert_eq!(network.width(), 6);
    assert_eq!(network.height(), 4);
    assert_eq!(network.dimension(), 2);
    assert_eq!(network.neurons().count(), 24);
    assert!(network.neurons().all(|neuron| neuron.dimension() == 2));

    let coordinates = network.neurons().map(|neuron| neuron.coordinate()).collect::<Vec<_>>();
    let expected = (0..6).flat_map(|x| (0..4).map(move |y| Coordinate(x, y))).collect::<Vec<_>>();
    assert_eq!(coordinates, expected);
}

#[test]
fn can_initialize_weights_in_scan_order() {
    let reals = (0..8).map(|idx| idx as Float / 10.).collect::<Vec<_>>();
    let config = create_test_config(4, 1, 2, 10);

    let network = Network::new(config, create_test_environment(Arc::new(FakeRandom::new(reals)))).unwrap();

    assert_eq!(network.get_neuron(0, 0).unwrap().weights().as_slice(), &[0., 0.1]);
    assert_eq!(network.get_neuron(3, 0).unwrap().weights().as_slice(), &[0.6, 0.7]);
}

#[test]
fn can_reject_unsupported_configuration() {
    assert!(Network::with_defaults(2, 2, 2, 100, 0.5).is_err());
    assert!(Network::with_defaults(0, 5, 2, 100, 0.5).is_err());
    assert!(Network::with_defaults(5, 5, 0, 100, 0.5).is_err());
    assert!(Network::with_defaults(5, 5, 2, 0, 0.5).is_err());
    assert!(Network::with_defaults(3, 2, 2, 1, 0.5).is_ok());
}

#[test]
fn can_get_neuron_by_coordinate() {
    let network = create_test_network(create_test_config(5, 5, 2, 100), 0);

    (0..5).flat_map(|x| (0..5).map(move |y| (x, y))).for_each(|(x, y)| {
        let neuron = network.get_neuron(x, y).unwrap();
        assert_eq!(neuron.coordinate(), Coordinate(x, y));
    });
}

#[test]
fn can_reject_neuron_coordinate_out_of_range() {
    let mut network = create_test_network(create_test_config(5, 5, 2, 100), 0);

    for (x, y) in [(6, 5), (5, 6), (5, 0), (0, 5), (5, 4), (4, 5)] {
        assert!(network.get_neuron(x, y).is_err(), "({x}, {y})");
        assert!(network.get_neuron_mut(x, y).is_err(), "({x}, {y})");
    }
}

#[test]
fn can_calculate_derived_constants() {
    let network = create_test_network(create_test_config(5, 5, 2, 100), 0);

    assert_eq!(network.matrix_radius(), 2.5);
    assert_eq!(network.time_constant(), 100. / (2.5 as Float).ln());
    assert_eq!(network.neighborhood_radius(0), 2.5);
}

#[test]
fn can_calculate_neighborhood_radius_with_truncated_policy() {
    let config = create_test_config(5, 5, 2, 100).with_radius_policy(RadiusPolicy::Truncated);
    let network = create_test_network(config, 0);

    assert_eq!(network.matrix_radius(), 2.);
    assert_eq!(round_to(network.neighborhood_radius(2), 2), 1.97);
}

#[test]
fn can_decrease_neighborhood_radius_monotonically() {
    let network = create_test_network(create_test_config(10, 8, 2, 50), 0);

    let radiuses = (0..50).map(|iteration| network.neighborhood_radius(iteration)).collect::<Vec<_>>();

    assert!(radiuses.windows(2).all(|pair| pair[1] < pair[0]));
    assert!(radiuses.iter().all(|&radius| radius > 0.));
}

#[test]
fn can_decay_learning_rate() {
    let network = create_test_network(create_test_config(5, 5, 2, 4), 0);

    assert_eq!(network.learning_rate_at(0), 0.5);
    assert_eq!(network.learning_rate_at(2), 0.5 * (-0.5 as Float).exp());
}

parameterized_test! {can_get_radius_indexes, (size, bmu, radius, expected), {
    can_get_radius_indexes_impl(size, bmu, radius, expected);
}}

can_get_radius_indexes! {
    case01_clamps_to_grid: ((5, 5), Coordinate(2, 2), 2., (0, 5, 0, 5)),
    case02_inner_window: ((10, 10), Coordinate(4, 4), 1., (2, 5, 2, 5)),
    case03_fractional_radius: ((10, 10), Coordinate(6, 3), 1.5, (3, 7, 0, 4)),
    case04_right_border: ((10, 6), Coordinate(9, 5), 2., (6, 10, 2, 6)),
    case05_zero_origin: ((5, 5), Coordinate(0, 0), 2.5, (0, 5, 0, 5)),
}

fn can_get_radius_indexes_impl(
    size: (usize, usize),
    bmu: Coordinate,
    radius: Float,
    expected: (usize, usize, usize, usize),
) {
    let network = create_test_network(create_test_config(size.0, size.1, 1, 10), 0);

    let window = network.radius_indexes(bmu, radius);

    assert_eq!((window.x_start, window.x_end, window.y_start, window.y_end), expected);
}

#[test]
fn can_calculate_distance_drop() {
    assert_eq!(round_to(distance_drop(2., 2.), 2), 0.37);
    assert_eq!(distance_drop(0., 2.), 1.);
    assert!(distance_drop(3., 2.) < distance_drop(2., 2.));
}

#[test]
fn can_find_best_index_in_scan_order() {
    let index = find_best_index(vec![4., 3., 2., 1.]).unwrap();

    assert_eq!(index, 3);
    assert_eq!(Coordinate::from_index(index, 2), Coordinate(1, 1));
}

#[test]
fn can_keep_first_found_on_tie() {
    assert_eq!(find_best_index(vec![1., 1., 0.5, 0.5]), Some(2));
    assert_eq!(find_best_index(vec![2., 2., 2.]), Some(0));
    assert_eq!(find_best_index(Vec::<Float>::new()), None);
}

#[test]
fn can_find_bmu() {
    let mut network = create_test_network_with_weight(create_test_config(3, 3, 1, 10), 0.5);
    network.get_neuron_mut(2, 1).unwrap().set_weight(0, 0.9).unwrap();

    assert_eq!(network.find_bmu(&[1.]).unwrap().coordinate(), Coordinate(2, 1));
    assert_eq!(network.find_bmu(&[0.5]).unwrap().coordinate(), Coordinate(0, 0));
    assert!(network.find_bmu(&[0.5, 0.5]).is_err());
}

#[test]
fn can_train_exactly_given_amount_of_iterations() {
    let mut network = create_test_network(create_test_config(6, 6, 3, 25), 1);
    let initial = get_all_weights(&network);
    let inputs = create_random_inputs(10, 3, 2);

    let summary = network.train(inputs.as_slice()).unwrap();

    assert_eq!(summary.iterations, 25);
    assert!(!summary.is_interrupted);
    assert_ne!(get_all_weights(&network), initial);
}

#[test]
fn can_keep_weights_when_trained_on_empty_input() {
    let mut network = create_test_network(create_test_config(5, 5, 2, 10), 3);
    let initial = get_all_weights(&network);

    network.train(&[]).unwrap();
    let summary = network.train(&[]).unwrap();

    assert_eq!(summary.iterations, 10);
    assert_eq!(get_all_weights(&network), initial);
}

#[test]
fn can_reject_input_of_wrong_dimension_without_changes() {
    let mut network = create_test_network(create_test_config(5, 5, 2, 10), 4);
    let initial = get_all_weights(&network);
    let inputs = create_test_inputs(&[&[0.1, 0.2], &[0.3], &[0.4, 0.5]]);

    let result = network.train(inputs.as_slice());

    assert!(result.unwrap_err().message().contains("input #1"));
    assert_eq!(get_all_weights(&network), initial);
}

#[test]
fn can_update_only_neurons_within_radius() {
    let mut network = create_test_network_with_weight(create_test_config(5, 5, 1, 1), 0.5);
    let radius = network.neighborhood_radius(0);
    let expected = |distance: Float| 0.5 + 0.5 * distance_drop(distance, radius) * (1. - 0.5);

    network.train(create_test_inputs(&[&[1.]]).as_slice()).unwrap();

    let weight = |x, y| network.get_neuron(x, y).unwrap().get_weight(0).unwrap();
    assert_eq!(weight(0, 0), 0.75);
    assert_eq!(weight(1, 0), expected(1.));
    assert_eq!(weight(1, 1), expected(2.));
    assert_eq!(weight(0, 2), expected(4.));
    assert_eq!(weight(2, 1), expected(5.));
    assert_eq!(weight(2, 2), 0.5);
    assert_eq!(weight(3, 0), 0.5);
    assert_eq!(weight(4, 4), 0.5);
}

#[test]
fn can_decay_learning_rate_after_iteration() {
    let mut network = create_test_network_with_weight(create_test_config(5, 5, 1, 2), 0.5);
    let radius = network.neighborhood_radius(1);
    let expected = 0.75 + network.learning_rate_at(1) * distance_drop(0., radius) * (1. - 0.75);

    network.train(create_test_inputs(&[&[1.]]).as_slice()).unwrap();

    let actual = network.get_neuron(0, 0).unwrap().get_weight(0).unwrap();
    assert!((actual - expected).abs() < 1E-12, "actual: {actual}, expected: {expected}");
}

#[test]
fn can_count_bmu_hits() {
    let mut network = create_test_network_with_weight(create_test_config(5, 5, 1, 7), 0.5);
    let inputs = create_test_inputs(&[&[1.]]);

    network.train(inputs.as_slice()).unwrap();
    assert_eq!(network.get_neuron(0, 0).unwrap().total_hits(), 7);
    assert_eq!(network.neurons().map(|neuron| neuron.total_hits()).sum::<usize>(), 7);

    network.train(inputs.as_slice()).unwrap();
    assert_eq!(network.neurons().map(|neuron| neuron.total_hits()).sum::<usize>(), 7);
}

#[test]
fn can_train_in_parallel_with_the_same_result() {
    let config = create_test_config(8, 6, 3, 20);
    let inputs = create_random_inputs(30, 3, 7);

    let train = |parallelism: Parallelism| {
        let environment = create_test_environment_with_parallelism(42, parallelism);
        let mut network = Network::new(config.clone(), environment).unwrap();
        network.train(inputs.as_slice()).unwrap();

        get_all_weights(&network)
    };

    let sequential = train(Parallelism::Sequential);

    assert_eq!(train(Parallelism::Parallel { thread_pool: None }), sequential);
    assert_eq!(train(Parallelism::with_threads(4)), sequential);
}

fn create_uniform_network(config: NetworkConfig, parallelism: Parallelism) -> Network {
    let random = Arc::new(EchoRandom::new(0.5));
    let environment = Arc::new(Environment { random, parallelism, ..Environment::default() });

    Network::new(config, environment).unwrap()
}

#[test]
fn can_keep_scan_order_on_tie_in_parallel() {
    let network = create_uniform_network(create_test_config(8, 8, 2, 10), Parallelism::with_threads(4));

    let bmu =
        network.environment.parallelism.execute(|| network.find_bmu(&[0.1, 0.9]).map(|neuron| neuron.coordinate()));

    assert_eq!(bmu.unwrap(), Coordinate(0, 0));
}

#[test]
fn can_train_tied_network_in_parallel_with_the_same_result() {
    let config = create_test_config(8, 8, 2, 10);
    let inputs = create_test_inputs(&[&[0.5, 0.5], &[0.1, 0.9], &[0.5, 0.5], &[0.9, 0.1]]);

    let train = |parallelism: Parallelism| {
        let mut network = create_uniform_network(config.clone(), parallelism);
        network.train(inputs.as_slice()).unwrap();

        let hits = network.neurons().map(|neuron| neuron.total_hits()).collect::<Vec<_>>();
        (get_all_weights(&network), hits)
    };

    let sequential = train(Parallelism::Sequential);

    assert_eq!(sequential.1.iter().sum::<usize>(), 40);
    assert_eq!(train(Parallelism::Parallel { thread_pool: None }), sequential);
    assert_eq!(train(Parallelism::with_threads(4)), sequential);
}

#[test]
fn can_stop_training_when_quota_is_reached() {
    let environment = create_test_environment_with_quota(Arc::new(FixedQuota { is_reached: true }));
    let inputs = create_random_inputs(5, 2, 0);

    let mut network = Network::new(create_test_config(5, 5, 2, 10), environment.clone()).unwrap();
    let summary = network.train(inputs.as_slice()).unwrap();
    assert_eq!(summary.iterations, 1);
    assert!(summary.is_interrupted);

    let mut network = Network::new(create_test_config(5, 5, 2, 1), environment).unwrap();
    let summary = network.train(inputs.as_slice()).unwrap();
    assert_eq!(summary.iterations, 1);
    assert!(!summary.is_interrupted);
}

#[test]
fn can_reduce_quantization_error_with_training() {
    let mut network = create_test_network(create_test_config(6, 6, 2, 30), 5);
    let inputs = create_test_inputs(&[&[0.05, 0.05], &[0.95, 0.95], &[0.05, 0.95], &[0.95, 0.05]]);

    let before = network.quantization_error(inputs.as_slice()).unwrap();
    network.train(inputs.as_slice()).unwrap();
    let after = network.quantization_error(inputs.as_slice()).unwrap();

    assert!(after < before, "before: {before}, after: {after}");
    assert!(network.quantization_error(&[]).is_err());
}
