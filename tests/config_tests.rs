use seabattle::{ConfigError, GameConfig, DEFAULT_ATTEMPT_BUDGET, DEFAULT_FLEET, DEFAULT_SIZE};

#[test]
fn default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.size(), DEFAULT_SIZE);
    assert_eq!(config.fleet(), &DEFAULT_FLEET[..]);
    assert_eq!(config.total_ship_cells(), 11);
    assert_eq!(config.attempt_budget(), DEFAULT_ATTEMPT_BUDGET);
    assert_eq!(
        GameConfig::new(DEFAULT_SIZE, DEFAULT_FLEET.to_vec()).unwrap(),
        config
    );
}

#[test]
fn degenerate_configs_are_rejected() {
    assert_eq!(GameConfig::new(0, vec![1]), Err(ConfigError::ZeroSize));
    assert_eq!(GameConfig::new(5, vec![]), Err(ConfigError::EmptyFleet));
    assert_eq!(GameConfig::new(5, vec![2, 0]), Err(ConfigError::ZeroLengthShip));
    assert_eq!(
        GameConfig::new(4, vec![5]),
        Err(ConfigError::ShipTooLong { length: 5, size: 4 })
    );
}

#[test]
fn density_bound() {
    // Two full rows with a gap between them just fit.
    assert!(GameConfig::new(3, vec![3, 3]).is_ok());
    assert_eq!(
        GameConfig::new(3, vec![3, 3, 1]),
        Err(ConfigError::FleetTooDense {
            size: 3,
            required: 20,
            capacity: 16
        })
    );
}

#[test]
fn attempt_budget_is_at_least_one() {
    let config = GameConfig::default().with_attempt_budget(0);
    assert_eq!(config.attempt_budget(), 1);
}
