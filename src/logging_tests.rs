use super::*;

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(level_for(0, false), LevelFilter::Warn);
    assert_eq!(level_for(1, false), LevelFilter::Info);
    assert_eq!(level_for(2, false), LevelFilter::Debug);
    assert_eq!(level_for(3, false), LevelFilter::Trace);
    assert_eq!(level_for(5, false), LevelFilter::Trace);
}

#[test]
fn quiet_overrides_verbose() {
    assert_eq!(level_for(3, true), LevelFilter::Error);
}

#[test]
fn color_mode_sets_write_style() {
    let config = LoggingConfig::default().with_color(ColorMode::Never);
    assert!(matches!(config.write_style, env_logger::WriteStyle::Never));
    assert!(matches!(
        write_style_for(ColorMode::Always),
        env_logger::WriteStyle::Always
    ));
    assert!(matches!(
        write_style_for(ColorMode::Auto),
        env_logger::WriteStyle::Auto
    ));
}

#[test]
fn default_config_is_warn() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, LevelFilter::Warn);
    assert!(config.env_filter.is_none());
}
