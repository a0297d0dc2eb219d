use super::*;

fn env_with(
    no_color: Option<&str>,
    force_color: Option<&str>,
    clicolor: Option<&str>,
    ci: Option<&str>,
) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(String::from),
        force_color: force_color.map(String::from),
        clicolor: clicolor.map(String::from),
        ci: ci.map(String::from),
    }
}

#[test]
fn test_empty_environment_keeps_choice() {
    let env = EnvironmentConfig::default();
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
    assert_eq!(
        env.apply_color_config(ColorChoice::Always),
        ColorChoice::Always
    );
}

#[test]
fn test_no_color_disables() {
    let env = env_with(Some("1"), None, None, None);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = env_with(Some(""), None, None, None);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    let env = env_with(None, None, Some("0"), None);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Never);

    let env = env_with(None, None, Some("1"), None);
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}

#[test]
fn test_force_color_wins_over_no_color() {
    let env = env_with(Some("1"), Some("1"), Some("0"), None);
    assert_eq!(
        env.apply_color_config(ColorChoice::Auto),
        ColorChoice::Always
    );

    let env = env_with(None, Some("false"), None, None);
    assert_eq!(
        env.apply_color_config(ColorChoice::Always),
        ColorChoice::Never
    );
}

#[test]
fn test_ci_disables_everything() {
    let env = env_with(None, Some("1"), None, Some("true"));
    assert_eq!(env.apply_color_config(ColorChoice::Auto), ColorChoice::Never);
}

#[test]
fn test_load_from_process_environment() {
    // Every field is optional, so loading never fails on a sane environment
    assert!(EnvironmentConfig::load().is_ok());
}
