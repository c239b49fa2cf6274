use super::*;

#[test]
fn ui_state_default_is_light_with_moon_icon() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.toggle_icon, ThemeIcon::Moon);
}

#[test]
fn default_icon_matches_default_theme() {
    let state = UiState::default();
    assert_eq!(state.theme.toggle_icon(), state.toggle_icon);
}
