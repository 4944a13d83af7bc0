use leptos::*;
use leptos_meta::*;
use theme_runtime::{
    install_stores, installed_stores, use_theme, HomeAnimationMode, ThemeMode, ThemeProvider,
    ThemeStoreConfig, ThemeStores, DEFAULT_LIGHT_THEME_COLOR,
};

const EMBEDDED_THEME_CONFIG_JSON: &str = include_str!("../theme_config.json");

/// Parses the embedded store config, falling back to defaults when it is rejected.
pub fn embedded_theme_config() -> ThemeStoreConfig {
    ThemeStoreConfig::from_json_str(EMBEDDED_THEME_CONFIG_JSON).unwrap_or_else(|err| {
        logging::warn!("embedded theme config rejected, using defaults: {err}");
        ThemeStoreConfig::default()
    })
}

/// Returns the installed theme stores, building them from the selected host services on first use.
pub fn build_theme_stores() -> ThemeStores {
    if let Some(stores) = installed_stores() {
        return stores;
    }
    let stores = ThemeStores::new(
        platform_host_web::build_host_services(),
        embedded_theme_config(),
    );
    if let Err(err) = install_stores(stores.clone()) {
        logging::warn!("theme store install failed: {err}");
    }
    stores
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Component Library" />
        <Meta name="theme-color" content=DEFAULT_LIGHT_THEME_COLOR />

        <ThemeProvider stores=build_theme_stores()>
            <main class="site-root">
                <ThemeControls />
            </main>
        </ThemeProvider>
    }
}

#[component]
pub fn ThemeControls() -> impl IntoView {
    let theme = use_theme();
    let toggle_label = move || {
        let snapshot = theme.theme.get();
        format!("Theme: {} ({})", snapshot.mode, snapshot.appearance)
    };

    view! {
        <section class="theme-controls">
            <button type="button" on:click=move |_| theme.toggle()>
                {toggle_label}
            </button>
            <select
                aria-label="Theme mode"
                prop:value=move || theme.theme.get().mode.as_str()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Err(err) = theme.stores().theme.set_mode_str(&value) {
                        logging::warn!("{err}");
                    }
                }
            >
                {ThemeMode::ALL
                    .into_iter()
                    .map(|mode| view! { <option value=mode.as_str()>{mode.as_str()}</option> })
                    .collect_view()}
            </select>
            <select
                aria-label="Home animation"
                prop:value=move || theme.home_mode.get().as_str()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Err(err) = theme.stores().home_mode.set_mode_str(&value) {
                        logging::warn!("{err}");
                    }
                }
            >
                {HomeAnimationMode::ALL
                    .into_iter()
                    .map(|mode| view! { <option value=mode.as_str()>{mode.as_str()}</option> })
                    .collect_view()}
            </select>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_parses_to_the_documented_defaults() {
        assert_eq!(
            ThemeStoreConfig::from_json_str(EMBEDDED_THEME_CONFIG_JSON),
            Ok(ThemeStoreConfig::default())
        );
    }
}
