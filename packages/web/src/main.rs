use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::BookshelfConfig;
use ui::SessionProvider;
use views::{Home, Login, PageNotFound, PublicOnly, Register, RequireAuth, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[layout(RequireAuth)]
            #[route("/")]
            Home {},
        #[end_layout]
        #[layout(PublicOnly)]
            #[route("/login?:return_url")]
            Login { return_url: String },
            #[route("/register")]
            Register {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../bookshelf.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(App);
}

/// Embedded configuration, with the API URL overridable at build time.
fn load_config() -> BookshelfConfig {
    let config = match BookshelfConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {e}", BookshelfConfig::filename());
            BookshelfConfig::default()
        }
    };
    match option_env!("BOOKSHELF_API_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::BOOKSHELF_CSS }
        document::Script { src: ui::ZXING_BROWSER_JS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = BookshelfConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.session.refresh_interval_secs, 1800);
    }

    #[test]
    fn test_login_route_carries_return_url() {
        let route = Route::Login {
            return_url: "/".to_string(),
        };
        assert!(route.to_string().starts_with("/login?"));
    }
}
